//! HTTP API handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use utoipa::ToSchema;

use crate::host;

// === Payload literals ===

/// Company name reported by the root endpoint.
pub const COMPANY: &str = "🏢 Compass UOL";
/// Deployment confirmation message.
pub const MESSAGE: &str = "✅ Deploy automatizado funcionando perfeitamente!";
/// Service version.
pub const VERSION: &str = "2.0.0";
/// Stack the pipeline demonstrates, in display order.
pub const TECHNOLOGIES: [&str; 5] = [
    "FastAPI",
    "Docker",
    "Kubernetes",
    "ArgoCD",
    "GitHub Actions",
];

pub const PROJECT: &str = "Pipeline CI/CD Compass UOL";
pub const AUTHOR: &str = "Julya 🐧";
pub const LANGUAGE: &str = "Python 3.11 + FastAPI";
pub const PURPOSE: &str = "Demonstração de automação de build, push e deploy contínuo.";

/// Application state shared with handlers.
///
/// Read-only after startup; nothing here is mutated by a request.
#[derive(Clone, Default)]
pub struct AppState {
    /// Prometheus handle; `/metrics` is only mounted when present.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state without metrics exposition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Root response: environment info and current time.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(example = json!({
    "empresa": "🏢 Compass UOL",
    "mensagem": "✅ Deploy automatizado funcionando perfeitamente!",
    "horário_atual": "07/03/2025 09:05:02",
    "servidor": "api-7c9d4b5f6-x2k8q",
    "versão": "2.0.0",
    "tecnologias": ["FastAPI", "Docker", "Kubernetes", "ArgoCD", "GitHub Actions"]
}))]
pub struct RootInfo {
    /// Company name.
    pub empresa: String,
    /// Deployment message.
    pub mensagem: String,
    /// Local time at request, `DD/MM/YYYY HH:MM:SS`.
    #[serde(rename = "horário_atual")]
    pub horario_atual: String,
    /// Hostname serving the request.
    pub servidor: String,
    /// Service version.
    #[serde(rename = "versão")]
    pub versao: String,
    /// Technologies used by the pipeline.
    pub tecnologias: Vec<String>,
}

impl RootInfo {
    /// Build the root payload for the given time and host.
    pub fn new(horario_atual: String, servidor: String) -> Self {
        Self {
            empresa: COMPANY.to_string(),
            mensagem: MESSAGE.to_string(),
            horario_atual,
            servidor,
            versao: VERSION.to_string(),
            tecnologias: TECHNOLOGIES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(example = json!({"status": "ok"}))]
pub struct HealthStatus {
    /// Always "ok".
    pub status: String,
}

/// Project information response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectInfo {
    pub projeto: String,
    pub autora: String,
    pub linguagem: String,
    pub finalidade: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            projeto: PROJECT.to_string(),
            autora: AUTHOR.to_string(),
            linguagem: LANGUAGE.to_string(),
            finalidade: PURPOSE.to_string(),
        }
    }
}

/// Main endpoint: environment info and current time.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Environment info and current server time", body = RootInfo)
    ),
    tag = "root"
)]
pub async fn root() -> Json<RootInfo> {
    Json(RootInfo::new(host::current_timestamp(), host::hostname()))
}

/// Health check handler used by liveness/readiness probes - always returns 200.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus)
    ),
    tag = "health"
)]
pub async fn healthz() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}

/// Project information handler.
#[utoipa::path(
    get,
    path = "/info",
    responses(
        (status = 200, description = "Project information", body = ProjectInfo)
    ),
    tag = "info"
)]
pub async fn info() -> Json<ProjectInfo> {
    Json(ProjectInfo::default())
}

/// Prometheus exposition handler.
pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
