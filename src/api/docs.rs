//! OpenAPI document for the service, served at `/openapi.json` and browsable at `/docs`.

use utoipa::OpenApi;

use super::handlers::{HealthStatus, ProjectInfo, RootInfo};

/// Path of the OpenAPI JSON document.
pub const OPENAPI_PATH: &str = "/openapi.json";
/// Path of the Swagger UI.
pub const DOCS_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "🚀 Projeto CI/CD - Compass UOL",
        description = "Aplicação utilizada para demonstrar pipeline automatizado de Integração e Entrega Contínua (CI/CD) com Docker, Kubernetes e ArgoCD.",
        version = "2.0.0"
    ),
    paths(
        super::handlers::root,
        super::handlers::healthz,
        super::handlers::info,
    ),
    components(schemas(RootInfo, HealthStatus, ProjectInfo)),
    tags(
        (name = "root", description = "Environment info"),
        (name = "health", description = "Liveness and readiness probe"),
        (name = "info", description = "Project information")
    )
)]
pub struct ApiDoc;
