//! Integration tests for the HTTP service.
//!
//! These bind a real listener on an ephemeral loopback port and exercise the
//! routes over TCP.

use std::net::SocketAddr;

use compass_cicd_api::api::{create_router, AppState};
use compass_cicd_api::server;
use regex::Regex;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Running server under test.
struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<compass_cicd_api::Result<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(server::serve(
            listener,
            create_router(AppState::new()),
            async move {
                rx.await.ok();
            },
        ));

        Self {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        let result = self.handle.await.unwrap();
        assert!(result.is_ok(), "server exited with error: {:?}", result.err());
    }
}

#[tokio::test]
async fn test_healthz_over_tcp() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client.get(server.url("/healthz")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    assert_eq!(response.text().await.unwrap(), r#"{"status":"ok"}"#);

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_root_timestamps_do_not_go_backwards() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let pattern = Regex::new(r"^(\d{2})/(\d{2})/(\d{4}) (\d{2}):(\d{2}):(\d{2})$").unwrap();

    // Reorder DD/MM/YYYY HH:MM:SS into a lexically comparable key.
    let sortable = |ts: &str| {
        let caps = pattern.captures(ts).expect("timestamp format");
        format!(
            "{}{}{}{}{}{}",
            &caps[3], &caps[2], &caps[1], &caps[4], &caps[5], &caps[6]
        )
    };

    let first: Value = client.get(server.url("/")).send().await.unwrap().json().await.unwrap();
    let second: Value = client.get(server.url("/")).send().await.unwrap().json().await.unwrap();

    let t1 = sortable(first["horário_atual"].as_str().unwrap());
    let t2 = sortable(second["horário_atual"].as_str().unwrap());
    assert!(t2 >= t1, "{} is earlier than {}", t2, t1);

    assert_eq!(first["versão"], "2.0.0");
    assert_eq!(first["servidor"], second["servidor"]);

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_info_is_byte_identical() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let first = client.get(server.url("/info")).send().await.unwrap().bytes().await.unwrap();
    let second = client.get(server.url("/info")).send().await.unwrap().bytes().await.unwrap();

    assert_eq!(first, second);

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_unknown_path_does_not_crash_server() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client.get(server.url("/nonexistent")).send().await.unwrap();
    assert_eq!(response.status(), 404);

    let response = client.get(server.url("/healthz")).send().await.unwrap();
    assert_eq!(response.status(), 200);

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_concurrent_health_checks() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let tasks: Vec<_> = (0..100)
        .map(|_| {
            let client = client.clone();
            let url = server.url("/healthz");
            tokio::spawn(async move {
                let response = client.get(url).send().await.unwrap();
                let status = response.status();
                let body: Value = response.json().await.unwrap();
                (status, body)
            })
        })
        .collect();

    for task in tasks {
        let (status, body) = task.await.unwrap();
        assert_eq!(status, 200);
        assert_eq!(body, json!({"status": "ok"}));
    }

    drop(client);
    server.stop().await;
}
