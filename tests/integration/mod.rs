//! End-to-end tests against a real listener on an ephemeral port.
//!
//! Run with: cargo test --test integration

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use pipeline_node_service::api::{create_cors_layer, create_router, serve, AppState};
use pipeline_node_service::config::Config;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const NODES_JSON: &str = r#"[{"id":"1","name":"Data Source"},{"id":"2","name":"Transformer"},{"id":"3","name":"Model"},{"id":"4","name":"Sink"}]"#;

/// A running server that stops when dropped.
struct TestServer {
    addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    async fn start() -> Self {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..Config::default()
        };
        let listener = TcpListener::bind(config.socket_addr().unwrap())
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        let router = create_router(AppState::from_config(&config), create_cors_layer(&config));

        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(serve(listener, router, async move {
            rx.await.ok();
        }));

        Self {
            addr,
            _shutdown: tx,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

#[tokio::test]
async fn health_returns_fixed_object() {
    let server = TestServer::start().await;
    let start = Instant::now();

    let response = reqwest::get(server.url("/health")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"status": "healthy", "service": "ai-pipeline-node-service"})
    );
    assert!(start.elapsed() < Duration::from_millis(500));
}

#[tokio::test]
async fn nodes_arrive_after_delay_and_are_stable() {
    let server = TestServer::start().await;

    for _ in 0..2 {
        let start = Instant::now();
        let response = reqwest::get(server.url("/api/nodes")).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), NODES_JSON);
        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}

#[tokio::test]
async fn health_overtakes_pending_node_listing() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let start = Instant::now();

    let nodes = async {
        client.get(server.url("/api/nodes")).send().await.unwrap();
        start.elapsed()
    };
    let health = async {
        client.get(server.url("/health")).send().await.unwrap();
        start.elapsed()
    };

    let (nodes_at, health_at) = tokio::join!(nodes, health);
    assert!(health_at < nodes_at);
    assert!(nodes_at >= Duration::from_secs(1));
}

#[tokio::test]
async fn concurrent_listings_overlap() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let start = Instant::now();

    let (a, b) = tokio::join!(
        client.get(server.url("/api/nodes")).send(),
        client.get(server.url("/api/nodes")).send(),
    );

    let a = a.unwrap().text().await.unwrap();
    let b = b.unwrap().text().await.unwrap();
    assert_eq!(a, NODES_JSON);
    assert_eq!(a, b);
    assert!(start.elapsed() < Duration::from_millis(1900));
}

#[tokio::test]
async fn unknown_route_and_wrong_method_are_rejected() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let unknown = client.get(server.url("/unknown")).send().await.unwrap();
    assert_eq!(unknown.status(), reqwest::StatusCode::NOT_FOUND);

    let post = client.post(server.url("/api/nodes")).send().await.unwrap();
    assert!(matches!(
        post.status(),
        reqwest::StatusCode::NOT_FOUND | reqwest::StatusCode::METHOD_NOT_ALLOWED
    ));
}

#[tokio::test]
async fn responses_permit_any_origin() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/health"))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://localhost:5173"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");
}
