//! The server over a real socket.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::{json, Value};
use std::net::SocketAddr;
use std::time::Duration;
use tasklist_server::{build_app, lifecycle::serve_with_grace, Config};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct RunningServer {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<anyhow::Result<()>>,
}

async fn start(config: &Config) -> RunningServer {
    let app = build_app(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop, stop_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(serve_with_grace(
        listener,
        app,
        async {
            let _ = stop_rx.await;
        },
        Duration::from_secs(2),
    ));

    RunningServer { addr, stop, handle }
}

#[tokio::test]
async fn serves_requests_and_shuts_down_cleanly() {
    let server = start(&Config::default()).await;
    let base = format!("http://{}", server.addr);
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/create/todo"))
        .json(&json!({ "title": "Go shopping", "description": "Buy items" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    assert!(response.headers().contains_key("x-request-id"));

    let listed: Value = client
        .get(format!("{base}/todos"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed["todos"][0]["ID"], json!(1));
    assert_eq!(listed["todos"][0]["title"], json!("Go shopping"));

    server.stop.send(()).unwrap();
    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server should stop within the grace period")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn legacy_mode_answers_bad_request_on_create() {
    let config = Config {
        legacy_create_status: true,
        ..Config::default()
    };
    let server = start(&config).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/create/todo", server.addr))
        .json(&json!({ "title": "a" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(true));

    server.stop.send(()).unwrap();
    server.handle.await.unwrap().unwrap();
}
