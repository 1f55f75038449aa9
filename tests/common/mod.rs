//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;

use hello_routes::config::DemoConfig;
use hello_routes::http::HttpServer;
use hello_routes::lifecycle::Shutdown;
use hello_routes::routing::Variant;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a server for `variant` with otherwise default settings.
pub async fn start_server(variant: Variant) -> TestServer {
    let mut config = DemoConfig::default();
    config.app.variant = variant;
    start_server_with(config).await
}

/// Start a server with the given config, ignoring its bind address.
pub async fn start_server_with(config: DemoConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// A client that never reuses connections across tests.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
