//! End-to-end route behavior over real sockets.

use hello_routes::config::DemoConfig;
use hello_routes::routing::Variant;
use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn test_plain_variant() {
    let server = common::start_server(Variant::Plain).await;
    let client = common::client();

    let res = client.get(server.url("/")).send().await.expect("server unreachable");
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "get");

    let res = client.post(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "post");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_echo_variant() {
    let server = common::start_server(Variant::Echo).await;
    let client = common::client();

    let res = client.post(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "body is ");

    let res = client.post(server.url("/")).body("abc").send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "body is abc");

    let res = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "get");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_greeting_variant() {
    let server = common::start_server(Variant::Greeting).await;
    let client = common::client();

    let res = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "Hello world!");

    let res = client.post(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_unregistered_routes() {
    let server = common::start_server(Variant::Plain).await;
    let client = common::client();

    let res = client.get(server.url("/missing")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "Not Found");

    let res = client.put(server.url("/")).body("x").send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_request_id_header() {
    let server = common::start_server(Variant::Plain).await;
    let client = common::client();

    let res = client.get(server.url("/")).send().await.unwrap();
    assert!(res.headers().contains_key("x-request-id"));

    let res = client
        .get(server.url("/"))
        .header("x-request-id", "from-client")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "from-client");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_body_limit() {
    let mut config = DemoConfig::default();
    config.app.variant = Variant::Echo;
    config.app.max_body_bytes = 8;
    let server = common::start_server_with(config).await;
    let client = common::client();

    let res = client
        .post(server.url("/"))
        .body("this body is too long")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let server = common::start_server(Variant::Plain).await;
    let client = common::client();

    let res = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    server.shutdown.trigger();
    let result = tokio::time::timeout(std::time::Duration::from_secs(5), server.handle)
        .await
        .expect("server did not stop")
        .expect("server task panicked");
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_stalled_body_times_out() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let mut config = DemoConfig::default();
    config.app.variant = Variant::Echo;
    config.timeouts.request_secs = 1;
    let server = common::start_server_with(config).await;

    // Promise ten bytes, send two, then stall
    let mut stream = tokio::net::TcpStream::connect(server.addr).await.unwrap();
    stream
        .write_all(b"POST / HTTP/1.1\r\nHost: localhost\r\nContent-Length: 10\r\n\r\nab")
        .await
        .unwrap();

    let mut buf = vec![0u8; 1024];
    let n = tokio::time::timeout(std::time::Duration::from_secs(5), stream.read(&mut buf))
        .await
        .expect("no response before the test deadline")
        .unwrap();
    let head = String::from_utf8_lossy(&buf[..n]);
    assert!(head.starts_with("HTTP/1.1 408"), "unexpected response: {}", head);

    server.shutdown.trigger();
}
