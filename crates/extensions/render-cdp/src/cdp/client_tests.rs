use super::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn version_body(ws_url: &str) -> serde_json::Value {
    json!({
        "Browser": "HeadlessChrome/126.0.6478.126",
        "Protocol-Version": "1.3",
        "User-Agent": "Mozilla/5.0",
        "webSocketDebuggerUrl": ws_url,
    })
}

#[tokio::test]
async fn test_fetch_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/version"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(version_body("ws://127.0.0.1:9222/devtools/browser/abc")),
        )
        .mount(&server)
        .await;

    let endpoint = format!("{}/", server.uri());
    let version = fetch_version(&endpoint).await.unwrap();
    assert_eq!(version.browser, "HeadlessChrome/126.0.6478.126");
    assert_eq!(
        version.web_socket_debugger_url,
        "ws://127.0.0.1:9222/devtools/browser/abc"
    );
}

#[tokio::test]
async fn test_fetch_version_rejects_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/version"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = fetch_version(&server.uri()).await.unwrap_err();
    assert!(matches!(err, CdpError::ChromeNotAvailable(_)));
}

#[tokio::test]
async fn test_fetch_version_rejects_unexpected_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "hello": "world" })))
        .mount(&server)
        .await;

    let err = fetch_version(&server.uri()).await.unwrap_err();
    assert!(matches!(err, CdpError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_connect_fails_when_websocket_unreachable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/version"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(version_body("ws://127.0.0.1:1/devtools/browser/gone")),
        )
        .mount(&server)
        .await;

    let result = CdpClient::connect(&server.uri(), Duration::from_secs(5)).await;
    assert!(matches!(result, Err(CdpError::ConnectionFailed(_))));
}

#[tokio::test]
async fn test_connect_rejects_malformed_websocket_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(version_body("not a url")))
        .mount(&server)
        .await;

    let result = CdpClient::connect(&server.uri(), Duration::from_secs(5)).await;
    assert!(matches!(result, Err(CdpError::ConnectionFailed(_))));
}
