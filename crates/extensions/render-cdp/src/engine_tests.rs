use super::*;

fn unreachable_config() -> BrowserConfig {
    BrowserConfig {
        // Nothing listens on port 1, and the binary below does not exist.
        debug_port: 1,
        chrome_path: Some("/nonexistent/venuescout/chrome".to_string()),
        ..BrowserConfig::default()
    }
}

#[test]
fn test_configured_binary_wins() {
    let engine = ChromeEngine::new(unreachable_config());
    assert_eq!(
        engine.chrome_binary().unwrap(),
        PathBuf::from("/nonexistent/venuescout/chrome")
    );
}

#[tokio::test]
async fn test_shutdown_without_connection_is_noop() {
    let engine = ChromeEngine::new(BrowserConfig::default());
    engine.shutdown().await.unwrap();
    engine.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_chrome_not_running_on_unused_port() {
    let engine = ChromeEngine::new(unreachable_config());
    assert!(!engine.is_chrome_running().await);
}

#[tokio::test]
async fn test_open_reports_launch_failure() {
    let engine = ChromeEngine::new(unreachable_config());
    let result = engine
        .open("https://ny.eater.com/", &NavOptions::default())
        .await;
    match result {
        Err(RenderError::LaunchFailed(msg)) => assert!(msg.contains("/nonexistent/venuescout/chrome")),
        Err(other) => panic!("unexpected error {:?}", other),
        Ok(_) => panic!("expected launch failure"),
    }
}
