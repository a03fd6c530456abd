use super::*;

#[test]
fn test_cdp_request_serialize() {
    let req = CdpRequest {
        id: 7,
        method: "Target.attachToTarget".to_string(),
        params: Some(serde_json::json!({"targetId": "T1", "flatten": true})),
        session_id: None,
    };
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains("Target.attachToTarget"));
    assert!(!json.contains("sessionId"));
}

#[test]
fn test_session_request_carries_session_id() {
    let req = CdpRequest {
        id: 8,
        method: "Runtime.evaluate".to_string(),
        params: None,
        session_id: Some("S1".to_string()),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["sessionId"], "S1");
    assert!(value.get("params").is_none());
}

#[test]
fn test_event_deserialize() {
    let json = r#"{"method":"Page.loadEventFired","params":{"timestamp":1.5},"sessionId":"S1"}"#;
    let resp: CdpResponse = serde_json::from_str(json).unwrap();
    assert!(resp.id.is_none());
    assert_eq!(resp.method.as_deref(), Some("Page.loadEventFired"));
    assert_eq!(resp.session_id.as_deref(), Some("S1"));
}

#[test]
fn test_error_response_deserialize() {
    let json = r#"{"id":3,"error":{"code":-32601,"message":"'Foo.bar' wasn't found"}}"#;
    let resp: CdpResponse = serde_json::from_str(json).unwrap();
    let err = resp.error.unwrap();
    assert_eq!(err.code, -32601);
}

#[test]
fn test_browser_version_deserialize() {
    let json = r#"{
        "Browser": "HeadlessChrome/126.0.6478.126",
        "Protocol-Version": "1.3",
        "User-Agent": "Mozilla/5.0",
        "V8-Version": "12.6.228.28",
        "WebKit-Version": "537.36",
        "webSocketDebuggerUrl": "ws://localhost:9222/devtools/browser/abc"
    }"#;
    let version: BrowserVersion = serde_json::from_str(json).unwrap();
    assert_eq!(version.protocol_version, "1.3");
    assert!(version.web_socket_debugger_url.ends_with("/abc"));
}

#[test]
fn test_evaluate_result_value() {
    let json = r#"{"result":{"type":"number","value":12,"description":"12"}}"#;
    let result: EvaluateResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.result.value, Some(serde_json::json!(12)));
    assert!(result.exception_details.is_none());
}

#[test]
fn test_exception_message_prefers_description() {
    let json = r#"{
        "result": {"type": "object"},
        "exceptionDetails": {
            "text": "Uncaught",
            "exception": {"type": "object", "description": "SyntaxError: 'div[' is not a valid selector"}
        }
    }"#;
    let result: EvaluateResult = serde_json::from_str(json).unwrap();
    let details = result.exception_details.unwrap();
    assert!(details.message().starts_with("SyntaxError"));
}
