use super::*;

#[test]
fn endpoints_join_configured_base() {
    let config = ApiConfig::new("http://localhost:8000/api/");
    assert_eq!(config.endpoint(REQUEST_OTP_PATH), "http://localhost:8000/api/request-otp/");
    assert_eq!(config.endpoint(VERIFY_OTP_PATH), "http://localhost:8000/api/verify-otp/");
}

#[test]
fn server_message_only_for_status_errors() {
    let err = ApiError::Status { status: 400, message: Some("Invalid code".to_owned()) };
    assert_eq!(err.server_message(), Some("Invalid code"));

    assert_eq!(ApiError::Status { status: 500, message: None }.server_message(), None);
    assert_eq!(ApiError::Network("offline".to_owned()).server_message(), None);
    assert_eq!(ApiError::Decode("bad".to_owned()).server_message(), None);
}

#[test]
fn status_error_display_includes_message_when_present() {
    let err = ApiError::Status { status: 404, message: Some("No OTP found".to_owned()) };
    assert_eq!(err.to_string(), "server responded with 404: No OTP found");
    assert_eq!(
        ApiError::Status { status: 502, message: None }.to_string(),
        "server responded with 502"
    );
}

#[test]
fn parse_verify_response_extracts_user() {
    let parsed = parse_verify_response(r#"{"user": {"name": "A"}}"#).unwrap();
    assert_eq!(parsed.user.and_then(|u| u.name).as_deref(), Some("A"));
}

#[test]
fn parse_verify_response_flags_malformed_user() {
    let err = parse_verify_response(r#"{"user": 42}"#).unwrap_err();
    assert!(err.is_malformed_payload());
}

#[test]
fn parse_verify_response_flags_non_json_body() {
    let err = parse_verify_response("OK").unwrap_err();
    assert!(err.is_malformed_payload());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let config = ApiConfig::default();
    let request = poll_once(request_otp(&config, "9876543210"));
    assert_eq!(request, Err(ApiError::Unavailable));
    let verify = poll_once(verify_otp(&config, "9876543210", "1234"));
    assert_eq!(verify, Err(ApiError::Unavailable));
}

/// Minimal executor for futures that complete without awaiting anything.
#[cfg(not(feature = "hydrate"))]
fn poll_once<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future should complete immediately"),
    }
}
