//! REST calls to the booking backend's OTP endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! [`ApiError::Unavailable`], since these calls only make sense in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an [`ApiError`]. Callers decide the user-facing
//! text; [`ApiError::server_message`] exposes the backend's own message when
//! the error body carried one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{SessionRecord, VerifyOtpResponse};
use crate::config::ApiConfig;
#[cfg(feature = "hydrate")]
use super::types::{RequestOtpPayload, VerifyOtpPayload, error_message_from_body};

/// Path of the send-OTP endpoint, relative to the API base.
pub const REQUEST_OTP_PATH: &str = "/request-otp/";
/// Path of the verify-OTP endpoint, relative to the API base.
pub const VERIFY_OTP_PATH: &str = "/verify-otp/";

/// Failure modes of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("server responded with {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },
    /// A 2xx response whose body did not match the expected schema.
    #[error("unexpected response payload: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// The message supplied by the backend in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// True when the backend returned a 2xx body that failed validation.
    pub fn is_malformed_payload(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

#[allow(clippy::ref_option)]
fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

/// Decode a successful `verify-otp` body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is not JSON or the `user` field
/// does not match the session-record schema.
pub fn parse_verify_response(body: &str) -> Result<VerifyOtpResponse, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, payload: &T) -> Result<String, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if !resp.ok() {
        return Err(ApiError::Status { status, message: error_message_from_body(&body) });
    }
    Ok(body)
}

/// Ask the backend to send an OTP to `phone_number` via `POST /request-otp/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn request_otp(config: &ApiConfig, phone_number: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(REQUEST_OTP_PATH);
        let body = post_json(&url, &RequestOtpPayload { phone_number }).await?;
        log::debug!("request-otp response: {body}");
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, phone_number);
        Err(ApiError::Unavailable)
    }
}

/// Verify `otp` for `phone_number` via `POST /verify-otp/`.
///
/// Returns the user the backend attached to the response, if any.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the backend rejects the code,
/// or the response carries a malformed user.
pub async fn verify_otp(
    config: &ApiConfig,
    phone_number: &str,
    otp: &str,
) -> Result<Option<SessionRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(VERIFY_OTP_PATH);
        let body = post_json(&url, &VerifyOtpPayload { phone_number, otp }).await?;
        log::debug!("verify-otp response received ({} bytes)", body.len());
        Ok(parse_verify_response(&body)?.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, phone_number, otp);
        Err(ApiError::Unavailable)
    }
}
