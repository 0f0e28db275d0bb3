//! Wire DTOs for the booking backend's OTP endpoints.
//!
//! DESIGN
//! ======
//! The session record is an explicit schema rather than a free-form JSON
//! value. Known fields are typed and optional; values of the wrong shape fail
//! deserialization and never reach storage. Fields the schema does not name
//! are kept in `extra` and written back unchanged.
//!
//! The stored record is a projection of the backend user: a known field sent
//! as `null` is stored as absent, which reads back the same.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by `verify-otp` and kept in storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Backend user primary key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// The verified phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Display name. Null until the user completes their profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email. Null until the user completes their profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Set when the backend created the account during this verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_first_login: Option<bool>,
    /// Avatar URL shown on the profile page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Any other fields the backend attached to the user.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of `POST /request-otp/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RequestOtpPayload<'a> {
    pub phone_number: &'a str,
}

/// Body of `POST /verify-otp/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyOtpPayload<'a> {
    pub phone_number: &'a str,
    pub otp: &'a str,
}

/// Successful `verify-otp` response. Token fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct VerifyOtpResponse {
    /// The user, when the backend returns one. `null` reads as `None`.
    #[serde(default)]
    pub user: Option<SessionRecord>,
}

/// Error body shapes the backend is known to produce.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
    detail: Option<String>,
}

/// Extract a human-readable message from an error response body.
///
/// Precedence is `message`, then `error`, then `detail`. Blank strings and
/// bodies that are not JSON objects yield `None`.
pub fn error_message_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    [parsed.message, parsed.error, parsed.detail]
        .into_iter()
        .flatten()
        .map(|msg| msg.trim().to_owned())
        .find(|msg| !msg.is_empty())
}
