//! Phone/OTP sign-in flow state.
//!
//! DESIGN
//! ======
//! One tagged [`OtpStage`] replaces independent "sending"/"verifying"/"show
//! OTP" flags. Each network call is split into a `begin_*` step (validate,
//! enter the in-flight stage, hand back what to send) and a `finish_*` step
//! (apply the outcome). The component spawns the request between the two, so
//! every transition here is synchronous and testable without a browser.
//!
//! Results arriving for a stage the flow has already left (for example after
//! "Change Number") are dropped. Persisting the verified user is kept out of
//! the state so it still happens after the form is gone.

#[cfg(test)]
#[path = "otp_test.rs"]
mod otp_test;

use crate::net::api::ApiError;
use crate::net::types::SessionRecord;
use crate::util::digits::{normalize_otp, normalize_phone, otp_input_filter, strip_non_digits};
use crate::util::session_store::SessionStore;

pub const INVALID_PHONE_MESSAGE: &str = "Please enter a valid phone number";
pub const OTP_SENT_MESSAGE: &str = "OTP sent successfully!";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send OTP. Please try again.";
pub const INVALID_OTP_MESSAGE: &str = "Please enter a valid OTP";
pub const OTP_VERIFIED_MESSAGE: &str = "OTP verified successfully!";
pub const VERIFY_FAILED_MESSAGE: &str = "Invalid OTP. Please try again.";
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected response from server. Please try again.";

/// Where the flow currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OtpStage {
    /// Collecting the phone number.
    #[default]
    PhoneEntry,
    /// Waiting on the send-OTP call.
    Sending,
    /// OTP was sent; collecting the code.
    OtpEntry,
    /// Waiting on the verify-OTP call.
    Verifying,
    /// The code was accepted.
    Verified,
}

impl OtpStage {
    /// Whether the OTP input section is shown.
    pub fn shows_otp_entry(self) -> bool {
        matches!(self, Self::OtpEntry | Self::Verifying | Self::Verified)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// The single status line under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Error, text: text.into() }
    }
}

/// Outcome of [`OtpFlowState::finish_verify`] the caller should act on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Verified; carries the user the backend returned, if any.
    Verified(Option<SessionRecord>),
    /// Verification failed; the message is already set.
    Rejected,
    /// The result arrived after the flow moved on and was ignored.
    Stale,
}

/// Local state of one OTP flow instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OtpFlowState {
    pub phone: String,
    pub otp: String,
    pub stage: OtpStage,
    pub message: Option<StatusMessage>,
}

impl OtpFlowState {
    /// Apply a keystroke to the phone field. Ignored once the number is sent.
    pub fn set_phone_input(&mut self, raw: &str) {
        if self.stage != OtpStage::PhoneEntry {
            return;
        }
        self.phone = strip_non_digits(raw);
        self.message = None;
    }

    /// Apply a keystroke to the OTP field.
    pub fn set_otp_input(&mut self, raw: &str) {
        if self.stage != OtpStage::OtpEntry {
            return;
        }
        self.otp = otp_input_filter(raw);
        self.message = None;
    }

    /// Validate the phone number and enter [`OtpStage::Sending`].
    ///
    /// Returns the normalized number to send, or `None` when nothing should be
    /// sent (invalid input, or not in phone entry).
    pub fn begin_send(&mut self) -> Option<String> {
        if self.stage != OtpStage::PhoneEntry {
            return None;
        }
        let Some(phone) = normalize_phone(&self.phone) else {
            self.message = Some(StatusMessage::error(INVALID_PHONE_MESSAGE));
            return None;
        };
        self.phone.clone_from(&phone);
        self.stage = OtpStage::Sending;
        self.message = None;
        Some(phone)
    }

    /// Apply the send-OTP outcome. Returns `false` if the result was stale.
    pub fn finish_send(&mut self, result: Result<(), ApiError>) -> bool {
        if self.stage != OtpStage::Sending {
            log::debug!("dropping stale send-otp result");
            return false;
        }
        match result {
            Ok(()) => {
                log::info!("otp sent");
                self.stage = OtpStage::OtpEntry;
                self.message = Some(StatusMessage::success(OTP_SENT_MESSAGE));
            }
            Err(e) => {
                log::warn!("send otp failed: {e}");
                self.stage = OtpStage::PhoneEntry;
                self.message = Some(StatusMessage::error(
                    e.server_message().unwrap_or(SEND_FAILED_MESSAGE),
                ));
            }
        }
        true
    }

    /// Validate the code and enter [`OtpStage::Verifying`].
    ///
    /// Returns `(phone, otp)` to verify, or `None` when nothing should be sent.
    pub fn begin_verify(&mut self) -> Option<(String, String)> {
        if self.stage != OtpStage::OtpEntry {
            return None;
        }
        let Some(otp) = normalize_otp(&self.otp) else {
            self.message = Some(StatusMessage::error(INVALID_OTP_MESSAGE));
            return None;
        };
        self.otp.clone_from(&otp);
        self.stage = OtpStage::Verifying;
        self.message = None;
        Some((self.phone.clone(), otp))
    }

    /// Apply the verify-OTP outcome to the form.
    ///
    /// Storage is handled separately by [`persist_verified_user`].
    pub fn finish_verify(&mut self, result: Result<Option<SessionRecord>, ApiError>) -> VerifyOutcome {
        if self.stage != OtpStage::Verifying {
            log::debug!("dropping stale verify-otp result");
            return VerifyOutcome::Stale;
        }
        match result {
            Ok(user) => {
                log::info!("otp verified");
                self.stage = OtpStage::Verified;
                self.message = Some(StatusMessage::success(OTP_VERIFIED_MESSAGE));
                VerifyOutcome::Verified(user)
            }
            Err(e) => {
                log::warn!("verify otp failed: {e}");
                let text = if e.is_malformed_payload() {
                    UNEXPECTED_RESPONSE_MESSAGE
                } else {
                    e.server_message().unwrap_or(VERIFY_FAILED_MESSAGE)
                };
                self.stage = OtpStage::OtpEntry;
                self.message = Some(StatusMessage::error(text));
                VerifyOutcome::Rejected
            }
        }
    }

    /// Back to an empty phone entry ("Change Number").
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn send_label(&self) -> &'static str {
        match self.stage {
            OtpStage::Sending => "Sending...",
            OtpStage::PhoneEntry => "Send OTP",
            OtpStage::OtpEntry | OtpStage::Verifying | OtpStage::Verified => "Sent",
        }
    }

    pub fn verify_label(&self) -> &'static str {
        match self.stage {
            OtpStage::Verifying => "Verifying...",
            OtpStage::Verified => "Verified",
            _ => "Verify OTP",
        }
    }

    /// Phone input and send button are locked outside phone entry.
    pub fn phone_locked(&self) -> bool {
        self.stage != OtpStage::PhoneEntry
    }

    pub fn verify_disabled(&self) -> bool {
        self.stage != OtpStage::OtpEntry
    }

    pub fn reset_disabled(&self) -> bool {
        self.stage == OtpStage::Verifying
    }
}

/// Write the user from a verify-OTP result to `store`.
///
/// The backend consumes the code on success, so this runs whether or not the
/// form that sent it still exists. Returns `true` when a record was stored.
pub fn persist_verified_user(result: &Result<Option<SessionRecord>, ApiError>, store: &dyn SessionStore) -> bool {
    match result {
        Ok(Some(record)) => match store.set(record) {
            Ok(()) => true,
            Err(e) => {
                log::error!("failed to persist session: {e}");
                false
            }
        },
        Ok(None) => {
            log::warn!("otp verified but no user returned");
            false
        }
        Err(_) => false,
    }
}
