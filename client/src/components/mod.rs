//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the sign-in surfaces while reading
//! shared state from Leptos context providers.

pub mod login_modal;
pub mod navbar;
pub mod otp_flow;
