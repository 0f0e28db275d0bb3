//! Networking modules for the booking backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the OTP calls and `types` defines the shared wire schema.

pub mod api;
pub mod types;
