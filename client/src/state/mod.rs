//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `auth` is app-wide and provided via context,
//! `otp` is owned by each OTP flow instance.

pub mod auth;
pub mod otp;
