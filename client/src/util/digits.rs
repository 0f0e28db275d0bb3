//! Digit-only normalization for phone numbers and OTP codes.
//!
//! Inputs are normalized on every keystroke and again on submit, so pasted
//! values like `987-654-3210` arrive at the API as plain digits.

#[cfg(test)]
#[path = "digits_test.rs"]
mod digits_test;

/// Minimum digits accepted for a phone number.
pub const PHONE_MIN_DIGITS: usize = 10;
/// Minimum digits accepted for an OTP code.
pub const OTP_MIN_DIGITS: usize = 4;
/// Maximum digits accepted for an OTP code.
pub const OTP_MAX_DIGITS: usize = 6;

/// Drop every character that is not an ASCII digit.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Normalize a phone number, returning `None` when too few digits remain.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits = strip_non_digits(raw);
    (digits.len() >= PHONE_MIN_DIGITS).then_some(digits)
}

/// Normalize an OTP code, returning `None` unless 4 to 6 digits remain.
pub fn normalize_otp(raw: &str) -> Option<String> {
    let digits = strip_non_digits(raw);
    (OTP_MIN_DIGITS..=OTP_MAX_DIGITS)
        .contains(&digits.len())
        .then_some(digits)
}

/// Keystroke filter for the OTP field: digits only, truncated to the maximum.
pub fn otp_input_filter(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(OTP_MAX_DIGITS)
        .collect()
}
