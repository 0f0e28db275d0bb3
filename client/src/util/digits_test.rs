use super::*;

#[test]
fn strip_non_digits_keeps_only_ascii_digits() {
    assert_eq!(strip_non_digits("987-654-3210"), "9876543210");
    assert_eq!(strip_non_digits("+91 (98) 7a6b"), "919876");
    assert_eq!(strip_non_digits("abc"), "");
}

#[test]
fn normalize_phone_accepts_dashed_ten_digit_number() {
    assert_eq!(normalize_phone("987-654-3210"), Some("9876543210".to_owned()));
}

#[test]
fn normalize_phone_rejects_short_numbers() {
    assert_eq!(normalize_phone("123"), None);
    assert_eq!(normalize_phone("987-654-321"), None);
    assert_eq!(normalize_phone(""), None);
}

#[test]
fn normalize_phone_does_not_cap_long_numbers() {
    assert_eq!(normalize_phone("+91 98765 43210"), Some("919876543210".to_owned()));
}

#[test]
fn normalize_otp_accepts_four_to_six_digits() {
    assert_eq!(normalize_otp("1234"), Some("1234".to_owned()));
    assert_eq!(normalize_otp("12 34 56"), Some("123456".to_owned()));
}

#[test]
fn normalize_otp_rejects_out_of_range_lengths() {
    assert_eq!(normalize_otp("123"), None);
    assert_eq!(normalize_otp("1234567"), None);
    assert_eq!(normalize_otp("abcd"), None);
}

#[test]
fn otp_input_filter_truncates_to_six_digits() {
    assert_eq!(otp_input_filter("12-34-56-78"), "123456");
    assert_eq!(otp_input_filter("9x9"), "99");
}
