use super::*;

#[test]
fn session_record_serializes_only_present_fields() {
    let record = SessionRecord { name: Some("A".to_owned()), ..SessionRecord::default() };
    assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"name":"A"}"#);
}

#[test]
fn session_record_reads_backend_user_shape() {
    let raw = r#"{
        "id": 7,
        "phone_number": "9876543210",
        "name": null,
        "email": null,
        "is_first_login": true
    }"#;
    let record: SessionRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.id, Some(7));
    assert_eq!(record.phone_number.as_deref(), Some("9876543210"));
    assert_eq!(record.name, None);
    assert_eq!(record.is_first_login, Some(true));
    assert_eq!(record.profile_image, None);
}

#[test]
fn session_record_keeps_unknown_backend_fields() {
    let raw = r#"{"name":"A","wallet":{"balance":250}}"#;
    let record: SessionRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.name.as_deref(), Some("A"));
    assert_eq!(record.extra.get("wallet"), Some(&serde_json::json!({"balance": 250})));
    assert_eq!(serde_json::to_string(&record).unwrap(), raw);
}

#[test]
fn session_record_stores_known_null_fields_as_absent() {
    let record: SessionRecord = serde_json::from_str(r#"{"name":null,"phone_number":"9876543210"}"#).unwrap();
    assert!(record.extra.is_empty());
    assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"phone_number":"9876543210"}"#);
}

#[test]
fn session_record_rejects_wrong_field_types() {
    assert!(serde_json::from_str::<SessionRecord>(r#"{"name": 5}"#).is_err());
    assert!(serde_json::from_str::<SessionRecord>(r#""bob""#).is_err());
    assert!(serde_json::from_str::<SessionRecord>("[1, 2]").is_err());
}

#[test]
fn verify_response_accepts_missing_or_null_user() {
    let missing: VerifyOtpResponse = serde_json::from_str(r#"{"access": "x"}"#).unwrap();
    assert_eq!(missing.user, None);

    let null: VerifyOtpResponse = serde_json::from_str(r#"{"user": null}"#).unwrap();
    assert_eq!(null.user, None);
}

#[test]
fn verify_response_ignores_token_fields() {
    let raw = r#"{"refresh": "r", "access": "a", "user": {"name": "A"}}"#;
    let parsed: VerifyOtpResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.user.and_then(|u| u.name).as_deref(), Some("A"));
}

#[test]
fn verify_response_rejects_malformed_user() {
    assert!(serde_json::from_str::<VerifyOtpResponse>(r#"{"user": "bob"}"#).is_err());
}

#[test]
fn payloads_serialize_backend_field_names() {
    let request = RequestOtpPayload { phone_number: "9876543210" };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({ "phone_number": "9876543210" })
    );

    let verify = VerifyOtpPayload { phone_number: "9876543210", otp: "1234" };
    assert_eq!(
        serde_json::to_value(&verify).unwrap(),
        serde_json::json!({ "phone_number": "9876543210", "otp": "1234" })
    );
}

#[test]
fn error_message_prefers_message_then_error_then_detail() {
    assert_eq!(
        error_message_from_body(r#"{"message": "Invalid code", "error": "x"}"#).as_deref(),
        Some("Invalid code")
    );
    assert_eq!(error_message_from_body(r#"{"error": "OTP expired"}"#).as_deref(), Some("OTP expired"));
    assert_eq!(
        error_message_from_body(r#"{"detail": "Not found."}"#).as_deref(),
        Some("Not found.")
    );
}

#[test]
fn error_message_skips_blank_and_unparseable_bodies() {
    assert_eq!(error_message_from_body(r#"{"message": "  ", "error": "No OTP found"}"#).as_deref(), Some("No OTP found"));
    assert_eq!(error_message_from_body("<html>502</html>"), None);
    assert_eq!(error_message_from_body(""), None);
    assert_eq!(error_message_from_body("{}"), None);
}
