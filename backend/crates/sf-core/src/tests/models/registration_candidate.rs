use crate::{CoreError, FieldLimits, RegistrationCandidate};

use googletest::prelude::*;

fn ann() -> RegistrationCandidate {
    RegistrationCandidate {
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        email: "a@x.com".into(),
        password: "Secret123!".into(),
        contact_number: None,
        profile_image: None,
    }
}

#[test]
fn given_complete_candidate_when_validated_then_ok() {
    assert_that!(ann().validate(&FieldLimits::default()), ok(anything()));
}

#[test]
fn given_blank_first_name_when_validated_then_field_is_named() {
    let mut candidate = ann();
    candidate.first_name = "   ".into();

    match candidate.validate(&FieldLimits::default()) {
        Err(CoreError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("firstName"))
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_missing_password_when_validated_then_err() {
    let mut candidate = ann();
    candidate.password.clear();
    assert_that!(candidate.validate(&FieldLimits::default()), err(anything()));
}

#[test]
fn given_malformed_email_when_validated_then_err() {
    for email in ["ann", "@x.com", "a@", "a b@x.com", "a@b@c"] {
        let mut candidate = ann();
        candidate.email = email.into();
        assert!(
            candidate.validate(&FieldLimits::default()).is_err(),
            "{email} should be rejected"
        );
    }
}

#[test]
fn given_bad_attachment_and_blank_name_when_validated_then_attachment_error_wins() {
    let mut candidate = ann();
    candidate.first_name.clear();
    candidate.profile_image = Some("not-an-image".into());

    let result = candidate.validate(&FieldLimits::default());
    assert!(matches!(result, Err(CoreError::InvalidAttachment { .. })));
}

#[test]
fn given_legacy_field_names_when_deserialized_then_mapped() {
    let json = r#"{
        "firstName": "Ann",
        "lastName": "Lee",
        "email": "a@x.com",
        "password": "Secret123!",
        "contact": "555-0100",
        "profilePicture": "data:image/png;base64,aGVsbG8="
    }"#;

    let candidate: RegistrationCandidate = serde_json::from_str(json).unwrap();
    assert_eq!(candidate.contact_number.as_deref(), Some("555-0100"));
    assert_that!(candidate.profile_image, some(anything()));
}

#[test]
fn given_markup_in_names_when_escaped_then_password_untouched() {
    let mut candidate = ann();
    candidate.first_name = "<b>Ann</b>".into();
    candidate.password = "<p@ss>".into();
    candidate.contact_number = Some("  ".into());

    let escaped = candidate.escaped();
    assert_that!(escaped.first_name.as_str(), eq("&lt;b&gt;Ann&lt;/b&gt;"));
    assert_that!(escaped.password.as_str(), eq("<p@ss>"));
    assert_that!(escaped.contact_number, none());
}

#[test]
fn given_candidate_when_converted_to_record_then_hash_is_stored() {
    let record = ann().into_record("$argon2id$hash".into());
    assert_that!(record.email.as_str(), eq("a@x.com"));
    assert_that!(record.credential_hash.as_str(), eq("$argon2id$hash"));
    assert_that!(record.created_at, eq(record.updated_at));
}

#[test]
fn given_empty_profile_image_when_validated_then_treated_as_absent() {
    let mut candidate = ann();
    candidate.profile_image = Some(String::new());

    assert_that!(candidate.validate(&FieldLimits::default()), ok(anything()));
    assert_that!(candidate.escaped().profile_image, none());
}

#[test]
fn given_backslash_only_name_when_escaped_then_validation_names_field() {
    let mut candidate = ann();
    candidate.first_name = "\\\\".into();

    match candidate.escaped().validate(&FieldLimits::default()) {
        Err(CoreError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("firstName"))
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_markup_within_raw_limit_when_escaped_then_length_limit_applies() {
    let limits = FieldLimits::default();
    let mut candidate = ann();
    candidate.last_name = "<".repeat(limits.max_name_length);

    assert_that!(candidate.validate(&limits), ok(anything()));
    assert_that!(candidate.escaped().validate(&limits), err(anything()));
}
