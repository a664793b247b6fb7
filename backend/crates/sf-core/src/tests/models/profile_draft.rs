use crate::{FieldLimits, Profile, ProfileDraft};

fn profile() -> Profile {
    Profile {
        id: "00000000-0000-0000-0000-000000000001".into(),
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        email: "a@x.com".into(),
        contact_number: Some("555-0100".into()),
        profile_image: None,
    }
}

#[test]
fn test_draft_copies_profile_without_password() {
    let draft = ProfileDraft::from(&profile());
    assert_eq!(draft.first_name, "Ann");
    assert_eq!(draft.contact_number.as_deref(), Some("555-0100"));
    assert!(draft.password.is_none());
    assert!(!draft.credential_changed());
}

#[test]
fn test_empty_password_is_not_a_credential_change() {
    let mut draft = ProfileDraft::from(&profile());
    draft.password = Some(String::new());
    assert!(!draft.credential_changed());

    draft.password = Some("n3w".into());
    assert!(draft.credential_changed());
}

#[test]
fn test_promote_keeps_identity_key_and_reference() {
    let original = profile();
    let mut draft = ProfileDraft::from(&original);
    draft.contact_number = Some("555-0199".into());
    draft.email = "someone-else@x.com".into();

    let promoted = draft.promote(&original);
    assert_eq!(promoted.id, original.id);
    assert_eq!(promoted.email, original.email);
    assert_eq!(promoted.contact_number.as_deref(), Some("555-0199"));
}

#[test]
fn test_password_is_not_serialized_when_absent() {
    let draft = ProfileDraft::from(&profile());
    let json = serde_json::to_value(&draft).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["firstName"], "Ann");
}

#[test]
fn test_validate_rejects_bad_image() {
    let mut draft = ProfileDraft::from(&profile());
    draft.profile_image = Some("data:image/png;base64,!!".into());
    assert!(draft.validate(&FieldLimits::default()).is_err());
}

#[test]
fn test_validate_treats_empty_image_as_absent() {
    let mut draft = ProfileDraft::from(&profile());
    draft.profile_image = Some(String::new());

    assert!(draft.validate(&FieldLimits::default()).is_ok());
    assert_eq!(draft.escaped().profile_image, None);
}

#[test]
fn test_escaped_draft_is_checked_against_limits() {
    let limits = FieldLimits::default();
    let mut draft = ProfileDraft::from(&profile());
    draft.first_name = "&".repeat(limits.max_name_length);

    assert!(draft.validate(&limits).is_ok());
    assert!(draft.escaped().validate(&limits).is_err());
}
