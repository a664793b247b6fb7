use crate::{IdentityRecord, ProfileDraft};

fn record() -> IdentityRecord {
    let mut record = IdentityRecord::new(
        "Ann".into(),
        "Lee".into(),
        "a@x.com".into(),
        "$argon2id$old".into(),
    );
    record.contact_number = Some("555-0100".into());
    record.profile_image = Some("data:image/png;base64,aGVsbG8=".into());
    record
}

#[test]
fn test_profile_view_omits_credential_hash() {
    let json = serde_json::to_string(&record().to_profile()).unwrap();
    assert!(!json.contains("argon2"));
    assert!(json.contains("\"contactNumber\":\"555-0100\""));
}

#[test]
fn test_replace_clears_absent_optional_fields() {
    let original = record();
    let mut draft = ProfileDraft::from(&original.to_profile());
    draft.contact_number = None;
    draft.profile_image = None;

    let replaced = original.replaced_by(&draft, None);
    assert_eq!(replaced.contact_number, None);
    assert_eq!(replaced.profile_image, None);
    assert_eq!(replaced.credential_hash, original.credential_hash);
    assert_eq!(replaced.id, original.id);
    assert_eq!(replaced.created_at, original.created_at);
}

#[test]
fn test_replace_swaps_hash_when_given() {
    let original = record();
    let draft = ProfileDraft::from(&original.to_profile());

    let replaced = original.replaced_by(&draft, Some("$argon2id$new".into()));
    assert_eq!(replaced.credential_hash, "$argon2id$new");
}
