use crate::EditableField;

use sf_core::ProfileDraft;

use std::str::FromStr;

fn draft() -> ProfileDraft {
    ProfileDraft::from(&crate::tests::editor::ann_lee())
}

#[test]
fn test_parse_accepts_cli_and_wire_spellings() {
    assert_eq!(
        EditableField::from_str("first-name").unwrap(),
        EditableField::FirstName
    );
    assert_eq!(
        EditableField::from_str("lastName").unwrap(),
        EditableField::LastName
    );
    assert_eq!(
        EditableField::from_str("contact").unwrap(),
        EditableField::ContactNumber
    );
}

#[test]
fn test_email_is_not_editable() {
    assert!(EditableField::from_str("email").is_err());
}

#[test]
fn test_empty_contact_clears_optional_field() {
    let mut draft = draft();

    EditableField::ContactNumber.apply(&mut draft, "");

    assert_eq!(draft.contact_number, None);
}

#[test]
fn test_empty_password_means_unchanged_credential() {
    let mut draft = draft();

    EditableField::Password.apply(&mut draft, "");

    assert!(!draft.credential_changed());
}
