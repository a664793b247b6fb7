#![allow(dead_code)]

use sf_core::IdentityRecord;

/// Identity with a placeholder hash and no optional fields
pub fn create_test_identity(email: &str) -> IdentityRecord {
    IdentityRecord::new(
        "Ada".to_string(),
        "Lovelace".to_string(),
        email.to_string(),
        "$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
    )
}

/// Identity with every optional field populated
pub fn create_full_test_identity(email: &str) -> IdentityRecord {
    let mut record = create_test_identity(email);
    record.contact_number = Some("555-0100".to_string());
    record.profile_image = Some("data:image/png;base64,iVBORw0KGgo=".to_string());
    record
}
