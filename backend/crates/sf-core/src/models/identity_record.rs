//! Identity record - the durable, server-side representation of a user.

use crate::{Profile, ProfileDraft};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user. `email` is the unique identity key.
///
/// `credential_hash` is a PHC-format hash string and never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    /// Store-assigned reference
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub credential_hash: String,
    pub contact_number: Option<String>,
    /// Data URL (`data:image/...;base64,...`), opaque once validated
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IdentityRecord {
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        credential_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            credential_hash,
            contact_number: None,
            profile_image: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full-record replace from a draft.
    ///
    /// Every profile field takes the draft's value, including absent optional
    /// fields. The credential hash is only swapped when `new_hash` is given.
    /// The identity key, reference and creation time never change.
    pub fn replaced_by(&self, draft: &ProfileDraft, new_hash: Option<String>) -> Self {
        Self {
            id: self.id,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: self.email.clone(),
            credential_hash: new_hash.unwrap_or_else(|| self.credential_hash.clone()),
            contact_number: draft.contact_number.clone(),
            profile_image: draft.profile_image.clone(),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    /// Public view without the credential hash
    pub fn to_profile(&self) -> Profile {
        Profile {
            id: self.id.to_string(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            contact_number: self.contact_number.clone(),
            profile_image: self.profile_image.clone(),
        }
    }
}
