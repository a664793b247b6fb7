//! New-user submission accepted by `POST /register`.

use crate::{
    CoreError, FieldLimits, IdentityRecord, Result as CoreErrorResult, escape_markup,
    escape_optional, validate_image_data_url,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationCandidate {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, alias = "contact", skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(
        default,
        alias = "profilePicture",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_image: Option<String>,
}

impl RegistrationCandidate {
    /// The attachment is checked first, then the required fields. An empty
    /// attachment counts as absent.
    ///
    /// Run on the `escaped` copy so the limits hold for the stored text.
    #[track_caller]
    pub fn validate(&self, limits: &FieldLimits) -> CoreErrorResult<()> {
        if let Some(image) = self.profile_image.as_deref().filter(|s| !s.is_empty()) {
            validate_image_data_url(image, limits.max_image_bytes)?;
        }

        limits.validate_identity_fields(
            &self.first_name,
            &self.last_name,
            &self.email,
            self.contact_number.as_deref(),
        )?;

        if self.password.is_empty() {
            return Err(CoreError::field("password", "password is required"));
        }

        Ok(())
    }

    /// Copy with text fields escaped; the password is passed through untouched
    pub fn escaped(&self) -> Self {
        Self {
            first_name: escape_markup(&self.first_name),
            last_name: escape_markup(&self.last_name),
            email: escape_markup(&self.email),
            password: self.password.clone(),
            contact_number: escape_optional(self.contact_number.as_deref()),
            profile_image: self.profile_image.clone().filter(|s| !s.is_empty()),
        }
    }

    /// Build the record to persist from an already-hashed credential
    pub fn into_record(self, credential_hash: String) -> IdentityRecord {
        let mut record =
            IdentityRecord::new(self.first_name, self.last_name, self.email, credential_hash);
        record.contact_number = self.contact_number;
        record.profile_image = self.profile_image;
        record
    }
}
