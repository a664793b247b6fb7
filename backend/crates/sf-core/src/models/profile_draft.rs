//! Editable copy of a profile, submitted wholesale on save.

use crate::{
    FieldLimits, Profile, Result as CoreErrorResult, escape_markup, escape_optional,
    validate_image_data_url,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    /// Identity key; selects the record to replace
    pub email: String,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default, alias = "profilePicture")]
    pub profile_image: Option<String>,
    /// New password; absent or empty leaves the credential unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl From<&Profile> for ProfileDraft {
    fn from(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
            contact_number: profile.contact_number.clone(),
            profile_image: profile.profile_image.clone(),
            password: None,
        }
    }
}

impl ProfileDraft {
    pub fn credential_changed(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Copy with text fields escaped; the password is passed through untouched
    pub fn escaped(&self) -> Self {
        Self {
            first_name: escape_markup(&self.first_name),
            last_name: escape_markup(&self.last_name),
            email: escape_markup(&self.email),
            contact_number: escape_optional(self.contact_number.as_deref()),
            profile_image: self.profile_image.clone().filter(|s| !s.is_empty()),
            password: self.password.clone(),
        }
    }

    /// Field checks, then the attachment check. An empty attachment counts
    /// as absent.
    ///
    /// Run on the `escaped` copy so the limits hold for the stored text.
    #[track_caller]
    pub fn validate(&self, limits: &FieldLimits) -> CoreErrorResult<()> {
        limits.validate_identity_fields(
            &self.first_name,
            &self.last_name,
            &self.email,
            self.contact_number.as_deref(),
        )?;

        if let Some(image) = self.profile_image.as_deref().filter(|s| !s.is_empty()) {
            validate_image_data_url(image, limits.max_image_bytes)?;
        }

        Ok(())
    }

    /// The record of truth after this draft has been saved
    pub fn promote(&self, previous: &Profile) -> Profile {
        Profile {
            id: previous.id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: previous.email.clone(),
            contact_number: self.contact_number.clone(),
            profile_image: self.profile_image.clone(),
        }
    }
}
