//! New-user registration form.
//!
//! Client-side checks run before anything is sent: required fields, the
//! password confirmation, and the attachment MIME type. Registration does
//! not establish a session; the user signs in afterwards.

use crate::{CliClientResult, Client, ClientError, RegisterAck};

use sf_core::{RegistrationCandidate, encode_image_data_url, escape_markup, escape_optional};

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match!";
pub const REGISTERED_MESSAGE: &str = "Registration successful! Please log in.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub contact_number: Option<String>,
    /// Data URL built by `attach_image`
    pub profile_image: Option<String>,
}

impl RegistrationForm {
    /// Encode `bytes` as the profile image; non-image MIME types are rejected
    pub fn attach_image(&mut self, mime: &str, bytes: &[u8]) -> CliClientResult<()> {
        self.profile_image = Some(encode_image_data_url(mime, bytes)?);
        Ok(())
    }

    pub fn validate(&self) -> CliClientResult<()> {
        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("password", &self.password),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ClientError::validation(
                    format!("{} is required", field),
                    Some(field),
                ));
            }
        }

        if self.password != self.confirm_password {
            return Err(ClientError::validation(
                PASSWORD_MISMATCH_MESSAGE,
                Some("confirmPassword"),
            ));
        }

        Ok(())
    }

    /// Validated, trimmed and escaped request body. The password is sent as typed.
    pub fn to_candidate(&self) -> CliClientResult<RegistrationCandidate> {
        self.validate()?;

        Ok(RegistrationCandidate {
            first_name: escape_markup(&self.first_name),
            last_name: escape_markup(&self.last_name),
            email: escape_markup(&self.email),
            password: self.password.clone(),
            contact_number: escape_optional(self.contact_number.as_deref()),
            profile_image: self.profile_image.clone(),
        })
    }

    /// Validate locally, then POST. Nothing is sent if validation fails.
    pub async fn submit(&self, client: &Client) -> CliClientResult<RegisterAck> {
        let candidate = self.to_candidate()?;
        let ack = client.register(&candidate).await?;
        log::info!("Registered {}", ack.email);
        Ok(ack)
    }
}
