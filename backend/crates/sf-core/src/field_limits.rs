use crate::{
    CoreError, DEFAULT_MAX_CONTACT_LENGTH, DEFAULT_MAX_EMAIL_LENGTH, DEFAULT_MAX_IMAGE_BYTES,
    DEFAULT_MAX_NAME_LENGTH, Result as CoreErrorResult,
};

/// Size limits applied to identity fields on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    pub max_name_length: usize,
    pub max_email_length: usize,
    pub max_contact_length: usize,
    pub max_image_bytes: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_email_length: DEFAULT_MAX_EMAIL_LENGTH,
            max_contact_length: DEFAULT_MAX_CONTACT_LENGTH,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl FieldLimits {
    /// Required text field: non-blank and within `max` characters
    #[track_caller]
    pub fn require_text(&self, value: &str, field: &str, max: usize) -> CoreErrorResult<()> {
        if value.trim().is_empty() {
            return Err(CoreError::field(field, format!("{} is required", field)));
        }
        self.bounded_text(value, field, max)
    }

    #[track_caller]
    pub fn bounded_text(&self, value: &str, field: &str, max: usize) -> CoreErrorResult<()> {
        if value.chars().count() > max {
            return Err(CoreError::field(
                field,
                format!("{} must not exceed {} characters", field, max),
            ));
        }
        Ok(())
    }

    /// Email must look like `local@domain`
    #[track_caller]
    pub fn require_email(&self, value: &str) -> CoreErrorResult<()> {
        self.require_text(value, "email", self.max_email_length)?;

        let well_formed = match value.trim().split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !value.trim().chars().any(char::is_whitespace)
            }
            None => false,
        };

        if !well_formed {
            return Err(CoreError::field("email", "email address is not valid"));
        }
        Ok(())
    }

    /// Shared checks for the text fields of a registration or profile draft
    #[track_caller]
    pub fn validate_identity_fields(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        contact_number: Option<&str>,
    ) -> CoreErrorResult<()> {
        self.require_text(first_name, "firstName", self.max_name_length)?;
        self.require_text(last_name, "lastName", self.max_name_length)?;
        self.require_email(email)?;
        if let Some(contact) = contact_number {
            self.bounded_text(contact, "contactNumber", self.max_contact_length)?;
        }
        Ok(())
    }
}
