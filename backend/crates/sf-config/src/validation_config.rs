use crate::{ConfigError, ConfigErrorResult};

use sf_core::{
    DEFAULT_MAX_CONTACT_LENGTH, DEFAULT_MAX_EMAIL_LENGTH, DEFAULT_MAX_IMAGE_BYTES,
    DEFAULT_MAX_NAME_LENGTH, FieldLimits,
};

use serde::Deserialize;

pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 500;

pub const MIN_EMAIL_LENGTH: usize = 3;
pub const MAX_EMAIL_LENGTH: usize = 320;

pub const MIN_CONTACT_LENGTH: usize = 1;
pub const MAX_CONTACT_LENGTH: usize = 64;

pub const MIN_IMAGE_BYTES: usize = 1024;
pub const MAX_IMAGE_BYTES: usize = 16 * 1024 * 1024;

/// Limits for identity fields accepted by the server.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_name_length: usize,
    pub max_email_length: usize,
    pub max_contact_length: usize,
    /// Decoded size limit for profile images
    pub max_image_bytes: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_email_length: DEFAULT_MAX_EMAIL_LENGTH,
            max_contact_length: DEFAULT_MAX_CONTACT_LENGTH,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::check_range(
            "max_name_length",
            self.max_name_length,
            MIN_NAME_LENGTH,
            MAX_NAME_LENGTH,
        )?;
        Self::check_range(
            "max_email_length",
            self.max_email_length,
            MIN_EMAIL_LENGTH,
            MAX_EMAIL_LENGTH,
        )?;
        Self::check_range(
            "max_contact_length",
            self.max_contact_length,
            MIN_CONTACT_LENGTH,
            MAX_CONTACT_LENGTH,
        )?;
        Self::check_range(
            "max_image_bytes",
            self.max_image_bytes,
            MIN_IMAGE_BYTES,
            MAX_IMAGE_BYTES,
        )
    }

    #[track_caller]
    fn check_range(name: &str, value: usize, min: usize, max: usize) -> ConfigErrorResult<()> {
        if value < min || value > max {
            return Err(ConfigError::validation(format!(
                "validation.{} must be {}-{}, got {}",
                name, min, max, value
            )));
        }
        Ok(())
    }

    pub fn field_limits(&self) -> FieldLimits {
        FieldLimits {
            max_name_length: self.max_name_length,
            max_email_length: self.max_email_length,
            max_contact_length: self.max_contact_length,
            max_image_bytes: self.max_image_bytes,
        }
    }
}
