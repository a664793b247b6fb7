pub mod attachment;
pub mod error;
pub mod field_limits;
pub mod models;
pub mod sanitize;


pub use attachment::{encode_image_data_url, validate_image_data_url};
pub use error::{CoreError, Result};
pub use field_limits::FieldLimits;
pub use models::identity_record::IdentityRecord;
pub use models::profile::Profile;
pub use models::profile_draft::ProfileDraft;
pub use models::registration_candidate::RegistrationCandidate;
pub use sanitize::{escape_markup, escape_optional};

/// Default maximum length for first/last names
pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;
/// Default maximum length for an email address
pub const DEFAULT_MAX_EMAIL_LENGTH: usize = 254;
/// Default maximum length for a contact number
pub const DEFAULT_MAX_CONTACT_LENGTH: usize = 32;
/// Default maximum decoded size of a profile image (2 MiB)
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;
