pub mod credential_hasher;
pub mod error;
pub mod hash_params;

pub use credential_hasher::CredentialHasher;
pub use error::{AuthError, Result};
pub use hash_params::HashParams;
