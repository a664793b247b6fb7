//! One-way credential hashing.
//!
//! Hashes are PHC strings (`$argon2id$v=19$m=...`) with a fresh random salt,
//! so verification needs only the stored string. Plaintext is never kept.

use crate::{AuthError, HashParams, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use error_location::ErrorLocation;

#[derive(Debug, Clone)]
pub struct CredentialHasher {
    params: Params,
}

impl CredentialHasher {
    #[track_caller]
    pub fn new(params: HashParams) -> AuthErrorResult<Self> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| AuthError::InvalidParams {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Hashing {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// `Ok(false)` on mismatch; `Err` only when `stored` is not a PHC string
    #[track_caller]
    pub fn verify(&self, plaintext: &str, stored: &str) -> AuthErrorResult<bool> {
        let parsed = PasswordHash::new(stored).map_err(|e| AuthError::MalformedHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        match self.argon2().verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(AuthError::Hashing {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// `hash` on the blocking pool; Argon2 is too slow for a runtime worker.
    ///
    /// The caller's location is captured before the first poll.
    #[track_caller]
    pub fn hash_blocking(
        &self,
        plaintext: String,
    ) -> impl Future<Output = AuthErrorResult<String>> + Send + use<> {
        let location = ErrorLocation::from(Location::caller());
        let hasher = self.clone();
        async move {
            tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
                .await
                .map_err(|source| AuthError::Task { source, location })?
        }
    }
}
