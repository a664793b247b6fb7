use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Argon2id work factor bounds
pub const MIN_HASH_MEMORY_KIB: u32 = 8;
pub const MAX_HASH_MEMORY_KIB: u32 = 1024 * 1024;
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 19 * 1024;

pub const MIN_HASH_ITERATIONS: u32 = 1;
pub const MAX_HASH_ITERATIONS: u32 = 10;
pub const DEFAULT_HASH_ITERATIONS: u32 = 2;

pub const MIN_HASH_PARALLELISM: u32 = 1;
pub const MAX_HASH_PARALLELISM: u32 = 16;
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;

/// Credential hashing work factor.
///
/// Fixed for the lifetime of a deployment; existing hashes embed their own
/// parameters so changing these only affects newly written credentials.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub hash_memory_kib: u32,
    pub hash_iterations: u32,
    pub hash_parallelism: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            hash_memory_kib: DEFAULT_HASH_MEMORY_KIB,
            hash_iterations: DEFAULT_HASH_ITERATIONS,
            hash_parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl SecurityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.hash_parallelism < MIN_HASH_PARALLELISM
            || self.hash_parallelism > MAX_HASH_PARALLELISM
        {
            return Err(ConfigError::security(format!(
                "security.hash_parallelism must be {}-{}, got {}",
                MIN_HASH_PARALLELISM, MAX_HASH_PARALLELISM, self.hash_parallelism
            )));
        }

        if self.hash_iterations < MIN_HASH_ITERATIONS || self.hash_iterations > MAX_HASH_ITERATIONS
        {
            return Err(ConfigError::security(format!(
                "security.hash_iterations must be {}-{}, got {}",
                MIN_HASH_ITERATIONS, MAX_HASH_ITERATIONS, self.hash_iterations
            )));
        }

        // Argon2 requires at least 8 KiB per lane
        let min_memory = MIN_HASH_MEMORY_KIB * self.hash_parallelism;
        if self.hash_memory_kib < min_memory || self.hash_memory_kib > MAX_HASH_MEMORY_KIB {
            return Err(ConfigError::security(format!(
                "security.hash_memory_kib must be {}-{}, got {}",
                min_memory, MAX_HASH_MEMORY_KIB, self.hash_memory_kib
            )));
        }

        Ok(())
    }
}
