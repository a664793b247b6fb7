pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{open_pool, ping, run_migrations};
pub use error::{DbError, Result};
pub use repositories::identity_repository::IdentityRepository;

/// Embedded schema migrations, run at startup and by tests
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
