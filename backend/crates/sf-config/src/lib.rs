mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod port_file;
mod security_config;
mod server_config;
mod validation_config;


pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use port_file::port_file_info::PortFileInfo;
pub use security_config::SecurityConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

/// Environment variable that relocates the config directory
pub const CONFIG_DIR_ENV: &str = "SF_CONFIG_DIR";
/// Config directory used when `SF_CONFIG_DIR` is unset (relative to cwd)
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".sf";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "storefront.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
