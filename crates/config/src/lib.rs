//! # Sass Order Configuration
//!
//! Finds and loads the optional `.sassorderrc` / `sassorder.toml` file that
//! controls file discovery, worker count and rule severities.

mod config;
mod error;
mod loader;

pub use config::{SassOrderConfig, DEFAULT_EXCLUDE, DEFAULT_INCLUDE};
pub use error::{ConfigError, Result};
pub use loader::{find_config, load_config, load_config_from_str, CONFIG_FILES};
