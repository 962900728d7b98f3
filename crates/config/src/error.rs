use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config in {}: {message}", .path.display())]
    Invalid { path: PathBuf, message: String },

    #[error("unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
