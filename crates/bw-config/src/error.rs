//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error")]
    Figment(#[from] Box<figment::Error>),

    /// A config file passed explicitly does not exist.
    #[error("Configuration file not found: {}", .path.display())]
    MissingFile { path: PathBuf },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Figment(Box::new(error))
    }
}
