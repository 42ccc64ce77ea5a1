//! Schema discovery settings.

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    ".".to_string()
}

fn default_file_extension() -> String {
    "graphql".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchemaConfig {
    /// Directory searched recursively for schema files.
    #[serde(default = "default_dir", deserialize_with = "crate::lenient::string")]
    pub dir: String,

    /// Extension of schema files, without the leading dot.
    #[serde(
        default = "default_file_extension",
        deserialize_with = "crate::lenient::string"
    )]
    pub file_extension: String,

    /// Require file names to end with the extension instead of merely
    /// containing it.
    #[serde(default)]
    pub strict_extension: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            file_extension: default_file_extension(),
            strict_extension: false,
        }
    }
}
