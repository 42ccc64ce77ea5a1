//! Service descriptor defaults.

use serde::{Deserialize, Serialize};

/// Name, URL and version of the service a project builds.
///
/// Usually kept in the project's `.bewell/config.toml` so the flags can be
/// omitted on every invocation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub name: String,

    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub url: String,

    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub version: String,
}

impl ServiceConfig {
    /// Check if every descriptor field is set.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.url.is_empty() && !self.version.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_incomplete() {
        let config = ServiceConfig::default();
        assert!(!config.is_complete());
    }

    #[test]
    fn complete_when_every_field_set() {
        let config = ServiceConfig {
            name: "bewell".into(),
            url: "https://bewell-test.com".into(),
            version: "0.0.1".into(),
        };
        assert!(config.is_complete());

        let missing_version = ServiceConfig {
            version: String::new(),
            ..config
        };
        assert!(!missing_version.is_complete());
    }
}
