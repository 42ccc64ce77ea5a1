//! The service whose schema is aggregated and submitted.

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Name, URL and version of a service, as supplied by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Service name as registered with the gateway (e.g. `bewell`).
    pub name: String,
    /// Domain URL the service is reachable at.
    pub url: String,
    /// Version of the service the schema belongs to.
    pub version: String,
}

impl ServiceDescriptor {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            version: version.into(),
        }
    }

    /// Ensure none of the fields is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Incomplete`] naming every empty field.
    pub fn validate_fields(&self) -> Result<(), ServiceError> {
        let missing: Vec<&'static str> = [
            ("--name", &self.name),
            ("--url", &self.url),
            ("--version", &self.version),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(flag, _)| flag)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Incomplete { missing })
        }
    }
}

impl std::fmt::Display for ServiceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.url)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn complete_descriptor_validates() {
        let service = ServiceDescriptor::new("bewell", "https://bewell-test.com", "0.0.1");
        assert!(service.validate_fields().is_ok());
    }

    #[rstest]
    #[case::no_name("", "https://bewell-test.com", "0.0.1", vec!["--name"])]
    #[case::no_url("bewell", "", "0.0.1", vec!["--url"])]
    #[case::no_version("bewell", "https://bewell-test.com", "", vec!["--version"])]
    #[case::nothing("", "", "", vec!["--name", "--url", "--version"])]
    fn incomplete_descriptor_is_rejected(
        #[case] name: &str,
        #[case] url: &str,
        #[case] version: &str,
        #[case] expected: Vec<&'static str>,
    ) {
        let service = ServiceDescriptor::new(name, url, version);
        let err = service.validate_fields().unwrap_err();
        assert_eq!(err, ServiceError::Incomplete { missing: expected });
    }

    #[test]
    fn display_shows_name_and_url() {
        let service = ServiceDescriptor::new("bewell", "https://bewell-test.com", "0.0.1");
        assert_eq!(service.to_string(), "bewell (https://bewell-test.com)");
    }
}
