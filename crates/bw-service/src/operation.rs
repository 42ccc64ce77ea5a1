//! The two registry operations and their endpoints.

use reqwest::Url;

use crate::error::WorkflowError;

/// Which registry endpoint a workflow targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Check the schema against the gateway without storing it.
    Validate,
    /// Create or update the registered schema for the service.
    Publish,
}

impl Operation {
    /// URL path that replaces the base URL's path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Validate => "schema/validate",
            Self::Publish => "schema/push",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Validate => "validate",
            Self::Publish => "publish",
        })
    }
}

/// Derive the request URL for `operation` from the registry base URL.
///
/// Any existing path on `base` is replaced, not appended to; query and
/// fragment are kept.
///
/// # Errors
///
/// Returns [`WorkflowError::InvalidUrl`] if `base` does not parse or cannot
/// carry a path (e.g. `mailto:` URLs).
pub fn endpoint(base: &str, operation: Operation) -> Result<Url, WorkflowError> {
    let mut url = Url::parse(base).map_err(|error| WorkflowError::InvalidUrl {
        url: base.to_string(),
        reason: error.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(WorkflowError::InvalidUrl {
            url: base.to_string(),
            reason: "url cannot carry a path".to_string(),
        });
    }

    url.set_path(operation.path());
    Ok(url)
}
