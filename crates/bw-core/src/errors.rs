//! Service descriptor error types.
//!
//! Errors from the aggregator, the registry client and the workflow live in
//! their own crates and converge in `bw-service`.

use thiserror::Error;

/// Errors raised while validating a [`ServiceDescriptor`](crate::ServiceDescriptor).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// One or more of name, url and version is empty.
    #[error(
        "missing required service details ({}); required flags: --name, --url and --version",
        .missing.join(", ")
    )]
    Incomplete {
        /// Flag names of the empty fields, in declaration order.
        missing: Vec<&'static str>,
    },
}
