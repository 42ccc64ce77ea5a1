//! # bw-core
//!
//! Core types and error types for bewell.
//!
//! This crate provides the value objects exchanged between the other crates:
//! - [`ServiceDescriptor`]: the service whose schema is being submitted
//! - [`SchemaPayload`]: the request body sent to the schema registry
//! - [`RegistryResponse`] and [`Outcome`]: what the registry answers, and the
//!   pass/fail result derived from it
//! - [`ServiceError`]: descriptor validation failures

pub mod errors;
pub mod payload;
pub mod responses;
pub mod service;

pub use errors::ServiceError;
pub use payload::SchemaPayload;
pub use responses::{Outcome, RegistryResponse, ResponseDetail};
pub use service::ServiceDescriptor;
