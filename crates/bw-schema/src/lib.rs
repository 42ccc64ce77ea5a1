//! # bw-schema
//!
//! Schema fragment discovery and aggregation for bewell.
//!
//! A service's schema is split across files under a directory tree. This
//! crate finds every file whose name matches the configured extension, reads
//! them in a stable walk order and concatenates them into one document:
//!
//! ```no_run
//! use std::path::Path;
//! use bw_schema::{aggregate, ExtensionMatch};
//!
//! let document = aggregate(Path::new("graph"), "graphql", ExtensionMatch::Contains)?;
//! println!("{} fragments", document.included().count());
//! # Ok::<(), bw_schema::SchemaError>(())
//! ```

mod aggregate;
mod error;
mod matching;
pub mod walk;

pub use aggregate::{
    FragmentStatus, SEPARATOR, SchemaDocument, SchemaFragment, aggregate, read_fragment,
};
pub use error::SchemaError;
pub use matching::ExtensionMatch;
