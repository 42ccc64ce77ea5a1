mod service;

pub use service::{SchemaArgs, ServiceArgs, ServiceCommands};
