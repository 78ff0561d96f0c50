//! Application layer for Propset.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (EditService)
//! - **Engine**: the fixed-order mutation pass over a store
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! file-format rules itself. The wire format lives in `crate::domain`.

pub mod engine;
pub mod error;
pub mod ports;
pub mod request;
pub mod services;

// Re-export main services
pub use services::{EditOutcome, EditService};

pub use request::{EditRequest, EditRequestBuilder};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
