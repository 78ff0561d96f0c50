//! Propset Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Propset
//! properties-file editor, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           propset-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (EditService)                │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (Driven: Filesystem)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    propset-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │        (Entry, PropertiesStore)         │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use propset_core::{
//!     application::{EditRequest, EditService},
//! };
//!
//! // 1. Describe the edits
//! let request = EditRequest::builder()
//!     .set("server.port", "8080")
//!     .comment("debug.enabled")
//!     .build();
//!
//! // 2. Run the pure edit pass (source text in, result text out)
//! let outcome = EditService::edit(Some("debug.enabled=true\n"), &request).unwrap();
//! assert!(outcome.changed);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EditOutcome, EditRequest, EditRequestBuilder, EditService, ports::Filesystem,
    };
    pub use crate::domain::{Entry, PropertiesStore};
    pub use crate::error::{PropsetError, PropsetResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
