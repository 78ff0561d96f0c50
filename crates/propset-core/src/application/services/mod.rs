//! Application services: use case orchestration.

pub mod edit_service;

pub use edit_service::{EditOutcome, EditService};
