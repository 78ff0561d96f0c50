//! Domain layer: the properties-file model.
//!
//! Pure logic, no I/O. An [`Entry`] is one `[#]key=value` line; a
//! [`PropertiesStore`] is the ordered collection of entries that a file
//! parses into and serializes out of. All business rules about the wire
//! format live here.

pub mod entry;
pub mod error;
pub mod store;

pub use entry::Entry;
pub use error::{DomainError, ErrorCategory};
pub use store::PropertiesStore;
