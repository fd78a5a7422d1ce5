//! Domain types for VM and firewall-rule fixtures
//!
//! This module holds the vocabulary of a fixture document: tags and the tag
//! catalog, random identifiers, and the records assembled from them.

pub mod catalog;
pub mod records;
pub mod types;
pub mod validation_constants;

pub use catalog::*;
pub use records::*;
pub use types::*;
