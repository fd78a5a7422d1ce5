//! vmfw_fixtures - synthetic VM inventory and firewall-rule fixtures
//!
//! Generates a JSON document of virtual machines carrying catalog tags and
//! firewall rules between those tags, for seeding tests and demos of a
//! VM/firewall management service. Document shape is fixed; content is
//! random unless a seed is supplied.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod log_messages;
pub mod output;

pub use domain::{FixtureDocument, FwRule, RecordCount, TagCatalog, VmRecord};
pub use error::{Error, Result};
pub use generator::FixtureGenerator;
