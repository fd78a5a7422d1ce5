//! Fixture generation
//!
//! Generation is a single synchronous pass: VM records first, then firewall
//! rules, each with its own identifier namespace. Randomness is always
//! injected so callers choose between OS entropy and a fixed seed.

pub mod allocator;
pub mod fw_rules;
pub mod vms;

pub use allocator::{allocate, IdentifierAllocator, Namespace};
pub use fw_rules::generate_fw_rules;
pub use vms::{generate_vms, sample_vm_tags};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::domain::{FixtureDocument, RecordCount, TagCatalog};
use crate::error::Result;
use crate::log_messages;

/// Assemble a fixture document from `vm_count` VMs and `fw_count` rules.
pub fn build<R: Rng + ?Sized>(
    vm_count: RecordCount,
    fw_count: RecordCount,
    catalog: &TagCatalog,
    rng: &mut R,
) -> FixtureDocument {
    let vms = generate_vms(vm_count, catalog, rng);
    let fw_rules = generate_fw_rules(fw_count, catalog, rng);
    FixtureDocument { vms, fw_rules }
}

/// Tag catalog plus the random source used to draw fixtures from it
#[derive(Debug)]
pub struct FixtureGenerator<R> {
    catalog: TagCatalog,
    rng: R,
}

impl FixtureGenerator<StdRng> {
    /// Generator seeded from operating system entropy
    pub fn from_entropy(catalog: TagCatalog) -> Self {
        Self::new(catalog, StdRng::from_os_rng())
    }

    /// Generator whose output is fully determined by `seed`
    pub fn seeded(catalog: TagCatalog, seed: u64) -> Self {
        Self::new(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FixtureGenerator<R> {
    pub fn new(catalog: TagCatalog, rng: R) -> Self {
        Self { catalog, rng }
    }

    pub fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    #[instrument(skip(self), level = "debug")]
    pub fn build(&mut self, vm_count: RecordCount, fw_count: RecordCount) -> FixtureDocument {
        let document = build(vm_count, fw_count, &self.catalog, &mut self.rng);
        let summary = document.summary();
        debug!(
            vms = summary.vms,
            fw_rules = summary.fw_rules,
            tagged_vms = summary.tagged_vms,
            self_referencing_rules = summary.self_referencing_rules,
            "{}",
            log_messages::generation::DOCUMENT_BUILT
        );
        document
    }

    /// Validate caller supplied counts, then build. Negative counts produce
    /// an invalid-argument error and no document.
    pub fn generate(&mut self, vm_count: i64, fw_count: i64) -> Result<FixtureDocument> {
        let vm_count = RecordCount::try_from_signed("vmcount", vm_count)?;
        let fw_count = RecordCount::try_from_signed("fwcount", fw_count)?;
        Ok(self.build(vm_count, fw_count))
    }
}
