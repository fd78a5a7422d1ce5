//! Firewall rule generation
//!
//! Rules reference catalog tags only. Nothing ties them to the tags actually
//! carried by generated VMs, and a rule may point a tag at itself.

use rand::Rng;

use crate::domain::{FwId, FwRule, RecordCount, TagCatalog};
use crate::generator::allocator::{IdentifierAllocator, Namespace};

/// Generate exactly `count` firewall rules with pairwise distinct `fw_id`s.
pub fn generate_fw_rules<R: Rng + ?Sized>(
    count: RecordCount,
    catalog: &TagCatalog,
    rng: &mut R,
) -> Vec<FwRule> {
    let count = count.into_inner();
    let mut ids = IdentifierAllocator::with_capacity(Namespace::FirewallRule, count);

    (0..count)
        .map(|_| FwRule {
            fw_id: FwId::new(ids.allocate(rng)),
            source_tag: catalog.pick(rng).clone(),
            dest_tag: catalog.pick(rng).clone(),
        })
        .collect()
}
