//! VM record generation

use rand::Rng;

use crate::domain::validation_constants::vm_tags::{TAGS_MAX_COUNT, TAGS_MIN_COUNT};
use crate::domain::{RecordCount, Tag, TagCatalog, VmId, VmName, VmRecord};
use crate::generator::allocator::{IdentifierAllocator, Namespace};

/// Sample a VM's tags: a size drawn uniformly from
/// `TAGS_MIN_COUNT..=TAGS_MAX_COUNT`, distinct members, random order.
pub fn sample_vm_tags<R: Rng + ?Sized>(catalog: &TagCatalog, rng: &mut R) -> Vec<Tag> {
    let amount = rng.random_range(TAGS_MIN_COUNT..=TAGS_MAX_COUNT);
    catalog.sample(rng, amount)
}

/// Generate exactly `count` VM records with pairwise distinct `vm_id`s.
pub fn generate_vms<R: Rng + ?Sized>(
    count: RecordCount,
    catalog: &TagCatalog,
    rng: &mut R,
) -> Vec<VmRecord> {
    let count = count.into_inner();
    let mut ids = IdentifierAllocator::with_capacity(Namespace::Vm, count);

    (0..count)
        .map(|_| {
            let id = ids.allocate(rng);
            VmRecord {
                name: VmName::for_identifier(&id),
                vm_id: VmId::new(id),
                tags: sample_vm_tags(catalog, rng),
            }
        })
        .collect()
}
