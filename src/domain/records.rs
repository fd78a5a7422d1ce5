//! Records that make up a fixture document
//!
//! Field declaration order is the serialized key order, so `vms` always
//! precedes `fw_rules` and each record's keys appear in a stable order.

use serde::{Deserialize, Serialize};

use crate::domain::types::{FwId, Tag, VmId, VmName};

/// A synthetic virtual machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmRecord {
    pub vm_id: VmId,
    pub name: VmName,
    /// Distinct catalog tags in no particular order
    pub tags: Vec<Tag>,
}

/// A synthetic firewall rule allowing traffic from one tag to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FwRule {
    pub fw_id: FwId,
    pub source_tag: Tag,
    pub dest_tag: Tag,
}

impl FwRule {
    /// Whether the rule points a tag at itself
    pub fn is_self_referencing(&self) -> bool {
        self.source_tag == self.dest_tag
    }
}

/// Complete fixture output for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureDocument {
    pub vms: Vec<VmRecord>,
    pub fw_rules: Vec<FwRule>,
}

/// Record counts of a document, used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FixtureSummary {
    pub vms: usize,
    pub fw_rules: usize,
    pub tagged_vms: usize,
    pub self_referencing_rules: usize,
}

impl FixtureDocument {
    pub fn summary(&self) -> FixtureSummary {
        FixtureSummary {
            vms: self.vms.len(),
            fw_rules: self.fw_rules.len(),
            tagged_vms: self.vms.iter().filter(|vm| !vm.tags.is_empty()).count(),
            self_referencing_rules: self
                .fw_rules
                .iter()
                .filter(|rule| rule.is_self_referencing())
                .count(),
        }
    }
}
