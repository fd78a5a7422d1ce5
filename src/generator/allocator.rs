//! Identifier allocation within a uniqueness namespace

use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use tracing::trace;

use crate::domain::types::Identifier;
use crate::domain::validation_constants::identifier::{MAX_BYTES, MIN_BYTES};
use crate::log_messages;

/// Scope within which identifiers must be unique. VM and firewall-rule
/// identifiers may collide with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Vm,
    FirewallRule,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vm => f.write_str("vm"),
            Self::FirewallRule => f.write_str("fw_rule"),
        }
    }
}

/// Draw a candidate from `MIN_BYTES..=MAX_BYTES` random bytes.
fn draw_candidate<R: Rng + ?Sized>(rng: &mut R) -> Identifier {
    let len = rng.random_range(MIN_BYTES..=MAX_BYTES);
    let mut bytes = [0u8; MAX_BYTES];
    rng.fill(&mut bytes[..len]);
    Identifier::from_bytes(&bytes[..len])
}

/// Allocate an identifier absent from `existing` and record it there.
///
/// Collisions are retried until a fresh identifier is drawn. With at least
/// 2^24 candidates per length the retry count stays tiny for any realistic
/// fixture size, so no attempt limit is imposed.
pub fn allocate<R: Rng + ?Sized>(existing: &mut HashSet<Identifier>, rng: &mut R) -> Identifier {
    loop {
        let candidate = draw_candidate(rng);
        if existing.insert(candidate.clone()) {
            return candidate;
        }
        trace!(candidate = %candidate, "{}", log_messages::generation::ID_COLLISION);
    }
}

/// Owns the uniqueness set of one namespace for the length of a run.
#[derive(Debug)]
pub struct IdentifierAllocator {
    namespace: Namespace,
    allocated: HashSet<Identifier>,
}

impl IdentifierAllocator {
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            allocated: HashSet::new(),
        }
    }

    pub fn with_capacity(namespace: Namespace, capacity: usize) -> Self {
        Self {
            namespace,
            allocated: HashSet::with_capacity(capacity),
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn allocate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Identifier {
        let id = allocate(&mut self.allocated, rng);
        trace!(namespace = %self.namespace, id = %id, "{}", log_messages::generation::ID_ALLOCATED);
        id
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.allocated.contains(id)
    }

    pub fn len(&self) -> usize {
        self.allocated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocated.is_empty()
    }
}
