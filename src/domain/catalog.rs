//! Tag catalog shared by VM and firewall-rule generation

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use std::collections::HashSet;

use crate::domain::types::Tag;
use crate::domain::validation_constants::vm_tags::TAGS_MAX_COUNT;
use crate::error::{Error, Result};

/// Tags known to the VM/firewall management service, in catalog order.
pub const DEFAULT_TAGS: &[&str] = &[
    "antivirus",
    "api",
    "ci",
    "corp",
    "dev",
    "django",
    "http",
    "https",
    "k8s",
    "loadbalancer",
    "nat",
    "reverse_proxy",
    "ssh",
    "storage",
    "windows-dc",
];

/// Ordered, immutable set of distinct tags that records draw from.
///
/// A catalog always holds at least `TAGS_MAX_COUNT` tags, so sampling a VM's
/// tag subset without replacement can never run out of candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCatalog {
    tags: Vec<Tag>,
}

impl TagCatalog {
    pub fn new<I, S>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut validated = Vec::new();
        for raw in tags {
            let raw: String = raw.into();
            let tag = Tag::try_new(raw.clone()).map_err(|e| Error::InvalidTag {
                tag: raw.clone(),
                reason: e.to_string(),
            })?;
            if !seen.insert(tag.clone()) {
                return Err(Error::DuplicateTag(raw));
            }
            validated.push(tag);
        }

        if validated.len() < TAGS_MAX_COUNT {
            return Err(Error::CatalogTooSmall {
                required: TAGS_MAX_COUNT,
                actual: validated.len(),
            });
        }

        Ok(Self { tags: validated })
    }

    /// The built-in catalog of `DEFAULT_TAGS`
    pub fn builtin() -> Result<Self> {
        Self::new(DEFAULT_TAGS.iter().copied())
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Pick one tag uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Tag {
        &self.tags[rng.random_range(0..self.tags.len())]
    }

    /// Sample `amount` distinct tags in random order. `amount` is clamped to
    /// the catalog size.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, amount: usize) -> Vec<Tag> {
        let mut sampled: Vec<Tag> = self.tags.choose_multiple(rng, amount).cloned().collect();
        sampled.shuffle(rng);
        sampled
    }
}
