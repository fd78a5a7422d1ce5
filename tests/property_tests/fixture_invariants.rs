use proptest::prelude::*;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use vmfw_fixtures::domain::validation_constants::{test_runs, vm_tags};
use vmfw_fixtures::domain::{FixtureDocument, RecordCount, TagCatalog, DEFAULT_TAGS};
use vmfw_fixtures::generator::{self, FixtureGenerator};

static RECORD_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(vm|fw)-[0-9a-f]{6,10}$").unwrap());

// Property test generators
pub mod generators {
    use super::*;
    use proptest::collection::hash_set;
    use proptest::string::string_regex;

    /// Generate record counts small enough to keep runs fast
    pub fn record_count() -> impl Strategy<Value = usize> {
        0..=test_runs::MAX_PROPTEST_RECORDS
    }

    /// Generate catalogs of distinct valid tags, at least as large as the
    /// per-VM tag limit
    pub fn catalog() -> impl Strategy<Value = TagCatalog> {
        hash_set(
            string_regex(r"[a-z][a-z0-9_-]{0,11}").unwrap(),
            vm_tags::TAGS_MAX_COUNT..24,
        )
        .prop_map(|tags| TagCatalog::new(tags).unwrap())
    }
}

// Document invariants to verify
pub struct FixtureInvariants;

impl FixtureInvariants {
    /// Invariant: every record id has the expected prefix and hex body
    pub fn ids_well_formed(doc: &FixtureDocument) -> bool {
        doc.vms
            .iter()
            .map(|vm| vm.vm_id.to_string())
            .chain(doc.fw_rules.iter().map(|rule| rule.fw_id.to_string()))
            .all(|id| RECORD_ID.is_match(&id))
    }

    /// Invariant: ids are unique within their own namespace
    pub fn ids_unique_per_namespace(doc: &FixtureDocument) -> bool {
        let vm_ids: HashSet<_> = doc.vms.iter().map(|vm| &vm.vm_id).collect();
        let fw_ids: HashSet<_> = doc.fw_rules.iter().map(|rule| &rule.fw_id).collect();
        vm_ids.len() == doc.vms.len() && fw_ids.len() == doc.fw_rules.len()
    }

    /// Invariant: VM tags are distinct catalog members within the size bounds
    pub fn vm_tags_valid(doc: &FixtureDocument, catalog: &TagCatalog) -> bool {
        doc.vms.iter().all(|vm| {
            let unique: HashSet<_> = vm.tags.iter().collect();
            (vm_tags::TAGS_MIN_COUNT..=vm_tags::TAGS_MAX_COUNT).contains(&vm.tags.len())
                && unique.len() == vm.tags.len()
                && vm.tags.iter().all(|t| catalog.contains(t))
        })
    }

    /// Invariant: both ends of every rule are catalog members
    pub fn rule_tags_valid(doc: &FixtureDocument, catalog: &TagCatalog) -> bool {
        doc.fw_rules
            .iter()
            .all(|rule| catalog.contains(&rule.source_tag) && catalog.contains(&rule.dest_tag))
    }

    /// Invariant: VM names embed the VM identifier
    pub fn names_match_ids(doc: &FixtureDocument) -> bool {
        doc.vms
            .iter()
            .all(|vm| vm.name.to_string() == format!("vm name for {}", vm.vm_id.identifier()))
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(test_runs::DEFAULT_PROPTEST_CASES))]

        #[test]
        fn prop_section_lengths_match_counts(
            vms in generators::record_count(),
            rules in generators::record_count(),
            seed in any::<u64>(),
        ) {
            let catalog = TagCatalog::builtin().unwrap();
            let doc = FixtureGenerator::seeded(catalog, seed)
                .build(RecordCount::new(vms), RecordCount::new(rules));
            prop_assert_eq!(doc.vms.len(), vms);
            prop_assert_eq!(doc.fw_rules.len(), rules);
        }

        #[test]
        fn prop_ids_well_formed_and_unique(
            vms in generators::record_count(),
            rules in generators::record_count(),
            seed in any::<u64>(),
        ) {
            let catalog = TagCatalog::builtin().unwrap();
            let doc = FixtureGenerator::seeded(catalog, seed)
                .build(RecordCount::new(vms), RecordCount::new(rules));
            prop_assert!(FixtureInvariants::ids_well_formed(&doc));
            prop_assert!(FixtureInvariants::ids_unique_per_namespace(&doc));
            prop_assert!(FixtureInvariants::names_match_ids(&doc));
        }

        #[test]
        fn prop_tags_drawn_from_any_catalog(
            catalog in generators::catalog(),
            vms in generators::record_count(),
            rules in generators::record_count(),
            seed in any::<u64>(),
        ) {
            let doc = FixtureGenerator::seeded(catalog.clone(), seed)
                .build(RecordCount::new(vms), RecordCount::new(rules));
            prop_assert!(FixtureInvariants::vm_tags_valid(&doc, &catalog));
            prop_assert!(FixtureInvariants::rule_tags_valid(&doc, &catalog));
        }

        #[test]
        fn prop_seed_determines_document(
            vms in 0usize..50,
            rules in 0usize..50,
            seed in any::<u64>(),
        ) {
            let catalog = TagCatalog::builtin().unwrap();
            let first = FixtureGenerator::seeded(catalog.clone(), seed)
                .build(RecordCount::new(vms), RecordCount::new(rules));
            let second = FixtureGenerator::seeded(catalog, seed)
                .build(RecordCount::new(vms), RecordCount::new(rules));
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_negative_counts_never_produce_a_document(
            negative in i64::MIN..0,
            other in 0i64..10,
        ) {
            let catalog = TagCatalog::builtin().unwrap();
            let mut generator = FixtureGenerator::seeded(catalog, 0);
            prop_assert!(generator.generate(negative, other).is_err());
            prop_assert!(generator.generate(other, negative).is_err());
        }
    }

    #[test]
    fn self_referencing_rules_appear_across_many_trials() {
        let catalog = TagCatalog::builtin().unwrap();
        let mut rng = rand::rng();
        let self_refs = (0..20)
            .map(|_| generator::build(RecordCount::none(), RecordCount::new(100), &catalog, &mut rng))
            .map(|doc| doc.summary().self_referencing_rules)
            .sum::<usize>();
        // Expected around 2000 / 15; zero would mean equal tags are excluded.
        assert!(self_refs > 0);
    }

    #[test]
    fn two_unseeded_runs_are_structurally_valid_and_differ() {
        let catalog = TagCatalog::builtin().unwrap();
        let first = FixtureGenerator::from_entropy(catalog.clone())
            .generate(2, 1)
            .unwrap();
        let second = FixtureGenerator::from_entropy(catalog.clone())
            .generate(2, 1)
            .unwrap();
        for doc in [&first, &second] {
            assert_eq!(doc.vms.len(), 2);
            assert_eq!(doc.fw_rules.len(), 1);
            assert!(FixtureInvariants::ids_well_formed(doc));
            assert!(FixtureInvariants::ids_unique_per_namespace(doc));
            assert!(FixtureInvariants::vm_tags_valid(doc, &catalog));
        }
        let first_ids: HashSet<_> = first.vms.iter().map(|vm| vm.vm_id.clone()).collect();
        let second_ids: HashSet<_> = second.vms.iter().map(|vm| vm.vm_id.clone()).collect();
        assert_ne!(first_ids, second_ids);
    }

    #[test]
    fn builtin_catalog_matches_default_tags() {
        let catalog = TagCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), DEFAULT_TAGS.len());
    }
}
