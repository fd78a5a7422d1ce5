//! Property-based tests for fixture document invariants
//!
//! These tests generate documents across a range of counts, seeds and tag
//! catalogs and verify the construction rules hold for every one of them.

mod fixture_invariants;
