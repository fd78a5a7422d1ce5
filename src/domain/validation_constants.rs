//! Validation constants for fixture domain types
//!
//! This module centralizes the limits and magic values that shape generated
//! fixtures so the generator, the domain types and the tests agree on them.

/// Tag validation constants
pub mod tag {
    /// Maximum tag length
    pub const MAX_LENGTH: usize = 100;

    /// Regex pattern for valid tags
    pub const VALIDATION_PATTERN: &str = r"^[a-zA-Z0-9][a-zA-Z0-9:._-]*$";
}

/// Tags attached to a single VM record
pub mod vm_tags {
    /// Smallest number of tags sampled for a VM
    pub const TAGS_MIN_COUNT: usize = 0;

    /// Largest number of tags sampled for a VM. A catalog must hold at least
    /// this many distinct tags.
    pub const TAGS_MAX_COUNT: usize = 4;
}

/// Random identifier shape
pub mod identifier {
    /// Fewest random bytes drawn for an identifier
    pub const MIN_BYTES: usize = 3;

    /// Most random bytes drawn for an identifier
    pub const MAX_BYTES: usize = 5;

    /// Shortest rendered identifier (two hex digits per byte)
    pub const MIN_HEX_LENGTH: usize = MIN_BYTES * 2;

    /// Longest rendered identifier
    pub const MAX_HEX_LENGTH: usize = MAX_BYTES * 2;
}

/// Prefixes used when rendering record fields
pub mod prefixes {
    pub const VM_ID: &str = "vm-";
    pub const FW_ID: &str = "fw-";
    pub const VM_NAME: &str = "vm name for ";
}

/// Test run size constants
pub mod test_runs {
    /// Default number of property test cases
    pub const DEFAULT_PROPTEST_CASES: u32 = 64;

    /// Upper bound on record counts exercised by property tests
    pub const MAX_PROPTEST_RECORDS: usize = 200;
}
