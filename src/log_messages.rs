//! Log message constants
//!
//! This module centralizes the log messages emitted by the generator and the
//! binary. Variable parts are attached as structured tracing fields rather
//! than interpolated into the text.

/// Binary lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting fixture generation";
    pub const FINISHED: &str = "Fixture document written";
}

/// Generation messages
pub mod generation {
    pub const ID_ALLOCATED: &str = "Allocated identifier";
    pub const ID_COLLISION: &str = "Identifier collision, drawing again";
    pub const DOCUMENT_BUILT: &str = "Fixture document built";
    pub const SEEDED_RNG: &str = "Using seeded random source";
}

/// Configuration messages
pub mod configuration {
    pub const CONFIG_LOADED: &str = "Configuration loaded successfully";
}

/// Output messages
pub mod output {
    pub const WRITING_STDOUT: &str = "Writing fixture document to stdout";
    pub const WRITING_FILE: &str = "Writing fixture document to file";
}
