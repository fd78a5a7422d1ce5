use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Single-dash long flags kept working for existing invocations
/// (`-vmc 10 -fwc 5`).
const LEGACY_FLAGS: &[&str] = &["-vmc", "-fwc"];

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "vmfw-fixtures",
    version,
    about = "Generate VM and firewall-rule fixtures as JSON"
)]
pub struct Cli {
    #[arg(
        long = "vmc",
        visible_alias = "vm-count",
        value_name = "COUNT",
        allow_negative_numbers = true,
        help = "Number of vm records generated"
    )]
    pub vm_count: i64,

    #[arg(
        long = "fwc",
        visible_alias = "fw-count",
        value_name = "COUNT",
        allow_negative_numbers = true,
        help = "Number of fw rules generated"
    )]
    pub fw_count: i64,

    #[arg(long, help = "Seed for reproducible output")]
    pub seed: Option<u64>,

    #[arg(long, help = "Write single-line JSON instead of indented JSON")]
    pub compact: bool,

    #[arg(help = "Output file (defaults to stdout)")]
    pub outfile: Option<PathBuf>,
}

impl Cli {
    /// Parse process arguments, accepting the legacy single-dash flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }
}

/// Rewrite `-vmc`/`-fwc` (and their `=value` forms) to the double-dash
/// spelling clap expects. Everything else passes through untouched.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let is_legacy = arg.to_str().is_some_and(|s| {
                LEGACY_FLAGS.iter().any(|flag| {
                    s == *flag || s.strip_prefix(flag).is_some_and(|rest| rest.starts_with('='))
                })
            });
            if is_legacy {
                let mut rewritten = OsString::from("-");
                rewritten.push(&arg);
                rewritten
            } else {
                arg
            }
        })
        .collect()
}
