//! Commands module - CLI command implementations.

mod fix;

pub use fix::{print_summary, run_fix, FixOptions, FixSummary};
