//! Command-line interface definitions and argument parsing.
//!
//! This module provides the CLI structure for toolchain-config using [`clap`],
//! including overrides for the static compiler, layout and gas report settings.

mod args;
mod compiler;
mod gas;
mod paths;

pub use args::{Cli, Command, OutputFormat, ShowArgs};
pub use compiler::{
    CompilerOptions, DEFAULT_COMPILER_VERSION, DEFAULT_OPTIMIZER_ENABLED, DEFAULT_OPTIMIZER_RUNS,
};
pub use gas::{GasReportOptions, DEFAULT_GAS_CURRENCY};
pub use paths::{
    PathOptions, DEFAULT_ARTIFACTS_DIR, DEFAULT_CACHE_DIR, DEFAULT_SOURCES_DIR, DEFAULT_TESTS_DIR,
};
