//! Compiler CLI options.
//!
//! Overrides for the Solidity compiler version and optimizer settings. Every
//! field is optional; unset fields fall back to the project file and then to
//! the built-in defaults.

use clap::{builder::BoolishValueParser, Args};
use serde::Deserialize;

macro_rules! define_str_default_with_help {
    ($value_ident:ident, $help_ident:ident, $value:literal, $help_prefix:literal) => {
        pub const $value_ident: &str = $value;
        pub const $help_ident: &str = concat!($help_prefix, $value, "]");
    };
}

macro_rules! define_scalar_default_with_help {
    ($value_ident:ident, $help_ident:ident, $ty:ty, $value:literal, $help_prefix:literal) => {
        pub const $value_ident: $ty = $value;
        pub const $help_ident: &str = concat!($help_prefix, stringify!($value), "]");
    };
}

define_str_default_with_help!(
    DEFAULT_COMPILER_VERSION,
    HELP_COMPILER_VERSION,
    "0.8.19",
    "Optional. Solidity compiler version used to build the contracts. [default: "
);
define_scalar_default_with_help!(
    DEFAULT_OPTIMIZER_ENABLED,
    HELP_OPTIMIZER_ENABLED,
    bool,
    true,
    "Optional. Enable or disable the compiler optimizer. [default: "
);
define_scalar_default_with_help!(
    DEFAULT_OPTIMIZER_RUNS,
    HELP_OPTIMIZER_RUNS,
    u32,
    200,
    "Optional. Expected executions per opcode; trades deployment size against call cost. [default: "
);

#[derive(Args, Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[command(next_help_heading = "Compiler parameters")]
#[serde(default)]
pub struct CompilerOptions {
    #[arg(
        long = "compiler_version",
        alias = "compiler-version",
        id = "compiler_version",
        global = true,
        value_name = "VERSION",
        help = HELP_COMPILER_VERSION
    )]
    pub version: Option<String>,

    #[arg(
        long = "optimizer_enabled",
        alias = "optimizer-enabled",
        global = true,
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        help = HELP_OPTIMIZER_ENABLED
    )]
    pub optimizer_enabled: Option<bool>,

    #[arg(
        long = "optimizer_runs",
        alias = "optimizer-runs",
        global = true,
        value_name = "RUNS",
        help = HELP_OPTIMIZER_RUNS
    )]
    pub optimizer_runs: Option<u32>,
}
