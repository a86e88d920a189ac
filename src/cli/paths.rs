//! Project layout CLI options.
//!
//! Directory conventions consumed by the compiler, the test runner and the
//! artifact writer. Paths stay relative; they are resolved by the consumer
//! against its own working directory.

use clap::Args;
use serde::Deserialize;

macro_rules! define_path_default_with_help {
    ($value_ident:ident, $help_ident:ident, $value:literal, $help_prefix:literal) => {
        pub const $value_ident: &str = $value;
        pub const $help_ident: &str = concat!($help_prefix, $value, "]");
    };
}

define_path_default_with_help!(
    DEFAULT_SOURCES_DIR,
    HELP_SOURCES_DIR,
    "./contracts",
    "Optional. Directory holding the contract sources. [default: "
);
define_path_default_with_help!(
    DEFAULT_TESTS_DIR,
    HELP_TESTS_DIR,
    "./contracts/test",
    "Optional. Directory holding the contract tests. [default: "
);
define_path_default_with_help!(
    DEFAULT_CACHE_DIR,
    HELP_CACHE_DIR,
    "./cache",
    "Optional. Directory used for the compilation cache. [default: "
);
define_path_default_with_help!(
    DEFAULT_ARTIFACTS_DIR,
    HELP_ARTIFACTS_DIR,
    "./artifacts",
    "Optional. Directory receiving build artifacts. [default: "
);

#[derive(Args, Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[command(next_help_heading = "Project layout")]
#[serde(default)]
pub struct PathOptions {
    #[arg(
        long = "sources_dir",
        alias = "sources-dir",
        global = true,
        value_name = "DIR",
        help = HELP_SOURCES_DIR
    )]
    pub sources: Option<String>,

    #[arg(
        long = "tests_dir",
        alias = "tests-dir",
        global = true,
        value_name = "DIR",
        help = HELP_TESTS_DIR
    )]
    pub tests: Option<String>,

    #[arg(
        long = "cache_dir",
        alias = "cache-dir",
        global = true,
        value_name = "DIR",
        help = HELP_CACHE_DIR
    )]
    pub cache: Option<String>,

    #[arg(
        long = "artifacts_dir",
        alias = "artifacts-dir",
        global = true,
        value_name = "DIR",
        help = HELP_ARTIFACTS_DIR
    )]
    pub artifacts: Option<String>,
}
