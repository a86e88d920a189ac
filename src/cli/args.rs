use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::{CompilerOptions, GasReportOptions, PathOptions};

/// Command-line interface definition.
#[derive(Parser, Debug)]
#[command(
    name = "toolchain-config",
    author,
    version,
    about = "Resolves the configuration handed to the contract build, test and deploy toolchain"
)]
pub struct Cli {
    /// Path to the optional TOML project file.
    #[arg(
        long = "config",
        alias = "config-file",
        env = "TOOLCHAIN_CONFIG",
        global = true,
        value_name = "FILE",
        help = "Optional. Path to the TOML project file; defaults to the platform-specific user config directory (ProjectDirs), then ./toolchain.toml."
    )]
    pub config: Option<PathBuf>,

    /// Dotfile merged underneath the process environment.
    #[arg(
        long = "env_file",
        alias = "env-file",
        env = "TOOLCHAIN_ENV_FILE",
        global = true,
        value_name = "FILE",
        help = "Optional. Dotfile providing environment values; process variables take precedence. [default: .env when present]"
    )]
    pub env_file: Option<PathBuf>,

    /// Skip dotfile loading entirely; wins over `--env-file`.
    #[arg(
        long = "no_dotenv",
        alias = "no-dotenv",
        global = true,
        help = "Ignore dotfiles (including --env-file) and resolve from the process environment only."
    )]
    pub no_dotenv: bool,

    /// Append logs to a file instead of stderr.
    #[arg(
        long = "log_file",
        alias = "log-file",
        global = true,
        value_name = "FILE"
    )]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub compiler: CompilerOptions,

    #[command(flatten)]
    pub paths: PathOptions,

    #[command(flatten)]
    pub gas: GasReportOptions,

    /// Optional subcommand; `show` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// High-level commands supported by the CLI.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the resolved configuration record (default).
    Show(ShowArgs),
    /// Verify that a network has everything needed to connect and sign.
    Check {
        /// Network name as it appears in the record (e.g. `sepolia`).
        #[arg(value_name = "NETWORK")]
        network: String,

        /// Also require an API key for the contract verification service.
        #[arg(long = "verify")]
        verify: bool,
    },
    /// List the recognized environment keys and whether each one is set.
    Env,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowArgs {
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Print signing keys and API keys unmasked.
    #[arg(long = "reveal_secrets", alias = "reveal-secrets")]
    pub reveal_secrets: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}
