//! # toolchain-config
//!
//! Resolves the configuration handed to the contract compiler, test runner,
//! deployment client, verification service and gas reporter, and prints it.
//!
//! ## Usage
//!
//! ```bash
//! # Print the resolved record (secrets masked)
//! toolchain-config
//!
//! # Same, as TOML, reading a specific dotfile
//! toolchain-config --env-file deploy.env show --format toml
//!
//! # Fail unless sepolia has an endpoint and a well-formed signer
//! toolchain-config check sepolia
//!
//! # Same, and also require a verification service API key
//! toolchain-config check sepolia --verify
//! ```

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use toolchain_config::cli::{Cli, Command, OutputFormat, ShowArgs};
use toolchain_config::config::{
    mask_secret, AppConfig, ConfigurationRecord, EnvSnapshot, RECOGNIZED_KEYS,
};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let command = cli
        .command
        .clone()
        .unwrap_or_else(|| Command::Show(ShowArgs::default()));
    let app_config = AppConfig::load(cli)?;
    announce_configuration(&app_config);

    match command {
        Command::Show(args) => handle_show(&app_config, &args),
        Command::Check { network, verify } => handle_check(&app_config, &network, verify),
        Command::Env => handle_env(&app_config),
    }
}

fn handle_show(app_config: &AppConfig, args: &ShowArgs) -> Result<()> {
    let rendered = render_record(&app_config.record, args.format, args.reveal_secrets)?;
    println!("{rendered}");
    Ok(())
}

fn handle_check(app_config: &AppConfig, network: &str, verify: bool) -> Result<()> {
    check_readiness(&app_config.record, network, verify)?;
    println!("Network `{network}` is ready.");
    Ok(())
}

fn check_readiness(record: &ConfigurationRecord, network: &str, verify: bool) -> Result<()> {
    record
        .check_network(network)
        .with_context(|| format!("network `{network}` is not ready"))?;
    if verify {
        record
            .verification()
            .require_api_key()
            .context("contract verification is not ready")?;
    }
    Ok(())
}

fn handle_env(app_config: &AppConfig) -> Result<()> {
    print!("{}", render_env_listing(&app_config.env));
    Ok(())
}

fn announce_configuration(app_config: &AppConfig) {
    match &app_config.config_file {
        Some(config_file) => tracing::info!("Config file: {}", config_file.display()),
        None => tracing::info!("Config file: none (using defaults)"),
    }
    match &app_config.env_file {
        Some(env_file) => tracing::info!("Env file: {}", env_file.display()),
        None => tracing::info!("Env file: none (process environment only)"),
    }
}

fn render_record(
    record: &ConfigurationRecord,
    format: OutputFormat,
    reveal_secrets: bool,
) -> Result<String> {
    let redacted;
    let record = if reveal_secrets {
        record
    } else {
        redacted = record.redacted();
        &redacted
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(record).context("failed to render record as JSON")
        }
        OutputFormat::Toml => {
            toml::to_string_pretty(record).context("failed to render record as TOML")
        }
    }
}

fn render_env_listing(env: &EnvSnapshot) -> String {
    let mut out = String::new();
    for key in RECOGNIZED_KEYS {
        let status = match env.get(key.name) {
            None => "unset".to_string(),
            Some("") => "empty".to_string(),
            Some(value) if key.secret => format!("set ({})", mask_secret(value)),
            Some(value) => format!("set ({value})"),
        };
        let _ = writeln!(out, "{:<18} {:<40} {}", key.name, status, key.description);
    }
    out
}

fn init_tracing(log_path: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let init_result = if let Some(path) = log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let _ = LOG_GUARD.set(guard);
        builder.with_writer(writer).try_init()
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };

    if init_result.is_err() {
        // The global subscriber was already installed elsewhere (tests, etc.); ignore.
    }

    Ok(())
}
