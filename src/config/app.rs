//! Application configuration loading and merging.
//!
//! Combines CLI arguments, the TOML project file, the dotfile and the process
//! environment into the [`ConfigurationRecord`] handed to the toolchain.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::cli::{Cli, CompilerOptions, GasReportOptions, PathOptions};

use super::env::EnvSnapshot;
use super::overlay::Overlay;
use super::project::ProjectSettings;
use super::record::ConfigurationRecord;
use super::resolver::resolve_with;

const CONFIG_FILE_NAME: &str = "toolchain.toml";
const LOCAL_CONFIG_FILES: [&str; 2] = ["toolchain.toml", "config/toolchain.toml"];
const DEFAULT_ENV_FILE: &str = ".env";
const PROJECT_QUALIFIER: &str = "dev";
const PROJECT_ORGANIZATION: &str = "toolchain";
const PROJECT_APPLICATION: &str = "toolchain-config";

/// Fully materialized configuration for the application.
#[derive(Debug)]
pub struct AppConfig {
    /// Path to the loaded project file, if any.
    pub config_file: Option<PathBuf>,
    /// Path to the loaded dotfile, if any.
    pub env_file: Option<PathBuf>,
    /// Environment the record was resolved from (dotfile under process).
    pub env: EnvSnapshot,
    /// The resolved record.
    pub record: ConfigurationRecord,
}

impl AppConfig {
    /// Loads and merges configuration from all sources using the current
    /// process environment.
    pub fn load(cli: Cli) -> Result<Self> {
        Self::load_with_env(cli, EnvSnapshot::capture())
    }

    /// Same as [`AppConfig::load`] with an explicit process environment.
    ///
    /// Priority for static settings (highest to lowest):
    /// 1. CLI arguments
    /// 2. TOML project file
    /// 3. Built-in defaults
    ///
    /// Priority for environment keys: process environment, then dotfile.
    pub fn load_with_env(cli: Cli, process_env: EnvSnapshot) -> Result<Self> {
        let Cli {
            config,
            env_file,
            no_dotenv,
            compiler: cli_compiler,
            paths: cli_paths,
            gas: cli_gas,
            ..
        } = cli;

        let (file_config, config_path) = load_file_config(config.as_ref())?;
        let FileConfig {
            compiler: file_compiler,
            paths: file_paths,
            gas_reporting: file_gas,
        } = file_config;

        let project = ProjectSettings::build(
            file_compiler.unwrap_or_default().overlay(cli_compiler),
            file_paths.unwrap_or_default().overlay(cli_paths),
            file_gas.unwrap_or_default().overlay(cli_gas),
        )
        .with_context(|| match &config_path {
            Some(path) => format!("invalid project settings in {}", path.display()),
            None => "invalid project settings".to_string(),
        })?;

        let (env, env_path) = load_env(env_file.as_ref(), no_dotenv, process_env)?;
        tracing::debug!(
            variables = env.len(),
            env_file = ?env_path,
            config_file = ?config_path,
            "resolving configuration"
        );

        let record = resolve_with(&env, &project);

        Ok(Self {
            config_file: config_path,
            env_file: env_path,
            env,
            record,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    compiler: Option<CompilerOptions>,
    #[serde(default)]
    paths: Option<PathOptions>,
    #[serde(default)]
    gas_reporting: Option<GasReportOptions>,
}

fn load_file_config(path: Option<&PathBuf>) -> Result<(FileConfig, Option<PathBuf>)> {
    if let Some(provided) = path {
        let config = read_toml(provided)?;
        return Ok((config, Some(provided.clone())));
    }

    if let Some(default_path) = default_config_file_path().filter(|path| path.exists()) {
        let config = read_toml(&default_path)?;
        return Ok((config, Some(default_path)));
    }

    for candidate in LOCAL_CONFIG_FILES {
        let candidate_path = Path::new(candidate);
        if candidate_path.exists() {
            let config = read_toml(candidate_path)?;
            return Ok((config, Some(candidate_path.to_path_buf())));
        }
    }

    Ok((FileConfig::default(), None))
}

fn read_toml(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

/// Builds the snapshot the resolver sees. Dotfile values never override
/// variables already present in the process.
fn load_env(
    path: Option<&PathBuf>,
    no_dotenv: bool,
    process_env: EnvSnapshot,
) -> Result<(EnvSnapshot, Option<PathBuf>)> {
    if no_dotenv {
        return Ok((process_env, None));
    }

    merge_dotfile(path, Path::new(DEFAULT_ENV_FILE), process_env)
}

/// An explicit dotfile must parse. A discovered one that does not is
/// skipped with a warning.
fn merge_dotfile(
    explicit: Option<&PathBuf>,
    discovered: &Path,
    process_env: EnvSnapshot,
) -> Result<(EnvSnapshot, Option<PathBuf>)> {
    if let Some(provided) = explicit {
        let file_env = EnvSnapshot::from_dotenv_file(provided)?;
        return Ok((file_env.overlay(process_env), Some(provided.clone())));
    }

    if !discovered.exists() {
        return Ok((process_env, None));
    }

    match EnvSnapshot::from_dotenv_file(discovered) {
        Ok(file_env) => Ok((file_env.overlay(process_env), Some(discovered.to_path_buf()))),
        Err(err) => {
            tracing::warn!("ignoring {}: {err:#}", discovered.display());
            Ok((process_env, None))
        }
    }
}

fn default_project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORGANIZATION, PROJECT_APPLICATION)
}

fn default_config_file_path() -> Option<PathBuf> {
    default_project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
