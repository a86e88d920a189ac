//! Configuration resolution for the contract toolchain.
//!
//! Handles loading and merging configuration from multiple sources:
//! - Command-line arguments (highest priority, static settings only)
//! - Process environment, then dotfile (secrets, endpoints, flags)
//! - TOML project file
//! - Default values (lowest priority)
//!
//! [`resolve`] is the pure core: it maps an [`EnvSnapshot`] to a
//! [`ConfigurationRecord`] and cannot fail.

mod app;
mod env;
mod overlay;
mod project;
mod record;
mod resolver;
mod validate;

pub use app::AppConfig;
pub use env::{
    EnvSnapshot, RecognizedKey, ETHERSCAN_API_KEY, FORK_MAINNET, MAINNET_RPC_URL, PRIVATE_KEY,
    RECOGNIZED_KEYS, REPORT_GAS, SEPOLIA_RPC_URL,
};
pub use overlay::Overlay;
pub use project::ProjectSettings;
pub use record::{
    mask_secret, CompilerSettings, ConfigurationRecord, ForkingConfig, GasReporting,
    NetworkConfig, ProjectPaths, VerificationSettings, LOCAL_NETWORK, SEPOLIA_NETWORK,
};
pub use resolver::{resolve, resolve_with};
pub use validate::{is_well_formed_signing_key, ConfigError};
