//! # toolchain-config
//!
//! Resolves the configuration consumed by a smart-contract build, test and
//! deploy toolchain: compiler settings, network endpoints and signing keys,
//! the verification API key, project directory conventions and the gas
//! report toggle.
//!
//! ```
//! use toolchain_config::config::{resolve, EnvSnapshot, SEPOLIA_NETWORK};
//!
//! let env = EnvSnapshot::from_pairs([
//!     ("SEPOLIA_RPC_URL", "https://x"),
//!     ("PRIVATE_KEY", "0xabc"),
//! ]);
//! let record = resolve(&env);
//!
//! let sepolia = &record.networks()[SEPOLIA_NETWORK];
//! assert_eq!(sepolia.rpc_url(), "https://x");
//! assert_eq!(sepolia.signing_keys(), ["0xabc".to_string()]);
//! ```

pub mod cli;
pub mod config;
