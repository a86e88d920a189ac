//! Environment-to-record resolution.
//!
//! Every rule is a total lookup against the snapshot: absent or empty values
//! fall back to an empty string, an empty key list or `false`. Nothing here
//! validates URLs or keys; that happens where the values are used.

use std::collections::BTreeMap;

use super::env::{
    EnvSnapshot, ETHERSCAN_API_KEY, FORK_MAINNET, MAINNET_RPC_URL, PRIVATE_KEY, REPORT_GAS,
    SEPOLIA_RPC_URL,
};
use super::project::ProjectSettings;
use super::record::{
    ConfigurationRecord, ForkingConfig, GasReporting, NetworkConfig, VerificationSettings,
    LOCAL_NETWORK, SEPOLIA_NETWORK,
};

/// Resolves a record using the built-in static settings.
pub fn resolve(env: &EnvSnapshot) -> ConfigurationRecord {
    resolve_with(env, &ProjectSettings::default())
}

/// Resolves a record, taking the static fields from `project`.
pub fn resolve_with(env: &EnvSnapshot, project: &ProjectSettings) -> ConfigurationRecord {
    let mut networks = BTreeMap::new();
    networks.insert(SEPOLIA_NETWORK.to_string(), sepolia_network(env));
    networks.insert(LOCAL_NETWORK.to_string(), local_network(env));

    ConfigurationRecord {
        compiler: project.compiler.clone(),
        networks,
        verification: VerificationSettings {
            api_key: env.string_or(ETHERSCAN_API_KEY, ""),
        },
        paths: project.paths.clone(),
        gas_reporting: GasReporting {
            enabled: env.flag(REPORT_GAS),
            currency: project.gas_currency.clone(),
        },
    }
}

fn sepolia_network(env: &EnvSnapshot) -> NetworkConfig {
    NetworkConfig {
        rpc_url: env.string_or(SEPOLIA_RPC_URL, ""),
        signing_keys: signing_keys(env),
        forking: None,
    }
}

fn local_network(env: &EnvSnapshot) -> NetworkConfig {
    NetworkConfig {
        rpc_url: String::new(),
        signing_keys: Vec::new(),
        forking: Some(ForkingConfig {
            enabled: env.flag(FORK_MAINNET),
            rpc_url: env.string_or(MAINNET_RPC_URL, ""),
        }),
    }
}

fn signing_keys(env: &EnvSnapshot) -> Vec<String> {
    env.optional(PRIVATE_KEY)
        .map(|key| vec![key.to_string()])
        .unwrap_or_default()
}
