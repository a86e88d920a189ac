//! The resolved configuration record.
//!
//! Built once by the resolver and handed to the compiler, test runner,
//! deployment client, verification service, artifact writer and gas reporter.
//! Fields are only readable from outside the crate.

use std::collections::BTreeMap;

use serde::Serialize;

/// Live network targeted by deployments.
pub const SEPOLIA_NETWORK: &str = "sepolia";
/// In-process development network, optionally forked from mainnet.
pub const LOCAL_NETWORK: &str = "hardhat";

const MASK: &str = "***";
const MASK_VISIBLE_SUFFIX: usize = 4;
const MASK_MIN_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRecord {
    pub(crate) compiler: CompilerSettings,
    pub(crate) networks: BTreeMap<String, NetworkConfig>,
    pub(crate) verification: VerificationSettings,
    pub(crate) paths: ProjectPaths,
    pub(crate) gas_reporting: GasReporting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerSettings {
    pub(crate) version: String,
    pub(crate) optimizer_enabled: bool,
    pub(crate) optimizer_runs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub(crate) rpc_url: String,
    pub(crate) signing_keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) forking: Option<ForkingConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkingConfig {
    pub(crate) enabled: bool,
    pub(crate) rpc_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationSettings {
    pub(crate) api_key: String,
}

/// Relative directory conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPaths {
    pub(crate) sources: String,
    pub(crate) tests: String,
    pub(crate) cache: String,
    pub(crate) artifacts: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GasReporting {
    pub(crate) enabled: bool,
    pub(crate) currency: String,
}

impl ConfigurationRecord {
    pub fn compiler(&self) -> &CompilerSettings {
        &self.compiler
    }

    pub fn networks(&self) -> &BTreeMap<String, NetworkConfig> {
        &self.networks
    }

    pub fn verification(&self) -> &VerificationSettings {
        &self.verification
    }

    pub fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    pub fn gas_reporting(&self) -> &GasReporting {
        &self.gas_reporting
    }

    /// Copy with signing keys and the verification API key masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        for network in copy.networks.values_mut() {
            for key in &mut network.signing_keys {
                *key = mask_secret(key);
            }
        }
        copy.verification.api_key = mask_secret(&copy.verification.api_key);
        copy
    }
}

impl CompilerSettings {
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn optimizer_enabled(&self) -> bool {
        self.optimizer_enabled
    }

    pub fn optimizer_runs(&self) -> u32 {
        self.optimizer_runs
    }
}

impl NetworkConfig {
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn signing_keys(&self) -> &[String] {
        &self.signing_keys
    }

    pub fn forking(&self) -> Option<&ForkingConfig> {
        self.forking.as_ref()
    }
}

impl ForkingConfig {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

impl VerificationSettings {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl ProjectPaths {
    pub fn sources(&self) -> &str {
        &self.sources
    }

    pub fn tests(&self) -> &str {
        &self.tests
    }

    pub fn cache(&self) -> &str {
        &self.cache
    }

    pub fn artifacts(&self) -> &str {
        &self.artifacts
    }
}

impl GasReporting {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

/// Masks a secret, keeping at most the last four characters of long values.
pub fn mask_secret(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= MASK_MIN_LEN {
        return MASK.to_string();
    }

    let suffix: String = chars[chars.len() - MASK_VISIBLE_SUFFIX..].iter().collect();
    format!("{MASK}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{resolve, EnvSnapshot};

    const KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    #[test]
    fn mask_secret_keeps_short_values_hidden() {
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret("12345678"), "***");
        assert_eq!(mask_secret("123456789"), "***6789");
    }

    #[test]
    fn redacted_masks_signing_keys_and_api_key() {
        let env = EnvSnapshot::from_pairs([
            ("PRIVATE_KEY", KEY),
            ("ETHERSCAN_API_KEY", "ABCDEFGHIJKLMNOP"),
            ("SEPOLIA_RPC_URL", "https://rpc.example"),
        ]);
        let record = resolve(&env);
        let redacted = record.redacted();

        let sepolia = &redacted.networks()[SEPOLIA_NETWORK];
        assert_eq!(sepolia.signing_keys(), ["***690d".to_string()]);
        assert_eq!(sepolia.rpc_url(), "https://rpc.example");
        assert_eq!(redacted.verification().api_key(), "***MNOP");
        assert_eq!(
            record.networks()[SEPOLIA_NETWORK].signing_keys(),
            [KEY.to_string()],
            "original record is untouched"
        );
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let record = resolve(&EnvSnapshot::new());
        let json = serde_json::to_value(&record).expect("serialize record");

        assert_eq!(json["compiler"]["optimizerRuns"], 200);
        assert_eq!(json["gasReporting"]["currency"], "USD");
        assert_eq!(json["networks"]["sepolia"]["signingKeys"], serde_json::json!([]));
        assert!(json["networks"]["sepolia"].get("forking").is_none());
        assert_eq!(json["networks"]["hardhat"]["forking"]["enabled"], false);
    }

    #[test]
    fn serializes_to_toml() {
        let record = resolve(&EnvSnapshot::new());
        let rendered = toml::to_string_pretty(&record).expect("serialize record to toml");

        assert!(rendered.contains("version = \"0.8.19\""));
        assert!(rendered.contains("[networks.sepolia]"));
    }
}
