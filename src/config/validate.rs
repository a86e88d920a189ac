//! Point-of-use checks for consumers of the record.
//!
//! Resolution itself is total and passes malformed values through. The
//! accessors here are what a deployment client or verifier calls right before
//! it needs a value, so a missing or malformed setting surfaces as a
//! descriptive error at that boundary.

use thiserror::Error;

use super::record::{ConfigurationRecord, ForkingConfig, NetworkConfig, VerificationSettings};

const SIGNING_KEY_HEX_LEN: usize = 64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown network `{0}`")]
    UnknownNetwork(String),
    #[error("network `{network}` has no RPC URL configured")]
    MissingRpcUrl { network: String },
    #[error("network `{network}` has no signing key configured")]
    MissingSigningKey { network: String },
    #[error("signing key #{index} for network `{network}` is not a 32-byte hex string")]
    MalformedSigningKey { network: String, index: usize },
    #[error("network `{network}` enables forking but has no upstream RPC URL")]
    ForkingWithoutUpstream { network: String },
    #[error("no API key configured for the contract verification service")]
    MissingApiKey,
}

impl ConfigurationRecord {
    pub fn network(&self, name: &str) -> Result<&NetworkConfig, ConfigError> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))
    }

    /// Runs the checks a client performs before using `name`.
    ///
    /// Networks carrying a forking block are local and only need an upstream
    /// when forking is on. Every other network needs an endpoint and a
    /// well-formed signer.
    pub fn check_network(&self, name: &str) -> Result<(), ConfigError> {
        let network = self.network(name)?;
        match network.forking() {
            Some(forking) => {
                forking.require_upstream(name)?;
            }
            None => {
                network.require_rpc_url(name)?;
                network.require_signer(name)?;
            }
        }
        Ok(())
    }
}

impl NetworkConfig {
    pub fn require_rpc_url(&self, network: &str) -> Result<&str, ConfigError> {
        if self.rpc_url.is_empty() {
            return Err(ConfigError::MissingRpcUrl {
                network: network.to_string(),
            });
        }
        Ok(&self.rpc_url)
    }

    /// Returns the first signing key after checking every configured key.
    pub fn require_signer(&self, network: &str) -> Result<&str, ConfigError> {
        if let Some(index) = self
            .signing_keys
            .iter()
            .position(|key| !is_well_formed_signing_key(key))
        {
            return Err(ConfigError::MalformedSigningKey {
                network: network.to_string(),
                index,
            });
        }

        self.signing_keys
            .first()
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingSigningKey {
                network: network.to_string(),
            })
    }
}

impl ForkingConfig {
    /// Upstream endpoint to fork from, or `None` when forking is disabled.
    pub fn require_upstream(&self, network: &str) -> Result<Option<&str>, ConfigError> {
        if !self.enabled {
            return Ok(None);
        }
        if self.rpc_url.is_empty() {
            return Err(ConfigError::ForkingWithoutUpstream {
                network: network.to_string(),
            });
        }
        Ok(Some(&self.rpc_url))
    }
}

impl VerificationSettings {
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(&self.api_key)
    }
}

/// 32 bytes of hex, with or without a `0x` prefix.
pub fn is_well_formed_signing_key(key: &str) -> bool {
    let digits = key
        .strip_prefix("0x")
        .or_else(|| key.strip_prefix("0X"))
        .unwrap_or(key);
    digits.len() == SIGNING_KEY_HEX_LEN && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{resolve, EnvSnapshot, LOCAL_NETWORK, SEPOLIA_NETWORK};

    const KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    #[test]
    fn signing_key_format() {
        assert!(is_well_formed_signing_key(KEY));
        assert!(is_well_formed_signing_key(&KEY[2..]));
        assert!(!is_well_formed_signing_key("0xabc"));
        assert!(!is_well_formed_signing_key(&KEY.replace('d', "g")));
        assert!(!is_well_formed_signing_key(""));
    }

    #[test]
    fn check_network_rejects_unknown_name() {
        let record = resolve(&EnvSnapshot::new());
        assert_eq!(
            record.check_network("goerli"),
            Err(ConfigError::UnknownNetwork("goerli".to_string()))
        );
    }

    #[test]
    fn check_network_requires_rpc_url_before_signer() {
        let record = resolve(&EnvSnapshot::new());
        assert_eq!(
            record.check_network(SEPOLIA_NETWORK),
            Err(ConfigError::MissingRpcUrl {
                network: SEPOLIA_NETWORK.to_string()
            })
        );
    }

    #[test]
    fn check_network_requires_signing_key() {
        let env = EnvSnapshot::from_pairs([("SEPOLIA_RPC_URL", "https://rpc.example")]);
        let err = resolve(&env)
            .check_network(SEPOLIA_NETWORK)
            .expect_err("missing key should fail");

        assert_eq!(err.to_string(), "network `sepolia` has no signing key configured");
    }

    #[test]
    fn check_network_rejects_malformed_key_without_echoing_it() {
        let env = EnvSnapshot::from_pairs([
            ("SEPOLIA_RPC_URL", "https://rpc.example"),
            ("PRIVATE_KEY", "0xabc"),
        ]);
        let err = resolve(&env)
            .check_network(SEPOLIA_NETWORK)
            .expect_err("malformed key should fail");

        assert_eq!(
            err,
            ConfigError::MalformedSigningKey {
                network: SEPOLIA_NETWORK.to_string(),
                index: 0
            }
        );
        assert!(!err.to_string().contains("0xabc"));
    }

    #[test]
    fn check_network_accepts_ready_live_network() {
        let env = EnvSnapshot::from_pairs([
            ("SEPOLIA_RPC_URL", "https://rpc.example"),
            ("PRIVATE_KEY", KEY),
        ]);
        let record = resolve(&env);

        record
            .check_network(SEPOLIA_NETWORK)
            .expect("sepolia should be ready");
        let sepolia = record.network(SEPOLIA_NETWORK).expect("sepolia present");
        assert_eq!(sepolia.require_signer(SEPOLIA_NETWORK), Ok(KEY));
    }

    #[test]
    fn local_network_without_forking_needs_nothing() {
        let record = resolve(&EnvSnapshot::new());
        record
            .check_network(LOCAL_NETWORK)
            .expect("local network should be usable by default");
    }

    #[test]
    fn forking_requires_upstream_url() {
        let env = EnvSnapshot::from_pairs([("FORK_MAINNET", "true")]);
        assert_eq!(
            resolve(&env).check_network(LOCAL_NETWORK),
            Err(ConfigError::ForkingWithoutUpstream {
                network: LOCAL_NETWORK.to_string()
            })
        );

        let env = EnvSnapshot::from_pairs([
            ("FORK_MAINNET", "true"),
            ("MAINNET_RPC_URL", "https://mainnet.example"),
        ]);
        let record = resolve(&env);
        let forking = record
            .network(LOCAL_NETWORK)
            .expect("local network present")
            .forking()
            .expect("forking block present");
        assert_eq!(
            forking.require_upstream(LOCAL_NETWORK),
            Ok(Some("https://mainnet.example"))
        );
    }

    #[test]
    fn disabled_forking_ignores_upstream() {
        let env = EnvSnapshot::from_pairs([("MAINNET_RPC_URL", "https://mainnet.example")]);
        let record = resolve(&env);
        let forking = record
            .network(LOCAL_NETWORK)
            .expect("local network present")
            .forking()
            .expect("forking block present");

        assert_eq!(forking.require_upstream(LOCAL_NETWORK), Ok(None));
        assert_eq!(forking.rpc_url(), "https://mainnet.example");
    }

    #[test]
    fn api_key_is_required_at_point_of_use() {
        let record = resolve(&EnvSnapshot::new());
        assert_eq!(
            record.verification().require_api_key(),
            Err(ConfigError::MissingApiKey)
        );

        let env = EnvSnapshot::from_pairs([("ETHERSCAN_API_KEY", "KEY123")]);
        assert_eq!(resolve(&env).verification().require_api_key(), Ok("KEY123"));
    }
}
