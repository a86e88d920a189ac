//! Environment snapshots.
//!
//! The resolver never reads process state directly. Callers capture an
//! [`EnvSnapshot`] (from the process, a dotfile, or literal pairs) and pass it
//! in, which keeps resolution a pure function of its input.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use super::overlay::Overlay;

pub const SEPOLIA_RPC_URL: &str = "SEPOLIA_RPC_URL";
pub const PRIVATE_KEY: &str = "PRIVATE_KEY";
pub const FORK_MAINNET: &str = "FORK_MAINNET";
pub const MAINNET_RPC_URL: &str = "MAINNET_RPC_URL";
pub const ETHERSCAN_API_KEY: &str = "ETHERSCAN_API_KEY";
pub const REPORT_GAS: &str = "REPORT_GAS";

/// An environment key the resolver consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognizedKey {
    pub name: &'static str,
    pub secret: bool,
    pub description: &'static str,
}

pub const RECOGNIZED_KEYS: [RecognizedKey; 6] = [
    RecognizedKey {
        name: SEPOLIA_RPC_URL,
        secret: false,
        description: "RPC endpoint of the sepolia network",
    },
    RecognizedKey {
        name: PRIVATE_KEY,
        secret: true,
        description: "signing key used for sepolia transactions",
    },
    RecognizedKey {
        name: FORK_MAINNET,
        secret: false,
        description: "fork mainnet into the local network when exactly \"true\"",
    },
    RecognizedKey {
        name: MAINNET_RPC_URL,
        secret: false,
        description: "upstream RPC endpoint used when forking mainnet",
    },
    RecognizedKey {
        name: ETHERSCAN_API_KEY,
        secret: true,
        description: "API key for the contract verification service",
    },
    RecognizedKey {
        name: REPORT_GAS,
        secret: false,
        description: "enable the gas usage report when exactly \"true\"",
    },
];

/// Immutable `name -> value` view of an environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Copies the current process environment. Entries that are not valid
    /// UTF-8 are skipped.
    pub fn capture() -> Self {
        Self::from_pairs(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    /// Parses a dotfile without exporting anything into the process.
    pub fn from_dotenv_file(path: &Path) -> Result<Self> {
        let entries = dotenvy::from_path_iter(path)
            .with_context(|| format!("failed to open env file {}", path.display()))?;

        let mut vars = BTreeMap::new();
        for entry in entries {
            let (key, value) =
                entry.with_context(|| format!("failed to parse env file {}", path.display()))?;
            vars.insert(key, value);
        }

        Ok(Self { vars })
    }

    /// Raw lookup; an empty value is still reported as present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Lookup treating an empty value the same as an absent one.
    pub fn optional(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or(default).to_string()
    }

    /// `true` only for the literal string `"true"`.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl Overlay for EnvSnapshot {
    fn overlay(mut self, overrides: Self) -> Self {
        self.vars.extend(overrides.vars);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn optional_treats_empty_as_absent() {
        let env = EnvSnapshot::from_pairs([(PRIVATE_KEY, ""), (SEPOLIA_RPC_URL, "https://x")]);

        assert_eq!(env.get(PRIVATE_KEY), Some(""));
        assert_eq!(env.optional(PRIVATE_KEY), None);
        assert_eq!(env.optional(SEPOLIA_RPC_URL), Some("https://x"));
        assert_eq!(env.string_or(PRIVATE_KEY, "fallback"), "fallback");
    }

    #[test]
    fn flag_requires_exact_true() {
        for value in ["1", "TRUE", "True", "yes", "", " true"] {
            let env = EnvSnapshot::from_pairs([(REPORT_GAS, value)]);
            assert!(!env.flag(REPORT_GAS), "{value:?} must not enable the flag");
        }

        let env = EnvSnapshot::from_pairs([(REPORT_GAS, "true")]);
        assert!(env.flag(REPORT_GAS));
        assert!(!EnvSnapshot::new().flag(REPORT_GAS));
    }

    #[test]
    fn overlay_prefers_override_when_present() {
        let dotfile = EnvSnapshot::from_pairs([
            (SEPOLIA_RPC_URL, "https://from-file"),
            (ETHERSCAN_API_KEY, "file-key"),
        ]);
        let process = EnvSnapshot::from_pairs([(SEPOLIA_RPC_URL, "https://from-process")]);

        let merged = dotfile.overlay(process);

        assert_eq!(merged.get(SEPOLIA_RPC_URL), Some("https://from-process"));
        assert_eq!(
            merged.get(ETHERSCAN_API_KEY),
            Some("file-key"),
            "keeps base when override missing"
        );
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn from_dotenv_file_reads_pairs() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(".env");
        fs::write(
            &path,
            "# deployment secrets\nSEPOLIA_RPC_URL=https://rpc.example\nREPORT_GAS=\"true\"\n",
        )
        .expect("write env file");

        let env = EnvSnapshot::from_dotenv_file(&path).expect("load env file");

        assert_eq!(env.get(SEPOLIA_RPC_URL), Some("https://rpc.example"));
        assert!(env.flag(REPORT_GAS));
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn from_dotenv_file_reports_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let err = EnvSnapshot::from_dotenv_file(&temp.path().join("missing.env"))
            .expect_err("missing file should fail")
            .to_string();
        assert!(
            err.contains("failed to open env file"),
            "error should mention the env file, got: {err}"
        );
    }

    #[test]
    fn recognized_keys_mark_secrets() {
        let secrets: Vec<_> = RECOGNIZED_KEYS
            .iter()
            .filter(|key| key.secret)
            .map(|key| key.name)
            .collect();
        assert_eq!(secrets, vec![PRIVATE_KEY, ETHERSCAN_API_KEY]);
    }
}
