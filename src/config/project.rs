use anyhow::{bail, Result};

use crate::cli::{
    CompilerOptions, GasReportOptions, PathOptions, DEFAULT_ARTIFACTS_DIR, DEFAULT_CACHE_DIR,
    DEFAULT_COMPILER_VERSION, DEFAULT_GAS_CURRENCY, DEFAULT_OPTIMIZER_ENABLED,
    DEFAULT_OPTIMIZER_RUNS, DEFAULT_SOURCES_DIR, DEFAULT_TESTS_DIR,
};

use super::overlay::Overlay;
use super::record::{CompilerSettings, ProjectPaths};

/// Static, environment-independent part of the record.
///
/// Built from the project file and CLI overrides; the resolver copies it
/// verbatim into every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    pub compiler: CompilerSettings,
    pub paths: ProjectPaths,
    pub gas_currency: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            compiler: CompilerSettings {
                version: DEFAULT_COMPILER_VERSION.to_string(),
                optimizer_enabled: DEFAULT_OPTIMIZER_ENABLED,
                optimizer_runs: DEFAULT_OPTIMIZER_RUNS,
            },
            paths: ProjectPaths {
                sources: DEFAULT_SOURCES_DIR.to_string(),
                tests: DEFAULT_TESTS_DIR.to_string(),
                cache: DEFAULT_CACHE_DIR.to_string(),
                artifacts: DEFAULT_ARTIFACTS_DIR.to_string(),
            },
            gas_currency: DEFAULT_GAS_CURRENCY.to_string(),
        }
    }
}

impl ProjectSettings {
    pub fn build(
        compiler: CompilerOptions,
        paths: PathOptions,
        gas: GasReportOptions,
    ) -> Result<Self> {
        Ok(Self {
            compiler: compiler.build()?,
            paths: paths.build()?,
            gas_currency: gas.build()?,
        })
    }
}

impl CompilerOptions {
    pub fn build(self) -> Result<CompilerSettings> {
        let version = self
            .version
            .unwrap_or_else(|| DEFAULT_COMPILER_VERSION.to_string());
        if version.trim().is_empty() {
            bail!("compiler version must not be empty");
        }

        Ok(CompilerSettings {
            version,
            optimizer_enabled: self.optimizer_enabled.unwrap_or(DEFAULT_OPTIMIZER_ENABLED),
            optimizer_runs: self.optimizer_runs.unwrap_or(DEFAULT_OPTIMIZER_RUNS),
        })
    }
}

impl PathOptions {
    pub fn build(self) -> Result<ProjectPaths> {
        Ok(ProjectPaths {
            sources: non_empty_dir("sources", self.sources, DEFAULT_SOURCES_DIR)?,
            tests: non_empty_dir("tests", self.tests, DEFAULT_TESTS_DIR)?,
            cache: non_empty_dir("cache", self.cache, DEFAULT_CACHE_DIR)?,
            artifacts: non_empty_dir("artifacts", self.artifacts, DEFAULT_ARTIFACTS_DIR)?,
        })
    }
}

impl GasReportOptions {
    pub fn build(self) -> Result<String> {
        let currency = self
            .currency
            .unwrap_or_else(|| DEFAULT_GAS_CURRENCY.to_string());
        if currency.trim().is_empty() {
            bail!("gas report currency must not be empty");
        }
        Ok(currency)
    }
}

fn non_empty_dir(name: &str, value: Option<String>, default: &str) -> Result<String> {
    let dir = value.unwrap_or_else(|| default.to_string());
    if dir.trim().is_empty() {
        bail!("{name} directory must not be empty");
    }
    Ok(dir)
}

impl Overlay for CompilerOptions {
    fn overlay(self, overrides: Self) -> Self {
        Self {
            version: overrides.version.or(self.version),
            optimizer_enabled: overrides.optimizer_enabled.or(self.optimizer_enabled),
            optimizer_runs: overrides.optimizer_runs.or(self.optimizer_runs),
        }
    }
}

impl Overlay for PathOptions {
    fn overlay(self, overrides: Self) -> Self {
        Self {
            sources: overrides.sources.or(self.sources),
            tests: overrides.tests.or(self.tests),
            cache: overrides.cache.or(self.cache),
            artifacts: overrides.artifacts.or(self.artifacts),
        }
    }
}

impl Overlay for GasReportOptions {
    fn overlay(self, overrides: Self) -> Self {
        Self {
            currency: overrides.currency.or(self.currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_uses_defaults_for_missing_options() {
        let settings = ProjectSettings::build(
            CompilerOptions::default(),
            PathOptions::default(),
            GasReportOptions::default(),
        )
        .expect("build settings");

        assert_eq!(settings, ProjectSettings::default());
        assert_eq!(settings.compiler.version(), "0.8.19");
        assert!(settings.compiler.optimizer_enabled());
        assert_eq!(settings.compiler.optimizer_runs(), 200);
        assert_eq!(settings.paths.tests(), "./contracts/test");
        assert_eq!(settings.gas_currency, "USD");
    }

    #[test]
    fn overlay_prefers_override_when_present() {
        let base = CompilerOptions {
            version: Some("0.8.20".to_string()),
            optimizer_runs: Some(500),
            ..Default::default()
        };
        let overrides = CompilerOptions {
            version: Some("0.8.24".to_string()),
            optimizer_enabled: Some(false),
            ..Default::default()
        };

        let merged = base.overlay(overrides);

        assert_eq!(merged.version.as_deref(), Some("0.8.24"));
        assert_eq!(merged.optimizer_enabled, Some(false));
        assert_eq!(
            merged.optimizer_runs,
            Some(500),
            "keeps base when override missing"
        );
    }

    #[test]
    fn path_overlay_keeps_unset_fields() {
        let base = PathOptions {
            sources: Some("./src".to_string()),
            artifacts: Some("./out".to_string()),
            ..Default::default()
        };
        let overrides = PathOptions {
            artifacts: Some("./build".to_string()),
            ..Default::default()
        };

        let paths = base.overlay(overrides).build().expect("build paths");

        assert_eq!(paths.sources(), "./src");
        assert_eq!(paths.tests(), DEFAULT_TESTS_DIR);
        assert_eq!(paths.cache(), DEFAULT_CACHE_DIR);
        assert_eq!(paths.artifacts(), "./build");
    }

    #[test]
    fn build_rejects_empty_values() {
        let err = CompilerOptions {
            version: Some("  ".to_string()),
            ..Default::default()
        }
        .build()
        .expect_err("empty version should fail")
        .to_string();
        assert!(err.contains("compiler version"), "got: {err}");

        let err = PathOptions {
            cache: Some(String::new()),
            ..Default::default()
        }
        .build()
        .expect_err("empty cache dir should fail")
        .to_string();
        assert!(err.contains("cache directory"), "got: {err}");

        let err = GasReportOptions {
            currency: Some(String::new()),
        }
        .build()
        .expect_err("empty currency should fail")
        .to_string();
        assert!(err.contains("currency"), "got: {err}");
    }
}
