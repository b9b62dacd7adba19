#![deny(unsafe_code)]

//! Export configuration: options plus the two rule tables.
//!
//! Resolution order:
//! 1. an explicit path (the `--config` flag)
//! 2. the `TRUNK_EXPORT_CONFIG` environment variable
//! 3. the NSWGRN tables embedded in the binary

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sha2::Digest;
use tracing::{debug, info};
use trunk_model::{ExportOptions, RangeRule};

use crate::error::RulesError;
use crate::rules::RuleSet;

/// Environment variable naming a config file to use instead of the default.
pub const CONFIG_ENV_VAR: &str = "TRUNK_EXPORT_CONFIG";

/// The default NSWGRN configuration.
pub const DEFAULT_CONFIG: &str = include_str!("../data/nswgrn.toml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    export: ExportOptions,
    #[serde(default)]
    exclusions: Vec<RangeRule>,
    #[serde(default)]
    generic_labels: Vec<RangeRule>,
}

/// Where a configuration was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("<embedded nswgrn.toml>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub options: ExportOptions,
    pub rules: RuleSet,
    pub source: ConfigSource,
    /// SHA-256 of the config text, hex encoded.
    pub fingerprint: String,
}

impl ExportConfig {
    pub fn from_toml_str(text: &str, source: ConfigSource) -> Result<Self, RulesError> {
        let file: ConfigFile = toml::from_str(text).map_err(|source_err| RulesError::Toml {
            origin: source.to_string(),
            source: source_err,
        })?;
        let rules = RuleSet::new(file.exclusions, file.generic_labels)?;
        let fingerprint = fingerprint(text.as_bytes());
        debug!(
            source = %source,
            exclusions = rules.exclusions().len(),
            generic_labels = rules.generic_labels().len(),
            "validated rule tables"
        );
        Ok(Self {
            options: file.export,
            rules,
            source,
            fingerprint,
        })
    }

    pub fn load(path: &Path) -> Result<Self, RulesError> {
        let text = std::fs::read_to_string(path).map_err(|e| RulesError::io(path, e))?;
        Self::from_toml_str(&text, ConfigSource::File(path.to_path_buf()))
    }

    pub fn embedded() -> Result<Self, RulesError> {
        Self::from_toml_str(DEFAULT_CONFIG, ConfigSource::Embedded)
    }

    /// Load the configuration in resolution order.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, RulesError> {
        Self::resolve_with_env(explicit, std::env::var_os(CONFIG_ENV_VAR))
    }

    /// [`ExportConfig::resolve`] with the environment variable's value passed in.
    fn resolve_with_env(explicit: Option<&Path>, env: Option<OsString>) -> Result<Self, RulesError> {
        let config = match (explicit, env) {
            (Some(path), _) => Self::load(path)?,
            (None, Some(path)) if !path.is_empty() => Self::load(Path::new(&path))?,
            (None, _) => Self::embedded()?,
        };
        info!(
            source = %config.source,
            fingerprint = %config.short_fingerprint(),
            "loaded export config"
        );
        Ok(config)
    }

    /// First twelve hex digits of the fingerprint, for logs and summaries.
    pub fn short_fingerprint(&self) -> &str {
        &self.fingerprint[..self.fingerprint.len().min(12)]
    }
}

fn fingerprint(bytes: &[u8]) -> String {
    hex::encode(sha2::Sha256::digest(bytes))
}
