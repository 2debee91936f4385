//! Tool configuration stored in `<rules dir>/config.yaml`
//!
//! Layered with figment: built-in defaults, then the YAML file, then
//! `UNIRULE_*` environment variables. CLI flags are applied last through
//! [`merge_cli_with_config`].

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::loader::CONFIG_FILE;

mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

pub const ENV_PREFIX: &str = "UNIRULE_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerConfig {
    /// Adapter used when `generate` gets no `--platform`
    #[serde(default = "default_platform")]
    pub default_platform: String,

    /// Scope precedence, highest first. Informational; rendering order is fixed.
    #[serde(default = "default_rule_priority")]
    pub rule_priority: Vec<String>,

    /// Written by `init`
    #[serde(default)]
    pub last_init_time: Option<String>,

    /// Overwrite existing output files
    #[serde(default)]
    pub force: bool,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            default_platform: default_platform(),
            rule_priority: default_rule_priority(),
            last_init_time: None,
            force: false,
        }
    }
}

fn default_platform() -> String {
    "trae".to_string()
}

fn default_rule_priority() -> Vec<String> {
    vec!["project".to_string(), "global".to_string(), "templates".to_string()]
}

/// Load the tool configuration for a rules directory.
///
/// A missing or empty `config.yaml` is not an error here; defaults and
/// environment still apply. Each field is extracted on its own, so a value
/// of the wrong type falls back to its default with a warning instead of
/// failing the whole load.
pub fn load_config(rules_dir: &Path) -> RulerConfig {
    let path = rules_dir.join(CONFIG_FILE);
    let mut figment = Figment::from(Serialized::defaults(RulerConfig::default()));
    // An empty file is a valid (empty) config but not a valid YAML dictionary.
    if fs::metadata(&path).map(|m| m.len() > 0).unwrap_or(false) {
        figment = figment.merge(Yaml::file(&path));
    }
    let figment = figment.merge(Env::prefixed(ENV_PREFIX));

    let defaults = RulerConfig::default();
    let default_platform: String = field_or(&figment, "default_platform", defaults.default_platform);
    RulerConfig {
        default_platform: default_platform.trim().to_lowercase(),
        rule_priority: field_or(&figment, "rule_priority", defaults.rule_priority),
        last_init_time: field_or(&figment, "last_init_time", defaults.last_init_time),
        force: field_or(&figment, "force", defaults.force),
    }
}

fn field_or<T: DeserializeOwned>(figment: &Figment, key: &str, default: T) -> T {
    match figment.extract_inner(key) {
        Ok(value) => value,
        Err(err) => {
            if !err.missing() {
                warn!(key, error = %err, "ignoring invalid configuration value");
            }
            default
        }
    }
}
