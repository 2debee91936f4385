//! CLI argument merging with config

use super::RulerConfig;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub platform: Option<String>,
    pub force: Option<bool>,
}

pub fn merge_cli_with_config(mut base_config: RulerConfig, cli: CliOverrides) -> RulerConfig {
    if let Some(platform) = cli.platform {
        base_config.default_platform = platform.trim().to_lowercase();
    }
    if let Some(force) = cli.force {
        base_config.force = force;
    }

    base_config
}
