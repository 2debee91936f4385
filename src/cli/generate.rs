//! Generate command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

use super::utils::success;
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::RuleScope;
use crate::loader::{FileLoader, RuleLoader};
use crate::platform::PlatformRegistry;

#[derive(Args)]
pub struct GenerateArgs {
    /// Rules directory created by `init`
    #[arg(short, long, value_name = "DIR", default_value = ".ruler")]
    pub dir: PathBuf,

    /// Target platform (defaults to `default_platform` from config.yaml)
    #[arg(short, long, value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Overwrite an existing output file
    #[arg(short, long)]
    pub force: bool,

    /// Directory the platform's output path is resolved against
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_root: PathBuf,

    /// Print the converted rules instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    if !args.dir.is_dir() {
        bail!(
            "Rules directory {} not found; run `unirule init` first",
            args.dir.display()
        );
    }

    let config = load_config(&args.dir);
    let overrides = CliOverrides {
        platform: args.platform.clone(),
        force: args.force.then_some(true),
    };
    let config = merge_cli_with_config(config, overrides);
    debug!(platform = %config.default_platform, force = config.force, "resolved configuration");

    let registry = PlatformRegistry::with_builtin();
    let adapter = registry.require(&config.default_platform)?;

    let rule_set = FileLoader::new(&args.dir)
        .load_all_rules()
        .with_context(|| format!("Failed to load rules from {}", args.dir.display()))?;
    for scope in RuleScope::ALL {
        debug!(
            scope = scope.as_str(),
            total = rule_set.rules(scope).len(),
            enabled = rule_set.enabled(scope).count(),
            "loaded rules"
        );
    }

    let rendered = adapter.convert(&rule_set)?;

    if args.stdout {
        std::io::stdout().write_all(&rendered).context("Failed to write to stdout")?;
        return Ok(());
    }

    let output_path = args.output_root.join(adapter.default_output_path());
    if output_path.exists() && !config.force {
        bail!(
            "{} already exists; pass --force to overwrite",
            output_path.display()
        );
    }
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&output_path, &rendered)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!(
        platform = adapter.name(),
        path = %output_path.display(),
        bytes = rendered.len(),
        "rules generated"
    );
    success(format!(
        "{} rules written to {} ({} project, {} global, {} template)",
        adapter.name(),
        output_path.display(),
        rule_set.project_rules.len(),
        rule_set.global_rules.len(),
        rule_set.template_rules.len(),
    ));

    Ok(())
}
