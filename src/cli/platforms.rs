//! Platforms command implementation

use anyhow::Result;
use console::style;

use crate::platform::PlatformRegistry;

pub fn run() -> Result<()> {
    let registry = PlatformRegistry::with_builtin();
    for name in registry.names() {
        let Some(adapter) = registry.get(&name) else {
            continue;
        };
        println!(
            "{} {}",
            style(format!("{:<10}", adapter.name())).cyan().bold(),
            adapter.default_output_path()
        );
    }
    Ok(())
}
