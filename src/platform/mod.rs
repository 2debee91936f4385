//! Platform adapters and their registry
//!
//! An adapter renders a [`RuleSet`] in one editor's native rule format.
//! New editors are supported by implementing [`PlatformAdapter`] and
//! registering the adapter; neither the registry nor the loader changes.

use std::collections::HashMap;

use crate::domain::{Metadata, RuleSet};
use crate::error::{Result, RuleError};

pub mod copilot;
pub mod cursor;
pub mod trae;

pub use copilot::CopilotAdapter;
pub use cursor::CursorAdapter;
pub use trae::TraeAdapter;

/// Renders a rule set for one AI editor
pub trait PlatformAdapter {
    /// Stable lowercase identifier, e.g. `"trae"`.
    fn name(&self) -> &'static str;

    /// Path, relative to the project root, where the editor expects its rules.
    fn default_output_path(&self) -> &'static str;

    fn convert(&self, rule_set: &RuleSet) -> Result<Vec<u8>>;
}

/// Name-keyed table of adapters
#[derive(Default)]
pub struct PlatformRegistry {
    adapters: HashMap<String, Box<dyn PlatformAdapter>>,
}

impl PlatformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every adapter shipped with the crate.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(TraeAdapter::new());
        registry.register(CursorAdapter::new());
        registry.register(CopilotAdapter::new());
        registry
    }

    /// Add an adapter; an adapter with the same name is replaced.
    pub fn register<A: PlatformAdapter + 'static>(&mut self, adapter: A) {
        self.adapters.insert(adapter.name().to_string(), Box::new(adapter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn PlatformAdapter> {
        self.adapters.get(name).map(|adapter| &**adapter)
    }

    /// Like [`get`](Self::get), but an unknown name is an error listing the
    /// supported platforms.
    pub fn require(&self, name: &str) -> Result<&dyn PlatformAdapter> {
        self.get(name).ok_or_else(|| RuleError::UnknownPlatform {
            name: name.to_string(),
            supported: self.names(),
        })
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.adapters.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

/// Generation time shown in rendered documents.
///
/// Taken from the metadata rather than the clock, so converting the same
/// rule set twice gives identical bytes.
pub(crate) fn generated_at(metadata: &Metadata) -> String {
    metadata.last_updated_at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, &'static str);

    impl PlatformAdapter for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn default_output_path(&self) -> &'static str {
            self.0
        }

        fn convert(&self, _rule_set: &RuleSet) -> Result<Vec<u8>> {
            Ok(self.1.as_bytes().to_vec())
        }
    }

    #[test]
    fn builtin_registry_knows_every_adapter() {
        let registry = PlatformRegistry::with_builtin();
        assert_eq!(registry.names(), vec!["copilot", "cursor", "trae"]);
        let trae = registry.get("trae").expect("trae adapter");
        assert_eq!(trae.default_output_path(), ".trae/rules/project_rules.md");
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = PlatformRegistry::new();
        registry.register(Fixed("a.md", "first"));
        registry.register(Fixed("b.md", "second"));
        assert_eq!(registry.len(), 1);

        let adapter = registry.get("fixed").expect("fixed adapter");
        assert_eq!(adapter.default_output_path(), "b.md");
        assert_eq!(adapter.convert(&RuleSet::default()).expect("convert"), b"second".to_vec());
    }

    #[test]
    fn unknown_platform_is_an_error_not_a_panic() {
        let registry = PlatformRegistry::with_builtin();
        assert!(registry.get("vim").is_none());
        let err = registry.require("vim").err().expect("unknown platform");
        assert!(matches!(err, RuleError::UnknownPlatform { ref name, .. } if name == "vim"));
    }
}
