//! Core domain types and models
//!
//! Defines the normalized rule model shared by the parsers, the loader and
//! every platform adapter: [`Rule`], [`RuleSet`] and [`Metadata`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod tech;

pub use tech::TechCategory;

/// Version stamped into every loaded [`Metadata`].
pub const RULESET_VERSION: &str = "1.0.0";

/// Project name used when `tech_stack.yaml` does not declare one.
pub const UNKNOWN_PROJECT: &str = "未知项目";

/// Lowest and highest rule priority.
pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 5;

/// Category of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    CodeStyle,
    Security,
    Performance,
    Testing,
    Deployment,
    Database,
    Cache,
    Api,
    Documentation,
    General,
    TechStack,
    Naming,
    ErrorHandling,
    Framework,
}

impl RuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::CodeStyle => "code_style",
            RuleType::Security => "security",
            RuleType::Performance => "performance",
            RuleType::Testing => "testing",
            RuleType::Deployment => "deployment",
            RuleType::Database => "database",
            RuleType::Cache => "cache",
            RuleType::Api => "api",
            RuleType::Documentation => "documentation",
            RuleType::General => "general",
            RuleType::TechStack => "tech_stack",
            RuleType::Naming => "naming",
            RuleType::ErrorHandling => "error_handling",
            RuleType::Framework => "framework",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single normalized guidance item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Rule title (section heading it came from)
    pub title: String,

    /// One-line description
    pub description: String,

    /// Rule category
    #[serde(rename = "type")]
    pub rule_type: RuleType,

    /// Free text, usually a markdown bullet list joined by newlines
    pub content: String,

    /// Priority from 1 to 5, 5 being the highest
    pub priority: u8,

    /// Disabled rules stay loaded but are never rendered
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Lowercase tags in insertion order
    #[serde(default)]
    pub tags: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rule {
    /// Create an enabled rule stamped with the current time.
    ///
    /// Priority is clamped into `1..=5`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        rule_type: RuleType,
        content: impl Into<String>,
        priority: u8,
    ) -> Self {
        let now = Utc::now();
        Self {
            title: title.into(),
            description: description.into(),
            rule_type,
            content: content.into(),
            priority: priority.clamp(MIN_PRIORITY, MAX_PRIORITY),
            enabled: true,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

fn default_true() -> bool {
    true
}

/// Project metadata taken from `project/tech_stack.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub project_name: String,
    #[serde(default)]
    pub tech_stacks: Vec<String>,
    #[serde(default)]
    pub ai_editors: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
    pub version: String,
}

impl Default for Metadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            project_name: UNKNOWN_PROJECT.to_string(),
            tech_stacks: Vec::new(),
            ai_editors: Vec::new(),
            created_at: now,
            last_updated_at: now,
            version: RULESET_VERSION.to_string(),
        }
    }
}

/// Where a rule came from; also the order rules are rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleScope {
    Project,
    Global,
    Template,
}

impl RuleScope {
    /// Scopes in render order, highest override priority first.
    pub const ALL: [RuleScope; 3] = [RuleScope::Project, RuleScope::Global, RuleScope::Template];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleScope::Project => "project",
            RuleScope::Global => "global",
            RuleScope::Template => "template",
        }
    }
}

/// The complete project + global + template collection, ready for rendering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Highest override priority
    #[serde(default)]
    pub project_rules: Vec<Rule>,

    /// Shared across projects
    #[serde(default)]
    pub global_rules: Vec<Rule>,

    /// User-authored extensions, lowest priority
    #[serde(default)]
    pub template_rules: Vec<Rule>,

    pub metadata: Metadata,
}

impl RuleSet {
    pub fn rules(&self, scope: RuleScope) -> &[Rule] {
        match scope {
            RuleScope::Project => &self.project_rules,
            RuleScope::Global => &self.global_rules,
            RuleScope::Template => &self.template_rules,
        }
    }

    /// Enabled rules of one scope, in load order.
    pub fn enabled(&self, scope: RuleScope) -> impl Iterator<Item = &Rule> {
        self.rules(scope).iter().filter(|rule| rule.enabled)
    }

    pub fn total_rules(&self) -> usize {
        self.project_rules.len() + self.global_rules.len() + self.template_rules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_is_clamped_into_range() {
        let high = Rule::new("a", "b", RuleType::General, "c", 9);
        let low = Rule::new("a", "b", RuleType::General, "c", 0);
        assert_eq!(high.priority, MAX_PRIORITY);
        assert_eq!(low.priority, MIN_PRIORITY);
    }

    #[test]
    fn rule_type_serializes_as_snake_case() {
        let rule = Rule::new("t", "d", RuleType::ErrorHandling, "c", 4);
        let value = serde_json::to_value(&rule).expect("serialize rule");
        assert_eq!(value["type"], serde_json::json!("error_handling"));
        assert_eq!(RuleType::TechStack.to_string(), "tech_stack");
    }

    #[test]
    fn enabled_skips_disabled_rules() {
        let set = RuleSet {
            global_rules: vec![
                Rule::new("on", "", RuleType::General, "", 3),
                Rule::new("off", "", RuleType::General, "", 3).disabled(),
            ],
            ..RuleSet::default()
        };
        let titles: Vec<&str> = set.enabled(RuleScope::Global).map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["on"]);
        assert_eq!(set.total_rules(), 2);
    }
}
