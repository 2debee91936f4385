//! GitHub Copilot adapter: a repository custom instructions file.
//!
//! Copilot reads `.github/copilot-instructions.md` as plain natural-language
//! guidance, so rules are flattened into short bullet blocks.

use super::{generated_at, PlatformAdapter};
use crate::domain::{RuleScope, RuleSet};
use crate::error::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct CopilotAdapter;

impl CopilotAdapter {
    pub fn new() -> Self {
        Self
    }
}

fn scope_title(scope: RuleScope) -> &'static str {
    match scope {
        RuleScope::Project => "Project rules (highest priority)",
        RuleScope::Global => "Shared rules",
        RuleScope::Template => "Template rules",
    }
}

impl PlatformAdapter for CopilotAdapter {
    fn name(&self) -> &'static str {
        "copilot"
    }

    fn default_output_path(&self) -> &'static str {
        ".github/copilot-instructions.md"
    }

    fn convert(&self, rule_set: &RuleSet) -> Result<Vec<u8>> {
        let meta = &rule_set.metadata;
        let mut out = String::new();

        out.push_str(&format!("# Copilot instructions for {}\n\n", meta.project_name));
        if !meta.tech_stacks.is_empty() {
            out.push_str(&format!("This project uses: {}.\n\n", meta.tech_stacks.join(", ")));
        }
        out.push_str(&format!("_Generated {} (rule set {})_\n\n", generated_at(meta), meta.version));

        for scope in RuleScope::ALL {
            let mut rules = rule_set.enabled(scope).peekable();
            if rules.peek().is_none() {
                continue;
            }

            out.push_str(&format!("## {}\n\n", scope_title(scope)));
            for rule in rules {
                out.push_str(&format!("### {} ({}, priority {})\n\n", rule.title, rule.rule_type, rule.priority));
                for line in rule.content.lines().map(str::trim).filter(|l| !l.is_empty()) {
                    let line = line.strip_prefix("- ").unwrap_or(line);
                    out.push_str(&format!("- {line}\n"));
                }
                out.push('\n');
            }
        }

        out.push_str("## Conflicts\n\n");
        out.push_str("When two rules disagree, project rules override shared rules, ");
        out.push_str("and shared rules override template rules.\n");

        Ok(out.into_bytes())
    }
}
