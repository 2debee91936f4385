//! Cursor adapter: a JSON rule document.

use serde::Serialize;

use super::{generated_at, PlatformAdapter};
use crate::domain::{Rule, RuleScope, RuleSet, RuleType};
use crate::error::{Result, RuleError};

#[derive(Debug, Default, Clone, Copy)]
pub struct CursorAdapter;

impl CursorAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct CursorDocument<'a> {
    version: &'a str,
    project: CursorProject<'a>,
    rules: Vec<CursorRule<'a>>,
}

#[derive(Serialize)]
struct CursorProject<'a> {
    name: &'a str,
    tech_stacks: &'a [String],
    ai_editors: &'a [String],
    generated_at: String,
}

#[derive(Serialize)]
struct CursorRule<'a> {
    scope: RuleScope,
    title: &'a str,
    description: &'a str,
    #[serde(rename = "type")]
    rule_type: RuleType,
    priority: u8,
    tags: &'a [String],
    content: &'a str,
}

impl<'a> CursorRule<'a> {
    fn new(scope: RuleScope, rule: &'a Rule) -> Self {
        Self {
            scope,
            title: &rule.title,
            description: &rule.description,
            rule_type: rule.rule_type,
            priority: rule.priority,
            tags: &rule.tags,
            content: &rule.content,
        }
    }
}

impl PlatformAdapter for CursorAdapter {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn default_output_path(&self) -> &'static str {
        ".cursor/rules.json"
    }

    fn convert(&self, rule_set: &RuleSet) -> Result<Vec<u8>> {
        let meta = &rule_set.metadata;
        let document = CursorDocument {
            version: &meta.version,
            project: CursorProject {
                name: &meta.project_name,
                tech_stacks: &meta.tech_stacks,
                ai_editors: &meta.ai_editors,
                generated_at: generated_at(meta),
            },
            rules: RuleScope::ALL
                .into_iter()
                .flat_map(|scope| rule_set.enabled(scope).map(move |rule| CursorRule::new(scope, rule)))
                .collect(),
        };

        let mut bytes = serde_json::to_vec_pretty(&document).map_err(|e| RuleError::Render {
            platform: self.name().to_string(),
            message: e.to_string(),
        })?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}
