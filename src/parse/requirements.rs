//! Requirements document parser.
//!
//! Turns `project/requirements.md` into one rule per `## ` section.

use super::classify::{classify_section, is_suppressed_section, section_priority};
use super::SECTION_PREFIX;
use crate::domain::Rule;

/// Parse a requirements document.
///
/// Lines before the first section header, blank lines and lines starting
/// with `#` are dropped. Sections with an empty body and the suppressed
/// sections never produce a rule.
pub fn parse_requirements(content: &str) -> Vec<Rule> {
    let mut rules = Vec::new();
    let mut section: Option<Section> = None;

    for line in content.lines().map(str::trim) {
        if let Some(title) = line.strip_prefix(SECTION_PREFIX) {
            if let Some(done) = section.take() {
                rules.extend(done.into_rule());
            }
            if !is_suppressed_section(title) {
                section = Some(Section::new(title));
            }
        } else if let Some(open) = section.as_mut() {
            if !line.is_empty() && !line.starts_with('#') {
                open.body.push(line.to_string());
            }
        }
    }

    if let Some(done) = section {
        rules.extend(done.into_rule());
    }

    rules
}

struct Section {
    title: String,
    body: Vec<String>,
}

impl Section {
    fn new(title: &str) -> Self {
        Self { title: title.to_string(), body: Vec::new() }
    }

    fn into_rule(self) -> Option<Rule> {
        if self.title.is_empty() || self.body.is_empty() {
            return None;
        }

        let (rule_type, tags) = classify_section(&self.title);
        let priority = section_priority(&self.title);
        let description = format!("项目 {} 相关的要求和规范", self.title);

        Some(
            Rule::new(self.title, description, rule_type, self.body.join("\n"), priority)
                .with_tags(tags),
        )
    }
}
