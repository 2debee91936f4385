//! Trae adapter: a single markdown rule document.

use super::{generated_at, PlatformAdapter};
use crate::domain::{Rule, RuleScope, RuleSet};
use crate::error::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct TraeAdapter;

impl TraeAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformAdapter for TraeAdapter {
    fn name(&self) -> &'static str {
        "trae"
    }

    fn default_output_path(&self) -> &'static str {
        ".trae/rules/project_rules.md"
    }

    fn convert(&self, rule_set: &RuleSet) -> Result<Vec<u8>> {
        Ok(render_markdown(rule_set, self.name()).into_bytes())
    }
}

fn section_heading(scope: RuleScope) -> (&'static str, &'static str) {
    match scope {
        RuleScope::Project => ("项目特定规则", "*这些规则具有最高优先级，适用于当前项目*"),
        RuleScope::Global => ("全局通用规则", "*这些规则适用于所有项目，具有中等优先级*"),
        RuleScope::Template => ("自定义模板规则", "*这些规则来自用户自定义模板*"),
    }
}

fn render_markdown(rule_set: &RuleSet, platform: &str) -> String {
    let meta = &rule_set.metadata;
    let mut out = String::new();

    out.push_str(&format!("# {} 项目规则集\n\n", meta.project_name));

    out.push_str("## 项目信息\n\n");
    out.push_str(&format!("- **项目名称**: {}\n", meta.project_name));
    out.push_str(&format!("- **技术栈**: {}\n", meta.tech_stacks.join(", ")));
    out.push_str(&format!("- **目标AI编辑器**: {}\n", meta.ai_editors.join(", ")));
    out.push_str(&format!("- **生成时间**: {}\n", generated_at(meta)));
    out.push_str(&format!("- **版本**: {}\n\n", meta.version));

    for scope in RuleScope::ALL {
        let mut rules = rule_set.enabled(scope).peekable();
        if rules.peek().is_none() {
            continue;
        }

        let (heading, caveat) = section_heading(scope);
        out.push_str(&format!("## {heading}\n\n"));
        out.push_str(&format!("{caveat}\n\n"));
        for rule in rules {
            write_rule(&mut out, rule);
        }
    }

    out.push_str("## 使用说明\n\n");
    out.push_str("本规则集由 unirule 工具自动生成，用于指导 AI 编辑器生成符合项目规范的代码。\n\n");
    out.push_str("### 规则优先级\n\n");
    out.push_str("1. **项目特定规则** - 最高优先级，覆盖其他规则\n");
    out.push_str("2. **全局通用规则** - 中等优先级，适用于所有项目\n");
    out.push_str("3. **自定义模板规则** - 可选，来自用户配置\n\n");
    out.push_str("### 更新规则\n\n");
    out.push_str(&format!(
        "如需更新规则，请修改 `.ruler` 目录下的相应文件，然后重新运行 `unirule generate --platform={platform}` 命令。\n"
    ));

    out
}

fn write_rule(out: &mut String, rule: &Rule) {
    out.push_str(&format!("### {}\n\n", rule.title));
    out.push_str(&format!(
        "**类型**: {}  |  **优先级**: {}  |  **标签**: {}\n\n",
        rule.rule_type,
        rule.priority,
        rule.tags.join(", ")
    ));
    out.push_str(&format!("{}\n\n", rule.description));
    out.push_str(&format!("**规则内容**:\n{}\n\n", rule.content));
}
