//! Global rule file parser.
//!
//! A global rule file is a technology bundle: `## ` sections whose bodies
//! are `- ` bullet lines. Anything else inside a section is ignored.

use super::classify::{global_rule_tags, global_rule_type};
use super::SECTION_PREFIX;
use crate::domain::Rule;

const BULLET_PREFIX: &str = "- ";
const GLOBAL_RULE_PRIORITY: u8 = 4;

/// Parse one global rule file. `filename` drives the technology tag.
pub fn parse_global_file(content: &str, filename: &str) -> Vec<Rule> {
    let mut rules = Vec::new();
    let mut current: Option<(Rule, Vec<&str>)> = None;

    for line in content.lines().map(str::trim) {
        if let Some(title) = line.strip_prefix(SECTION_PREFIX) {
            if let Some(done) = current.take() {
                rules.extend(finish(done));
            }
            current = Some((new_rule(title, filename), Vec::new()));
        } else if line.starts_with(BULLET_PREFIX) {
            if let Some((_, bullets)) = current.as_mut() {
                bullets.push(line);
            }
        }
    }

    if let Some(done) = current {
        rules.extend(finish(done));
    }

    rules
}

fn new_rule(title: &str, filename: &str) -> Rule {
    Rule::new(
        title,
        format!("来自 {} 的规则", filename),
        global_rule_type(title),
        String::new(),
        GLOBAL_RULE_PRIORITY,
    )
    .with_tags(global_rule_tags(title, filename))
}

fn finish((mut rule, bullets): (Rule, Vec<&str>)) -> Option<Rule> {
    if bullets.is_empty() {
        return None;
    }
    rule.content = bullets.join("\n");
    Some(rule)
}

#[cfg(test)]
mod tests {
    use super::parse_global_file;
    use crate::domain::RuleType;

    const GO_RULES: &str = "# Go 开发规范与最佳实践

## 代码规范
- 使用 gofmt 格式化代码
这一行不是列表项，会被忽略
- 遵循 Go 官方命名约定

## 错误处理
- 始终检查错误返回值

## 性能优化
- 使用 sync.Pool 复用对象
";

    #[test]
    fn one_rule_per_section_with_bullets() {
        let rules = parse_global_file(GO_RULES, "go_rules.md");
        let titles: Vec<&str> = rules.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["代码规范", "错误处理", "性能优化"]);
        assert_eq!(rules[0].content, "- 使用 gofmt 格式化代码\n- 遵循 Go 官方命名约定");
        assert!(rules.iter().all(|r| r.priority == 4 && r.enabled));
    }

    #[test]
    fn types_and_tags_follow_title_and_filename() {
        let rules = parse_global_file(GO_RULES, "go_rules.md");
        assert_eq!(rules[0].rule_type, RuleType::CodeStyle);
        assert_eq!(rules[0].tags, vec!["go", "code_style"]);
        assert_eq!(rules[1].rule_type, RuleType::General);
        assert_eq!(rules[1].tags, vec!["go"]);
        assert_eq!(rules[2].rule_type, RuleType::Performance);
        assert_eq!(rules[2].description, "来自 go_rules.md 的规则");
    }

    #[test]
    fn sections_without_bullets_are_dropped() {
        let with_empty = format!("{GO_RULES}\n## 注意事项\n只有说明文字\n");
        assert_eq!(parse_global_file(&with_empty, "go_rules.md").len(), 3);

        let middle_empty = "## 空\n说明\n## 测试\n- 编写单元测试\n";
        let rules = parse_global_file(middle_empty, "notes.md");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].rule_type, RuleType::Testing);
        assert_eq!(rules[0].tags, vec!["testing"]);
    }

    #[test]
    fn bullets_before_first_section_are_ignored() {
        assert!(parse_global_file("- stray bullet\n", "x.md").is_empty());
    }
}
