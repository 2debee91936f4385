//! Keyword tables mapping section titles to rule types and tags.
//!
//! Every table is an ordered slice checked front to back against the
//! lowercased title; the first entry with a matching keyword wins.

use crate::domain::RuleType;

/// Requirement sections consumed by field-specific extraction instead of
/// generic section-to-rule conversion. Exact match.
pub const SUPPRESSED_SECTIONS: &[&str] = &["项目基本信息", "技术栈", "目标 AI 编辑器"];

/// Titles containing either keyword get the top priority.
pub const HIGH_PRIORITY_KEYWORDS: &[&str] = &["安全", "性能"];

struct SectionCategory {
    keywords: &'static [&'static str],
    rule_type: RuleType,
    tags: &'static [&'static str],
}

const SECTION_CATEGORIES: &[SectionCategory] = &[
    SectionCategory {
        keywords: &["代码规范", "编码规范", "code style", "coding standard"],
        rule_type: RuleType::CodeStyle,
        tags: &["code", "style", "naming"],
    },
    SectionCategory {
        keywords: &["安全约束", "安全规范", "security"],
        rule_type: RuleType::Security,
        tags: &["security", "encryption"],
    },
    SectionCategory {
        keywords: &["性能", "优化", "performance", "optimization"],
        rule_type: RuleType::Performance,
        tags: &["performance", "optimization"],
    },
    SectionCategory {
        keywords: &["测试", "单元测试", "testing"],
        rule_type: RuleType::Testing,
        tags: &["testing", "unit_test"],
    },
    SectionCategory {
        keywords: &["部署", "运维", "deployment", "devops"],
        rule_type: RuleType::Deployment,
        tags: &["deployment", "devops"],
    },
    SectionCategory {
        keywords: &["数据库", "存储", "database", "storage"],
        rule_type: RuleType::Database,
        tags: &["database", "storage"],
    },
    SectionCategory {
        keywords: &["缓存", "redis", "cache"],
        rule_type: RuleType::Cache,
        tags: &["cache", "redis"],
    },
    SectionCategory {
        keywords: &["接口", "api"],
        rule_type: RuleType::Api,
        tags: &["api", "interface"],
    },
    SectionCategory {
        keywords: &["文档", "注释", "documentation", "comment"],
        rule_type: RuleType::Documentation,
        tags: &["documentation", "comments"],
    },
];

const GENERAL_TAGS: &[&str] = &["general", "requirements"];

/// Global rule file titles: smaller branch set, type only.
const GLOBAL_TITLE_TYPES: &[(&str, RuleType)] = &[
    ("安全", RuleType::Security),
    ("性能", RuleType::Performance),
    ("代码", RuleType::CodeStyle),
    ("测试", RuleType::Testing),
    ("部署", RuleType::Deployment),
    ("数据库", RuleType::Database),
    ("缓存", RuleType::Cache),
];

/// Global rule file titles contributing one extra tag.
const GLOBAL_TITLE_TAGS: &[(&str, &str)] = &[
    ("安全", "security"),
    ("性能", "performance"),
    ("代码", "code_style"),
    ("测试", "testing"),
];

/// Filename markers naming the technology a global rule file belongs to.
const FILENAME_TECH_TAGS: &[&str] =
    &["php", "go", "java", "python", "nodejs", "frontend", "database", "cache", "devops"];

/// Classify a requirements section title.
///
/// The lowercased title is always appended as the last tag.
pub fn classify_section(title: &str) -> (RuleType, Vec<String>) {
    let lower = title.to_lowercase();
    let (rule_type, tags) = SECTION_CATEGORIES
        .iter()
        .find(|category| category.keywords.iter().any(|kw| lower.contains(kw)))
        .map(|category| (category.rule_type, category.tags))
        .unwrap_or((RuleType::General, GENERAL_TAGS));

    let mut tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
    tags.push(lower);
    (rule_type, tags)
}

pub fn is_suppressed_section(title: &str) -> bool {
    SUPPRESSED_SECTIONS.contains(&title)
}

pub fn section_priority(title: &str) -> u8 {
    let lower = title.to_lowercase();
    if HIGH_PRIORITY_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        5
    } else {
        4
    }
}

pub fn global_rule_type(title: &str) -> RuleType {
    let lower = title.to_lowercase();
    GLOBAL_TITLE_TYPES
        .iter()
        .find(|(kw, _)| lower.contains(kw))
        .map(|(_, rule_type)| *rule_type)
        .unwrap_or(RuleType::General)
}

/// Technology tag from the filename, then a title tag; either may be absent.
pub fn global_rule_tags(title: &str, filename: &str) -> Vec<String> {
    let mut tags = Vec::with_capacity(2);

    let filename = filename.to_lowercase();
    if let Some(tech) = FILENAME_TECH_TAGS.iter().find(|marker| filename.contains(*marker)) {
        tags.push(tech.to_string());
    }

    let title = title.to_lowercase();
    if let Some((_, tag)) = GLOBAL_TITLE_TAGS.iter().find(|(kw, _)| title.contains(kw)) {
        tags.push(tag.to_string());
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_sections() {
        assert_eq!(classify_section("代码规范").0, RuleType::CodeStyle);
        assert_eq!(classify_section("安全约束").0, RuleType::Security);
        assert_eq!(classify_section("性能要求").0, RuleType::Performance);
        assert_eq!(classify_section("单元测试").0, RuleType::Testing);
        assert_eq!(classify_section("部署流程").0, RuleType::Deployment);
        assert_eq!(classify_section("数据存储").0, RuleType::Database);
        assert_eq!(classify_section("Redis 使用").0, RuleType::Cache);
        assert_eq!(classify_section("API 设计").0, RuleType::Api);
        assert_eq!(classify_section("注释要求").0, RuleType::Documentation);
        assert_eq!(classify_section("其他").0, RuleType::General);
    }

    #[test]
    fn declared_order_breaks_ties() {
        // Matches both the performance and database keyword sets.
        let (rule_type, tags) = classify_section("数据库性能");
        assert_eq!(rule_type, RuleType::Performance);
        assert_eq!(tags, vec!["performance", "optimization", "数据库性能"]);

        // "安全" alone is not a security keyword for requirement sections.
        assert_eq!(classify_section("安全").0, RuleType::General);
    }

    #[test]
    fn lowercased_title_is_appended_as_tag() {
        let (_, tags) = classify_section("Misc Notes");
        assert_eq!(tags, vec!["general", "requirements", "misc notes"]);
    }

    #[test]
    fn priority_depends_on_security_and_performance_keywords() {
        assert_eq!(section_priority("安全约束"), 5);
        assert_eq!(section_priority("接口性能"), 5);
        assert_eq!(section_priority("代码规范"), 4);
    }

    #[test]
    fn suppressed_sections_need_exact_match() {
        assert!(is_suppressed_section("技术栈"));
        assert!(is_suppressed_section("目标 AI 编辑器"));
        assert!(!is_suppressed_section("技术栈说明"));
    }

    #[test]
    fn global_tags_combine_filename_and_title() {
        assert_eq!(global_rule_tags("安全与实践", "php_rules.md"), vec!["php", "security"]);
        assert_eq!(global_rule_tags("基础规则", "GO_RULES.md"), vec!["go"]);
        assert!(global_rule_tags("基础规则", "misc.md").is_empty());
        assert_eq!(global_rule_type("性能优化"), RuleType::Performance);
        assert_eq!(global_rule_type("文件组织"), RuleType::General);
    }
}
