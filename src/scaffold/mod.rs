//! `.ruler` directory scaffolding for `init`

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::RulerConfig;
use crate::domain::TechCategory;
use crate::loader::{CONFIG_FILE, GLOBAL_DIR, PROJECT_DIR, REQUIREMENTS_FILE, TECH_STACK_FILE, TEMPLATES_DIR};

pub mod templates;

pub const DEFAULT_CODE_STANDARDS: &str = "函数命名采用 snake_case，每行代码不超过 80 字符";
pub const DEFAULT_SECURITY_CONSTRAINTS: &str = "敏感数据（如密码）需加密存储";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Answers that would otherwise be collected interactively
#[derive(Debug, Clone)]
pub struct ProjectAnswers {
    pub project_name: String,
    pub tech_stacks: Vec<String>,
    pub ai_editors: Vec<String>,
    pub code_standards: String,
    pub security_constraints: String,
}

impl ProjectAnswers {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            tech_stacks: Vec::new(),
            ai_editors: Vec::new(),
            code_standards: DEFAULT_CODE_STANDARDS.to_string(),
            security_constraints: DEFAULT_SECURITY_CONSTRAINTS.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitignoreStatus {
    /// No `.gitignore` next to the rules directory
    Missing,
    AlreadyIgnored,
    Added,
}

/// What `scaffold` wrote
#[derive(Debug)]
pub struct ScaffoldReport {
    pub rules_dir: PathBuf,
    pub gitignore: GitignoreStatus,
    pub global_files: Vec<PathBuf>,
}

#[derive(Serialize)]
struct TechStackFile<'a> {
    project_name: &'a str,
    tech_stacks: &'a [String],
    ai_editors: &'a [String],
    created_at: String,
}

/// Create the rules directory under `project_root` and fill it.
///
/// Existing files are overwritten; directories are created as needed.
pub fn scaffold(project_root: &Path, dir_name: &str, answers: &ProjectAnswers) -> Result<ScaffoldReport> {
    let rules_dir = project_root.join(dir_name);
    create_rules_dirs(&rules_dir)?;
    let gitignore = patch_gitignore(project_root, dir_name)?;

    let now = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let project_dir = rules_dir.join(PROJECT_DIR);
    write_file(&project_dir.join(REQUIREMENTS_FILE), &requirements_document(answers, &now))?;

    let tech_stack = TechStackFile {
        project_name: &answers.project_name,
        tech_stacks: &answers.tech_stacks,
        ai_editors: &answers.ai_editors,
        created_at: now.clone(),
    };
    let tech_stack_yaml = serde_yaml::to_string(&tech_stack).context("Failed to serialize tech stack")?;
    write_file(&project_dir.join(TECH_STACK_FILE), &tech_stack_yaml)?;

    let config = RulerConfig { last_init_time: Some(now), ..RulerConfig::default() };
    let config_yaml = serde_yaml::to_string(&config).context("Failed to serialize config")?;
    write_file(&rules_dir.join(CONFIG_FILE), &config_yaml)?;

    let global_files = write_global_rule_files(&rules_dir.join(GLOBAL_DIR), &answers.tech_stacks)?;

    Ok(ScaffoldReport { rules_dir, gitignore, global_files })
}

pub fn create_rules_dirs(rules_dir: &Path) -> Result<()> {
    for sub in [GLOBAL_DIR, PROJECT_DIR, TEMPLATES_DIR] {
        let dir = rules_dir.join(sub);
        fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    Ok(())
}

/// Append `<dir_name>/` to an existing `.gitignore` unless it is already there.
pub fn patch_gitignore(project_root: &Path, dir_name: &str) -> Result<GitignoreStatus> {
    let path = project_root.join(".gitignore");
    if !path.exists() {
        return Ok(GitignoreStatus::Missing);
    }

    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let entry = format!("{}/", dir_name.trim_end_matches('/'));
    if content.lines().any(|line| line.trim() == entry) {
        return Ok(GitignoreStatus::AlreadyIgnored);
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let separator = if content.is_empty() || content.ends_with('\n') { "" } else { "\n" };
    writeln!(file, "{separator}{entry}").with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(GitignoreStatus::Added)
}

/// One starter file per recognised tech category. Stacks sharing a
/// category share a file; the last one declared wins.
pub fn write_global_rule_files(global_dir: &Path, tech_stacks: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: BTreeMap<PathBuf, String> = BTreeMap::new();
    for tech in tech_stacks {
        let Some(category) = TechCategory::classify(tech) else {
            debug!(tech = %tech, "no starter rules for tech stack");
            continue;
        };
        let path = global_dir.join(format!("{}_rules.md", category.file_stem()));
        files.insert(path, templates::global_rule_file(category, tech));
    }

    for (path, body) in &files {
        write_file(path, body)?;
    }
    Ok(files.into_keys().collect())
}

fn requirements_document(answers: &ProjectAnswers, now: &str) -> String {
    format!(
        "# {name} 项目需求文档

## 项目基本信息
- 项目名称：{name}
- 初始化时间：{now}

## 技术栈
{stacks}

## 代码规范
{code}

## 安全约束
{security}

## 目标 AI 编辑器
{editors}
",
        name = answers.project_name,
        stacks = bullet_list(&answers.tech_stacks),
        code = answers.code_standards,
        security = answers.security_constraints,
        editors = bullet_list(&answers.ai_editors),
    )
}

fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return "暂无配置".to_string();
    }
    items.iter().map(|item| format!("- {item}")).collect::<Vec<_>>().join("\n")
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
