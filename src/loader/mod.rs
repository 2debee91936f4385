//! Rule loading from a `.ruler` directory
//!
//! Layout consumed by [`FileLoader`]:
//!
//! ```text
//! <root>/project/requirements.md   optional
//! <root>/project/tech_stack.yaml   optional for rules, required for metadata
//! <root>/global/*.md               zero or more technology bundles
//! <root>/templates/                existence-checked only
//! <root>/config.yaml               required for metadata
//! ```
//!
//! Missing rule directories degrade to empty rule lists; missing or
//! malformed metadata inputs are hard errors.

use chrono::Utc;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::domain::{Metadata, Rule, RuleSet, RULESET_VERSION, UNKNOWN_PROJECT};
use crate::error::{LoadStage, Result, RuleError};
use crate::parse::{parse_global_file, parse_requirements};

pub mod defaults;

pub const PROJECT_DIR: &str = "project";
pub const GLOBAL_DIR: &str = "global";
pub const TEMPLATES_DIR: &str = "templates";
pub const REQUIREMENTS_FILE: &str = "requirements.md";
pub const TECH_STACK_FILE: &str = "tech_stack.yaml";
pub const CONFIG_FILE: &str = "config.yaml";

/// Source of the three rule scopes and the project metadata
pub trait RuleLoader {
    fn load_project_rules(&self) -> Result<Vec<Rule>>;
    fn load_global_rules(&self) -> Result<Vec<Rule>>;
    fn load_template_rules(&self) -> Result<Vec<Rule>>;
    fn load_metadata(&self) -> Result<Metadata>;

    /// Run every stage in order. The first failure aborts the load and is
    /// labelled with its stage.
    fn load_all_rules(&self) -> Result<RuleSet> {
        let project_rules =
            self.load_project_rules().map_err(|e| e.in_stage(LoadStage::ProjectRules))?;
        let global_rules =
            self.load_global_rules().map_err(|e| e.in_stage(LoadStage::GlobalRules))?;
        let template_rules =
            self.load_template_rules().map_err(|e| e.in_stage(LoadStage::TemplateRules))?;
        let metadata = self.load_metadata().map_err(|e| e.in_stage(LoadStage::Metadata))?;

        Ok(RuleSet { project_rules, global_rules, template_rules, metadata })
    }
}

/// Loads rules from flat files under a root rules directory
#[derive(Debug, Clone)]
pub struct FileLoader {
    base_path: PathBuf,
}

impl FileLoader {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn project_dir(&self) -> PathBuf {
        self.base_path.join(PROJECT_DIR)
    }

    fn tech_stack_path(&self) -> PathBuf {
        self.project_dir().join(TECH_STACK_FILE)
    }

    /// Tech stacks for global rule synthesis. Any failure yields an empty list.
    fn project_tech_stacks(&self) -> Vec<String> {
        let path = self.tech_stack_path();
        if !path.exists() {
            return Vec::new();
        }
        match read_yaml_mapping(&path) {
            Ok(mapping) => string_seq(&mapping, "tech_stacks"),
            Err(err) => {
                debug!(error = %err, "ignoring unreadable tech stack file");
                Vec::new()
            }
        }
    }

    fn load_global_files(&self, global_dir: &Path) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();

        let walker = WalkDir::new(global_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(RuleError::Walk { path: global_dir.to_path_buf(), source: err });
                }
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry in global rules");
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy();
            if !entry.file_type().is_file() || !name.ends_with(".md") {
                continue;
            }

            let content = match fs::read_to_string(entry.path()) {
                Ok(content) => content,
                Err(err) => {
                    warn!(file = %entry.path().display(), error = %err, "skipping unreadable global rule file");
                    continue;
                }
            };

            let parsed = parse_global_file(&content, &name);
            debug!(file = %name, rules = parsed.len(), "parsed global rule file");
            rules.extend(parsed);
        }

        Ok(rules)
    }
}

impl RuleLoader for FileLoader {
    fn load_project_rules(&self) -> Result<Vec<Rule>> {
        let project_dir = self.project_dir();
        if !project_dir.exists() {
            debug!(dir = %project_dir.display(), "no project rules directory");
            return Ok(Vec::new());
        }

        let requirements_path = project_dir.join(REQUIREMENTS_FILE);
        let requirements = if requirements_path.exists() {
            fs::read_to_string(&requirements_path)
                .map_err(|e| RuleError::read(&requirements_path, e))?
        } else {
            String::new()
        };

        let tech_stack_path = self.tech_stack_path();
        let tech_stacks = if tech_stack_path.exists() {
            string_seq(&read_yaml_mapping(&tech_stack_path)?, "tech_stacks")
        } else {
            Vec::new()
        };

        let mut rules = Vec::new();
        if !tech_stacks.is_empty() {
            rules.push(defaults::tech_stack_rule(&tech_stacks));
        }
        rules.extend(parse_requirements(&requirements));

        if rules.is_empty() {
            debug!("project directory produced no rules, using fallback rules");
            rules = defaults::project_fallback_rules();
        }

        Ok(rules)
    }

    fn load_global_rules(&self) -> Result<Vec<Rule>> {
        let global_dir = self.base_path.join(GLOBAL_DIR);
        if !global_dir.exists() {
            debug!(dir = %global_dir.display(), "no global rules directory");
            return Ok(Vec::new());
        }

        let file_rules = self.load_global_files(&global_dir)?;
        let tech_stacks = self.project_tech_stacks();

        let mut rules = defaults::global_baseline_rules();
        rules.extend(defaults::tech_specific_rules(&tech_stacks));
        rules.extend(file_rules);
        Ok(rules)
    }

    fn load_template_rules(&self) -> Result<Vec<Rule>> {
        let templates_dir = self.base_path.join(TEMPLATES_DIR);
        if !templates_dir.exists() {
            return Ok(Vec::new());
        }
        // Reserved for user-authored templates; nothing is parsed yet.
        Ok(Vec::new())
    }

    fn load_metadata(&self) -> Result<Metadata> {
        let tech_stack = read_yaml_mapping(&self.tech_stack_path())?;
        // Free-form, but it has to be there and be a mapping.
        read_yaml_mapping(&self.base_path.join(CONFIG_FILE))?;

        let now = Utc::now();
        Ok(Metadata {
            project_name: string_or(&tech_stack, "project_name", UNKNOWN_PROJECT),
            tech_stacks: string_seq(&tech_stack, "tech_stacks"),
            ai_editors: string_seq(&tech_stack, "ai_editors"),
            created_at: now,
            last_updated_at: now,
            version: RULESET_VERSION.to_string(),
        })
    }
}

/// Read a YAML document that must be a mapping. An empty document counts
/// as an empty mapping.
fn read_yaml_mapping(path: &Path) -> Result<Mapping> {
    let raw = fs::read_to_string(path).map_err(|e| RuleError::read(path, e))?;
    if raw.trim().is_empty() {
        return Ok(Mapping::new());
    }
    let value: Value = serde_yaml::from_str(&raw)
        .map_err(|source| RuleError::Yaml { path: path.to_path_buf(), source })?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(RuleError::NotAMapping { path: path.to_path_buf() }),
    }
}

fn string_or(mapping: &Mapping, key: &str, default: &str) -> String {
    mapping.get(key).and_then(Value::as_str).unwrap_or(default).to_string()
}

/// String items of a sequence value; anything else is dropped.
fn string_seq(mapping: &Mapping, key: &str) -> Vec<String> {
    mapping
        .get(key)
        .and_then(Value::as_sequence)
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}
