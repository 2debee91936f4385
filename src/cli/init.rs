//! Init command implementation

use anyhow::{Context, Result};
use clap::Args;

use super::utils::{parse_csv, success, warning};
use crate::scaffold::{scaffold, GitignoreStatus, ProjectAnswers};

#[derive(Args)]
pub struct InitArgs {
    /// Rules directory to create, relative to the current directory
    #[arg(short, long, value_name = "DIR", default_value = ".ruler")]
    pub dir: String,

    /// Project name (defaults to the current directory's name)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Tech stacks (comma-separated, e.g. 'Go+Gin,MySQL,Redis')
    #[arg(short, long, value_name = "STACKS")]
    pub tech: Option<String>,

    /// Target AI editors (comma-separated, e.g. 'Trae,Cursor')
    #[arg(short, long, value_name = "EDITORS")]
    pub editor: Option<String>,

    /// Code style requirement written to requirements.md
    #[arg(long, value_name = "TEXT")]
    pub code_style: Option<String>,

    /// Security constraint written to requirements.md
    #[arg(long, value_name = "TEXT")]
    pub security: Option<String>,
}

pub fn run(args: InitArgs) -> Result<()> {
    let root = std::env::current_dir().context("Failed to resolve current directory")?;

    let default_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string());

    let mut answers = ProjectAnswers::new(args.name.unwrap_or(default_name));
    answers.tech_stacks = parse_csv(&args.tech).unwrap_or_default();
    answers.ai_editors = parse_csv(&args.editor).unwrap_or_default();
    if let Some(code_style) = args.code_style {
        answers.code_standards = code_style;
    }
    if let Some(security) = args.security {
        answers.security_constraints = security;
    }

    let report = scaffold(&root, &args.dir, &answers)?;

    success(format!(
        "{} created (global/project/templates)",
        report.rules_dir.display()
    ));
    match report.gitignore {
        GitignoreStatus::Added => success(format!(".gitignore now ignores {}/", args.dir)),
        GitignoreStatus::AlreadyIgnored => {}
        GitignoreStatus::Missing => {
            warning("No .gitignore found; rule files may end up in version control")
        }
    }
    success("Project requirements written to project/requirements.md and project/tech_stack.yaml");
    for file in &report.global_files {
        success(format!("Starter rules written to {}", file.display()));
    }

    Ok(())
}
