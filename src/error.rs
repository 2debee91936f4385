//! Error types for rule loading and conversion

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for rule operations
pub type Result<T> = std::result::Result<T, RuleError>;

/// Pipeline stage an error is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    ProjectRules,
    GlobalRules,
    TemplateRules,
    Metadata,
}

impl fmt::Display for LoadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LoadStage::ProjectRules => "project rules",
            LoadStage::GlobalRules => "global rules",
            LoadStage::TemplateRules => "template rules",
            LoadStage::Metadata => "metadata",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{} must contain a YAML mapping", .path.display())]
    NotAMapping { path: PathBuf },

    #[error("failed to list {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to load {stage}: {source}")]
    Stage {
        stage: LoadStage,
        #[source]
        source: Box<RuleError>,
    },

    #[error("unsupported platform \"{name}\", supported: {}", .supported.join(", "))]
    UnknownPlatform { name: String, supported: Vec<String> },

    #[error("failed to render {platform} output: {message}")]
    Render { platform: String, message: String },
}

impl RuleError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RuleError::Read { path: path.into(), source }
    }

    pub(crate) fn in_stage(self, stage: LoadStage) -> Self {
        RuleError::Stage { stage, source: Box::new(self) }
    }

    /// Stage the error was raised in, if it went through the loader.
    pub fn stage(&self) -> Option<LoadStage> {
        match self {
            RuleError::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_wrapper_prefixes_the_cause() {
        let err = RuleError::NotAMapping { path: PathBuf::from("config.yaml") }
            .in_stage(LoadStage::Metadata);
        assert_eq!(err.to_string(), "failed to load metadata: config.yaml must contain a YAML mapping");
        assert_eq!(err.stage(), Some(LoadStage::Metadata));
    }

    #[test]
    fn unknown_platform_lists_alternatives() {
        let err = RuleError::UnknownPlatform {
            name: "vim".to_string(),
            supported: vec!["cursor".to_string(), "trae".to_string()],
        };
        assert_eq!(err.to_string(), "unsupported platform \"vim\", supported: cursor, trae");
    }
}
