//! Markdown rule source parsing

pub mod classify;
pub mod global;
pub mod requirements;

pub use classify::classify_section;
pub use global::parse_global_file;
pub use requirements::parse_requirements;

/// Both document kinds use level-two headers as the unit of parsing.
pub(crate) const SECTION_PREFIX: &str = "## ";
