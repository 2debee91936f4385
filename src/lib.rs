//! unirule: one set of AI editor rules, converted per editor
//!
//! Rules live in a `.ruler` directory as markdown and YAML. The loader
//! turns them into a [`RuleSet`] and a [`PlatformAdapter`] renders that
//! set in the format a given editor reads.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod parse;
pub mod platform;
pub mod scaffold;

pub use domain::{Metadata, Rule, RuleScope, RuleSet, RuleType};
pub use error::{Result, RuleError};
pub use loader::{FileLoader, RuleLoader};
pub use platform::{PlatformAdapter, PlatformRegistry};
