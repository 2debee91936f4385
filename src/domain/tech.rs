//! Technology stack categories.
//!
//! A declared tech stack string such as `"Go+Gin"` maps to at most one
//! category. Matching is a case-sensitive substring check in table order,
//! so `"JavaScript"` lands in [`TechCategory::Java`].

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechCategory {
    Php,
    Go,
    Java,
    Python,
    Node,
    Frontend,
    Database,
    Cache,
    DevOps,
}

/// Ordered (markers, category) table; first match wins.
const TECH_MARKERS: &[(&[&str], TechCategory)] = &[
    (&["PHP"], TechCategory::Php),
    (&["Go"], TechCategory::Go),
    (&["Java"], TechCategory::Java),
    (&["Python"], TechCategory::Python),
    (&["Node.js"], TechCategory::Node),
    (&["React", "Vue"], TechCategory::Frontend),
    (&["MySQL", "PostgreSQL"], TechCategory::Database),
    (&["Redis", "Memcached"], TechCategory::Cache),
    (&["Docker", "Kubernetes"], TechCategory::DevOps),
];

impl TechCategory {
    pub fn classify(tech: &str) -> Option<Self> {
        TECH_MARKERS
            .iter()
            .find(|(markers, _)| markers.iter().any(|marker| tech.contains(marker)))
            .map(|(_, category)| *category)
    }

    /// File stem used for the scaffolded `global/<stem>_rules.md` file.
    ///
    /// The stem doubles as the filename marker the global file parser
    /// turns back into a technology tag.
    pub fn file_stem(&self) -> &'static str {
        match self {
            TechCategory::Php => "php",
            TechCategory::Go => "go",
            TechCategory::Java => "java",
            TechCategory::Python => "python",
            TechCategory::Node => "nodejs",
            TechCategory::Frontend => "frontend",
            TechCategory::Database => "database",
            TechCategory::Cache => "cache",
            TechCategory::DevOps => "devops",
        }
    }
}
