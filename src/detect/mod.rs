//! Declaration detection for Java source files.
//!
//! Two interchangeable strategies implement [`Detector`]:
//!
//! - [`LineScanner`]: regex shape rules applied to each physical line
//! - `StructuralParser`: tree-sitter-java syntax tree (feature `tree-sitter`)
//!
//! Both yield [`DeclarationSite`] values in ascending line order.

mod line_scanner;
#[cfg(feature = "tree-sitter")]
mod structural;
mod types;

pub use line_scanner::{classify_line, LineScanner};
#[cfg(feature = "tree-sitter")]
pub use structural::StructuralParser;
pub use types::{DeclarationKind, DeclarationSite};

use serde::{Deserialize, Serialize};

/// Lazy, one-shot sequence of detected declarations.
pub type Sites<'a> = Box<dyn Iterator<Item = DeclarationSite> + 'a>;

/// Declaration detector trait.
pub trait Detector: Send + Sync {
    /// Return the strategy identifier (e.g., "line", "structural").
    fn name(&self) -> &'static str;

    /// Detect declaration sites in source text.
    ///
    /// Returns an error only when the whole file cannot be analyzed.
    /// Individual unrecognized lines or nodes are skipped silently.
    fn detect<'a>(&self, source: &'a str) -> anyhow::Result<Sites<'a>>;
}

/// Available detection strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    #[default]
    Line,
    Structural,
}

impl DetectorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectorKind::Line => "line",
            DetectorKind::Structural => "structural",
        }
    }
}

impl std::fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DetectorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(DetectorKind::Line),
            "structural" | "tree" | "ast" => Ok(DetectorKind::Structural),
            _ => Err(format!(
                "unknown detector: {} (expected 'line' or 'structural')",
                s
            )),
        }
    }
}

/// Build a detector for the given strategy.
pub fn detector_for(kind: DetectorKind) -> anyhow::Result<Box<dyn Detector>> {
    match kind {
        DetectorKind::Line => Ok(Box::new(LineScanner::new())),
        #[cfg(feature = "tree-sitter")]
        DetectorKind::Structural => Ok(Box::new(StructuralParser::new())),
        #[cfg(not(feature = "tree-sitter"))]
        DetectorKind::Structural => {
            anyhow::bail!("structural detector requires the 'tree-sitter' feature")
        }
    }
}
