//! Per-file veto gate.
//!
//! Some files are out of scope as a whole: data-transfer and XML-binding
//! classes (by file-name suffix) and generic primary types. The gate is
//! consulted once, at the first type declaration, and vetoes the entire
//! file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::detect::{DeclarationKind, DeclarationSite};

/// All-or-nothing file exclusion rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VetoGate {
    /// Whether the gate is active at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// File stems ending in any of these suffixes are vetoed (e.g. "DTO")
    #[serde(default = "default_suffixes")]
    pub file_suffixes: Vec<String>,
    /// Veto files whose primary type declares type parameters
    #[serde(default = "default_true")]
    pub generic_types: bool,
}

fn default_true() -> bool {
    true
}

fn default_suffixes() -> Vec<String> {
    vec!["DTO".to_string(), "XML".to_string()]
}

impl Default for VetoGate {
    fn default() -> Self {
        Self {
            enabled: true,
            file_suffixes: default_suffixes(),
            generic_types: true,
        }
    }
}

impl VetoGate {
    /// A gate that never vetoes.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Check a type declaration. Returns the veto reason, if any.
    pub fn check(&self, path: &Path, site: &DeclarationSite) -> Option<String> {
        if !self.enabled || site.kind != DeclarationKind::Type {
            return None;
        }

        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        if let Some(suffix) = self
            .file_suffixes
            .iter()
            .find(|suffix| !suffix.is_empty() && stem.ends_with(suffix.as_str()))
        {
            return Some(format!("file name ends with {:?}", suffix));
        }

        if self.generic_types && site.generic {
            return Some(format!("type {} declares type parameters", site.name));
        }

        None
    }
}
