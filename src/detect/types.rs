//! Core types for declaration detection.

use serde::{Deserialize, Serialize};

/// Kind of annotatable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    /// Class, interface, enum or record header.
    Type,
    Constructor,
    Method,
    Field,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Type => "type",
            DeclarationKind::Constructor => "constructor",
            DeclarationKind::Method => "method",
            DeclarationKind::Field => "field",
        }
    }

    /// Check if this declaration takes parameters.
    pub fn is_callable(&self) -> bool {
        matches!(self, DeclarationKind::Constructor | DeclarationKind::Method)
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A source position eligible for a documentation comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSite {
    pub kind: DeclarationKind,
    /// Declared name (type, constructor, method or field identifier)
    pub name: String,
    /// Line index (0-indexed) in the original, pre-insertion buffer
    pub line: usize,
    /// Parameter names in declaration order (constructors and methods)
    pub parameters: Vec<String>,
    /// Whether a method returns a value (always false for non-methods)
    pub has_return_value: bool,
    /// Whether a type header declares type parameters (`<...>`)
    pub generic: bool,
}

impl DeclarationSite {
    pub fn new(kind: DeclarationKind, name: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            name: name.into(),
            line,
            parameters: Vec::new(),
            has_return_value: false,
            generic: false,
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<String>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_return_value(mut self, has_return_value: bool) -> Self {
        self.has_return_value = has_return_value;
        self
    }

    pub fn with_generic(mut self, generic: bool) -> Self {
        self.generic = generic;
        self
    }
}
