//! Documentation comment synthesis.
//!
//! A [`Synthesizer`] turns a detected declaration into a Javadoc block.
//! Three strategies are available:
//!
//! - [`Boilerplate`]: fixed generic text per declaration kind
//! - [`Randomized`]: random phrase templates filled with the raw name
//! - [`NameDerived`]: phrase chosen from the name's role suffix or leading verb

mod boilerplate;
mod name_derived;
mod randomized;

pub use boilerplate::Boilerplate;
pub use name_derived::{humanize, NameDerived};
pub use randomized::Randomized;

use serde::{Deserialize, Serialize};

use crate::detect::DeclarationSite;

/// Javadoc block opener.
pub const BLOCK_OPEN: &str = "/**";
/// Javadoc block closer (with the conventional leading space).
pub const BLOCK_CLOSE: &str = " */";

/// A complete documentation comment, one entry per physical line.
///
/// Lines carry no indentation and no line terminator; see [`CommentBlock::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    lines: Vec<String>,
}

impl CommentBlock {
    /// Start a new block builder.
    pub fn builder() -> CommentBuilder {
        CommentBuilder::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of physical lines, delimiters included.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render every line with the given indent and line terminator.
    pub fn render(&self, indent: &str, newline: &str) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| format!("{}{}{}", indent, line, newline))
            .collect()
    }
}

/// Accumulates body lines between the block delimiters.
#[derive(Debug, Default)]
pub struct CommentBuilder {
    body: Vec<String>,
}

impl CommentBuilder {
    /// Add a body line (prefixed with ` * `).
    pub fn line(mut self, text: impl AsRef<str>) -> Self {
        self.body.push(format!(" * {}", text.as_ref()));
        self
    }

    /// Add an empty body line (` *`).
    pub fn blank(mut self) -> Self {
        self.body.push(" *".to_string());
        self
    }

    pub fn build(self) -> CommentBlock {
        let mut lines = Vec::with_capacity(self.body.len() + 2);
        lines.push(BLOCK_OPEN.to_string());
        lines.extend(self.body);
        lines.push(BLOCK_CLOSE.to_string());
        CommentBlock { lines }
    }
}

/// Comment synthesis strategy trait.
pub trait Synthesizer: Send + Sync {
    /// Return the strategy identifier.
    fn name(&self) -> &'static str;

    /// Produce a documentation block for a declaration.
    fn synthesize(&self, site: &DeclarationSite) -> CommentBlock;
}

/// Available synthesis strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    Boilerplate,
    Randomized,
    NameDerived,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Boilerplate => "boilerplate",
            Strategy::Randomized => "randomized",
            Strategy::NameDerived => "name-derived",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "boilerplate" => Ok(Strategy::Boilerplate),
            "randomized" | "random" => Ok(Strategy::Randomized),
            "name-derived" | "name_derived" | "named" => Ok(Strategy::NameDerived),
            _ => Err(format!(
                "unknown strategy: {} (expected 'boilerplate', 'randomized' or 'name-derived')",
                s
            )),
        }
    }
}

/// Build a synthesizer for the given strategy.
///
/// `seed` makes the randomized strategy reproducible; other strategies ignore it.
pub fn synthesizer_for(strategy: Strategy, seed: Option<u64>) -> Box<dyn Synthesizer> {
    match strategy {
        Strategy::Boilerplate => Box::new(Boilerplate),
        Strategy::Randomized => Box::new(match seed {
            Some(seed) => Randomized::with_seed(seed),
            None => Randomized::new(),
        }),
        Strategy::NameDerived => Box::new(NameDerived),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_wraps_body() {
        let block = CommentBlock::builder().line("Hello.").blank().line("@return x").build();
        assert_eq!(
            block.lines(),
            &["/**", " * Hello.", " *", " * @return x", " */"]
        );
        assert_eq!(block.len(), 5);
    }

    #[test]
    fn test_render_indent_and_newline() {
        let block = CommentBlock::builder().line("Doc.").build();
        let rendered = block.render("    ", "\r\n");
        assert_eq!(rendered, vec!["    /**\r\n", "     * Doc.\r\n", "     */\r\n"]);
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("name-derived".parse::<Strategy>().unwrap(), Strategy::NameDerived);
        assert_eq!("RANDOM".parse::<Strategy>().unwrap(), Strategy::Randomized);
        assert!("fancy".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_strategy_yaml_names() {
        let s: Strategy = serde_yaml::from_str("name-derived").unwrap();
        assert_eq!(s, Strategy::NameDerived);
    }
}
