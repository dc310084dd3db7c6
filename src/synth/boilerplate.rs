//! Fixed boilerplate comments, one template per declaration kind.

use crate::detect::{DeclarationKind, DeclarationSite};

use super::{CommentBlock, Synthesizer};

/// Emits the same generic text for every declaration of a kind.
///
/// Method blocks always carry one generic `@param`, `@return` and `@throws`
/// line regardless of the actual signature.
#[derive(Debug, Default, Clone, Copy)]
pub struct Boilerplate;

impl Synthesizer for Boilerplate {
    fn name(&self) -> &'static str {
        "boilerplate"
    }

    fn synthesize(&self, site: &DeclarationSite) -> CommentBlock {
        match site.kind {
            DeclarationKind::Type => CommentBlock::builder()
                .line("This class is part of the application architecture.")
                .line("<p>")
                .line("It encapsulates specific functionality and should be well-documented")
                .line("to clarify its role and usage within the system.")
                .line("</p>")
                .build(),
            DeclarationKind::Constructor => CommentBlock::builder()
                .line("Constructs an instance of this class.")
                .line("<p>")
                .line("Further documentation should clarify how this constructor initializes")
                .line("the class and any important considerations.")
                .line("</p>")
                .blank()
                .line("@param param Description of parameter(s).")
                .build(),
            DeclarationKind::Method => CommentBlock::builder()
                .line("Executes the logic of this method.")
                .line("<p>")
                .line("Further documentation should describe the purpose of this method,")
                .line("its parameters, return value, and exceptions if any.")
                .line("</p>")
                .blank()
                .line("@param param Description of parameter(s).")
                .line("@return Description of the return value.")
                .line("@throws ExceptionType Description of exceptions thrown.")
                .build(),
            DeclarationKind::Field => CommentBlock::builder()
                .line("This attribute represents a part of the class state.")
                .line("<p>")
                .line("It should be documented to explain its role and constraints.")
                .line("</p>")
                .build(),
        }
    }
}
