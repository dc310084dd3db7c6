//! Docfill - Javadoc gap filler.
//!
//! Docfill scans Java sources and inserts synthesized documentation
//! comments above public declarations that have none. It never compiles
//! or type-checks the code; it recognizes declaration sites and rewrites
//! the text around them.
//!
//! # Architecture
//!
//! - `detect`: declaration detectors (line-shape regexes or tree-sitter)
//! - `synth`: comment synthesizers (boilerplate, randomized, name-derived)
//! - `annotate`: planning, veto gate, insertion engine and the file runner
//! - `config`: YAML configuration schema
//! - `report`: output formatting (pretty, JSON)
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use docfill::{Annotator, Boilerplate, LineScanner, SourceOutcome};
//!
//! let annotator = Annotator::new(Box::new(LineScanner), Box::new(Boilerplate));
//! let outcome = annotator
//!     .annotate_source(Path::new("Foo.java"), "public class Foo {\n}\n")
//!     .unwrap();
//! assert!(matches!(outcome, SourceOutcome::Annotated { .. }));
//! ```

pub mod annotate;
pub mod cli;
pub mod config;
pub mod detect;
pub mod report;
pub mod synth;

pub use annotate::{
    AnnotateError, Annotator, FileReport, FileStatus, RunSummary, SourceOutcome, VetoGate,
};
pub use config::Config;
pub use detect::{detector_for, DeclarationKind, DeclarationSite, Detector, DetectorKind, LineScanner};
#[cfg(feature = "tree-sitter")]
pub use detect::StructuralParser;
pub use synth::{
    synthesizer_for, Boilerplate, CommentBlock, NameDerived, Randomized, Strategy, Synthesizer,
};
