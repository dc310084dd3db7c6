//! Annotation engine: planning and safe insertion of documentation comments.
//!
//! ```text
//! source ──▶ Detector ──▶ sites ──▶ plan() ──▶ AnnotationPlan ──▶ apply_plan() ──▶ text
//!                                     │  ▲
//!                         VetoGate ◀──┘  └── Synthesizer
//! ```
//!
//! Planning always inspects the original buffer; insertion happens once,
//! after planning, in ascending line order.

mod buffer;
mod documented;
mod error;
mod files;
mod insert;
mod planner;
mod runner;
mod veto;

pub use buffer::{without_bom, SourceBuffer, BOM};
pub use documented::is_documented;
pub use error::AnnotateError;
pub use files::{collect_files, exclusion_set, SOURCE_EXTENSION};
pub use insert::{apply_plan, insert_blocks};
pub use planner::{plan, AnnotationPlan, PlanOutcome, PlannedComment};
pub use runner::{Annotator, FileReport, FileStatus, InsertedComment, RunSummary, SourceOutcome};
pub use veto::VetoGate;
