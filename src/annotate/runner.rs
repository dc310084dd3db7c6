//! Per-file driver and run loop.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::detect::{detector_for, DeclarationKind, Detector};
use crate::synth::{synthesizer_for, Synthesizer};

use super::{apply_plan, plan, without_bom, AnnotateError, PlanOutcome, SourceBuffer, VetoGate};

/// A comment added (or, in dry-run mode, that would be added).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertedComment {
    pub kind: DeclarationKind,
    pub name: String,
    /// Line (1-indexed) of the declaration in the original file
    pub line: usize,
    /// Number of comment lines
    pub lines: usize,
}

/// Result of annotating source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    Annotated {
        text: String,
        comments: Vec<InsertedComment>,
    },
    /// Every declaration is already documented.
    Unchanged,
    Vetoed { reason: String },
}

/// Final state of one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Comments were added (written unless in dry-run mode)
    Updated,
    Unchanged,
    Vetoed,
    /// Could not be parsed
    Skipped,
    /// I/O or encoding failure
    Failed,
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FileStatus::Updated => "updated",
            FileStatus::Unchanged => "unchanged",
            FileStatus::Vetoed => "vetoed",
            FileStatus::Skipped => "skipped",
            FileStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of processing one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub status: FileStatus,
    /// Whether the file was rewritten on disk
    pub written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<InsertedComment>,
}

impl FileReport {
    fn new(path: &Path, status: FileStatus) -> Self {
        Self {
            path: path.to_string_lossy().to_string(),
            status,
            written: false,
            reason: None,
            comments: Vec::new(),
        }
    }

    fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Results of a whole run, sorted by path.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub dry_run: bool,
    pub files: Vec<FileReport>,
}

impl RunSummary {
    pub fn scanned(&self) -> usize {
        self.files.len()
    }

    pub fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }

    /// Total comments added across all files.
    pub fn comments_added(&self) -> usize {
        self.files.iter().map(|f| f.comments.len()).sum()
    }

    pub fn has_failures(&self) -> bool {
        self.count(FileStatus::Failed) > 0
    }
}

/// Detects, plans and inserts documentation comments.
pub struct Annotator {
    detector: Box<dyn Detector>,
    synthesizer: Box<dyn Synthesizer>,
    veto: VetoGate,
    dry_run: bool,
    parallel: bool,
}

impl Annotator {
    /// Create an annotator from explicit parts.
    pub fn new(detector: Box<dyn Detector>, synthesizer: Box<dyn Synthesizer>) -> Self {
        Self {
            detector,
            synthesizer,
            veto: VetoGate::default(),
            dry_run: false,
            parallel: false,
        }
    }

    /// Create an annotator from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let detector = detector_for(config.detector)?;
        let synthesizer = synthesizer_for(config.strategy, config.seed);
        Ok(Self::new(detector, synthesizer)
            .veto(config.veto.clone())
            .dry_run(config.dry_run)
            .parallel(config.parallel))
    }

    pub fn veto(mut self, veto: VetoGate) -> Self {
        self.veto = veto;
        self
    }

    /// Plan and report without writing files.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process files on the rayon thread pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Annotate source text without touching the filesystem.
    ///
    /// `path` is used for the veto gate's file-name rules and for errors.
    pub fn annotate_source(&self, path: &Path, source: &str) -> Result<SourceOutcome, AnnotateError> {
        let sites = self
            .detector
            .detect(without_bom(source))
            .map_err(|e| AnnotateError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut buffer = SourceBuffer::parse(source);
        let annotation_plan = match plan(path, &buffer, sites, self.synthesizer.as_ref(), &self.veto) {
            PlanOutcome::Planned(p) => p,
            PlanOutcome::Vetoed(reason) => return Ok(SourceOutcome::Vetoed { reason }),
        };

        if annotation_plan.is_empty() {
            return Ok(SourceOutcome::Unchanged);
        }

        let entries = annotation_plan.into_sorted();
        apply_plan(&mut buffer, &entries);

        let comments = entries
            .iter()
            .map(|e| InsertedComment {
                kind: e.kind,
                name: e.name.clone(),
                line: e.line + 1,
                lines: e.block.len(),
            })
            .collect();

        Ok(SourceOutcome::Annotated {
            text: buffer.to_text(),
            comments,
        })
    }

    /// Annotate one file, rewriting it only when comments were added.
    pub fn annotate_file(&self, path: &Path) -> Result<FileReport, AnnotateError> {
        let bytes = std::fs::read(path).map_err(|source| AnnotateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8(bytes).map_err(|_| AnnotateError::Encoding {
            path: path.to_path_buf(),
        })?;

        match self.annotate_source(path, &source)? {
            SourceOutcome::Unchanged => Ok(FileReport::new(path, FileStatus::Unchanged)),
            SourceOutcome::Vetoed { reason } => {
                Ok(FileReport::new(path, FileStatus::Vetoed).with_reason(reason))
            }
            SourceOutcome::Annotated { text, comments } => {
                let mut report = FileReport::new(path, FileStatus::Updated);
                report.comments = comments;
                if !self.dry_run {
                    std::fs::write(path, text).map_err(|source| AnnotateError::Io {
                        path: path.to_path_buf(),
                        source,
                    })?;
                    report.written = true;
                }
                Ok(report)
            }
        }
    }

    /// Annotate every file, recording per-file failures instead of stopping.
    pub fn run(&self, files: &[PathBuf]) -> RunSummary {
        let mut reports: Vec<FileReport> = if self.parallel {
            use rayon::prelude::*;
            files.par_iter().map(|p| self.process(p)).collect()
        } else {
            files.iter().map(|p| self.process(p)).collect()
        };

        // Sort by path for deterministic ordering
        reports.sort_by(|a, b| a.path.cmp(&b.path));

        RunSummary {
            dry_run: self.dry_run,
            files: reports,
        }
    }

    fn process(&self, path: &Path) -> FileReport {
        match self.annotate_file(path) {
            Ok(report) => report,
            Err(e) if e.is_parse_error() => {
                eprintln!("Warning: skipping {}", e);
                FileReport::new(e.path(), FileStatus::Skipped).with_reason(e.to_string())
            }
            Err(e) => {
                eprintln!("Warning: {}", e);
                FileReport::new(e.path(), FileStatus::Failed).with_reason(e.to_string())
            }
        }
    }
}
