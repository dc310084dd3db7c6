//! Annotation planning: decide which declarations get which comment.

use std::collections::HashSet;
use std::path::Path;

use crate::detect::{DeclarationKind, DeclarationSite, Sites};
use crate::synth::{CommentBlock, Synthesizer};

use super::{is_documented, SourceBuffer, VetoGate};

/// A comment scheduled for insertion above an original line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedComment {
    /// Target line (0-indexed) in the original buffer
    pub line: usize,
    pub kind: DeclarationKind,
    pub name: String,
    pub block: CommentBlock,
}

/// Comments planned for one file, at most one per original line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationPlan {
    entries: Vec<PlannedComment>,
}

impl AnnotationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PlannedComment] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an entry. Returns false if the line already has one.
    pub fn push(&mut self, comment: PlannedComment) -> bool {
        if self.entries.iter().any(|e| e.line == comment.line) {
            return false;
        }
        self.entries.push(comment);
        true
    }

    /// Entries in ascending target-line order (stable).
    pub fn into_sorted(mut self) -> Vec<PlannedComment> {
        self.entries.sort_by_key(|e| e.line);
        self.entries
    }
}

/// Result of planning a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutcome {
    Planned(AnnotationPlan),
    /// The veto gate rejected the file; nothing may be inserted.
    Vetoed(String),
}

/// Plan comments for every undocumented declaration.
///
/// All documentation checks run against the original buffer. The veto gate
/// is consulted at the first type declaration; a veto discards everything
/// planned so far.
pub fn plan(
    path: &Path,
    buffer: &SourceBuffer,
    sites: Sites<'_>,
    synthesizer: &dyn Synthesizer,
    veto: &VetoGate,
) -> PlanOutcome {
    let mut plan = AnnotationPlan::new();
    let mut claimed: HashSet<usize> = HashSet::new();
    let mut veto_checked = false;

    for site in sites {
        if site.line >= buffer.len() {
            continue;
        }

        if site.kind == DeclarationKind::Type && !veto_checked {
            veto_checked = true;
            if let Some(reason) = veto.check(path, &site) {
                return PlanOutcome::Vetoed(reason);
            }
        }

        // First site on a line wins.
        if !claimed.insert(site.line) {
            continue;
        }

        if is_documented(buffer.lines(), site.line) {
            continue;
        }

        plan.push(planned(&site, synthesizer));
    }

    PlanOutcome::Planned(plan)
}

fn planned(site: &DeclarationSite, synthesizer: &dyn Synthesizer) -> PlannedComment {
    PlannedComment {
        line: site.line,
        kind: site.kind,
        name: site.name.clone(),
        block: synthesizer.synthesize(site),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{Detector, LineScanner};
    use crate::synth::Boilerplate;

    fn plan_source(name: &str, source: &str, veto: &VetoGate) -> PlanOutcome {
        let buffer = SourceBuffer::parse(source);
        let sites = LineScanner.detect(source).unwrap();
        plan(Path::new(name), &buffer, sites, &Boilerplate, veto)
    }

    fn planned_lines(outcome: PlanOutcome) -> Vec<usize> {
        match outcome {
            PlanOutcome::Planned(plan) => plan.entries().iter().map(|e| e.line).collect(),
            PlanOutcome::Vetoed(reason) => panic!("unexpected veto: {}", reason),
        }
    }

    #[test]
    fn test_skips_documented_sites() {
        let source = "/** Doc. */\npublic class A {\n\n    public int x;\n    // note\n    public void run() {}\n}\n";
        let lines = planned_lines(plan_source("A.java", source, &VetoGate::default()));
        assert_eq!(lines, vec![3]);
    }

    #[test]
    fn test_veto_discards_earlier_entries() {
        let source = "public int stray;\npublic class Box<T> {\n    public T value;\n}\n";
        let outcome = plan_source("Box.java", source, &VetoGate::default());
        assert!(matches!(outcome, PlanOutcome::Vetoed(_)));
    }

    #[test]
    fn test_veto_by_file_name() {
        let source = "public class UserDTO {\n    public String name;\n}\n";
        let outcome = plan_source("UserDTO.java", source, &VetoGate::default());
        assert!(matches!(outcome, PlanOutcome::Vetoed(_)));

        let lines = planned_lines(plan_source("UserDTO.java", source, &VetoGate::disabled()));
        assert_eq!(lines, vec![0, 1]);
    }

    #[test]
    fn test_veto_only_checks_first_type() {
        let source = "public class Outer {\n    public static class Inner<T> {\n    }\n}\n";
        let lines = planned_lines(plan_source("Outer.java", source, &VetoGate::default()));
        assert_eq!(lines, vec![0, 1]);
    }

    #[test]
    fn test_one_entry_per_line() {
        let mut plan = AnnotationPlan::new();
        let block = CommentBlock::builder().line("x").build();
        let entry = |name: &str| PlannedComment {
            line: 4,
            kind: DeclarationKind::Field,
            name: name.to_string(),
            block: block.clone(),
        };
        assert!(plan.push(entry("a")));
        assert!(!plan.push(entry("b")));
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.entries()[0].name, "a");
    }

    #[test]
    fn test_into_sorted() {
        let mut plan = AnnotationPlan::new();
        let block = CommentBlock::builder().build();
        for line in [9, 2, 5] {
            plan.push(PlannedComment {
                line,
                kind: DeclarationKind::Method,
                name: format!("m{}", line),
                block: block.clone(),
            });
        }
        let lines: Vec<usize> = plan.into_sorted().iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![2, 5, 9]);
    }
}
