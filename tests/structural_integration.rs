//! Integration tests for the tree-sitter detector against the fixtures.

#![cfg(feature = "tree-sitter")]

use std::path::{Path, PathBuf};

use docfill::annotate::{collect_files, exclusion_set};
use docfill::{
    detector_for, synthesizer_for, Annotator, DeclarationKind, DetectorKind, FileStatus,
    SourceOutcome, StructuralParser, Strategy,
};
use tempfile::TempDir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata/java/com/example")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("should read fixture")
}

fn structural(strategy: Strategy) -> Annotator {
    Annotator::new(Box::new(StructuralParser::new()), synthesizer_for(strategy, Some(7)))
}

#[test]
fn test_order_service_sites() {
    let outcome = structural(Strategy::NameDerived)
        .annotate_source(Path::new("OrderService.java"), &read_fixture("OrderService.java"))
        .unwrap();

    let comments = match outcome {
        SourceOutcome::Annotated { comments, .. } => comments,
        other => panic!("expected annotation, got {:?}", other),
    };
    let names: Vec<(DeclarationKind, &str)> =
        comments.iter().map(|c| (c.kind, c.name.as_str())).collect();

    // Private fields are skipped; documented declarations are left alone.
    assert_eq!(
        names,
        vec![
            (DeclarationKind::Type, "OrderService"),
            (DeclarationKind::Field, "MAX_ORDERS"),
            (DeclarationKind::Constructor, "OrderService"),
            (DeclarationKind::Method, "calculateTotalPrice"),
            (DeclarationKind::Method, "toString"),
            (DeclarationKind::Method, "countByCustomer"),
            (DeclarationKind::Method, "isEmpty"),
        ]
    );
}

#[test]
fn test_comment_goes_above_annotations() {
    let outcome = structural(Strategy::Boilerplate)
        .annotate_source(Path::new("OrderService.java"), &read_fixture("OrderService.java"))
        .unwrap();

    let text = match outcome {
        SourceOutcome::Annotated { text, .. } => text,
        other => panic!("expected annotation, got {:?}", other),
    };
    assert!(text.contains("     */\n    @Override\n    public String toString() {"));
    assert!(!text.contains("@Override\n    /**"));
}

#[test]
fn test_syntax_error_is_skipped() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Broken.java");
    let original = read_fixture("Broken.java");
    std::fs::write(&path, &original).unwrap();

    let summary = structural(Strategy::Boilerplate).run(&[path.clone()]);
    assert_eq!(summary.count(FileStatus::Skipped), 1);
    assert!(summary.files[0]
        .reason
        .as_deref()
        .unwrap()
        .contains("syntax error"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_veto_applies_to_structural_detector() {
    let annotator = structural(Strategy::Boilerplate);

    let generic = annotator
        .annotate_source(Path::new("Box.java"), &read_fixture("Box.java"))
        .unwrap();
    assert!(matches!(generic, SourceOutcome::Vetoed { .. }));

    let dto = annotator
        .annotate_source(Path::new("UserDTO.java"), &read_fixture("UserDTO.java"))
        .unwrap();
    assert!(matches!(dto, SourceOutcome::Vetoed { .. }));
}

#[test]
fn test_documented_fixture_unchanged() {
    let outcome = structural(Strategy::Randomized)
        .annotate_source(Path::new("Documented.java"), &read_fixture("Documented.java"))
        .unwrap();
    assert_eq!(outcome, SourceOutcome::Unchanged);
}

#[test]
fn test_directory_run_is_idempotent() {
    let temp = TempDir::new().unwrap();
    for name in ["OrderService.java", "Crlf.java", "Documented.java"] {
        std::fs::copy(fixture_path(name), temp.path().join(name)).unwrap();
    }
    let files = collect_files(temp.path(), &exclusion_set(&[]).unwrap()).unwrap();

    let annotator = Annotator::new(
        detector_for(DetectorKind::Structural).unwrap(),
        synthesizer_for(Strategy::NameDerived, None),
    );
    let first = annotator.run(&files);
    assert_eq!(first.count(FileStatus::Updated), 2);

    let second = annotator.run(&files);
    assert_eq!(second.comments_added(), 0);
    assert_eq!(second.count(FileStatus::Unchanged), 3);
}
