use super::*;
use kbind_ast::{RawDeclaration, RawInterface, RawModule};
use kbind_common::DiagnosticCollector;

fn file(name: &str, references: &[&str]) -> RawSourceFile {
    RawSourceFile {
        referenced_files: references.iter().map(|reference| reference.to_string()).collect(),
        ..RawSourceFile::new(
            name,
            RawModule::new(
                "lib",
                vec![RawDeclaration::Interface(RawInterface::new("Foo", vec![]))],
            ),
        )
    }
}

#[test]
fn test_normalize_path() {
    let cases = [
        ("/a/b/../c", "/a/c"),
        ("/a/./b/./c.d.ts", "/a/b/c.d.ts"),
        ("/a/b/../../..", "/"),
        ("/../x", "/x"),
        ("a/../../b", "../b"),
        ("./a", "a"),
    ];
    for (input, expected) in cases {
        assert_eq!(
            normalize_path(Path::new(input)),
            PathBuf::from(expected),
            "{input}"
        );
    }
}

#[test]
fn test_relative_file_is_resolved_against_working_directory() {
    let assembler = SourceSetAssembler::new("/work/project");
    assert_eq!(
        assembler.absolute_path("../shared/./lib.d.ts"),
        PathBuf::from("/work/shared/lib.d.ts")
    );
    assert_eq!(
        assembler.absolute_path("/abs/lib.d.ts"),
        PathBuf::from("/abs/lib.d.ts")
    );
    assert_eq!(assembler.working_directory(), Path::new("/work/project"));
}

#[test]
fn test_assemble_builds_every_file_in_order() {
    let assembler = SourceSetAssembler::new("/work");
    let source_set = RawSourceSet::new(vec![
        file("types/a.d.ts", &["./b.d.ts", "../common/c.d.ts"]),
        file("types/b.d.ts", &[]),
    ]);
    let mut sink = DiagnosticCollector::new();

    let model = assembler.assemble(source_set, &mut sink);

    assert!(sink.is_empty());
    assert_eq!(model.sources.len(), 2);
    let first = &model.sources[0];
    assert_eq!(first.file_name, "/work/types/a.d.ts");
    assert_eq!(
        first.referenced_files,
        vec!["/work/types/b.d.ts", "/work/common/c.d.ts"]
    );
    assert_eq!(first.root.declarations.len(), 1);
    assert_eq!(model.sources[1].file_name, "/work/types/b.d.ts");
    assert!(model.sources[1].referenced_files.is_empty());
    assert!(model.source("/work/types/b.d.ts").is_some());
}

#[test]
fn test_concerns_from_every_file_reach_the_sink() {
    let broken = |name: &str| {
        RawSourceFile::new(
            name,
            RawModule::new(
                "lib",
                vec![RawDeclaration::ExportAssignment(kbind_ast::RawExportAssignment {
                    expression: "x".to_string(),
                    is_export_equals: false,
                })],
            ),
        )
    };
    let assembler = SourceSetAssembler::new("/");
    let mut sink = DiagnosticCollector::new();

    let model = assembler.assemble(
        RawSourceSet::new(vec![broken("a.d.ts"), broken("b.d.ts")]),
        &mut sink,
    );

    assert_eq!(model.sources.len(), 2);
    assert_eq!(sink.len(), 2);
}
