use super::*;
use kbind_ast::RawType;
use kbind_common::DiagnosticCollector;

#[test]
fn test_qualified_parent_is_translated_to_dotted_name() {
    let heritage = RawHeritage::new(
        NameEntity::from_dotted("org.w3c.dom.Node"),
        vec![RawType::named("Element").with_nullable(true)],
    );
    let mut sink = DiagnosticCollector::new();

    let model = ModelLowering::new(&mut sink).lower_heritage(heritage);

    assert!(sink.is_empty());
    assert_eq!(model.value.value, NameEntity::identifier("org.w3c.dom.Node"));
    assert!(model.value.params.is_empty());
    assert!(!model.value.nullable);
    assert_eq!(model.type_params.len(), 1);
    assert_eq!(model.type_params[0].to_string(), "Element?");
    assert_eq!(model.type_params[0].description(), None);
    assert_eq!(model.delegate_to, None);
}

#[test]
fn test_unresolved_expression_falls_back_to_text() {
    let heritage = RawHeritage {
        name: HeritageSymbol::Expression("mixin(Base)".to_string()),
        type_arguments: vec![],
    };
    let mut sink = DiagnosticCollector::new();

    let model = ModelLowering::new(&mut sink).lower_heritage(heritage);

    assert_eq!(model.value.value.translate(), "mixin(Base)");
    assert_eq!(sink.count(ConcernKind::UnresolvedName), 1);
}

#[test]
fn test_heritage_list_keeps_order() {
    let mut sink = DiagnosticCollector::new();
    let models = ModelLowering::new(&mut sink).lower_heritage_list(vec![
        RawHeritage::new("B", vec![]),
        RawHeritage::new("A", vec![]),
    ]);

    let names: Vec<_> = models
        .iter()
        .map(|model| model.value.value.translate())
        .collect();
    assert_eq!(names, vec!["B", "A"]);
}
