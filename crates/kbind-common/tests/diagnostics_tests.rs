use super::*;

#[test]
fn test_clean_value_reports_nothing() {
    let mut sink = DiagnosticCollector::new();
    let value = Recovered::Clean(42).resolve(&mut sink);

    assert_eq!(value, 42);
    assert!(sink.is_empty());
}

#[test]
fn test_degraded_value_forwards_concern_and_returns_fallback() {
    let mut sink = DiagnosticCollector::new();
    let recovered = Recovered::concern(ConcernKind::UnknownTypeExpression, "no rule", "fallback");
    assert!(recovered.is_degraded());

    let value = recovered.resolve(&mut sink);

    assert_eq!(value, "fallback");
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.concerns()[0].kind, ConcernKind::UnknownTypeExpression);
    assert_eq!(sink.concerns()[0].message, "no rule");
}

#[test]
fn test_map_keeps_concern() {
    let mut sink = DiagnosticCollector::new();
    let value = Recovered::concern(ConcernKind::UnresolvedName, "odd name", 1)
        .map(|n| n + 1)
        .resolve(&mut sink);

    assert_eq!(value, 2);
    assert_eq!(sink.count(ConcernKind::UnresolvedName), 1);
    assert_eq!(sink.count(ConcernKind::UnknownDeclaration), 0);
}

#[test]
fn test_collector_preserves_arrival_order() {
    let mut sink = DiagnosticCollector::new();
    sink.report(Concern::new(ConcernKind::UnknownDeclaration, "first"));
    sink.report(Concern::new(ConcernKind::UnresolvedName, "second"));

    let messages: Vec<_> = sink
        .into_concerns()
        .into_iter()
        .map(|c| c.message)
        .collect();
    assert_eq!(messages, vec!["first", "second"]);
}
