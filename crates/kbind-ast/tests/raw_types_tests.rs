use super::*;
use kbind_common::NameEntity;

#[test]
fn test_named_splits_dotted_paths() {
    let RawType::Named(named) = RawType::named("org.w3c.dom.Node") else {
        panic!("expected a named type");
    };
    assert_eq!(named.name.segments(), vec!["org", "w3c", "dom", "Node"]);
    assert!(named.params.is_empty());
    assert!(!named.nullable);
}

#[test]
fn test_to_non_nullable_keeps_everything_else() {
    let ty = RawType::generic("Array", vec![RawType::named("String")])
        .with_nullable(true)
        .with_meta(TypeMeta::Mute);

    let stripped = ty.to_non_nullable();

    assert!(!stripped.nullable());
    assert_eq!(stripped.meta(), Some(&TypeMeta::Mute));
    let RawType::Named(named) = stripped else {
        panic!("expected a named type");
    };
    assert_eq!(named.params, vec![RawType::named("String")]);
}

#[test]
fn test_string_literal_is_a_string_reference() {
    let ty = RawType::string_literal("\"load\"");
    assert_eq!(ty.kind_name(), "NamedReference");
    assert_eq!(
        ty.meta(),
        Some(&TypeMeta::StringLiteral("\"load\"".to_string()))
    );
}

#[test]
fn test_heritage_refers_to_full_name_only() {
    let heritage = RawHeritage::new("ItemArrayLike", vec![]);
    assert!(heritage.refers_to("ItemArrayLike"));
    assert!(!heritage.refers_to("ArrayLike"));

    let qualified = RawHeritage::new("lib.ItemArrayLike", vec![]);
    assert!(!qualified.refers_to("ItemArrayLike"));

    let expression = RawHeritage {
        name: HeritageSymbol::Expression("mixin(Base)".to_string()),
        type_arguments: vec![],
    };
    assert!(!expression.refers_to("mixin(Base)"));
}

#[test]
fn test_module_defaults_to_qualifier_binding() {
    let module = RawModule::new(NameEntity::from_dotted("a.b"), vec![]);
    assert_eq!(module.qualifier_kind, QualifierKind::Qualifier);
    assert!(module.qualifier.is_none());
}

#[test]
fn test_raw_tree_serializes_with_variant_tags() {
    let file = RawSourceFile::new(
        "lib.d.ts",
        RawModule::new(
            "lib",
            vec![RawDeclaration::Interface(RawInterface::new("Foo", vec![]))],
        ),
    );

    let json = serde_json::to_value(&file).unwrap();
    assert_eq!(json["file_name"], "lib.d.ts");
    assert!(json["root"]["declarations"][0].get("Interface").is_some());

    let back: RawSourceFile = serde_json::from_value(json).unwrap();
    assert_eq!(back, file);
}
