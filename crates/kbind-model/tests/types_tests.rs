use super::*;

fn named(name: &str) -> TypeModel {
    TypeValueModel::simple(NameEntity::from_dotted(name)).into()
}

#[test]
fn test_simple_reference_renders_name() {
    assert_eq!(named("Bar").to_string(), "Bar");
    assert_eq!(named("org.w3c.dom.Node").to_string(), "org.w3c.dom.Node");
}

#[test]
fn test_arguments_and_nullability_render() {
    let ty = TypeValueModel::new(
        NameEntity::identifier("Array"),
        vec![named("String")],
        Some("= null".to_string()),
        true,
    );

    // The descriptor belongs to the emitter; it never leaks into the text form.
    assert_eq!(ty.to_string(), "Array<String>?");
}

#[test]
fn test_function_type_renders_arrow() {
    let function = FunctionTypeModel {
        parameters: vec![ParameterModel {
            name: "event".to_string(),
            ty: named("Event"),
            initializer: None,
            vararg: false,
            optional: false,
        }],
        return_type: Box::new(named("Unit")),
        description: None,
        nullable: true,
    };

    assert_eq!(function.to_string(), "((event: Event) -> Unit)?");
}

#[test]
fn test_dynamic_helper() {
    let ty: TypeModel = TypeValueModel::dynamic(Some("A | B".to_string())).into();

    assert!(ty.is_dynamic());
    assert!(!ty.is_nullable());
    assert_eq!(ty.description(), Some("A | B"));
    assert!(!named("Bar").is_dynamic());
}

#[test]
fn test_model_serializes_to_json() {
    let ty = named("Bar");
    let json = serde_json::to_value(&ty).expect("type model serializes");

    assert_eq!(json["Value"]["value"]["Identifier"], "Bar");
    assert_eq!(json["Value"]["nullable"], false);
}
