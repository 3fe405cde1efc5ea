use super::*;
use crate::declarations::RawMethod;

fn length(ty: &str) -> RawMember {
    RawMember::Property(RawProperty {
        readonly: true,
        ..RawProperty::new("length", RawType::named(ty))
    })
}

fn item_getter(key: &str, value: RawType) -> RawMember {
    RawMember::IndexedGetter(RawIndexedGetter {
        name: "item".to_string(),
        key: RawParameter::new("index", RawType::named(key)),
        value_type: value,
    })
}

fn collection(name: &str) -> RawInterface {
    RawInterface::new(
        name,
        vec![
            length(UNSIGNED_LONG),
            item_getter(UNSIGNED_LONG, RawType::named("Node").with_nullable(true)),
        ],
    )
}

fn scope_of(package_name: &NameEntity) -> LoweringScope<'_> {
    LoweringScope {
        file_name: "dom.idl",
        package_name,
    }
}

fn single_file(package: NameEntity, declarations: Vec<RawDeclaration>) -> RawSourceSet {
    RawSourceSet::new(vec![RawSourceFile::new(
        "dom.idl",
        RawModule::new(package, declarations),
    )])
}

fn markers(module: &RawModule) -> usize {
    module
        .interfaces()
        .filter(|interface| interface.name.is_identifier(ITEM_ARRAY_LIKE))
        .count()
}

#[test]
fn test_default_root_package_is_dom_under_lib_root() {
    let lowering = ItemArrayLikeLowering::default();
    assert_eq!(lowering.root_package().translate(), "<LIBROOT>.org.w3c.dom");
}

#[test]
fn test_collection_gets_marker_parent_with_non_nullable_argument() {
    let package = NameEntity::identifier("dom");
    let lowering = ItemArrayLikeLowering::new(package.clone());

    let lowered = lowering.lower_interface(collection("NodeList"), &scope_of(&package));

    assert_eq!(lowered.parent_entities.len(), 1);
    let parent = &lowered.parent_entities[0];
    assert!(parent.refers_to(ITEM_ARRAY_LIKE));
    assert_eq!(parent.type_arguments, vec![RawType::named("Node")]);
}

#[test]
fn test_existing_parents_are_kept_first() {
    let package = NameEntity::identifier("dom");
    let lowering = ItemArrayLikeLowering::new(package.clone());
    let mut declaration = collection("HTMLCollection");
    declaration
        .parent_entities
        .push(RawHeritage::new("EventTarget", vec![]));

    let lowered = lowering.lower_interface(declaration, &scope_of(&package));

    assert_eq!(lowered.parent_entities.len(), 2);
    assert!(lowered.parent_entities[0].refers_to("EventTarget"));
    assert!(lowered.parent_entities[1].refers_to(ITEM_ARRAY_LIKE));
}

#[test]
fn test_requires_both_length_and_item() {
    let package = NameEntity::identifier("dom");
    let lowering = ItemArrayLikeLowering::new(package.clone());
    let scope = scope_of(&package);

    let only_length = RawInterface::new("A", vec![length(UNSIGNED_LONG)]);
    let only_item = RawInterface::new(
        "B",
        vec![item_getter(UNSIGNED_LONG, RawType::named("Node"))],
    );

    assert!(lowering.lower_interface(only_length, &scope).parent_entities.is_empty());
    assert!(lowering.lower_interface(only_item, &scope).parent_entities.is_empty());
}

#[test]
fn test_shapes_that_do_not_match() {
    let package = NameEntity::identifier("dom");
    let lowering = ItemArrayLikeLowering::new(package.clone());
    let scope = scope_of(&package);

    // wrong length type
    let wrong_length = RawInterface::new(
        "A",
        vec![length("long"), item_getter(UNSIGNED_LONG, RawType::named("Node"))],
    );
    // wrong key type
    let wrong_key = RawInterface::new(
        "B",
        vec![length(UNSIGNED_LONG), item_getter("DOMString", RawType::named("Node"))],
    );
    // writable length
    let writable = RawInterface::new(
        "C",
        vec![
            RawMember::Property(RawProperty::new("length", RawType::named(UNSIGNED_LONG))),
            item_getter(UNSIGNED_LONG, RawType::named("Node")),
        ],
    );
    // `item` as a plain method rather than a getter
    let method = RawInterface::new(
        "D",
        vec![
            length(UNSIGNED_LONG),
            RawMember::Method(RawMethod::new(
                "item",
                vec![RawParameter::new("index", RawType::named(UNSIGNED_LONG))],
                RawType::named("Node"),
            )),
        ],
    );

    for declaration in [wrong_length, wrong_key, writable, method] {
        let name = declaration.name.translate();
        let lowered = lowering.lower_interface(declaration, &scope);
        assert!(lowered.parent_entities.is_empty(), "{name} should not match");
    }
}

#[test]
fn test_marker_never_extends_itself() {
    let package = NameEntity::identifier("dom");
    let lowering = ItemArrayLikeLowering::new(package.clone());

    let marker = ItemArrayLikeLowering::marker_declaration();
    let lowered = lowering.lower_interface(marker.clone(), &scope_of(&package));

    assert_eq!(lowered, marker);
}

#[test]
fn test_interface_is_marked_once() {
    let package = NameEntity::identifier("dom");
    let lowering = ItemArrayLikeLowering::new(package.clone());
    let scope = scope_of(&package);

    let once = lowering.lower_interface(collection("NodeList"), &scope);
    let twice = lowering.lower_interface(once.clone(), &scope);

    assert_eq!(twice, once);
}

#[test]
fn test_marker_declaration_shape() {
    let marker = ItemArrayLikeLowering::marker_declaration();

    assert!(marker.generated);
    assert_eq!(
        marker.annotations,
        vec![AnnotationModel::new(NO_INTERFACE_OBJECT, vec![])]
    );
    assert_eq!(marker.type_parameters, vec![RawTypeParameter::new("T")]);
    let length = marker.properties().next().unwrap();
    assert!(is_length_attribute(length));
    let item = marker.getters().next().unwrap();
    assert!(is_item_getter(item));
    assert!(item.value_type.nullable());
}

#[test]
fn test_marker_added_to_existing_root_file() {
    let package = NameEntity::from_dotted("lib.dom");
    let lowering = ItemArrayLikeLowering::new(package.clone());
    let source_set = single_file(
        package.clone(),
        vec![RawDeclaration::Interface(collection("NodeList"))],
    );

    let lowered = lowering.lower_source_set(source_set);

    assert_eq!(lowered.files.len(), 1);
    let root = &lowered.files[0].root;
    assert_eq!(markers(root), 1);
    assert!(matches!(
        root.declarations.last(),
        Some(RawDeclaration::Interface(marker)) if marker.generated
    ));
}

#[test]
fn test_root_file_created_when_missing() {
    let package = NameEntity::from_dotted("lib.dom");
    let lowering = ItemArrayLikeLowering::new(package.clone());
    let source_set = single_file(
        NameEntity::identifier("other"),
        vec![RawDeclaration::Interface(collection("NodeList"))],
    );

    let lowered = lowering.lower_source_set(source_set);

    assert_eq!(lowered.files.len(), 2);
    let created = &lowered.files[1];
    assert_eq!(created.file_name, "lib.dom");
    assert_eq!(created.package_name(), &package);
    assert_eq!(markers(&created.root), 1);
    // the collection in the other file is still rewritten
    let node_list = lowered.files[0].root.interfaces().next().unwrap();
    assert!(node_list.parent_entities[0].refers_to(ITEM_ARRAY_LIKE));
}

#[test]
fn test_running_twice_adds_one_marker() {
    let package = NameEntity::identifier("dom");
    let lowering = ItemArrayLikeLowering::new(package.clone());
    let source_set = single_file(
        package,
        vec![RawDeclaration::Interface(collection("NodeList"))],
    );

    let once = lowering.lower_source_set(source_set);
    let twice = lowering.lower_source_set(once.clone());

    assert_eq!(twice, once);
    assert_eq!(markers(&twice.files[0].root), 1);
}
