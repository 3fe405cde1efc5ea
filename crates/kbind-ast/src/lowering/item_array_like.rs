//! Marks IDL collections that expose `length` plus an `item(index)` getter
//! with the `ItemArrayLike<T>` marker interface, so they can be iterated
//! like arrays on the target side.

use super::{LoweringScope, RawLowering, walk_source_set};
use crate::declarations::{
    RawDeclaration, RawHeritage, RawIndexedGetter, RawInterface, RawMember, RawModule, RawProperty,
};
use crate::source_set::{RawSourceFile, RawSourceSet};
use crate::types::{RawParameter, RawType, RawTypeParameter};
use kbind_common::{LIB_ROOT, NameEntity};
use kbind_model::AnnotationModel;
use tracing::debug;

pub const ITEM_ARRAY_LIKE: &str = "ItemArrayLike";

/// IDL `unsigned long`, as spelled by the IDL adapter.
pub const UNSIGNED_LONG: &str = "unsignedlong";

/// Extended attribute of interfaces that have no runtime interface object.
pub const NO_INTERFACE_OBJECT: &str = "NoInterfaceObject";

const LENGTH: &str = "length";
const ITEM: &str = "item";

pub struct ItemArrayLikeLowering {
    root_package: NameEntity,
}

impl Default for ItemArrayLikeLowering {
    fn default() -> Self {
        Self::new(NameEntity::identifier(LIB_ROOT).append("org").append("w3c").append("dom"))
    }
}

fn is_unsigned_long(ty: &RawType) -> bool {
    *ty == RawType::named(UNSIGNED_LONG)
}

fn is_length_attribute(property: &RawProperty) -> bool {
    property.name == LENGTH
        && property.readonly
        && !property.is_static
        && is_unsigned_long(&property.ty)
}

fn is_item_getter(getter: &RawIndexedGetter) -> bool {
    getter.name == ITEM && is_unsigned_long(&getter.key.ty)
}

fn declares_marker(module: &RawModule) -> bool {
    module
        .interfaces()
        .any(|interface| interface.name.is_identifier(ITEM_ARRAY_LIKE))
}

impl ItemArrayLikeLowering {
    /// Lowering that places the marker interface in `root_package`.
    pub fn new(root_package: NameEntity) -> Self {
        Self { root_package }
    }

    pub fn root_package(&self) -> &NameEntity {
        &self.root_package
    }

    /// `interface ItemArrayLike<T> { val length: unsignedlong; getter T? item(unsignedlong index) }`
    pub fn marker_declaration() -> RawInterface {
        let length = RawProperty {
            readonly: true,
            ..RawProperty::new(LENGTH, RawType::named(UNSIGNED_LONG))
        };
        let item = RawIndexedGetter {
            name: ITEM.to_string(),
            key: RawParameter::new("index", RawType::named(UNSIGNED_LONG)),
            value_type: RawType::named("T").with_nullable(true),
        };

        RawInterface {
            type_parameters: vec![RawTypeParameter::new("T")],
            annotations: vec![AnnotationModel::new(NO_INTERFACE_OBJECT, Vec::new())],
            generated: true,
            ..RawInterface::new(
                ITEM_ARRAY_LIKE,
                vec![RawMember::Property(length), RawMember::IndexedGetter(item)],
            )
        }
    }
}

impl RawLowering for ItemArrayLikeLowering {
    fn name(&self) -> &'static str {
        "item-array-like"
    }

    fn lower_interface(&self, declaration: RawInterface, scope: &LoweringScope<'_>) -> RawInterface {
        if declaration.name.is_identifier(ITEM_ARRAY_LIKE)
            || declaration
                .parent_entities
                .iter()
                .any(|parent| parent.refers_to(ITEM_ARRAY_LIKE))
        {
            return declaration;
        }

        let has_length = declaration.properties().any(is_length_attribute);
        let value_type = declaration
            .getters()
            .find(|getter| is_item_getter(getter))
            .map(|getter| getter.value_type.clone());

        match value_type {
            Some(value_type) if has_length => {
                debug!(
                    interface = %declaration.name,
                    package = %scope.package_name,
                    "adding {ITEM_ARRAY_LIKE} parent"
                );
                let mut parent_entities = declaration.parent_entities;
                parent_entities.push(RawHeritage::new(
                    ITEM_ARRAY_LIKE,
                    vec![value_type.to_non_nullable()],
                ));
                RawInterface {
                    parent_entities,
                    ..declaration
                }
            }
            _ => declaration,
        }
    }

    fn lower_source_set(&self, source_set: RawSourceSet) -> RawSourceSet {
        let mut files = walk_source_set(self, source_set).files;

        let root_index = match files
            .iter()
            .position(|file| file.package_name() == &self.root_package)
        {
            Some(index) => index,
            None => {
                debug!(package = %self.root_package, "creating library root file");
                files.push(RawSourceFile::new(
                    self.root_package.translate(),
                    RawModule::new(self.root_package.clone(), Vec::new()),
                ));
                files.len() - 1
            }
        };

        let root = &mut files[root_index].root;
        if !declares_marker(root) {
            root.declarations
                .push(RawDeclaration::Interface(Self::marker_declaration()));
        }

        RawSourceSet { files }
    }
}

#[cfg(test)]
#[path = "../../tests/item_array_like_tests.rs"]
mod item_array_like_tests;
