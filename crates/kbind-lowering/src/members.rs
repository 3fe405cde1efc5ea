//! Member translation and the instance / static split.

use crate::ModelLowering;
use crate::type_translator::TranslationContext;
use kbind_ast::{RawConstructor, RawIndexedGetter, RawMember, RawMethod, RawProperty};
use kbind_model::{ClassModel, ConstructorModel, MemberModel, MethodModel, PropertyModel};
use tracing::trace;

/// Translated members of a class-like declaration. Statics end up in the
/// companion object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitMembers {
    pub instance: Vec<MemberModel>,
    pub statics: Vec<MemberModel>,
}

impl ModelLowering<'_> {
    /// Translate `members` and split them in the same traversal.
    /// Each bucket keeps the input order.
    pub fn split_members(&mut self, members: Vec<RawMember>) -> SplitMembers {
        let (statics, instance): (Vec<_>, Vec<_>) = members
            .into_iter()
            .map(|member| self.lower_member(member))
            .partition(MemberModel::is_static);

        SplitMembers { instance, statics }
    }

    pub fn lower_member(&mut self, member: RawMember) -> MemberModel {
        match member {
            RawMember::Constructor(constructor) => {
                MemberModel::Constructor(self.lower_constructor(constructor))
            }
            RawMember::Method(method) => MemberModel::Method(self.lower_method(method)),
            RawMember::Property(property) => MemberModel::Property(self.lower_property(property)),
            RawMember::IndexedGetter(getter) => MemberModel::Method(self.lower_getter(getter)),
            RawMember::Lowered(class) => {
                trace!(class = %class.name, "class model re-entered member lowering");
                MemberModel::Class(resplit_class(class))
            }
        }
    }

    pub fn lower_constructor(&mut self, constructor: RawConstructor) -> ConstructorModel {
        ConstructorModel {
            parameters: constructor
                .parameters
                .into_iter()
                .map(|param| self.lower_parameter(param, TranslationContext::Generic))
                .collect(),
            type_parameters: self.lower_type_parameters(constructor.type_parameters),
            generated: constructor.generated,
        }
    }

    fn lower_method(&mut self, method: RawMethod) -> MethodModel {
        MethodModel {
            name: method.name,
            parameters: method
                .parameters
                .into_iter()
                .map(|param| self.lower_parameter(param, TranslationContext::Generic))
                .collect(),
            ty: self.lower_type(method.ty, TranslationContext::Generic),
            type_parameters: self.lower_type_parameters(method.type_parameters),
            is_static: method.is_static,
            is_override: method.is_override,
            operator: method.operator,
            annotations: method.annotations,
            open: method.open,
            defined_externally: method.defined_externally,
        }
    }

    fn lower_property(&mut self, property: RawProperty) -> PropertyModel {
        PropertyModel {
            name: property.name,
            ty: self.lower_type(property.ty, TranslationContext::Generic),
            type_parameters: self.lower_type_parameters(property.type_parameters),
            is_static: property.is_static,
            is_override: property.is_override,
            readonly: property.readonly,
            open: property.open,
            defined_externally: property.defined_externally,
        }
    }

    /// `getter V name(K key)` becomes `operator fun name(key: K): V`.
    fn lower_getter(&mut self, getter: RawIndexedGetter) -> MethodModel {
        MethodModel {
            name: getter.name,
            parameters: vec![self.lower_parameter(getter.key, TranslationContext::Generic)],
            ty: self.lower_type(getter.value_type, TranslationContext::Generic),
            type_parameters: Vec::new(),
            is_static: false,
            is_override: false,
            operator: true,
            annotations: Vec::new(),
            open: false,
            defined_externally: true,
        }
    }
}

/// Move any static member of an already lowered class into its companion.
/// A class that is already split comes back unchanged.
fn resplit_class(class: ClassModel) -> ClassModel {
    let (statics, members): (Vec<_>, Vec<_>) = class
        .members
        .into_iter()
        .map(|member| match member {
            MemberModel::Class(nested) => MemberModel::Class(resplit_class(nested)),
            other => other,
        })
        .partition(MemberModel::is_static);

    let mut companion_object = class.companion_object;
    companion_object.members.extend(statics);

    ClassModel {
        members,
        companion_object,
        ..class
    }
}

#[cfg(test)]
#[path = "../tests/members_tests.rs"]
mod members_tests;
