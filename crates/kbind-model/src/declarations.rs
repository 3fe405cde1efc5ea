//! Semantic declarations.
//!
//! Classes and interfaces keep their instance members inline and move static
//! members into a synthetic companion object, which is how the target
//! platform expresses statics.

use crate::types::{ParameterModel, TypeModel, TypeParameterModel, TypeValueModel};
use kbind_common::NameEntity;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationModel {
    pub name: String,
    pub params: Vec<NameEntity>,
}

impl AnnotationModel {
    pub fn new(name: impl Into<String>, params: Vec<NameEntity>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

/// Parent reference of a class, interface or object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeritageModel {
    pub value: TypeValueModel,
    pub type_params: Vec<TypeModel>,
    /// Delegation is decided by later stages; always `None` when built from a raw tree.
    pub delegate_to: Option<NameEntity>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorModel {
    pub parameters: Vec<ParameterModel>,
    pub type_parameters: Vec<TypeParameterModel>,
    pub generated: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodModel {
    pub name: String,
    pub parameters: Vec<ParameterModel>,
    pub ty: TypeModel,
    pub type_parameters: Vec<TypeParameterModel>,
    pub is_static: bool,
    pub is_override: bool,
    pub operator: bool,
    pub annotations: Vec<AnnotationModel>,
    pub open: bool,
    pub defined_externally: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyModel {
    pub name: String,
    pub ty: TypeModel,
    pub type_parameters: Vec<TypeParameterModel>,
    pub is_static: bool,
    pub is_override: bool,
    pub readonly: bool,
    pub open: bool,
    pub defined_externally: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberModel {
    Constructor(ConstructorModel),
    Method(MethodModel),
    Property(PropertyModel),
    /// Nested class; only produced when a class model re-enters member lowering.
    Class(ClassModel),
}

impl MemberModel {
    /// Constructors and nested classes have no static concept.
    pub fn is_static(&self) -> bool {
        match self {
            Self::Method(method) => method.is_static,
            Self::Property(property) => property.is_static,
            Self::Constructor(_) | Self::Class(_) => false,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Method(method) => Some(&method.name),
            Self::Property(property) => Some(&property.name),
            Self::Class(class) => Some(class.name.right_most()),
            Self::Constructor(_) => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionObjectModel {
    pub name: String,
    pub members: Vec<MemberModel>,
    pub parent_entities: Vec<HeritageModel>,
}

impl CompanionObjectModel {
    /// Anonymous companion holding `members`.
    pub fn with_members(members: Vec<MemberModel>) -> Self {
        Self {
            name: String::new(),
            members,
            parent_entities: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassModel {
    pub name: NameEntity,
    pub members: Vec<MemberModel>,
    pub companion_object: CompanionObjectModel,
    pub primary_constructor: Option<ConstructorModel>,
    pub type_parameters: Vec<TypeParameterModel>,
    pub parent_entities: Vec<HeritageModel>,
    pub annotations: Vec<AnnotationModel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceModel {
    pub name: NameEntity,
    pub members: Vec<MemberModel>,
    pub companion_object: CompanionObjectModel,
    pub type_parameters: Vec<TypeParameterModel>,
    pub parent_entities: Vec<HeritageModel>,
    pub annotations: Vec<AnnotationModel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionModel {
    pub name: NameEntity,
    pub parameters: Vec<ParameterModel>,
    pub ty: TypeModel,
    pub type_parameters: Vec<TypeParameterModel>,
    pub annotations: Vec<AnnotationModel>,
    pub export: bool,
    pub inline: bool,
    pub operator: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableModel {
    pub name: NameEntity,
    pub ty: TypeModel,
    pub type_parameters: Vec<TypeParameterModel>,
    pub annotations: Vec<AnnotationModel>,
    pub immutable: bool,
    pub inline: bool,
    /// Initializer source text, passed through untouched.
    pub initializer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumTokenModel {
    pub value: String,
    pub meta: Option<String>,
}

/// Enums need no translation: the raw tree carries this type directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumModel {
    pub name: NameEntity,
    pub values: Vec<EnumTokenModel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectModel {
    pub name: NameEntity,
    pub members: Vec<MemberModel>,
    pub parent_entities: Vec<HeritageModel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAliasModel {
    pub name: NameEntity,
    pub type_reference: TypeModel,
    pub type_parameters: Vec<TypeParameterModel>,
}

/// A declaration that may appear directly inside a module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopLevelModel {
    Class(ClassModel),
    Interface(InterfaceModel),
    Function(FunctionModel),
    Variable(VariableModel),
    Enum(EnumModel),
    Object(ObjectModel),
    TypeAlias(TypeAliasModel),
}

impl TopLevelModel {
    pub fn name(&self) -> &NameEntity {
        match self {
            Self::Class(class) => &class.name,
            Self::Interface(interface) => &interface.name,
            Self::Function(function) => &function.name,
            Self::Variable(variable) => &variable.name,
            Self::Enum(enumeration) => &enumeration.name,
            Self::Object(object) => &object.name,
            Self::TypeAlias(alias) => &alias.name,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Class(_) => "class",
            Self::Interface(_) => "interface",
            Self::Function(_) => "function",
            Self::Variable(_) => "variable",
            Self::Enum(_) => "enum",
            Self::Object(_) => "object",
            Self::TypeAlias(_) => "typealias",
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceModel> {
        match self {
            Self::Interface(interface) => Some(interface),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassModel> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }
}
