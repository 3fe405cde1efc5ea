//! Raw declarations.
//!
//! One shared vocabulary for both front-ends: ambient declaration files and
//! IDL files are normalized into these nodes by an adapter before any
//! lowering runs.

use crate::types::{RawParameter, RawType, RawTypeParameter};
use kbind_common::NameEntity;
use kbind_model::{AnnotationModel, ClassModel, EnumModel};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawConstructor {
    pub parameters: Vec<RawParameter>,
    pub type_parameters: Vec<RawTypeParameter>,
    pub generated: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMethod {
    pub name: String,
    pub parameters: Vec<RawParameter>,
    pub ty: RawType,
    pub type_parameters: Vec<RawTypeParameter>,
    pub is_static: bool,
    pub is_override: bool,
    pub operator: bool,
    pub annotations: Vec<AnnotationModel>,
    pub open: bool,
    pub defined_externally: bool,
}

impl RawMethod {
    pub fn new(name: impl Into<String>, parameters: Vec<RawParameter>, ty: RawType) -> Self {
        Self {
            name: name.into(),
            parameters,
            ty,
            type_parameters: Vec::new(),
            is_static: false,
            is_override: false,
            operator: false,
            annotations: Vec::new(),
            open: false,
            defined_externally: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProperty {
    pub name: String,
    pub ty: RawType,
    pub type_parameters: Vec<RawTypeParameter>,
    pub is_static: bool,
    pub is_override: bool,
    pub readonly: bool,
    pub open: bool,
    pub defined_externally: bool,
}

impl RawProperty {
    pub fn new(name: impl Into<String>, ty: RawType) -> Self {
        Self {
            name: name.into(),
            ty,
            type_parameters: Vec::new(),
            is_static: false,
            is_override: false,
            readonly: false,
            open: false,
            defined_externally: true,
        }
    }
}

/// IDL `getter V name(K key)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawIndexedGetter {
    pub name: String,
    pub key: RawParameter,
    pub value_type: RawType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawMember {
    Constructor(RawConstructor),
    Method(RawMethod),
    Property(RawProperty),
    IndexedGetter(RawIndexedGetter),
    /// A class that was already lowered and shows up in a member list again.
    Lowered(ClassModel),
}

/// What a heritage clause points at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeritageSymbol {
    Name(NameEntity),
    /// Any other expression (`extends mixin(Base)`), kept as source text.
    Expression(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHeritage {
    pub name: HeritageSymbol,
    pub type_arguments: Vec<RawType>,
}

impl RawHeritage {
    pub fn new(name: impl Into<NameEntity>, type_arguments: Vec<RawType>) -> Self {
        Self {
            name: HeritageSymbol::Name(name.into()),
            type_arguments,
        }
    }

    pub fn refers_to(&self, name: &str) -> bool {
        matches!(&self.name, HeritageSymbol::Name(entity) if entity.translate() == name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClass {
    pub name: NameEntity,
    pub members: Vec<RawMember>,
    pub primary_constructor: Option<RawConstructor>,
    pub type_parameters: Vec<RawTypeParameter>,
    pub parent_entities: Vec<RawHeritage>,
    pub annotations: Vec<AnnotationModel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInterface {
    pub name: NameEntity,
    pub members: Vec<RawMember>,
    pub type_parameters: Vec<RawTypeParameter>,
    pub parent_entities: Vec<RawHeritage>,
    pub annotations: Vec<AnnotationModel>,
    /// Synthesized by a lowering rather than read from a source file.
    pub generated: bool,
}

impl RawInterface {
    pub fn new(name: impl Into<NameEntity>, members: Vec<RawMember>) -> Self {
        Self {
            name: name.into(),
            members,
            type_parameters: Vec::new(),
            parent_entities: Vec::new(),
            annotations: Vec::new(),
            generated: false,
        }
    }

    pub fn properties(&self) -> impl Iterator<Item = &RawProperty> {
        self.members.iter().filter_map(|member| match member {
            RawMember::Property(property) => Some(property),
            _ => None,
        })
    }

    pub fn getters(&self) -> impl Iterator<Item = &RawIndexedGetter> {
        self.members.iter().filter_map(|member| match member {
            RawMember::IndexedGetter(getter) => Some(getter),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFunction {
    pub name: NameEntity,
    pub parameters: Vec<RawParameter>,
    pub ty: RawType,
    pub type_parameters: Vec<RawTypeParameter>,
    pub annotations: Vec<AnnotationModel>,
    pub export: bool,
    pub inline: bool,
    pub operator: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVariable {
    pub name: NameEntity,
    pub ty: RawType,
    pub type_parameters: Vec<RawTypeParameter>,
    pub annotations: Vec<AnnotationModel>,
    pub immutable: bool,
    pub inline: bool,
    pub initializer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObject {
    pub name: NameEntity,
    pub members: Vec<RawMember>,
    pub parent_entities: Vec<RawHeritage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTypeAlias {
    pub name: NameEntity,
    pub type_reference: RawType,
    pub type_parameters: Vec<NameEntity>,
    /// Cleared by earlier lowerings when the alias has no target counterpart.
    pub can_be_translated: bool,
}

/// `import name = module.reference`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawImportEquals {
    pub name: String,
    pub module_reference: NameEntity,
}

/// `export = expression` / `export default expression`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawExportAssignment {
    pub expression: String,
    pub is_export_equals: bool,
}

/// How a module is bound on the JavaScript side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualifierKind {
    /// Namespace reached through a qualifier path.
    Qualifier,
    /// External module loaded by name.
    Module,
    /// `declare global` augmentation.
    Global,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawModule {
    pub package_name: NameEntity,
    pub declarations: Vec<RawDeclaration>,
    pub qualifier: Option<NameEntity>,
    pub qualifier_kind: QualifierKind,
}

impl RawModule {
    pub fn new(package_name: impl Into<NameEntity>, declarations: Vec<RawDeclaration>) -> Self {
        Self {
            package_name: package_name.into(),
            declarations,
            qualifier: None,
            qualifier_kind: QualifierKind::Qualifier,
        }
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &RawInterface> {
        self.declarations
            .iter()
            .filter_map(|declaration| match declaration {
                RawDeclaration::Interface(interface) => Some(interface),
                _ => None,
            })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawDeclaration {
    Class(RawClass),
    Interface(RawInterface),
    Function(RawFunction),
    Variable(RawVariable),
    Enum(EnumModel),
    Object(RawObject),
    TypeAlias(RawTypeAlias),
    Module(RawModule),
    ImportEquals(RawImportEquals),
    ExportAssignment(RawExportAssignment),
}

impl RawDeclaration {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Class(_) => "Class",
            Self::Interface(_) => "Interface",
            Self::Function(_) => "Function",
            Self::Variable(_) => "Variable",
            Self::Enum(_) => "Enum",
            Self::Object(_) => "Object",
            Self::TypeAlias(_) => "TypeAlias",
            Self::Module(_) => "Module",
            Self::ImportEquals(_) => "ImportEquals",
            Self::ExportAssignment(_) => "ExportAssignment",
        }
    }
}
