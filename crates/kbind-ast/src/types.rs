//! Raw type expressions as delivered by the front-end adapters.

use kbind_common::NameEntity;
use serde::{Deserialize, Serialize};

/// Extra information attached to a type expression by the front-end or by
/// earlier lowerings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeMeta {
    /// `this` used as a type inside a generated interface.
    ThisType,
    /// The reference stands for the intersection of these types.
    Intersection(Vec<RawType>),
    /// Never annotate this reference with a default `= null`.
    Mute,
    /// The reference stands for a string literal type; `token` keeps its quotes.
    StringLiteral(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedType {
    pub name: NameEntity,
    pub params: Vec<RawType>,
    pub nullable: bool,
    pub meta: Option<TypeMeta>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionType {
    pub members: Vec<RawType>,
    pub nullable: bool,
    pub meta: Option<TypeMeta>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntersectionType {
    pub members: Vec<RawType>,
    pub nullable: bool,
    pub meta: Option<TypeMeta>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TupleType {
    pub elements: Vec<RawType>,
    pub nullable: bool,
    pub meta: Option<TypeMeta>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionType {
    pub parameters: Vec<RawParameter>,
    pub return_type: Box<RawType>,
    pub nullable: bool,
    pub meta: Option<TypeMeta>,
}

/// Forward reference to an interface synthesized by an earlier lowering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedInterfaceReference {
    pub name: String,
    pub type_parameters: Vec<RawTypeParameter>,
    pub nullable: bool,
    pub meta: Option<TypeMeta>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralType {
    pub token: String,
    pub nullable: bool,
    pub meta: Option<TypeMeta>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawType {
    Named(NamedType),
    Union(UnionType),
    Intersection(IntersectionType),
    Tuple(TupleType),
    Function(FunctionType),
    GeneratedInterfaceReference(GeneratedInterfaceReference),
    Literal(LiteralType),
}

impl RawType {
    /// Non-nullable reference to `name` without arguments.
    pub fn named(name: impl Into<NameEntity>) -> Self {
        Self::Named(NamedType {
            name: name.into(),
            params: Vec::new(),
            nullable: false,
            meta: None,
        })
    }

    pub fn generic(name: impl Into<NameEntity>, params: Vec<RawType>) -> Self {
        Self::Named(NamedType {
            name: name.into(),
            params,
            nullable: false,
            meta: None,
        })
    }

    pub fn union(members: Vec<RawType>) -> Self {
        Self::Union(UnionType {
            members,
            nullable: false,
            meta: None,
        })
    }

    pub fn tuple(elements: Vec<RawType>) -> Self {
        Self::Tuple(TupleType {
            elements,
            nullable: false,
            meta: None,
        })
    }

    /// `String` reference carrying a string literal token such as `"foo"`.
    pub fn string_literal(token: impl Into<String>) -> Self {
        Self::Named(NamedType {
            name: NameEntity::identifier("String"),
            params: Vec::new(),
            nullable: false,
            meta: Some(TypeMeta::StringLiteral(token.into())),
        })
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Named(_) => "NamedReference",
            Self::Union(_) => "Union",
            Self::Intersection(_) => "Intersection",
            Self::Tuple(_) => "Tuple",
            Self::Function(_) => "FunctionSignature",
            Self::GeneratedInterfaceReference(_) => "GeneratedInterfaceReference",
            Self::Literal(_) => "Literal",
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::Named(ty) => ty.nullable,
            Self::Union(ty) => ty.nullable,
            Self::Intersection(ty) => ty.nullable,
            Self::Tuple(ty) => ty.nullable,
            Self::Function(ty) => ty.nullable,
            Self::GeneratedInterfaceReference(ty) => ty.nullable,
            Self::Literal(ty) => ty.nullable,
        }
    }

    pub fn meta(&self) -> Option<&TypeMeta> {
        match self {
            Self::Named(ty) => ty.meta.as_ref(),
            Self::Union(ty) => ty.meta.as_ref(),
            Self::Intersection(ty) => ty.meta.as_ref(),
            Self::Tuple(ty) => ty.meta.as_ref(),
            Self::Function(ty) => ty.meta.as_ref(),
            Self::GeneratedInterfaceReference(ty) => ty.meta.as_ref(),
            Self::Literal(ty) => ty.meta.as_ref(),
        }
    }

    #[must_use]
    pub fn with_nullable(mut self, value: bool) -> Self {
        match &mut self {
            Self::Named(ty) => ty.nullable = value,
            Self::Union(ty) => ty.nullable = value,
            Self::Intersection(ty) => ty.nullable = value,
            Self::Tuple(ty) => ty.nullable = value,
            Self::Function(ty) => ty.nullable = value,
            Self::GeneratedInterfaceReference(ty) => ty.nullable = value,
            Self::Literal(ty) => ty.nullable = value,
        }
        self
    }

    #[must_use]
    pub fn with_meta(mut self, value: TypeMeta) -> Self {
        let meta = Some(value);
        match &mut self {
            Self::Named(ty) => ty.meta = meta,
            Self::Union(ty) => ty.meta = meta,
            Self::Intersection(ty) => ty.meta = meta,
            Self::Tuple(ty) => ty.meta = meta,
            Self::Function(ty) => ty.meta = meta,
            Self::GeneratedInterfaceReference(ty) => ty.meta = meta,
            Self::Literal(ty) => ty.meta = meta,
        }
        self
    }

    #[must_use]
    pub fn to_non_nullable(self) -> Self {
        self.with_nullable(false)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInitializer {
    pub value: NameEntity,
    pub meta: Option<String>,
    pub nullable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawParameter {
    pub name: String,
    pub ty: RawType,
    pub initializer: Option<RawInitializer>,
    pub vararg: bool,
    pub optional: bool,
}

impl RawParameter {
    pub fn new(name: impl Into<String>, ty: RawType) -> Self {
        Self {
            name: name.into(),
            ty,
            initializer: None,
            vararg: false,
            optional: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTypeParameter {
    pub name: NameEntity,
    pub constraints: Vec<RawType>,
}

impl RawTypeParameter {
    pub fn new(name: impl Into<NameEntity>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
        }
    }
}
