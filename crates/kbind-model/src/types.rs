//! Semantic type nodes.
//!
//! Only two shapes survive translation: named references and function
//! types. Unions, intersections and tuples are collapsed into a named
//! `dynamic` reference whose `description` spells out the source structure.

use kbind_common::{DYNAMIC, NameEntity};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeModel {
    Value(TypeValueModel),
    Function(FunctionTypeModel),
}

/// Named reference with translated type arguments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeValueModel {
    pub value: NameEntity,
    pub params: Vec<TypeModel>,
    /// Free-form descriptor rendered next to the type by the emitter
    /// (`= null`, `"this"`, `A | B`, `JsTuple<A, B>`, ...).
    pub description: Option<String>,
    pub nullable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionTypeModel {
    pub parameters: Vec<ParameterModel>,
    pub return_type: Box<TypeModel>,
    pub description: Option<String>,
    pub nullable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterModel {
    pub name: String,
    pub ty: TypeModel,
    pub initializer: Option<TypeValueModel>,
    pub vararg: bool,
    pub optional: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameterModel {
    pub name: NameEntity,
    pub constraints: Vec<TypeModel>,
}

impl TypeValueModel {
    pub fn new(
        value: NameEntity,
        params: Vec<TypeModel>,
        description: Option<String>,
        nullable: bool,
    ) -> Self {
        Self {
            value,
            params,
            description,
            nullable,
        }
    }

    /// Non-nullable reference without arguments or descriptor.
    pub fn simple(value: NameEntity) -> Self {
        Self::new(value, Vec::new(), None, false)
    }

    pub fn dynamic(description: Option<String>) -> Self {
        Self::new(NameEntity::identifier(DYNAMIC), Vec::new(), description, false)
    }
}

impl TypeModel {
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Value(value) => value.description.as_deref(),
            Self::Function(function) => function.description.as_deref(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Value(value) => value.nullable,
            Self::Function(function) => function.nullable,
        }
    }

    pub fn as_value(&self) -> Option<&TypeValueModel> {
        match self {
            Self::Value(value) => Some(value),
            Self::Function(_) => None,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Value(value) if value.value.is_identifier(DYNAMIC))
    }
}

impl From<TypeValueModel> for TypeModel {
    fn from(value: TypeValueModel) -> Self {
        Self::Value(value)
    }
}

impl From<FunctionTypeModel> for TypeModel {
    fn from(function: FunctionTypeModel) -> Self {
        Self::Function(function)
    }
}

// Textual form used when a translated type is folded into a descriptor.
// Descriptors themselves are never rendered here.

impl fmt::Display for TypeValueModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if !self.params.is_empty() {
            f.write_str("<")?;
            write_joined(f, &self.params)?;
            f.write_str(">")?;
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}

impl fmt::Display for FunctionTypeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            f.write_str("(")?;
        }
        f.write_str("(")?;
        write_joined(f, &self.parameters)?;
        write!(f, ") -> {}", self.return_type)?;
        if self.nullable {
            f.write_str(")?")?;
        }
        Ok(())
    }
}

impl fmt::Display for ParameterModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vararg {
            f.write_str("vararg ")?;
        }
        write!(f, "{}: {}", self.name, self.ty)
    }
}

impl fmt::Display for TypeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => value.fmt(f),
            Self::Function(function) => function.fmt(f),
        }
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod types_tests;
