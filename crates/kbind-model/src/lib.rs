//! Semantic declaration model
//!
//! The normalized, target-agnostic description of a binding: modules holding
//! classes, interfaces, functions, variables, enums, objects and type
//! aliases, with every type expression already translated into a
//! [`TypeModel`]. The model is immutable once built; the emitter consumes it
//! as-is.

pub mod declarations;
pub mod lowerings;
pub mod module;
pub mod stdlib;
pub mod types;

pub use declarations::{
    AnnotationModel, ClassModel, CompanionObjectModel, ConstructorModel, EnumModel,
    EnumTokenModel, FunctionModel, HeritageModel, InterfaceModel, MemberModel, MethodModel,
    ObjectModel, PropertyModel, TopLevelModel, TypeAliasModel, VariableModel,
};
pub use module::{ModuleModel, SourceFileModel, SourceSetModel};
pub use stdlib::{ReservedNames, StdlibRegistry};
pub use types::{FunctionTypeModel, ParameterModel, TypeModel, TypeParameterModel, TypeValueModel};
