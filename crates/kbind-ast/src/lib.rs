//! Raw declaration tree
//!
//! The input side of the translator: declarations exactly as the front-end
//! adapters produce them, plus the raw lowering passes that rewrite the
//! tree before the semantic model is built.

pub mod declarations;
pub mod lowering;
pub mod source_set;
pub mod types;

pub use declarations::{
    HeritageSymbol, QualifierKind, RawClass, RawConstructor, RawDeclaration, RawExportAssignment,
    RawFunction, RawHeritage, RawImportEquals, RawIndexedGetter, RawInterface, RawMember,
    RawMethod, RawModule, RawObject, RawProperty, RawTypeAlias, RawVariable,
};
pub use lowering::{
    ItemArrayLikeLowering, LoweringPipeline, LoweringScope, NO_INTERFACE_OBJECT, RawLowering,
};
pub use source_set::{RawSourceFile, RawSourceSet};
pub use types::{
    FunctionType, GeneratedInterfaceReference, IntersectionType, LiteralType, NamedType,
    RawInitializer, RawParameter, RawType, RawTypeParameter, TupleType, TypeMeta, UnionType,
};

#[cfg(test)]
#[path = "../tests/raw_types_tests.rs"]
mod raw_types_tests;
