//! Model lowering: raw declaration tree → semantic model
//!
//! This crate is the bridge between the raw tree handed over by the
//! front-end adapters (`kbind-ast`) and the semantic model consumed by the
//! emitter (`kbind-model`).
//!
//! Lowering is total. A node the lowering has no rule for is replaced by a
//! safe fallback and reported to the [`DiagnosticSink`] given to
//! [`ModelLowering::new`]; the run always produces a complete model.
//!
//! The work is split by concern, each file adding methods to
//! [`ModelLowering`]:
//!
//! - `type_translator`: raw type expressions to [`TypeModel`](kbind_model::TypeModel)
//! - `members`: member translation and the instance / static split
//! - `heritage`: parent references
//! - `introduce_models`: one raw module subtree to one module model
//! - `source_set`: whole source sets, with absolute file paths

use kbind_common::DiagnosticSink;

mod heritage;
mod introduce_models;
mod members;
mod source_set;
mod type_translator;

pub use introduce_models::{JS_MODULE, JS_QUALIFIER};
pub use members::SplitMembers;
pub use source_set::{SourceSetAssembler, normalize_path};
pub use type_translator::{NULL_DEFAULT, TranslationContext};

/// Lowering context.
///
/// Holds the diagnostic sink every recoverable concern is forwarded to.
pub struct ModelLowering<'d> {
    diagnostics: &'d mut dyn DiagnosticSink,
}

impl<'d> ModelLowering<'d> {
    pub fn new(diagnostics: &'d mut dyn DiagnosticSink) -> Self {
        ModelLowering { diagnostics }
    }
}
