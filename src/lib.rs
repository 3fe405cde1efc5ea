//! kbind: TypeScript / Web IDL declarations → Kotlin/JS binding model.
//!
//! The crates of this workspace each own one stage:
//!
//! - `kbind-ast`: the raw declaration tree and the raw lowering passes
//! - `kbind-lowering`: raw tree → semantic model
//! - `kbind-model`: the semantic model and the stdlib filter
//!
//! [`Pipeline`] wires them together in the order the stages depend on:
//! raw lowerings, model building and assembly, then the stdlib filter.

pub mod config;
pub mod tracing_config;

pub use config::{KbindConfig, ResolvedConfig, load_config, parse_config};
pub use kbind_common::{Concern, ConcernKind};

use kbind_ast::{ItemArrayLikeLowering, LoweringPipeline, RawLowering, RawSourceSet};
use kbind_common::DiagnosticCollector;
use kbind_lowering::SourceSetAssembler;
use kbind_model::lowerings::filter_out_stdlib_entities;
use kbind_model::{SourceSetModel, StdlibRegistry};
use std::path::Path;
use tracing::{Level, debug, span};

/// Result of a translation run: the model plus every recovered concern, in
/// the order they were raised.
#[derive(Debug)]
pub struct Translation {
    pub model: SourceSetModel,
    pub diagnostics: Vec<Concern>,
}

impl Translation {
    /// True when no node had to be replaced by a fallback.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub struct Pipeline {
    raw_lowerings: LoweringPipeline,
    assembler: SourceSetAssembler,
    reserved_names: StdlibRegistry,
}

impl Pipeline {
    pub fn new(config: &ResolvedConfig) -> Self {
        let mut raw_lowerings = LoweringPipeline::new();
        if config.item_array_like {
            raw_lowerings.push(ItemArrayLikeLowering::new(config.lib_root_package.clone()));
        }

        Pipeline {
            raw_lowerings,
            assembler: SourceSetAssembler::new(&config.working_directory),
            reserved_names: StdlibRegistry::with_extra(&config.reserved_names),
        }
    }

    /// Build a pipeline from an unresolved configuration.
    pub fn from_config(config: &KbindConfig, current_dir: &Path) -> anyhow::Result<Self> {
        Ok(Self::new(&config.resolve(current_dir)?))
    }

    /// Append a raw lowering after the configured ones.
    #[must_use]
    pub fn with_raw_lowering(mut self, lowering: impl RawLowering + 'static) -> Self {
        self.raw_lowerings.push(lowering);
        self
    }

    pub fn raw_lowering_names(&self) -> Vec<&'static str> {
        self.raw_lowerings.pass_names()
    }

    /// Run every stage. Never fails: problems are reported in
    /// [`Translation::diagnostics`].
    pub fn translate(&self, source_set: RawSourceSet) -> Translation {
        let _span = span!(Level::DEBUG, "translate", files = source_set.files.len()).entered();

        let lowered = self.raw_lowerings.run(source_set);

        let mut diagnostics = DiagnosticCollector::new();
        let model = self.assembler.assemble(lowered, &mut diagnostics);
        let model = filter_out_stdlib_entities(model, &self.reserved_names);

        debug!(
            files = model.sources.len(),
            concerns = diagnostics.len(),
            "translation finished"
        );
        Translation {
            model,
            diagnostics: diagnostics.into_concerns(),
        }
    }
}
