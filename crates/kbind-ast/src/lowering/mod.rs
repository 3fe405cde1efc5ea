//! Raw Lowering Passes
//!
//! Lowerings rewrite the whole raw source set before any model is built.
//! Each pass is a pure function `RawSourceSet -> RawSourceSet` that may
//! rewrite declarations in place and add synthetic declarations or files.
//!
//! # Architecture
//!
//! A pass implements [`RawLowering`] and overrides one or both hooks:
//!
//! - `lower_interface`: called once for every interface, at any module depth
//! - `lower_source_set`: called once for the whole set; overrides must start
//!   with [`walk_source_set`] so the per-interface hook still runs everywhere
//!
//! Passes are chained with [`LoweringPipeline`]. The pipeline does not infer
//! dependencies between passes: a pass that expects a synthesized
//! declaration must be added after the pass that produces it.

mod item_array_like;
pub use item_array_like::{
    ITEM_ARRAY_LIKE, ItemArrayLikeLowering, NO_INTERFACE_OBJECT, UNSIGNED_LONG,
};

use crate::declarations::{RawDeclaration, RawInterface, RawModule};
use crate::source_set::{RawSourceFile, RawSourceSet};
use kbind_common::NameEntity;
use tracing::{debug, trace};

/// Where a declaration being lowered lives.
#[derive(Clone, Copy, Debug)]
pub struct LoweringScope<'a> {
    pub file_name: &'a str,
    pub package_name: &'a NameEntity,
}

pub trait RawLowering {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn lower_interface(
        &self,
        declaration: RawInterface,
        _scope: &LoweringScope<'_>,
    ) -> RawInterface {
        declaration
    }

    fn lower_source_set(&self, source_set: RawSourceSet) -> RawSourceSet {
        walk_source_set(self, source_set)
    }
}

/// Apply `lowering`'s per-declaration hooks to every file of the set.
pub fn walk_source_set<L: RawLowering + ?Sized>(
    lowering: &L,
    source_set: RawSourceSet,
) -> RawSourceSet {
    RawSourceSet {
        files: source_set
            .files
            .into_iter()
            .map(|file| walk_file(lowering, file))
            .collect(),
    }
}

fn walk_file<L: RawLowering + ?Sized>(lowering: &L, file: RawSourceFile) -> RawSourceFile {
    let root = walk_module(lowering, file.root, &file.file_name);
    RawSourceFile { root, ..file }
}

fn walk_module<L: RawLowering + ?Sized>(
    lowering: &L,
    module: RawModule,
    file_name: &str,
) -> RawModule {
    let RawModule {
        package_name,
        declarations,
        qualifier,
        qualifier_kind,
    } = module;

    let scope = LoweringScope {
        file_name,
        package_name: &package_name,
    };
    let declarations = declarations
        .into_iter()
        .map(|declaration| match declaration {
            RawDeclaration::Interface(interface) => {
                trace!(pass = lowering.name(), interface = %interface.name, "lowering interface");
                RawDeclaration::Interface(lowering.lower_interface(interface, &scope))
            }
            RawDeclaration::Module(submodule) => {
                RawDeclaration::Module(walk_module(lowering, submodule, file_name))
            }
            other => other,
        })
        .collect();

    RawModule {
        package_name,
        declarations,
        qualifier,
        qualifier_kind,
    }
}

/// Ordered chain of raw lowerings.
#[derive(Default)]
pub struct LoweringPipeline {
    passes: Vec<Box<dyn RawLowering>>,
}

impl LoweringPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pass(mut self, pass: impl RawLowering + 'static) -> Self {
        self.push(pass);
        self
    }

    pub fn push(&mut self, pass: impl RawLowering + 'static) {
        self.passes.push(Box::new(pass));
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|pass| pass.name()).collect()
    }

    /// Run every pass in insertion order.
    pub fn run(&self, source_set: RawSourceSet) -> RawSourceSet {
        self.passes.iter().fold(source_set, |source_set, pass| {
            debug!(pass = pass.name(), files = source_set.files.len(), "running raw lowering");
            pass.lower_source_set(source_set)
        })
    }
}

#[cfg(test)]
#[path = "../../tests/lowering_tests.rs"]
mod lowering_tests;
