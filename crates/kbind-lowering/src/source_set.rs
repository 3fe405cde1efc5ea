//! Source-set assembly.
//!
//! Paths are resolved lexically: nothing here touches the filesystem, so a
//! missing file or a symlink never changes the result.

use crate::ModelLowering;
use kbind_ast::{RawSourceFile, RawSourceSet};
use kbind_common::DiagnosticSink;
use kbind_model::{SourceFileModel, SourceSetModel};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Remove `.` segments and resolve `..` against the preceding segment.
/// `..` directly under the root stays at the root.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(Component::ParentDir),
            },
            other => normalized.push(other),
        }
    }
    normalized
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Applies the model builder to every file of a source set.
#[derive(Clone, Debug)]
pub struct SourceSetAssembler {
    working_directory: PathBuf,
}

impl SourceSetAssembler {
    /// Relative file names are resolved against `working_directory`.
    pub fn new(working_directory: impl Into<PathBuf>) -> Self {
        Self {
            working_directory: working_directory.into(),
        }
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn absolute_path(&self, file_name: &str) -> PathBuf {
        normalize_path(&self.working_directory.join(file_name))
    }

    pub fn assemble(
        &self,
        source_set: RawSourceSet,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> SourceSetModel {
        let mut lowering = ModelLowering::new(diagnostics);
        SourceSetModel {
            sources: source_set
                .files
                .into_iter()
                .map(|file| self.assemble_file(file, &mut lowering))
                .collect(),
        }
    }

    fn assemble_file(&self, file: RawSourceFile, lowering: &mut ModelLowering<'_>) -> SourceFileModel {
        let path = self.absolute_path(&file.file_name);
        debug!(file = %path.display(), "assembling source file");

        // references are relative to the referencing file's directory
        let directory = path.parent().unwrap_or(path.as_path());
        let referenced_files = file
            .referenced_files
            .iter()
            .map(|reference| path_to_string(&normalize_path(&directory.join(reference))))
            .collect();

        SourceFileModel {
            file_name: path_to_string(&path),
            root: lowering.introduce_models(file.root),
            referenced_files,
        }
    }
}

#[cfg(test)]
#[path = "../tests/source_set_tests.rs"]
mod source_set_tests;
