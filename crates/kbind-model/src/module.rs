//! Modules, files and source sets.

use crate::declarations::{AnnotationModel, TopLevelModel};
use kbind_common::NameEntity;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleModel {
    /// Reference the module is qualified by (`@file:JsModule("...")` argument).
    pub qualifier: Option<NameEntity>,
    pub name: NameEntity,
    pub short_name: NameEntity,
    pub declarations: Vec<TopLevelModel>,
    pub annotations: Vec<AnnotationModel>,
    pub submodules: Vec<ModuleModel>,
    /// Filled by import resolution, which runs after this crate.
    pub imports: Vec<NameEntity>,
}

impl ModuleModel {
    /// Find a direct declaration by its (possibly qualified) name.
    pub fn find_declaration(&self, name: &str) -> Option<&TopLevelModel> {
        self.declarations
            .iter()
            .find(|declaration| declaration.name().translate() == name)
    }

    /// Number of declarations in this module and all submodules.
    pub fn declaration_count(&self) -> usize {
        self.declarations.len()
            + self
                .submodules
                .iter()
                .map(ModuleModel::declaration_count)
                .sum::<usize>()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFileModel {
    /// Absolute, normalized path of the file.
    pub file_name: String,
    pub root: ModuleModel,
    /// Absolute, normalized paths of referenced files.
    pub referenced_files: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSetModel {
    pub sources: Vec<SourceFileModel>,
}

impl SourceSetModel {
    /// Rewrite every root module, keeping file order.
    #[must_use]
    pub fn transform(self, mut f: impl FnMut(ModuleModel) -> ModuleModel) -> Self {
        Self {
            sources: self
                .sources
                .into_iter()
                .map(|source| SourceFileModel {
                    root: f(source.root),
                    ..source
                })
                .collect(),
        }
    }

    pub fn source(&self, file_name: &str) -> Option<&SourceFileModel> {
        self.sources
            .iter()
            .find(|source| source.file_name == file_name)
    }
}
