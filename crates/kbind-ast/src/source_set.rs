use crate::declarations::RawModule;
use kbind_common::NameEntity;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSourceFile {
    /// Path as given by the front-end; may be relative.
    pub file_name: String,
    pub root: RawModule,
    /// Paths of referenced files, relative to this file's directory.
    pub referenced_files: Vec<String>,
}

impl RawSourceFile {
    pub fn new(file_name: impl Into<String>, root: RawModule) -> Self {
        Self {
            file_name: file_name.into(),
            root,
            referenced_files: Vec::new(),
        }
    }

    pub fn package_name(&self) -> &NameEntity {
        &self.root.package_name
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSourceSet {
    pub files: Vec<RawSourceFile>,
}

impl RawSourceSet {
    pub fn new(files: Vec<RawSourceFile>) -> Self {
        Self { files }
    }
}
