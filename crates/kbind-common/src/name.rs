//! Qualified names.
//!
//! Declarations, packages and type references are all named by a
//! `NameEntity`: either a single identifier or a left-nested chain of
//! qualifiers (`a.b.c` is `Qualifier(Qualifier(a, b), c)`).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameEntity {
    Identifier(String),
    Qualifier {
        left: Box<NameEntity>,
        right: String,
    },
}

impl NameEntity {
    pub fn identifier(value: impl Into<String>) -> Self {
        Self::Identifier(value.into())
    }

    /// Parse a dot-separated path. Empty segments are kept so that
    /// `translate()` round-trips the input exactly.
    pub fn from_dotted(path: &str) -> Self {
        let mut segments = path.split('.');
        // `split` always yields at least one item
        let head = Self::identifier(segments.next().unwrap_or_default());
        segments.fold(head, |acc, segment| acc.append(segment))
    }

    /// Return `self.segment`.
    #[must_use]
    pub fn append(self, segment: impl Into<String>) -> Self {
        Self::Qualifier {
            left: Box::new(self),
            right: segment.into(),
        }
    }

    pub fn left_most(&self) -> &str {
        match self {
            Self::Identifier(value) => value,
            Self::Qualifier { left, .. } => left.left_most(),
        }
    }

    pub fn right_most(&self) -> &str {
        match self {
            Self::Identifier(value) => value,
            Self::Qualifier { right, .. } => right,
        }
    }

    /// Segments from left to right.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Self::Identifier(value) => vec![value.as_str()],
            Self::Qualifier { left, right } => {
                let mut segments = left.segments();
                segments.push(right);
                segments
            }
        }
    }

    /// Dot-joined textual form, as it is spelled in the target language.
    pub fn translate(&self) -> String {
        self.segments().join(".")
    }

    pub fn is_identifier(&self, value: &str) -> bool {
        matches!(self, Self::Identifier(name) if name == value)
    }
}

impl fmt::Display for NameEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(value) => f.write_str(value),
            Self::Qualifier { left, right } => write!(f, "{left}.{right}"),
        }
    }
}

impl From<&str> for NameEntity {
    fn from(value: &str) -> Self {
        Self::from_dotted(value)
    }
}

#[cfg(test)]
#[path = "../tests/name_tests.rs"]
mod name_tests;
