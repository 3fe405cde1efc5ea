//! Reserved-name registry.
//!
//! Declarations whose names collide with entities the target standard
//! library already provides must not be emitted a second time.

use kbind_common::NameEntity;
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Names provided by the target standard library (`kotlin` and `kotlin.js`).
const KOTLIN_STDLIB_ENTITIES: &[&str] = &[
    "Any",
    "Array",
    "Boolean",
    "Byte",
    "Char",
    "CharSequence",
    "Comparable",
    "Console",
    "Date",
    "Double",
    "Enum",
    "Float",
    "Function",
    "Int",
    "Iterable",
    "Iterator",
    "JSON",
    "Json",
    "List",
    "Long",
    "Map",
    "Nothing",
    "Number",
    "Pair",
    "Promise",
    "RegExp",
    "RegExpMatch",
    "Set",
    "Short",
    "String",
    "Throwable",
    "Triple",
    "Unit",
    "console",
];

static KOTLIN_STDLIB: Lazy<FxHashSet<NameEntity>> = Lazy::new(|| {
    KOTLIN_STDLIB_ENTITIES
        .iter()
        .map(|name| NameEntity::from_dotted(name))
        .collect()
});

/// Static name set consulted by the stdlib filter.
pub trait ReservedNames {
    fn contains(&self, name: &NameEntity) -> bool;
}

/// The Kotlin standard library entities, optionally extended.
#[derive(Clone, Debug, Default)]
pub struct StdlibRegistry {
    extra: FxHashSet<NameEntity>,
}

impl StdlibRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that also reserves `names` (dot-separated paths).
    pub fn with_extra<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra: names
                .into_iter()
                .map(|name| NameEntity::from_dotted(name.as_ref()))
                .collect(),
        }
    }
}

impl ReservedNames for StdlibRegistry {
    fn contains(&self, name: &NameEntity) -> bool {
        KOTLIN_STDLIB.contains(name) || self.extra.contains(name)
    }
}

impl ReservedNames for FxHashSet<NameEntity> {
    fn contains(&self, name: &NameEntity) -> bool {
        FxHashSet::contains(self, name)
    }
}
