//! Recoverable diagnostics.
//!
//! Nothing in the translation core is fatal. When a node cannot be handled,
//! the component picks a safe fallback and records a `Concern`:
//!
//! 1. **Production**: a component returns `Recovered::Degraded { value, concern }`
//! 2. **Resolution**: the caller unwraps it with `Recovered::resolve`, which
//!    forwards the concern to the injected `DiagnosticSink` and yields the value
//!
//! This keeps the "never abort" contract without a process-wide log.

use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Category of a recoverable condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ConcernKind {
    /// A type expression shape the translator has no rule for.
    UnknownTypeExpression,
    /// A declaration kind the model builder has no counterpart for.
    UnknownDeclaration,
    /// A name that could not be resolved to a qualified path.
    UnresolvedName,
}

/// A recoverable diagnostic message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Concern {
    pub kind: ConcernKind,
    pub message: String,
}

impl Concern {
    pub fn new(kind: ConcernKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Receiver of recoverable diagnostics.
pub trait DiagnosticSink {
    fn report(&mut self, concern: Concern);
}

/// Default sink: keeps every concern in arrival order.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    concerns: Vec<Concern>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn concerns(&self) -> &[Concern] {
        &self.concerns
    }

    pub fn is_empty(&self) -> bool {
        self.concerns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.concerns.len()
    }

    pub fn count(&self, kind: ConcernKind) -> usize {
        self.concerns.iter().filter(|c| c.kind == kind).count()
    }

    pub fn into_concerns(self) -> Vec<Concern> {
        self.concerns
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&mut self, concern: Concern) {
        warn!(kind = ?concern.kind, "{}", concern.message);
        self.concerns.push(concern);
    }
}

/// A value that is either a plain success or a fallback paired with the
/// concern that made the fallback necessary.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a `Recovered` value must be resolved so its concern reaches a sink"]
pub enum Recovered<T> {
    Clean(T),
    Degraded { value: T, concern: Concern },
}

impl<T> Recovered<T> {
    /// Record `message` and substitute `fallback`.
    pub fn concern(kind: ConcernKind, message: impl Into<String>, fallback: T) -> Self {
        Self::Degraded {
            value: fallback,
            concern: Concern::new(kind, message),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Forward the concern (if any) to `sink` and return the value.
    pub fn resolve<S: DiagnosticSink + ?Sized>(self, sink: &mut S) -> T {
        match self {
            Self::Clean(value) => value,
            Self::Degraded { value, concern } => {
                sink.report(concern);
                value
            }
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Recovered<U> {
        match self {
            Self::Clean(value) => Recovered::Clean(f(value)),
            Self::Degraded { value, concern } => Recovered::Degraded {
                value: f(value),
                concern,
            },
        }
    }
}

impl<T> From<T> for Recovered<T> {
    fn from(value: T) -> Self {
        Self::Clean(value)
    }
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod diagnostics_tests;
