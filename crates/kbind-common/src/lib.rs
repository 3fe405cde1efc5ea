//! Common types and utilities for the kbind declaration translator.
//!
//! This crate provides foundational types used across all kbind crates:
//! - Qualified names (`NameEntity`)
//! - Recoverable diagnostics (`Concern`, `Recovered`, `DiagnosticSink`)
//! - Well-known library root names

// Qualified names (`a.b.c`) shared by the raw tree and the model
pub mod name;
pub use name::NameEntity;

// Diagnostic-with-fallback machinery
pub mod diagnostics;
pub use diagnostics::{Concern, ConcernKind, DiagnosticCollector, DiagnosticSink, Recovered};

/// Pseudo package under which the standard library declarations live.
pub const LIB_ROOT: &str = "<LIBROOT>";

/// Name of the catch-all type used whenever a structure has no direct counterpart.
pub const DYNAMIC: &str = "dynamic";
