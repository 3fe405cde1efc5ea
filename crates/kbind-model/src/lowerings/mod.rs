//! Whole-model rewrites that run after model construction.

mod filter_stdlib;
pub use filter_stdlib::{filter_module_stdlib_entities, filter_out_stdlib_entities};

#[cfg(test)]
#[path = "../../tests/filter_stdlib_tests.rs"]
mod filter_stdlib_tests;
