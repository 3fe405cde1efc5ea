//! Tracing configuration.
//!
//! The library only emits events; installing a subscriber is up to the
//! embedding tool. [`init_tracing`] reads the environment:
//!
//! - `KBIND_LOG` (falls back to `RUST_LOG`): filter directives
//! - `KBIND_LOG_FORMAT`: `text` (default), `tree` or `json`
//!
//! ```bash
//! KBIND_LOG=debug KBIND_LOG_FORMAT=tree my-binding-tool lib.dom.json
//! KBIND_LOG="kbind_ast=debug,kbind_lowering=trace" my-binding-tool lib.dom.json
//! ```
//!
//! With `tree`, the `translate` span nests every per-pass `running raw
//! lowering` event and the per-file `assembling source file` events under it.
//! With `text`, the `translate` span is reported when it closes, with its
//! busy time.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_ENV: &str = "KBIND_LOG";
const FALLBACK_LOG_ENV: &str = "RUST_LOG";
const LOG_FORMAT_ENV: &str = "KBIND_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a `KBIND_LOG_FORMAT` value; anything unknown means [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Filter directives from the environment, if logging was asked for.
fn directives_from_env() -> Option<String> {
    std::env::var(LOG_ENV)
        .or_else(|_| std::env::var(FALLBACK_LOG_ENV))
        .ok()
}

/// Install the global subscriber described by the environment.
///
/// Returns `false` when no filter is configured or a subscriber is already
/// installed.
pub fn init_tracing() -> bool {
    let Some(directives) = directives_from_env() else {
        return false;
    };
    let format = std::env::var(LOG_FORMAT_ENV)
        .map(|value| LogFormat::parse(&value))
        .unwrap_or_default();

    init_tracing_with(&directives, format)
}

/// Install a global subscriber writing to stderr.
///
/// Only the first successful call in a process takes effect; later calls
/// return `false`.
pub fn init_tracing_with(directives: &str, format: LogFormat) -> bool {
    let registry = Registry::default().with(EnvFilter::builder().parse_lossy(directives));

    let installed = match format {
        LogFormat::Tree => registry
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_indent_lines(true)
                    .with_targets(true)
                    .with_bracketed_fields(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.is_ok()
}
