//! Structured logging setup shared by binaries and integration tests.

/// Initialize process-wide logging, filtered by `RUST_LOG` (default `info`).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize process-wide logging with an explicit filter directive,
/// e.g. the `log_filter` of the catalog configuration.
pub fn init_with_filter(directive: &str) {
    tracing::init_with_filter(directive);
}

/// Subscriber construction (filters, JSON formatting).
pub mod tracing;
