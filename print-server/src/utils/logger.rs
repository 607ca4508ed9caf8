//! Logging Infrastructure
//!
//! Structured logging via `tracing`, filtered with `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "print_server=info,http_access=info,rawbt_printer=info,shared=info";

/// Initialize the logger
pub fn init_logger() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
