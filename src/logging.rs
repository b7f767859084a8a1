//! Logging configuration for argroute.
//!
//! Logs go to stderr so command output on stdout stays clean for pipes.

use tracing_subscriber::EnvFilter;

/// Effective filter directive from the configured level and `-v` count.
///
/// Each `-v` raises the level one step above the configured one: info,
/// debug, trace.
pub fn filter_directive(configured: &str, verbosity: u8) -> String {
    match verbosity {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Initializes stderr logging.
///
/// `RUST_LOG` takes precedence over `directive`.
pub fn init_stderr_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
