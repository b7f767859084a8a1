//! Command handlers for the argroute binary.
//!
//! Handlers receive the routing context, print their output and exit the
//! process on failure. The pure parts live in plain functions so they can be
//! tested without touching stdout.

pub mod config;
pub mod files;
pub mod schema;

use tracing::error;

/// Logs `msg` and exits with status 1.
pub fn fail(msg: impl std::fmt::Display) -> ! {
    error!("{msg}");
    std::process::exit(1)
}
