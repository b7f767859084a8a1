//! argroute - schema-driven command-line argument routing.
//!
//! This library exposes the routing core and the ambient modules used by the
//! `argroute` binary and the integration tests.

pub mod config;
pub mod error;
pub mod logging;
pub mod routing;

pub use error::{ErrorKind, RouterError};
pub use routing::{Context, Router};
