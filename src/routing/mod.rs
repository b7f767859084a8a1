//! Schema-driven command routing.
//!
//! Raw arguments flow through the [`Router`]: the first argument selects a
//! [`Group`] (which recurses into a child router), a [`Route`] (which checks
//! the rest against its [`Schema`] and runs its handler with a [`Context`]),
//! or the fallback. Everything else is an `UndefinedCommand` with suggestions.

pub mod context;
pub mod group;
pub mod help;
pub mod route;
pub mod router;
pub mod schema;
pub mod tokenizer;

pub use context::Context;
pub use group::Group;
pub use help::{CrosstermWidth, FixedWidth, TerminalWidth};
pub use route::{Handler, Route};
pub use router::{GroupEntry, Phase, RouteEntry, Router};
pub use schema::{Positional, Schema};
pub use tokenizer::Token;
