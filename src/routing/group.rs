//! Command groups: a prefix delegating to a nested router.

use std::fmt;

use super::router::Router;
use crate::error::RouterError;

/// Callback that populates a group's child router.
pub type Registrar = Box<dyn Fn(&mut Router)>;

/// A named subtree of commands.
///
/// A group never matches on its own. On dispatch it builds a fresh child
/// router over the arguments after its prefix, lets the registrar fill it,
/// and dispatches the child.
pub struct Group {
    prefix: String,
    description: String,
    registrar: Registrar,
}

impl Group {
    /// Creates a group after validating its prefix against `[A-Za-z0-9:]+`.
    pub fn new<F>(prefix: &str, registrar: F) -> Result<Self, RouterError>
    where
        F: Fn(&mut Router) + 'static,
    {
        let prefix = prefix.trim();
        if !valid_prefix(prefix) {
            return Err(RouterError::invalid_prefix(prefix));
        }

        Ok(Self {
            prefix: prefix.to_string(),
            description: String::new(),
            registrar: Box::new(registrar),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Fills `child` with the group's routes and groups.
    pub fn register(&self, child: &mut Router) {
        (self.registrar)(child);
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("prefix", &self.prefix)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

fn valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ':')
}
