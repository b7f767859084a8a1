//! The dispatch root.
//!
//! A router owns routes and groups keyed by prefix, plus an optional
//! fallback. Registration never fails on the spot: the first error is kept
//! and returned by [`Router::dispatch`], so calls can be chained freely.
//!
//! ```
//! use argroute::routing::Router;
//!
//! let mut router = Router::from_line("copy a.txt b.txt -f");
//! router
//!     .add("copy <source> <destination> [-f]", |ctx| {
//!         assert_eq!(ctx.positional("source"), "a.txt");
//!         assert!(ctx.has_flag("f"));
//!     })
//!     .description("Copy a file");
//! router.dispatch().unwrap();
//! ```

use std::fmt;

use super::context::Context;
use super::group::Group;
use super::help;
use super::route::{Handler, Route};
use super::tokenizer::split_line;
use crate::config::RouterConfig;
use crate::error::RouterError;

/// Lifecycle of a router. Dispatch happens at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting registrations; not dispatched yet.
    Registering,
    /// A dispatch is in progress.
    Dispatching,
    /// Dispatched. Further dispatch calls are no-ops.
    Dispatched,
}

/// Handle returned by [`Router::add`] for attaching route metadata.
///
/// Holds nothing when registration failed; the error is reported on dispatch.
pub struct RouteEntry<'r> {
    route: Option<&'r mut Route>,
}

impl RouteEntry<'_> {
    /// Sets the description shown in help output.
    pub fn description(mut self, description: &str) -> Self {
        if let Some(route) = self.route.as_deref_mut() {
            route.set_description(description);
        }
        self
    }

    /// True when the route was registered.
    pub fn is_registered(&self) -> bool {
        self.route.is_some()
    }
}

/// Handle returned by [`Router::group`] for attaching group metadata.
pub struct GroupEntry<'r> {
    group: Option<&'r mut Group>,
}

impl GroupEntry<'_> {
    /// Sets the description shown in help output.
    pub fn description(mut self, description: &str) -> Self {
        if let Some(group) = self.group.as_deref_mut() {
            group.set_description(description);
        }
        self
    }

    /// True when the group was registered.
    pub fn is_registered(&self) -> bool {
        self.group.is_some()
    }
}

/// Command router over an explicit argument list.
pub struct Router {
    config: RouterConfig,
    routes: Vec<Route>,
    groups: Vec<Group>,
    fallback: Option<Handler>,
    arguments: Vec<String>,
    phase: Phase,
    pending: Option<RouterError>,
}

impl Router {
    /// Creates a router over `args`, which should not include the program name.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            config: RouterConfig::default(),
            routes: Vec::new(),
            groups: Vec::new(),
            fallback: None,
            arguments: args.into_iter().map(Into::into).collect(),
            phase: Phase::Registering,
            pending: None,
        }
    }

    /// Creates a router over a literal command line split on whitespace.
    pub fn from_line(line: &str) -> Self {
        Self::new(split_line(line))
    }

    /// Sets the metadata used by help output.
    pub fn with_config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers a command.
    ///
    /// `schema` is the command name followed by its positionals and flags:
    ///
    /// ```text
    /// copy <source> [-f -v --dry-run] <destination> <mode?>
    /// ```
    ///
    /// An invalid schema or a taken prefix is recorded and returned by the
    /// next [`Router::dispatch`].
    pub fn add<F>(&mut self, schema: &str, handler: F) -> RouteEntry<'_>
    where
        F: Fn(&Context) + 'static,
    {
        let route = match Route::new(schema, handler) {
            Ok(route) => route,
            Err(err) => {
                self.record(err);
                return RouteEntry { route: None };
            }
        };

        if self.is_taken(route.prefix()) {
            self.record(RouterError::duplicate_prefix(route.prefix()));
            return RouteEntry { route: None };
        }

        self.routes.push(route);
        RouteEntry {
            route: self.routes.last_mut(),
        }
    }

    /// Registers a group of commands under `prefix`.
    ///
    /// `registrar` runs only when the group is dispatched, against a fresh
    /// child router over the arguments that follow `prefix`:
    ///
    /// ```
    /// use argroute::routing::Router;
    ///
    /// let mut router = Router::from_line("remote add origin");
    /// router.group("remote", |remote| {
    ///     remote.add("add <name>", |ctx| assert_eq!(ctx.positional("name"), "origin"));
    ///     remote.add("remove <name>", |_| {});
    /// });
    /// router.dispatch().unwrap();
    /// ```
    pub fn group<F>(&mut self, prefix: &str, registrar: F) -> GroupEntry<'_>
    where
        F: Fn(&mut Router) + 'static,
    {
        let group = match Group::new(prefix, registrar) {
            Ok(group) => group,
            Err(err) => {
                self.record(err);
                return GroupEntry { group: None };
            }
        };

        if self.is_taken(group.prefix()) {
            self.record(RouterError::duplicate_prefix(group.prefix()));
            return GroupEntry { group: None };
        }

        self.groups.push(group);
        GroupEntry {
            group: self.groups.last_mut(),
        }
    }

    /// Sets the handler used when nothing matches or no arguments were given.
    pub fn fallback<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&Context) + 'static,
    {
        self.fallback = Some(Box::new(handler));
        self
    }

    /// Resolves the arguments and runs the matching handler.
    ///
    /// Order of resolution for the first argument: group, route, fallback.
    /// Without a match and without a fallback, returns `UndefinedCommand`
    /// carrying every route prefix that contains the argument.
    ///
    /// A pending registration error is returned before anything else. Once a
    /// router has dispatched, further calls do nothing and return `Ok(())`.
    pub fn dispatch(&mut self) -> Result<(), RouterError> {
        if let Some(err) = &self.pending {
            return Err(err.clone());
        }
        if self.phase != Phase::Registering {
            return Ok(());
        }

        self.phase = Phase::Dispatching;
        let result = self.resolve();
        self.phase = Phase::Dispatched;
        result
    }

    /// Replaces the arguments with a literal command line, then dispatches.
    ///
    /// Same one-shot contract as [`Router::dispatch`].
    pub fn dispatch_line(&mut self, line: &str) -> Result<(), RouterError> {
        if self.phase == Phase::Registering {
            self.arguments = split_line(line);
        }
        self.dispatch()
    }

    /// Route prefixes containing `token`, in registration order.
    pub fn suggest(&self, token: &str) -> Vec<String> {
        self.routes
            .iter()
            .map(Route::prefix)
            .filter(|prefix| prefix.contains(token))
            .map(str::to_string)
            .collect()
    }

    /// Renders the command list for a terminal `width` columns wide.
    pub fn help(&self, width: usize) -> String {
        help::render(self, width)
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn route_prefixes(&self) -> Vec<&str> {
        self.routes.iter().map(Route::prefix).collect()
    }

    pub fn group_prefixes(&self) -> Vec<&str> {
        self.groups.iter().map(Group::prefix).collect()
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// The first registration error, if any.
    pub fn pending_error(&self) -> Option<&RouterError> {
        self.pending.as_ref()
    }

    fn resolve(&self) -> Result<(), RouterError> {
        let Some((first, rest)) = self.arguments.split_first() else {
            if let Some(fallback) = &self.fallback {
                fallback(&Context::default());
            }
            return Ok(());
        };
        let first = first.as_str();

        if let Some(group) = self.groups.iter().find(|g| g.prefix() == first) {
            let mut child =
                Router::new(rest.to_vec()).with_config(self.config.nested(group.prefix()));
            group.register(&mut child);
            return child.dispatch();
        }

        if let Some(route) = self.routes.iter().find(|r| r.prefix() == first) {
            return route.dispatch(rest);
        }

        if let Some(fallback) = &self.fallback {
            fallback(&Context::build(self.arguments.as_slice(), &[] as &[&str]));
            return Ok(());
        }

        Err(RouterError::UndefinedCommand {
            command: first.to_string(),
            suggestions: self.suggest(first),
        })
    }

    fn is_taken(&self, prefix: &str) -> bool {
        self.routes.iter().any(|r| r.prefix() == prefix)
            || self.groups.iter().any(|g| g.prefix() == prefix)
    }

    fn record(&mut self, err: RouterError) {
        if self.pending.is_none() {
            self.pending = Some(err);
        }
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("config", &self.config)
            .field("routes", &self.routes)
            .field("groups", &self.groups)
            .field("fallback", &self.fallback.is_some())
            .field("arguments", &self.arguments)
            .field("phase", &self.phase)
            .field("pending", &self.pending)
            .finish()
    }
}
