//! Leaf commands.

use std::fmt;

use super::context::Context;
use super::schema::Schema;
use crate::error::RouterError;

/// A command handler. Handlers report their own failures (printing, exit
/// codes); nothing is propagated back through the router.
pub type Handler = Box<dyn Fn(&Context)>;

/// A registered command: a compiled schema plus its handler.
pub struct Route {
    schema: Schema,
    description: String,
    handler: Handler,
}

impl Route {
    /// Compiles `schema` and pairs it with `handler`.
    pub fn new<F>(schema: &str, handler: F) -> Result<Self, RouterError>
    where
        F: Fn(&Context) + 'static,
    {
        Ok(Self {
            schema: Schema::parse(schema)?,
            description: String::new(),
            handler: Box::new(handler),
        })
    }

    pub fn prefix(&self) -> &str {
        self.schema.prefix()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Validates a context against this route.
    ///
    /// Checks, in order: every short flag is permitted, every long option is
    /// permitted, and the invocation shape fits the schema.
    pub fn check(&self, ctx: &Context) -> Result<(), RouterError> {
        if let Some((flag, _)) = ctx.flags().find(|(f, _)| !self.schema.permits_flag(*f)) {
            return Err(RouterError::FlagNotPermitted {
                command: self.prefix().to_string(),
                flag: flag.to_string(),
            });
        }

        if let Some((option, _)) = ctx
            .long_options()
            .find(|(o, _)| !self.schema.permits_long_option(o))
        {
            return Err(RouterError::OptionNotPermitted {
                command: self.prefix().to_string(),
                option: option.to_string(),
            });
        }

        if !self.schema.matches_shape(&ctx.shape(self.prefix())) {
            return Err(RouterError::SchemaMismatch {
                command: self.prefix().to_string(),
                usage: self.schema.text().to_string(),
            });
        }

        Ok(())
    }

    /// Builds a context from the arguments following the prefix, validates it
    /// and runs the handler. The handler is not invoked on error.
    pub fn dispatch<S: AsRef<str>>(&self, args: &[S]) -> Result<(), RouterError> {
        let names = self.schema.positional_names();
        let ctx = Context::build(args, names.as_slice());
        self.check(&ctx)?;
        (self.handler)(&ctx);
        Ok(())
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("schema", &self.schema.text())
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
