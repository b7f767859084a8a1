//! Error types for argroute.
//!
//! `RouterError` covers everything the routing core can report, from schema
//! registration to dispatch. `AppError` covers the binary's own failures.

use thiserror::Error;

/// Discriminant of a [`RouterError`], for callers that only care about the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidPrefix,
    DuplicatePrefix,
    InvalidSchema,
    FlagNotPermitted,
    OptionNotPermitted,
    SchemaMismatch,
    UndefinedCommand,
}

/// Errors produced while registering or dispatching commands.
///
/// Registration errors (`InvalidPrefix`, `DuplicatePrefix`, `InvalidSchema`)
/// are stored by the router and surfaced on the next dispatch. The rest are
/// returned by the dispatch itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// A group prefix that does not match `[A-Za-z0-9:]+`.
    #[error("router error: invalid prefix [{prefix}], it should match [A-Za-z0-9:]")]
    InvalidPrefix { prefix: String },

    /// Two routes or groups registered under the same prefix on one router.
    #[error("router error: duplicate prefix [{prefix}]")]
    DuplicatePrefix { prefix: String },

    /// A route schema that does not follow the schema grammar.
    #[error("incorrect schema syntax: {schema} ({reason})")]
    InvalidSchema { schema: String, reason: String },

    /// A short flag the route does not declare.
    #[error("flag [-{flag}] is not permitted by command [{command}]")]
    FlagNotPermitted { command: String, flag: String },

    /// A long option the route does not declare.
    #[error("option [--{option}] is not permitted by command [{command}]")]
    OptionNotPermitted { command: String, option: String },

    /// The arguments do not fit the route's schema.
    #[error("invalid usage of [{command}], expected: {usage}")]
    SchemaMismatch { command: String, usage: String },

    /// No route or group matches the first argument.
    #[error("undefined command: {command}")]
    UndefinedCommand {
        command: String,
        suggestions: Vec<String>,
    },
}

impl RouterError {
    pub fn invalid_prefix(prefix: impl Into<String>) -> Self {
        Self::InvalidPrefix {
            prefix: prefix.into(),
        }
    }

    pub fn duplicate_prefix(prefix: impl Into<String>) -> Self {
        Self::DuplicatePrefix {
            prefix: prefix.into(),
        }
    }

    pub fn invalid_schema(schema: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSchema {
            schema: schema.into(),
            reason: reason.into(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPrefix { .. } => ErrorKind::InvalidPrefix,
            Self::DuplicatePrefix { .. } => ErrorKind::DuplicatePrefix,
            Self::InvalidSchema { .. } => ErrorKind::InvalidSchema,
            Self::FlagNotPermitted { .. } => ErrorKind::FlagNotPermitted,
            Self::OptionNotPermitted { .. } => ErrorKind::OptionNotPermitted,
            Self::SchemaMismatch { .. } => ErrorKind::SchemaMismatch,
            Self::UndefinedCommand { .. } => ErrorKind::UndefinedCommand,
        }
    }

    /// Returns true for errors detected while registering routes and groups.
    pub fn is_registration(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidPrefix | ErrorKind::DuplicatePrefix | ErrorKind::InvalidSchema
        )
    }

    /// The offending token: prefix, flag, option or command, depending on the kind.
    pub fn token(&self) -> &str {
        match self {
            Self::InvalidPrefix { prefix } | Self::DuplicatePrefix { prefix } => prefix,
            Self::InvalidSchema { schema, .. } => schema,
            Self::FlagNotPermitted { flag, .. } => flag,
            Self::OptionNotPermitted { option, .. } => option,
            Self::SchemaMismatch { command, .. } | Self::UndefinedCommand { command, .. } => {
                command
            }
        }
    }

    /// Schema text to show as a usage hint, for `SchemaMismatch`.
    pub fn usage(&self) -> Option<&str> {
        match self {
            Self::SchemaMismatch { usage, .. } => Some(usage),
            _ => None,
        }
    }

    /// "Did you mean" candidates, for `UndefinedCommand`. Empty otherwise.
    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::UndefinedCommand { suggestions, .. } => suggestions,
            _ => &[],
        }
    }
}

/// Errors of the argroute binary itself.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors (unreadable or malformed config file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors coming out of the router.
    #[error(transparent)]
    Router(#[from] RouterError),
}

impl AppError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Router(e) if e.is_registration() => "Registration Error",
            Self::Router(_) => "Dispatch Error",
        }
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_schema() {
        let err = RouterError::invalid_schema("copy <src", "unterminated positional");
        assert_eq!(
            err.to_string(),
            "incorrect schema syntax: copy <src (unterminated positional)"
        );
        assert_eq!(err.kind(), ErrorKind::InvalidSchema);
        assert!(err.is_registration());
    }

    #[test]
    fn test_error_display_flag_not_permitted() {
        let err = RouterError::FlagNotPermitted {
            command: "cmd".to_string(),
            flag: "b".to_string(),
        };
        assert_eq!(err.to_string(), "flag [-b] is not permitted by command [cmd]");
        assert_eq!(err.token(), "b");
        assert!(!err.is_registration());
    }

    #[test]
    fn test_schema_mismatch_carries_usage() {
        let err = RouterError::SchemaMismatch {
            command: "copy".to_string(),
            usage: "copy <source> <destination>".to_string(),
        };
        assert_eq!(err.usage(), Some("copy <source> <destination>"));
        assert!(err.suggestions().is_empty());
    }

    #[test]
    fn test_undefined_command_carries_suggestions() {
        let err = RouterError::UndefinedCommand {
            command: "pr".to_string(),
            suggestions: vec!["print".to_string(), "sprint".to_string()],
        };
        assert_eq!(err.to_string(), "undefined command: pr");
        assert_eq!(err.suggestions(), ["print", "sprint"]);
        assert_eq!(err.usage(), None);
    }

    #[test]
    fn test_app_error_category() {
        assert_eq!(AppError::config("bad").category(), "Configuration Error");
        assert_eq!(
            AppError::from(RouterError::duplicate_prefix("copy")).category(),
            "Registration Error"
        );
        assert_eq!(
            AppError::from(RouterError::UndefinedCommand {
                command: "x".to_string(),
                suggestions: vec![],
            })
            .category(),
            "Dispatch Error"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RouterError>();
        assert_send_sync::<AppError>();
    }
}
