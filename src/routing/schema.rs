//! Schema compiler.
//!
//! A schema describes one command: its prefix, positionals and permitted
//! flags, e.g. `copy <source> [-f --dry-run] <destination> <mode?>`.
//!
//! Compilation produces the declared names plus a regex over the invocation
//! shape (see [`Token::render_shape`](super::tokenizer::Token)). The regex
//! only validates count and order; values are extracted by the tokenizer.

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::RouterError;

const FLAG: &str = r"(?:-[A-Za-z0-9]|--[a-z0-9][a-z0-9-]*)";

/// prefix, required positionals, one optional flag group, required
/// positionals, optional positionals.
static GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^[a-z0-9:]+(?: <[a-z0-9_]+>)*(?: \[ ?{FLAG}(?: {FLAG})* ?\])?(?: <[a-z0-9_]+>)*(?: <[a-z0-9_]+\?>)*$"
    ))
    .expect("schema grammar is a valid regex")
});

static ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(?P<name>[a-z0-9_]+)(?P<optional>\?)?>|\[(?P<group>[^\]]*)\]")
        .expect("schema element pattern is a valid regex")
});

/// A declared positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positional {
    pub name: String,
    pub required: bool,
}

/// A compiled command schema.
#[derive(Debug, Clone)]
pub struct Schema {
    prefix: String,
    text: String,
    pattern: Regex,
    positionals: Vec<Positional>,
    flags: BTreeSet<char>,
    long_options: BTreeSet<String>,
}

impl Schema {
    /// Compiles a schema string.
    pub fn parse(schema: &str) -> Result<Self, RouterError> {
        let text = sanitize(schema);

        if !GRAMMAR.is_match(&text) {
            return Err(RouterError::invalid_schema(
                text,
                "expected: name <arg>... [-f --option] <arg>... <optional?>...",
            ));
        }

        let (prefix, rest) = text.split_once(' ').unwrap_or((text.as_str(), ""));
        let mut pattern = format!("^{}", regex::escape(prefix));
        let mut positionals: Vec<Positional> = Vec::new();
        let mut flags = BTreeSet::new();
        let mut long_options = BTreeSet::new();

        for caps in ELEMENT.captures_iter(rest) {
            if let Some(name) = caps.name("name") {
                let name = name.as_str();
                if positionals.iter().any(|p| p.name == name) {
                    return Err(RouterError::invalid_schema(
                        text.clone(),
                        format!("positional <{name}> is declared twice"),
                    ));
                }
                let required = caps.name("optional").is_none();
                pattern.push_str(if required { " _" } else { "(?: _)?" });
                positionals.push(Positional {
                    name: name.to_string(),
                    required,
                });
            } else if let Some(group) = caps.name("group") {
                let mut alternatives = Vec::new();
                for field in group.as_str().split_whitespace() {
                    if let Some(long) = field.strip_prefix("--") {
                        if long_options.insert(long.to_string()) {
                            alternatives.push(format!("--{}(?:=_)?", regex::escape(long)));
                        }
                    } else if let Some(flag) = field.strip_prefix('-').and_then(|f| f.chars().next()) {
                        if flags.insert(flag) {
                            alternatives.push(format!("-{flag}"));
                        }
                    }
                }
                pattern.push_str(&format!("(?: (?:{}))*", alternatives.join("|")));
            }
        }
        pattern.push('$');

        let pattern = Regex::new(&pattern)
            .map_err(|e| RouterError::invalid_schema(text.clone(), e.to_string()))?;

        Ok(Self {
            prefix: prefix.to_string(),
            text,
            pattern,
            positionals,
            flags,
            long_options,
        })
    }

    /// The command name: the first word of the schema.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The normalized schema text, used in usage hints.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Declared positionals in declaration order.
    pub fn positionals(&self) -> &[Positional] {
        &self.positionals
    }

    /// Declared positional names in declaration order.
    pub fn positional_names(&self) -> Vec<&str> {
        self.positionals.iter().map(|p| p.name.as_str()).collect()
    }

    /// Permitted short flags.
    pub fn flags(&self) -> &BTreeSet<char> {
        &self.flags
    }

    /// Permitted long options, without their dashes.
    pub fn long_options(&self) -> &BTreeSet<String> {
        &self.long_options
    }

    pub fn permits_flag(&self, flag: char) -> bool {
        self.flags.contains(&flag)
    }

    pub fn permits_long_option(&self, name: &str) -> bool {
        self.long_options.contains(name)
    }

    /// Checks an invocation shape against the compiled pattern.
    pub(crate) fn matches_shape(&self, shape: &str) -> bool {
        self.pattern.is_match(shape)
    }
}

impl FromStr for Schema {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Collapses whitespace runs to single spaces and trims the edges.
fn sanitize(schema: &str) -> String {
    schema.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(schema: &Schema) -> Vec<&str> {
        schema.positional_names()
    }

    #[test]
    fn test_prefix_only() {
        let schema = Schema::parse("status").unwrap();
        assert_eq!(schema.prefix(), "status");
        assert!(schema.positionals().is_empty());
        assert!(schema.matches_shape("status"));
        assert!(!schema.matches_shape("status _"));
    }

    #[test]
    fn test_prefix_is_first_word_after_sanitizing() {
        let schema = Schema::parse("   copy    <source>\t<destination>  ").unwrap();
        assert_eq!(schema.prefix(), "copy");
        assert_eq!(schema.text(), "copy <source> <destination>");
        assert_eq!(names(&schema), ["source", "destination"]);
    }

    #[test]
    fn test_required_and_optional_positionals() {
        let schema = Schema::parse("get <key> <default?>").unwrap();
        assert_eq!(
            schema.positionals(),
            [
                Positional {
                    name: "key".to_string(),
                    required: true
                },
                Positional {
                    name: "default".to_string(),
                    required: false
                },
            ]
        );
        assert!(schema.matches_shape("get _"));
        assert!(schema.matches_shape("get _ _"));
        assert!(!schema.matches_shape("get"));
        assert!(!schema.matches_shape("get _ _ _"));
    }

    #[test]
    fn test_flag_group() {
        let schema = Schema::parse("copy <source> [-f -v --dry-run] <destination>").unwrap();
        assert_eq!(schema.flags().iter().collect::<String>(), "fv");
        assert!(schema.permits_long_option("dry-run"));
        assert!(schema.permits_flag('f'));
        assert!(!schema.permits_flag('x'));
        assert_eq!(names(&schema), ["source", "destination"]);

        assert!(schema.matches_shape("copy _ _"));
        assert!(schema.matches_shape("copy _ -f -v -f --dry-run _"));
        assert!(schema.matches_shape("copy _ --dry-run=_ _"));
        assert!(!schema.matches_shape("copy -f _ _"));
        assert!(!schema.matches_shape("copy _ -x _"));
    }

    #[test]
    fn test_flag_group_with_inner_spaces() {
        let schema = Schema::parse("ls [ -a -l ]").unwrap();
        assert_eq!(schema.flags().len(), 2);
        assert!(schema.matches_shape("ls -l -a"));
    }

    #[test]
    fn test_namespaced_prefix() {
        let schema = Schema::parse("db:migrate [--step]").unwrap();
        assert_eq!(schema.prefix(), "db:migrate");
        assert!(schema.matches_shape("db:migrate --step=_"));
    }

    #[test]
    fn test_invalid_schemas() {
        for schema in [
            "",
            "Copy",
            "copy <Source>",
            "copy <source",
            "copy <name?> <other>",
            "copy [-f] <name?> [-v]",
            "copy <name?> [-f]",
            "copy [-ab]",
            "copy [--Long]",
            "copy []",
            "copy {source}",
        ] {
            assert!(
                matches!(Schema::parse(schema), Err(RouterError::InvalidSchema { .. })),
                "{schema:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_duplicate_positional_name() {
        let err = Schema::parse("copy <a> <a>").unwrap_err();
        assert!(matches!(err, RouterError::InvalidSchema { reason, .. } if reason.contains("<a>")));
    }

    #[test]
    fn test_from_str() {
        let schema: Schema = "run <task> [-q]".parse().unwrap();
        assert_eq!(schema.prefix(), "run");
    }
}
