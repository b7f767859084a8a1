//! Per-dispatch argument context handed to handlers.

use std::collections::BTreeMap;

use super::tokenizer::{tokenize, Token};

/// Parsed flags, long options and positionals of one invocation.
///
/// A context is built fresh for every dispatch and dropped once the handler
/// returns. Keys are stored without their leading dashes; every accessor
/// accepts either form, so `has_flag("v")` and `has_flag("-v")` are the same.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    flags: BTreeMap<char, usize>,
    long_options: BTreeMap<String, String>,
    positionals: BTreeMap<String, String>,
    values: Vec<String>,
    tokens: Vec<Token>,
}

impl Context {
    /// Builds a context from raw arguments, binding bare values to `names` in order.
    ///
    /// The k-th bare value binds to the k-th name. Values beyond the number of
    /// names stay unbound; they are still listed by [`Context::values`].
    pub fn build<S: AsRef<str>, N: AsRef<str>>(args: &[S], names: &[N]) -> Self {
        let tokens = tokenize(args);
        let mut ctx = Context::default();

        for token in &tokens {
            match token {
                Token::ShortFlags(flags) => {
                    for flag in flags {
                        *ctx.flags.entry(*flag).or_insert(0) += 1;
                    }
                }
                Token::LongOption { name, value } => {
                    ctx.long_options
                        .insert(name.clone(), value.clone().unwrap_or_default());
                }
                Token::Bare(value) => ctx.values.push(value.clone()),
            }
        }

        for (name, value) in names.iter().zip(&ctx.values) {
            ctx.positionals
                .insert(name.as_ref().to_string(), value.clone());
        }

        ctx.tokens = tokens;
        ctx
    }

    /// Determines whether a short flag was given at least once.
    pub fn has_flag(&self, name: &str) -> bool {
        self.flag_count(name) > 0
    }

    /// Number of times a short flag was given, counting clustered occurrences.
    ///
    /// `-vvv` and `-v -v -v` both count 3 for `v`.
    pub fn flag_count(&self, name: &str) -> usize {
        let mut chars = name.trim_start_matches('-').chars();
        match (chars.next(), chars.next()) {
            (Some(flag), None) => self.flags.get(&flag).copied().unwrap_or(0),
            _ => 0,
        }
    }

    /// Determines whether a long option was given, with or without a value.
    pub fn has_long_option(&self, name: &str) -> bool {
        self.long_options.contains_key(trim_dashes(name))
    }

    /// Value of a long option, or `""` when absent or given without `=value`.
    ///
    /// For `--path=some/where`, `long_option("path")` returns `"some/where"`.
    pub fn long_option(&self, name: &str) -> &str {
        self.long_options
            .get(trim_dashes(name))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Value bound to a declared positional, or `""` when unbound.
    pub fn positional(&self, name: &str) -> &str {
        self.positionals.get(name).map(String::as_str).unwrap_or("")
    }

    /// All bare values in the order they were given, bound or not.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Observed short flags with their counts, in character order.
    pub fn flags(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.flags.iter().map(|(flag, count)| (*flag, *count))
    }

    /// Observed long options with their values, in name order.
    pub fn long_options(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.long_options
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Shape string of the invocation: `prefix` followed by one element per token.
    pub(crate) fn shape(&self, prefix: &str) -> String {
        let mut shape = String::from(prefix);
        for token in &self.tokens {
            token.render_shape(&mut shape);
        }
        shape
    }
}

fn trim_dashes(name: &str) -> &str {
    name.trim_start_matches('-')
}
