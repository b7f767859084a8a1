//! Argument classification.
//!
//! Every raw argument is one of:
//! - a short-flag cluster (`-v`, `-abc`, `-vvv`)
//! - a long option (`--verbose`, `--path=some/where`)
//! - a bare value (anything else, including `-`, `--` and `-x=1`)

/// A classified command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// One or more short flags merged behind a single dash.
    ShortFlags(Vec<char>),
    /// A long option, with the text after `=` if there was one.
    LongOption { name: String, value: Option<String> },
    /// A bare value, bound to positionals by order.
    Bare(String),
}

impl Token {
    /// Returns the bare value if this is one.
    pub fn as_bare(&self) -> Option<&str> {
        match self {
            Token::Bare(s) => Some(s),
            _ => None,
        }
    }

    /// Appends this token's element to a shape string.
    ///
    /// Bare values render as `_`, short-flag clusters expand to one `-x` per
    /// flag and long options render as `--name` or `--name=_`.
    pub(crate) fn render_shape(&self, out: &mut String) {
        match self {
            Token::ShortFlags(flags) => {
                for flag in flags {
                    out.push_str(" -");
                    out.push(*flag);
                }
            }
            Token::LongOption { name, value } => {
                out.push_str(" --");
                out.push_str(name);
                if value.is_some() {
                    out.push_str("=_");
                }
            }
            Token::Bare(_) => out.push_str(" _"),
        }
    }
}

/// Classifies a single argument.
pub fn classify(arg: &str) -> Token {
    if let Some(rest) = arg.strip_prefix("--") {
        let (name, value) = match rest.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (rest, None),
        };
        if is_long_name(name) {
            return Token::LongOption {
                name: name.to_string(),
                value: value.map(str::to_string),
            };
        }
        return Token::Bare(arg.to_string());
    }

    if let Some(rest) = arg.strip_prefix('-') {
        if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Token::ShortFlags(rest.chars().collect());
        }
    }

    Token::Bare(arg.to_string())
}

/// Classifies every argument, preserving order.
pub fn tokenize<S: AsRef<str>>(args: &[S]) -> Vec<Token> {
    args.iter().map(|a| classify(a.as_ref())).collect()
}

/// Splits a literal command line on whitespace.
///
/// No quoting is supported; this is the scripted-invocation path used by tests.
pub fn split_line(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// `[a-z0-9][a-z0-9-]*`
pub(crate) fn is_long_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long(name: &str, value: Option<&str>) -> Token {
        Token::LongOption {
            name: name.to_string(),
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn test_short_flag_cluster() {
        assert_eq!(classify("-as"), Token::ShortFlags(vec!['a', 's']));
        assert_eq!(classify("-aaa"), Token::ShortFlags(vec!['a', 'a', 'a']));
        assert_eq!(classify("-9"), Token::ShortFlags(vec!['9']));
    }

    #[test]
    fn test_long_option() {
        assert_eq!(classify("--verbose"), long("verbose", None));
        assert_eq!(classify("--dry-run"), long("dry-run", None));
        assert_eq!(classify("--path=a/b=c"), long("path", Some("a/b=c")));
        assert_eq!(classify("--name="), long("name", Some("")));
    }

    #[test]
    fn test_bare_values() {
        for arg in ["file.txt", "-", "--", "-x=1", "--Upper", "---x", "-a.b", ""] {
            assert_eq!(classify(arg), Token::Bare(arg.to_string()), "{arg:?}");
        }
    }

    #[test]
    fn test_tokenize_preserves_order() {
        let tokens = tokenize(&["a", "-v", "b", "--force"]);
        assert_eq!(
            tokens,
            vec![
                Token::Bare("a".to_string()),
                Token::ShortFlags(vec!['v']),
                Token::Bare("b".to_string()),
                long("force", None),
            ]
        );
    }

    #[test]
    fn test_render_shape() {
        let mut shape = String::from("cmd");
        for token in tokenize(&["hello world", "-ab", "--out=x", "--all"]) {
            token.render_shape(&mut shape);
        }
        assert_eq!(shape, "cmd _ -a -b --out=_ --all");
    }

    #[test]
    fn test_split_line() {
        assert_eq!(split_line("  copy   a\tb "), vec!["copy", "a", "b"]);
        assert!(split_line("   ").is_empty());
    }
}
