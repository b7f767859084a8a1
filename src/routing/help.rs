//! Plain-text help rendering for a router.

use super::router::Router;

/// Minimum width of the command column.
const MIN_COLUMN: usize = 10;

/// Width assumed when the terminal size is unknown.
pub const DEFAULT_WIDTH: usize = 80;

/// Source of the terminal width, in columns.
pub trait TerminalWidth {
    fn width(&self) -> usize;
}

/// Reads the width of the attached terminal, falling back to [`DEFAULT_WIDTH`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermWidth;

impl TerminalWidth for CrosstermWidth {
    fn width(&self) -> usize {
        crossterm::terminal::size()
            .map(|(cols, _)| cols as usize)
            .ok()
            .filter(|cols| *cols > 0)
            .unwrap_or(DEFAULT_WIDTH)
    }
}

/// A fixed width, for tests and non-interactive output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub usize);

impl TerminalWidth for FixedWidth {
    fn width(&self) -> usize {
        self.0
    }
}

/// Renders the header and command list of `router`.
///
/// Routes come first, then groups, each in registration order. A route with
/// no description shows its schema instead.
pub fn render(router: &Router, width: usize) -> String {
    let config = router.config();
    let column = router
        .routes()
        .iter()
        .map(|r| r.prefix().len())
        .chain(router.groups().iter().map(|g| g.prefix().len()))
        .fold(MIN_COLUMN, usize::max);

    let mut help = String::new();
    help.push_str(&config.name);
    if !config.version.is_empty() {
        help.push(' ');
        help.push_str(&config.version);
    }
    help.push('\n');
    if !config.description.is_empty() {
        help.push_str(&config.description);
        help.push('\n');
    }

    help.push_str("\nCOMMANDS:\n");

    let rows = router
        .routes()
        .iter()
        .map(|r| {
            let text = if r.description().is_empty() {
                r.schema().text()
            } else {
                r.description()
            };
            (r.prefix(), text)
        })
        .chain(router.groups().iter().map(|g| (g.prefix(), g.description())));

    for (prefix, text) in rows {
        help.push_str(&format_row(prefix, text, column, width));
        help.push('\n');
    }

    help
}

/// One command row: ` prefix<pad> description`, the description wrapped to
/// `width` with continuation lines aligned under its first column.
fn format_row(prefix: &str, text: &str, column: usize, width: usize) -> String {
    let indent = column + 2;
    let available = width.saturating_sub(indent).max(MIN_COLUMN);
    let lines = wrap(text, available);

    let mut row = format!(" {prefix:<column$}");
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            row.push(' ');
        } else {
            row.push('\n');
            row.push_str(&" ".repeat(indent));
        }
        row.push_str(line);
    }
    row.trim_end().to_string()
}

/// Greedy word wrap; words longer than `max` are split.
fn wrap(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current.is_empty() {
            word.len()
        } else {
            current.chars().count() + 1 + word.len()
        };
        if needed > max && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
