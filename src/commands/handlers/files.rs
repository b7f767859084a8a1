//! File handlers (count, head).

use std::path::Path;

use argroute::Context;
use tracing::debug;

use super::fail;

/// Lines shown by `head` without `--lines`.
pub const DEFAULT_HEAD_LINES: usize = 10;

/// Line, word and byte counts of a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub lines: usize,
    pub words: usize,
    pub bytes: usize,
}

/// Counts like `wc`: lines are newline characters.
pub fn count_text(text: &str) -> Counts {
    Counts {
        lines: text.matches('\n').count(),
        words: text.split_whitespace().count(),
        bytes: text.len(),
    }
}

/// Formats the counts selected by `-l`, `-w` and `-c`; all of them when none is given.
pub fn format_counts(counts: Counts, ctx: &Context, path: &str) -> String {
    let all = !(ctx.has_flag("l") || ctx.has_flag("w") || ctx.has_flag("c"));
    let mut fields = Vec::new();
    if all || ctx.has_flag("l") {
        fields.push(counts.lines.to_string());
    }
    if all || ctx.has_flag("w") {
        fields.push(counts.words.to_string());
    }
    if all || ctx.has_flag("c") {
        fields.push(counts.bytes.to_string());
    }
    fields.push(path.to_string());
    fields.join(" ")
}

/// First `n` lines of `text`.
pub fn head_lines(text: &str, n: usize) -> Vec<&str> {
    text.lines().take(n).collect()
}

/// Parses the `--lines` option; absent or empty means the default.
pub fn parse_line_count(ctx: &Context) -> Result<usize, String> {
    let raw = ctx.long_option("lines");
    if raw.is_empty() {
        return Ok(DEFAULT_HEAD_LINES);
    }
    raw.parse()
        .map_err(|_| format!("--lines expects a number, got '{raw}'"))
}

/// Handle `count <path> [-l -w -c]`.
pub fn handle_count(ctx: &Context) {
    let path = ctx.positional("path");
    let text = read(path);
    let counts = count_text(&text);
    debug!(path, ?counts, "counted");
    println!("{}", format_counts(counts, ctx, path));
}

/// Handle `head <path> [--lines]`.
pub fn handle_head(ctx: &Context) {
    let n = parse_line_count(ctx).unwrap_or_else(|e| fail(e));
    let text = read(ctx.positional("path"));
    for line in head_lines(&text, n) {
        println!("{line}");
    }
}

fn read(path: &str) -> String {
    std::fs::read_to_string(Path::new(path))
        .unwrap_or_else(|e| fail(format!("cannot read {path}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(args: &[&str]) -> Context {
        Context::build(args, &["path"])
    }

    #[test]
    fn test_count_text() {
        assert_eq!(
            count_text("one two\nthree\n"),
            Counts {
                lines: 2,
                words: 3,
                bytes: 14
            }
        );
        assert_eq!(count_text(""), Counts::default());
    }

    #[test]
    fn test_format_counts_all_by_default() {
        let counts = count_text("a b\n");
        assert_eq!(format_counts(counts, &ctx(&["f"]), "f"), "1 2 4 f");
    }

    #[test]
    fn test_format_counts_selected() {
        let counts = count_text("a b\n");
        assert_eq!(format_counts(counts, &ctx(&["-lc", "f"]), "f"), "1 4 f");
        assert_eq!(format_counts(counts, &ctx(&["-w", "f"]), "f"), "2 f");
    }

    #[test]
    fn test_head_lines() {
        assert_eq!(head_lines("1\n2\n3\n", 2), ["1", "2"]);
        assert_eq!(head_lines("1\n", 5), ["1"]);
    }

    #[test]
    fn test_parse_line_count() {
        assert_eq!(parse_line_count(&ctx(&["f"])), Ok(DEFAULT_HEAD_LINES));
        assert_eq!(parse_line_count(&ctx(&["f", "--lines=3"])), Ok(3));
        assert_eq!(parse_line_count(&ctx(&["f", "--lines"])), Ok(DEFAULT_HEAD_LINES));
        assert!(parse_line_count(&ctx(&["f", "--lines=x"]))
            .unwrap_err()
            .contains("'x'"));
    }
}
