//! Schema inspection handler.

use argroute::routing::Schema;
use argroute::Context;

use super::fail;

/// Human-readable breakdown of a compiled schema.
pub fn describe(schema: &Schema) -> String {
    let mut out = format!("prefix: {}\n", schema.prefix());

    let positionals: Vec<String> = schema
        .positionals()
        .iter()
        .map(|p| {
            if p.required {
                p.name.clone()
            } else {
                format!("{} (optional)", p.name)
            }
        })
        .collect();
    out.push_str(&format!("positionals: {}\n", list_or_none(&positionals)));

    let flags: Vec<String> = schema.flags().iter().map(|f| format!("-{f}")).collect();
    out.push_str(&format!("flags: {}\n", list_or_none(&flags)));

    let options: Vec<String> = schema
        .long_options()
        .iter()
        .map(|o| format!("--{o}"))
        .collect();
    out.push_str(&format!("options: {}", list_or_none(&options)));
    out
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// Handle `schema inspect <text>`.
pub fn handle_inspect(ctx: &Context) {
    match Schema::parse(ctx.positional("text")) {
        Ok(schema) => println!("{}", describe(&schema)),
        Err(e) => fail(e),
    }
}
