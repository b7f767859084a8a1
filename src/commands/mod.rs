//! The argroute command tree.
//!
//! Registration only: the handlers live in [`handlers`].

pub mod handlers;

use std::path::{Path, PathBuf};
use std::rc::Rc;

use argroute::config::Config;
use argroute::routing::{Router, TerminalWidth};

/// Builds the router for `args` with every command registered.
///
/// Without arguments the fallback prints help, at the top level and inside
/// each group; otherwise unknown commands are reported by the caller with
/// suggestions.
pub fn build_router(
    args: Vec<String>,
    config: Rc<Config>,
    config_path: PathBuf,
    width: &dyn TerminalWidth,
) -> Router {
    let columns = width.width();
    let mut router = Router::new(args).with_config(config.app.clone());

    router
        .add("count <path> [-l -w -c]", handlers::files::handle_count)
        .description("Print line, word and byte counts of a file");
    router
        .add("head <path> [--lines]", handlers::files::handle_head)
        .description("Print the first lines of a file (--lines=N, default 10)");

    router
        .group("schema", move |group| register_schema(group, columns))
        .description("Work with command schemas");

    router
        .group("config", move |group| {
            register_config(group, &config_path, &config, columns)
        })
        .description("Inspect the configuration");

    help_when_empty(&mut router, columns);
    router
}

fn register_schema(group: &mut Router, columns: usize) {
    group
        .add("inspect <text>", handlers::schema::handle_inspect)
        .description("Compile a command schema and show its parts");
    help_when_empty(group, columns);
}

fn register_config(group: &mut Router, config_path: &Path, config: &Rc<Config>, columns: usize) {
    let path = config_path.to_path_buf();
    group
        .add("path", move |_| handlers::config::handle_path(&path))
        .description("Print the config file location");
    let config = Rc::clone(config);
    group
        .add("show", move |_| handlers::config::handle_show(&config))
        .description("Print the effective configuration");
    help_when_empty(group, columns);
}

/// Installs a fallback printing `router`'s help, only when it has no
/// arguments. Must run after every command is registered.
fn help_when_empty(router: &mut Router, columns: usize) {
    if router.arguments().is_empty() {
        let help = router.help(columns);
        router.fallback(move |_| print!("{help}"));
    }
}
