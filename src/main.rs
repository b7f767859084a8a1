//! argroute - schema-driven command routing demo.

mod cli;
mod commands;

use std::process::ExitCode;
use std::rc::Rc;

use anyhow::Context as _;
use argroute::config::Config;
use argroute::routing::CrosstermWidth;
use argroute::{logging, RouterError};
use cli::Cli;
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    let config = Config::load_from_file(&config_path);
    let level = config
        .as_ref()
        .map(|c| c.logging.level.as_str())
        .unwrap_or("warn");
    logging::init_stderr_logging(&logging::filter_directive(level, cli.verbose));

    match run(cli, config) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: argroute::error::Result<Config>) -> anyhow::Result<ExitCode> {
    let config_path = cli.config_path();
    let config = config.with_context(|| format!("loading {}", config_path.display()))?;
    info!("Loaded config from: {}", config_path.display());

    debug!(args = ?cli.args, "dispatching");
    let mut router =
        commands::build_router(cli.args, Rc::new(config), config_path, &CrosstermWidth);

    match router.dispatch() {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => Ok(report(&err)),
    }
}

/// Prints a dispatch error the way a user expects to see it.
fn report(err: &RouterError) -> ExitCode {
    match err {
        RouterError::UndefinedCommand { suggestions, .. } => {
            eprintln!("{err}");
            if !suggestions.is_empty() {
                eprintln!("did you mean:");
                for suggestion in suggestions {
                    eprintln!("  {suggestion}");
                }
            }
        }
        RouterError::SchemaMismatch { usage, .. } => {
            eprintln!("{err}");
            eprintln!("usage: {usage}");
        }
        RouterError::FlagNotPermitted { .. } | RouterError::OptionNotPermitted { .. } => {
            eprintln!("{err}");
        }
        _ => error!(kind = ?err.kind(), "{err}"),
    }
    ExitCode::FAILURE
}
