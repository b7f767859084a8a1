//! Command-line argument parsing for the argroute binary.
//!
//! clap only handles the global options in front of the command. Everything
//! from the first positional on is handed to the router untouched.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Schema-driven command router demo.
#[derive(Parser, Debug)]
#[command(name = "argroute")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH", env = "ARGROUTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command and its arguments, routed by argroute itself
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(argroute::config::Config::default_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn test_no_arguments() {
        let cli = parse_args(&["argroute"]);
        assert!(cli.args.is_empty());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_command_arguments_pass_through() {
        let cli = parse_args(&["argroute", "count", "-lw", "notes.txt", "--lines=3"]);
        assert_eq!(cli.args, ["count", "-lw", "notes.txt", "--lines=3"]);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_global_options_before_command() {
        let cli = parse_args(&["argroute", "-vv", "--config", "/tmp/a.toml", "head", "-v"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/a.toml")));
        assert_eq!(cli.args, ["head", "-v"]);
    }

    #[test]
    fn test_config_path_default() {
        let cli = parse_args(&["argroute", "--config", "custom.toml"]);
        assert_eq!(cli.config_path(), PathBuf::from("custom.toml"));
    }

    #[test]
    fn test_config_path_falls_back_to_default() {
        let cli = parse_args(&["argroute", "count", "notes.txt"]);
        assert_eq!(cli.config_path(), argroute::config::Config::default_path());
    }
}
