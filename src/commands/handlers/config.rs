//! Configuration handlers (config path, config show).

use std::path::Path;

use argroute::config::Config;

use super::fail;

/// Handle `config path`.
pub fn handle_path(path: &Path) {
    println!("{}", path.display());
}

/// Handle `config show`.
pub fn handle_show(config: &Config) {
    match config.to_toml() {
        Ok(text) => print!("{text}"),
        Err(e) => fail(e),
    }
}
