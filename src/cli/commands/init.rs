use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::PathBuf;

/// Write the default configuration file (skipped in test mode).
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    if cli.test {
        info(format!("Test mode: config file not written ({})", path.display()));
        return Ok(());
    }

    Config::init_at(&path)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
