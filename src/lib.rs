//! rTimeguard library root.
//! Exposes the form guard, the page contract, the CLI parser and run().

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

pub use crate::core::{FormGuard, MemoryPage, PageContext};
pub use crate::models::{DateWindow, SubmitSnapshot, SubmitState, Verdict};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Today => cli::commands::today::handle(),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Simulate { .. } => cli::commands::simulate::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // init writes the file, so it must not require one to parse
    let cfg = match (&cli.command, &cli.config) {
        (Commands::Init, _) => Config::default(),
        (_, Some(path)) => Config::load_from(&PathBuf::from(path))?,
        (_, None) => Config::load()?,
    };

    dispatch(&cli, &cfg)
}
