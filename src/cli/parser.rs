use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeguard
#[derive(Parser)]
#[command(
    name = "rtimeguard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Timesheet form guard: today-only entry date and log out after log in",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Show the effective configuration
    Config {
        /// Print the current configuration as YAML
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Print the date window the form would accept today
    Today,

    /// Check that log out comes after log in
    Check {
        /// (Positional) Log in time (HH:MM)
        login_pos: Option<String>,
        /// (Positional) Log out time (HH:MM)
        logout_pos: Option<String>,

        /// (Option) Log in time (HH:MM)
        #[arg(long = "in", conflicts_with = "login_pos")]
        login: Option<String>,
        /// (Option) Log out time (HH:MM)
        #[arg(long = "out", conflicts_with = "logout_pos")]
        logout: Option<String>,
    },

    /// Run the full page lifecycle (ready, then submit) against a page file
    Simulate {
        /// YAML page description (element ids with their values)
        #[arg(long, value_name = "FILE")]
        page: String,

        /// Use this day instead of today (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },
}
