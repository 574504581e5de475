// src/bin/twitterverse.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use twitterverse_core::cli::{self, Cli, Commands};
use twitterverse_core::config::Config;
use twitterverse_core::exit::TwitterverseExit;

fn main() -> TwitterverseExit {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(exit) => exit,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            TwitterverseExit::from_error(&e)
        }
    }
}

fn run(cli: &Cli) -> Result<TwitterverseExit> {
    let config = Config::load(cli.config.as_deref())?;
    if cli.no_color || !config.preferences.color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose, &config);
    dispatch(cli, &config)
}

fn dispatch(cli: &Cli, config: &Config) -> Result<TwitterverseExit> {
    match &cli.command {
        Commands::Query { data, query, json } => cli::handle_query(data, query, config, *json),
        Commands::Followers { data, username } => cli::handle_followers(data, username),
        Commands::Check { data, json } => cli::handle_check(data, *json),
    }
}

fn init_logging(verbose: u8, config: &Config) {
    let level = match verbose {
        0 => config.preferences.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::new()
        .parse_filters(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .try_init();
}
