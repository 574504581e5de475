use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "twitterverse",
    version,
    about = "Search, filter and present a Twitterverse dataset"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Config file (defaults to ./twitterverse.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// More log output: -v info, -vv debug, -vvv trace
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query file against a dataset
    Query {
        #[arg(value_name = "DATA")]
        data: PathBuf,
        #[arg(value_name = "QUERY")]
        query: PathBuf,
        /// Print sorted profiles as JSON instead of the text layout
        #[arg(long)]
        json: bool,
    },
    /// List everyone who follows a user
    Followers {
        #[arg(value_name = "DATA")]
        data: PathBuf,
        #[arg(value_name = "USERNAME")]
        username: String,
    },
    /// Report dangling, repeated and self-referencing follows
    Check {
        #[arg(value_name = "DATA")]
        data: PathBuf,
        #[arg(long)]
        json: bool,
    },
}
