// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the weak-password wordlist asset
    #[arg(long, env = "WORDLIST_PATH")]
    pub wordlist: Option<String>,

    /// API server port
    #[arg(long)]
    pub api_port: Option<u16>,

    /// Command to execute (defaults to running the API server)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
