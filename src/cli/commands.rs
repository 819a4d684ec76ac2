// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Number of passwords to generate
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Reload the wordlist asset and print the resulting entry count
    ReloadWordlist,
}
