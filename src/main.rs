use clap::Parser;
use std::io;
use std::path::Path;

use passforge::api;
use passforge::cli::{self, Args, CliCommand};
use passforge::core::config::Config;
use passforge::wordlist;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();

    if let Some(path) = &args.wordlist {
        config.wordlist_path = path.into();
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_target(true)
        .init();

    log::info!("Starting passforge - password generation service");

    let count = wordlist::load_from(&config.wordlist_path);
    log::info!("Wordlist ready with {} entries", count);

    // One-shot CLI commands
    if let Some(command) = args.command {
        let outcome = match command {
            CliCommand::Generate { count } => cli::handlers::handle_generate(&config, count),
            CliCommand::ReloadWordlist => cli::handlers::handle_reload(),
        };
        return outcome.map_err(|e| {
            log::error!("Command failed: {}", e);
            io::Error::new(io::ErrorKind::Other, e.to_string())
        });
    }

    ctrlc::set_handler(move || {
        log::info!("Ctrl+C received. Shutting down.");
        std::process::exit(0);
    })
    .expect("Failed to set Ctrl+C handler");

    let api_port = args.api_port.unwrap_or(config.web_port);
    api::start_server(config, api_port).await.map_err(|e| {
        log::error!("API server failed: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })
}
