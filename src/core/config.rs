// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

// Configuration for the password generation service
#[derive(Debug, Clone)]
pub struct Config {
    // Wordlist
    pub wordlist_path: PathBuf,

    // Password Generation
    pub password_length: usize,
    pub max_attempts: usize,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Wordlist
            wordlist_path: PathBuf::from("./data/common-passwords.json"),

            // Password Generation
            password_length: 25,
            max_attempts: 100,

            // Web Interface
            web_port: 5000,
            web_address: "0.0.0.0".to_string(),

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Wordlist
        if let Ok(path) = env::var("WORDLIST_PATH") {
            config.wordlist_path = PathBuf::from(path);
        }

        // Password Generation
        if let Ok(val) = env::var("PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.password_length = length;
            }
        }

        if let Ok(val) = env::var("MAX_ATTEMPTS") {
            if let Ok(attempts) = val.parse() {
                config.max_attempts = attempts;
            }
        }

        // Web Interface
        if let Ok(val) = env::var("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }
}
