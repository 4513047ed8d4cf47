// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

use crate::breach;

// Configuration for the analysis service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Wordlist
    pub wordlist_path: PathBuf,

    // Breach lookup
    pub hibp_base_url: String,
    pub breach_timeout: Duration,

    // Password Generation
    pub default_password_length: usize,
    pub min_password_length: usize,
    pub max_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_port: 5000,
            web_address: "0.0.0.0".to_string(),

            // Wordlist
            wordlist_path: PathBuf::from("data/common_passwords.txt"),

            // Breach lookup
            hibp_base_url: breach::DEFAULT_HIBP_BASE_URL.to_string(),
            breach_timeout: breach::DEFAULT_TIMEOUT,

            // Password Generation
            default_password_length: 12,
            min_password_length: 8,
            max_password_length: 64,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(val) = env::var("PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        if let Ok(address) = env::var("BIND_ADDRESS") {
            config.web_address = address;
        }

        if let Ok(path) = env::var("WORDLIST_PATH") {
            config.wordlist_path = PathBuf::from(path);
        }

        if let Ok(url) = env::var("HIBP_BASE_URL") {
            config.hibp_base_url = url;
        }

        if let Ok(val) = env::var("BREACH_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.breach_timeout = Duration::from_secs(secs);
            }
        }

        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

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
