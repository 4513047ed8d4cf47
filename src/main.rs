use clap::Parser;
use std::path::Path;
use std::sync::Arc;

mod analyzer;
mod api;
mod breach;
mod cli;
mod core;
mod generators;
mod models;
mod wordlist;

use crate::analyzer::PasswordAnalyzer;
use crate::breach::HibpClient;
use crate::cli::Args;
use crate::core::config::Config;
use crate::wordlist::CommonPasswordSet;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();
    if let Some(port) = args.port {
        config.web_port = port;
    }
    if let Some(wordlist) = args.wordlist {
        config.wordlist_path = wordlist;
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔒 Starting Passguard - Password Strength Analyzer");

    let common = Arc::new(CommonPasswordSet::load(&config.wordlist_path));
    if common.is_empty() {
        log::warn!("Common-password set is empty; the not_common check will always pass");
    }
    let breach = HibpClient::new(&config.hibp_base_url, config.breach_timeout)?;
    let analyzer = PasswordAnalyzer::new(common, breach);

    api::start_server(analyzer, config).await?;

    log::info!("✅ Passguard shutdown complete.");
    Ok(())
}
