// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "passguard",
    about = "Password strength analysis and generation service",
    version
)]
pub struct Args {
    /// Port for the HTTP API (overrides the PORT environment variable)
    #[arg(long)]
    pub port: Option<u16>,

    /// Path to the common-password wordlist
    #[arg(long, env = "WORDLIST_PATH")]
    pub wordlist: Option<PathBuf>,
}
