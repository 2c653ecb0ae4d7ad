//! Web server command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use moodrelay_core::{Analyzer, RelayConfig};
use moodrelay_web::{ServerConfig, DEFAULT_PORT, DEFAULT_PUBLIC_DIR};
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Directory of static assets served at the root
    #[arg(long, env = "PUBLIC_DIR", default_value = DEFAULT_PUBLIC_DIR)]
    pub public_dir: PathBuf,

    /// Also write logs to this file
    #[arg(long)]
    pub log: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, config: &RelayConfig) -> Result<()> {
    let analyzer = Analyzer::from_config(config).context("Failed to set up providers")?;

    let server = ServerConfig {
        host: args.host,
        port: args.port,
        public_dir: args.public_dir,
    };

    println!();
    println!("  {} {}", "MoodRelay".cyan().bold(), "Web Server".bold());
    println!();
    println!(
        "  {}      http://{}:{}/api/analyze",
        "API".green(),
        server.host,
        server.port
    );
    println!(
        "  {}   {}",
        "Static".green(),
        server.public_dir.display()
    );
    for provider in analyzer.providers() {
        let status = if provider.is_configured() {
            "configured".green()
        } else {
            "not configured".yellow()
        };
        println!("  {:<8} {}", provider.kind().display_name(), status);
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    moodrelay_web::run_server(analyzer, &server).await?;

    Ok(())
}
