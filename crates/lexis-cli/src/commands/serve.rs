//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use lexis_core::ClientConfig;
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to ./lexis-serve.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, config: &ClientConfig) -> Result<()> {
    println!();
    println!("  {} {}", "Lexis".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}      http://{}:{}", "Page".green(), args.host, args.port);
    println!("  {}  {} ({})", "Upstream".green(), config.base_url, config.transport);
    println!("  {} ws://{}:{}/ws", "WebSocket".green(), args.host, args.port);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    lexis_web::run_server(config, &args.host, args.port).await
}
