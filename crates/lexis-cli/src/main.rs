//! Lexis CLI
//!
//! Sends text to an analysis server and prints lemmas, tags or keywords,
//! or serves the analysis page.

use anyhow::Result;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::{Cli, Commands};

/// Initialize tracing.
///
/// One-shot commands log to stderr without ANSI so stdout carries only
/// results. `serve` logs to stdout, and to `log_file` as well when given.
fn init_tracing(
    verbose: bool,
    log_file: Option<&std::path::Path>,
    serve_mode: bool,
) -> Option<WorkerGuard> {
    let default_filter = if verbose {
        "lexis=debug,lexis_core=debug,lexis_web=debug"
    } else {
        "lexis=info,lexis_core=info,lexis_web=debug"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if let Some(path) = log_file {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = dir {
            let _ = std::fs::create_dir_all(dir);
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "lexis-serve.log".into());
        let appender =
            tracing_appender::rolling::never(dir.unwrap_or(std::path::Path::new(".")), file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .init();
        Some(guard)
    } else if serve_mode {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
        None
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
        None
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match &cli.command {
        Commands::Serve(args) if args.log => Some(
            args.log_file
                .clone()
                .unwrap_or_else(|| std::path::PathBuf::from("lexis-serve.log")),
        ),
        _ => None,
    };

    let serve_mode = matches!(&cli.command, Commands::Serve(_));
    let _guard = init_tracing(cli.verbose, log_file.as_deref(), serve_mode);

    cli.execute().await
}
