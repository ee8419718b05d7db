//! Analysis commands: lemmatize, tag, keywords.

use anyhow::{bail, Result};
use clap::Args;
use lexis_core::model::DEFAULT_METHOD;
use lexis_core::{ClientConfig, Dispatcher, Endpoint, FieldBuffer, Outcome, RowBuffer};

use crate::output;

#[derive(Args)]
pub struct TextArgs {
    /// Text to analyze
    pub text: String,
}

#[derive(Args)]
pub struct KeywordsArgs {
    /// Text to analyze
    pub text: String,

    /// Extraction method (the server only answers textrank)
    #[arg(short, long, default_value = DEFAULT_METHOD)]
    pub method: String,
}

pub async fn execute_simple(endpoint: Endpoint, args: TextArgs, config: &ClientConfig) -> Result<()> {
    let dispatcher = Dispatcher::from_config(config, output::spinner_counter())?;

    let mut field = FieldBuffer::default();
    let outcome = dispatcher.dispatch_simple(endpoint, &args.text, &mut field).await;
    check(endpoint, &outcome)?;

    output::print_field(field.value());
    Ok(())
}

pub async fn execute_keywords(args: KeywordsArgs, config: &ClientConfig) -> Result<()> {
    let dispatcher = Dispatcher::from_config(config, output::spinner_counter())?;

    let mut table = RowBuffer::default();
    let outcome = dispatcher
        .dispatch_keywords(Endpoint::Keywords, &args.text, &args.method, &mut table)
        .await;
    check(Endpoint::Keywords, &outcome)?;

    output::print_keywords_table(table.rows());
    Ok(())
}

/// The dispatcher has already logged the failure; turn it into an exit code.
fn check(endpoint: Endpoint, outcome: &Outcome) -> Result<()> {
    if let Some(failure) = outcome.failure() {
        bail!("{} request failed ({}): {}", endpoint, failure.text_status(), failure);
    }
    Ok(())
}
