//! One-shot analysis command.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use blens_core::analysis::client::{ClaudeClient, DEFAULT_MODEL};
use blens_core::analysis::model::Verdict;
use blens_core::{LensError, LensResult};

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// The content description to analyze
    pub description: String,

    /// Claude model to use for analysis
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let description = args.description.trim();
    if description.is_empty() {
        return Err(LensError::EmptyInput.into());
    }

    let store = super::default_key_store()?;
    let credential = super::require_credential(&store)?;

    let client = ClaudeClient::new(&credential, &args.model);
    let verdict = analyze_with_spinner(&client, description).await?;

    println!();
    output::print_verdict(&verdict);
    Ok(())
}

/// Run one analysis with a spinner marking the in-flight request.
pub(crate) async fn analyze_with_spinner(
    client: &ClaudeClient,
    description: &str,
) -> LensResult<Verdict> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message("Analyzing through a Biblical lens...");
    pb.enable_steady_tick(Duration::from_millis(80));

    let result = client.analyze(description).await;
    pb.finish_and_clear();

    result
}
