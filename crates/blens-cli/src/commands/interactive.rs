//! Interactive analysis session.
//!
//! The looping counterpart of the one-shot analyze command: prompt for
//! a description, analyze it, render the verdict, offer another round.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::{Confirm, Input};

use blens_core::analysis::client::{ClaudeClient, DEFAULT_MODEL};
use blens_core::analysis::model::Verdict;
use blens_core::LensError;

use crate::commands::{analyze::analyze_with_spinner, default_key_store, require_credential};
use crate::output;

#[derive(Args)]
pub struct InteractiveArgs {
    /// Claude model to use for analysis
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,
}

pub async fn execute(args: InteractiveArgs) -> Result<()> {
    println!("{}", "Analyze Content Through a Biblical Lens".bold());
    println!(
        "{}",
        "Paste a video title and description to receive Biblical analysis \
         with a color-coded rating and relevant Scripture verse."
            .dimmed()
    );
    println!();

    let mut session = Session::new(args.model);
    session.run().await
}

/// One interactive session. At most one verdict is alive at a time;
/// a new round replaces it wholesale.
struct Session {
    model: String,
    current: Option<Verdict>,
}

impl Session {
    fn new(model: String) -> Self {
        Self {
            model,
            current: None,
        }
    }

    async fn run(&mut self) -> Result<()> {
        loop {
            if self.current.is_none() {
                output::print_rating_legend();
                println!();
                println!(
                    "{}",
                    "Example: Video about giving money to homeless people and \
                     showing kindness to strangers..."
                        .dimmed()
                );
            }

            let input: String = Input::new()
                .with_prompt("Description")
                .allow_empty(true)
                .interact_text()?;

            let description = input.trim().to_string();
            if description.is_empty() {
                println!("{} {}", "!".yellow().bold(), LensError::EmptyInput);
                continue;
            }

            match self.analyze_round(&description).await {
                Ok(verdict) => {
                    println!();
                    output::print_verdict(&verdict);
                    self.current = Some(verdict);
                }
                Err(e) => {
                    println!("{} {}", "✗".red().bold(), e);
                }
            }

            println!();
            let again = Confirm::new()
                .with_prompt("Analyze another description?")
                .default(true)
                .interact()?;

            if !again {
                break;
            }

            // Discard the verdict so the next round starts clean.
            self.current = None;
            println!();
        }

        Ok(())
    }

    /// One full round: resolve the credential, call the API, return the
    /// validated verdict.
    async fn analyze_round(&self, description: &str) -> Result<Verdict> {
        let store = default_key_store()?;
        let credential = require_credential(&store)?;

        let client = ClaudeClient::new(&credential, &self.model);
        Ok(analyze_with_spinner(&client, description).await?)
    }
}
