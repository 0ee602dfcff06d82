//! API key management commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use dialoguer::Password;

use blens_core::key::KeyStore;

/// Input-form convention for Anthropic keys. The provider's rejection is
/// the real authorization check.
const KEY_PREFIX: &str = "sk-ant-";

#[derive(Subcommand)]
pub enum KeyCommands {
    /// Store an API key (prompts when no value is given)
    Set(SetArgs),

    /// Show the stored key, masked
    Show(ShowArgs),

    /// Remove the stored key
    Clear,
}

#[derive(Args)]
pub struct SetArgs {
    /// The key value; prompted for when omitted
    pub value: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Print the key without masking
    #[arg(long)]
    pub reveal: bool,
}

pub fn execute(cmd: KeyCommands) -> Result<()> {
    let store = super::default_key_store()?;

    match cmd {
        KeyCommands::Set(args) => cmd_set(args, &store),
        KeyCommands::Show(args) => cmd_show(args, &store),
        KeyCommands::Clear => cmd_clear(&store),
    }
}

fn cmd_set(args: SetArgs, store: &KeyStore) -> Result<()> {
    let input = match args.value {
        Some(value) => value,
        None => Password::new()
            .with_prompt("Anthropic API key")
            .interact()?,
    };

    let key = validate_key(&input)?;
    store.save(key)?;

    println!("{} API key saved", "✓".green().bold());
    Ok(())
}

fn cmd_show(args: ShowArgs, store: &KeyStore) -> Result<()> {
    match store.load()? {
        Some(key) if args.reveal => println!("{}", key),
        Some(key) => println!("{}", mask_key(&key)),
        None => {
            println!("{}", "No API key stored.".dimmed());
            println!("Set one with: {}", "blens key set".bold());
        }
    }
    Ok(())
}

fn cmd_clear(store: &KeyStore) -> Result<()> {
    if store.load()?.is_none() {
        println!("{}", "No API key stored.".dimmed());
        return Ok(());
    }

    store.clear()?;
    println!("{} API key cleared", "✓".green().bold());
    Ok(())
}

/// Trim and check the key's form before it reaches the store.
fn validate_key(input: &str) -> Result<&str> {
    let key = input.trim();

    if key.is_empty() {
        anyhow::bail!("Please enter an API key");
    }
    if !key.starts_with(KEY_PREFIX) {
        anyhow::bail!("Please enter a valid Anthropic API key (starts with {KEY_PREFIX})");
    }

    Ok(key)
}

/// Mask a key for display: first 12 and last 4 characters kept.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 16 {
        return "*".repeat(chars.len());
    }

    let head: String = chars[..12].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_and_trims() {
        assert_eq!(
            validate_key("  sk-ant-api03-abc123  ").unwrap(),
            "sk-ant-api03-abc123"
        );
    }

    #[test]
    fn test_validate_key_rejects_empty() {
        assert!(validate_key("").is_err());
        assert!(validate_key("   ").is_err());
    }

    #[test]
    fn test_validate_key_rejects_wrong_prefix() {
        assert!(validate_key("api03-abc123").is_err());
        assert!(validate_key("sk-proj-abc123").is_err());
    }

    #[test]
    fn test_mask_key_keeps_head_and_tail() {
        let masked = mask_key("sk-ant-REDACTED");
        assert_eq!(masked, "sk-ant-api03...cdef");
    }

    #[test]
    fn test_mask_key_hides_short_values() {
        assert_eq!(mask_key("sk-ant-short"), "************");
    }
}
