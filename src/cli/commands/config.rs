use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::ui::Style;

use super::load_settings;

/// Prints the effective defaults and Azure settings, with the API key masked.
pub fn print_config() -> Result<()> {
    let path = ConfigManager::new()?.config_path().clone();
    let (config_file, azure) = load_settings()?;
    let resolved = resolve_config(&ResolveOptions::default(), &config_file)?;

    let file_state = if path.exists() { "" } else { " (not found)" };
    println!(
        "{} {}{}",
        Style::label("config file"),
        path.display(),
        Style::secondary(file_state)
    );
    println!();

    println!("{}", Style::header("[xlate]"));
    println!("  {}  = {}", Style::label("provider"), Style::value(&resolved.provider));
    println!("  {}      = {}", Style::label("from"), Style::value(&resolved.source_language));
    println!("  {}        = {}", Style::label("to"), Style::value(&resolved.target_language));
    println!(
        "  {}   = {}s",
        Style::label("timeout"),
        Style::value(resolved.timeout.as_secs_f64())
    );
    println!();

    println!("{}", Style::header("[azure]"));
    let api_key = azure
        .masked_api_key()
        .unwrap_or_else(|| "(not set)".to_string());
    println!("  {}   = {}", Style::label("api_key"), Style::value(api_key));
    println!("  {}    = {}", Style::label("region"), Style::value(&azure.region));
    println!("  {}  = {}", Style::label("endpoint"), Style::value(&azure.endpoint));

    Ok(())
}
