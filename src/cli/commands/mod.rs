//! Subcommand implementations.

use anyhow::Result;

use crate::config::{AzureConfig, ConfigFile, ConfigManager};

/// Config display command handler.
pub mod config;

/// Language detection command handler.
pub mod detect;

/// Supported languages command handler.
pub mod languages;

/// Provider catalog command handler.
pub mod providers;

/// Translation command handler.
pub mod translate;

/// Loads the config file and merges its `[azure]` section with the environment.
fn load_settings() -> Result<(ConfigFile, AzureConfig)> {
    let config_file = ConfigManager::new()?.load_or_default()?;
    let azure = AzureConfig::resolve(&config_file.azure, |name| std::env::var(name).ok());
    Ok((config_file, azure))
}
