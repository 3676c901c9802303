use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths;
use crate::translation::{AUTO_DETECT, PRIMARY_PROVIDER};

/// Aggregator timeout used when neither the CLI nor the config file set one.
pub const DEFAULT_TIMEOUT_SECS: f64 = 10.0;

const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Default settings in the `[xlate]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct XlateConfig {
    /// Default provider name.
    pub provider: Option<String>,
    /// Default source language, or `auto`.
    pub from: Option<String>,
    /// Default target language.
    pub to: Option<String>,
    /// Aggregator timeout in seconds.
    pub timeout: Option<f64>,
}

/// The `[azure]` section of config.toml.
///
/// Environment variables take priority over every field here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AzureSection {
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/xlate/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub xlate: XlateConfig,
    #[serde(default)]
    pub azure: AzureSection,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub provider: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub timeout: Option<f64>,
}

/// Request defaults after merging CLI arguments, config file and built-ins.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub provider: String,
    pub source_language: String,
    pub target_language: String,
    pub timeout: Duration,
}

/// Resolves request defaults by merging CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults.
///
/// # Errors
///
/// Returns an error if the timeout is not a positive, finite number of seconds
/// or if a provider or language value is blank.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let defaults = &config_file.xlate;

    let provider = pick(
        options.provider.as_deref(),
        defaults.provider.as_deref(),
        PRIMARY_PROVIDER,
    );
    let source_language = pick(options.from.as_deref(), defaults.from.as_deref(), AUTO_DETECT);
    let target_language = pick(
        options.to.as_deref(),
        defaults.to.as_deref(),
        DEFAULT_TARGET_LANGUAGE,
    );

    for (name, value) in [
        ("provider", &provider),
        ("from", &source_language),
        ("to", &target_language),
    ] {
        if value.trim().is_empty() {
            bail!("Invalid configuration: '{name}' must not be empty");
        }
    }

    let seconds = options
        .timeout
        .or(defaults.timeout)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let timeout = Duration::try_from_secs_f64(seconds)
        .ok()
        .filter(|timeout| !timeout.is_zero());
    let Some(timeout) = timeout else {
        bail!(
            "Invalid timeout: {seconds}\n\n\
             The timeout must be a positive number of seconds, e.g. --timeout 10"
        );
    };

    Ok(ResolvedConfig {
        provider,
        source_language,
        target_language,
        timeout,
    })
}

fn pick(cli: Option<&str>, file: Option<&str>, fallback: &str) -> String {
    cli.or(file).unwrap_or(fallback).to_string()
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/xlate/config.toml`
    /// or `~/.config/xlate/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager reading from an explicit path.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, or the defaults if it does not exist.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
