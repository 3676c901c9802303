//! Azure Translator credentials and endpoint settings.

use std::sync::OnceLock;

use crate::error::TranslateError;

use super::manager::AzureSection;

/// Environment variable holding the Azure Translator subscription key.
pub const API_KEY_ENV: &str = "AZURE_TRANSLATOR_API_KEY";
/// Environment variable holding the Azure resource region.
pub const REGION_ENV: &str = "AZURE_TRANSLATOR_REGION";
/// Environment variable holding the Azure Translator endpoint.
pub const ENDPOINT_ENV: &str = "AZURE_TRANSLATOR_ENDPOINT";

pub const DEFAULT_REGION: &str = "eastasia";
pub const DEFAULT_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";

static GLOBAL: OnceLock<AzureConfig> = OnceLock::new();

/// Resolved settings for the primary backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureConfig {
    /// Subscription key. `None` means the primary backend cannot be built.
    pub api_key: Option<String>,
    pub region: String,
    pub endpoint: String,
}

impl Default for AzureConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            region: DEFAULT_REGION.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl AzureConfig {
    /// Process-wide configuration, loaded from `.env` and the environment on first use.
    ///
    /// Later changes to the environment are not observed.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| {
            let _ = dotenvy::dotenv();
            Self::from_env()
        })
    }

    /// Reads the configuration from the current process environment.
    pub fn from_env() -> Self {
        Self::resolve(&AzureSection::default(), |name| std::env::var(name).ok())
    }

    /// Merges config file settings with values from `lookup`.
    ///
    /// Environment values win over the file; empty values count as unset.
    pub fn resolve<F>(section: &AzureSection, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let key_env = section.api_key_env.as_deref().unwrap_or(API_KEY_ENV);

        let api_key = lookup(key_env).or_else(|| {
            section
                .api_key
                .clone()
                .filter(|key| !key.trim().is_empty())
        });

        let region = lookup(REGION_ENV)
            .or_else(|| section.region.clone())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let endpoint = lookup(ENDPOINT_ENV)
            .or_else(|| section.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            api_key,
            region,
            endpoint,
        }
    }

    /// Returns the subscription key or a configuration error naming the variable.
    pub fn require_api_key(&self) -> Result<&str, TranslateError> {
        self.api_key.as_deref().ok_or_else(|| {
            TranslateError::Configuration(format!("{API_KEY_ENV} environment variable is required"))
        })
    }

    /// Key suitable for display, with all but the last four characters hidden.
    ///
    /// Keys of four characters or fewer are hidden entirely.
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| {
            let chars: Vec<char> = key.chars().collect();
            if chars.len() <= 4 {
                return "****".to_string();
            }
            let hidden = chars.len() - 4;
            let tail: String = chars[hidden..].iter().collect();
            format!("{}{tail}", "*".repeat(hidden.min(8)))
        })
    }
}
