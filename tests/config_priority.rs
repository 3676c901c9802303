#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults
//!
//! Azure settings follow: environment, then config file, then built-in defaults.

use std::time::Duration;
use xlate::config::{
    API_KEY_ENV, AzureConfig, AzureSection, ConfigFile, ENDPOINT_ENV, REGION_ENV, ResolveOptions,
    XlateConfig, resolve_config,
};

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        xlate: XlateConfig {
            provider: Some("google".to_string()),
            from: Some("ja".to_string()),
            to: Some("zh".to_string()),
            timeout: Some(4.0),
        },
        azure: AzureSection {
            api_key: Some("file-key".to_string()),
            api_key_env: None,
            region: Some("japaneast".to_string()),
            endpoint: Some("https://file.example".to_string()),
        },
    }
}

#[test]
fn test_config_values_used_when_cli_not_specified() {
    let resolved = resolve_config(&ResolveOptions::default(), &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.provider, "google");
    assert_eq!(resolved.source_language, "ja");
    assert_eq!(resolved.target_language, "zh");
    assert_eq!(resolved.timeout, Duration::from_secs(4));
}

#[test]
fn test_all_cli_options_override_config() {
    let options = ResolveOptions {
        provider: Some("bing".to_string()),
        from: Some("auto".to_string()),
        to: Some("en".to_string()),
        timeout: Some(1.5),
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.provider, "bing");
    assert_eq!(resolved.source_language, "auto");
    assert_eq!(resolved.target_language, "en");
    assert_eq!(resolved.timeout, Duration::from_millis(1500));
}

#[test]
fn test_partial_cli_options_mix_with_config() {
    let options = ResolveOptions {
        to: Some("ko".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.provider, "google");
    assert_eq!(resolved.target_language, "ko");
}

#[test]
fn test_builtin_defaults_fill_empty_config() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.provider, "bing");
    assert_eq!(resolved.source_language, "auto");
    assert_eq!(resolved.target_language, "en");
    assert_eq!(resolved.timeout, Duration::from_secs(10));
}

#[test]
fn test_azure_environment_overrides_file() {
    let section = make_config_with_defaults().azure;
    let lookup = |name: &str| match name {
        API_KEY_ENV => Some("env-key".to_string()),
        REGION_ENV => Some("westus2".to_string()),
        _ => None,
    };

    let azure = AzureConfig::resolve(&section, lookup);

    assert_eq!(azure.api_key.as_deref(), Some("env-key"));
    assert_eq!(azure.region, "westus2");
    assert_eq!(azure.endpoint, "https://file.example");
}

#[test]
fn test_azure_file_values_used_without_environment() {
    let section = make_config_with_defaults().azure;

    let azure = AzureConfig::resolve(&section, |_| None);

    assert_eq!(azure.api_key.as_deref(), Some("file-key"));
    assert_eq!(azure.region, "japaneast");
}

#[test]
fn test_azure_builtin_defaults() {
    let azure = AzureConfig::resolve(&AzureSection::default(), |name| {
        (name == ENDPOINT_ENV).then(String::new)
    });

    assert!(azure.api_key.is_none());
    assert_eq!(azure.region, "eastasia");
    // An empty variable does not override the default endpoint
    assert_eq!(azure.endpoint, "https://api.cognitive.microsofttranslator.com");
}
