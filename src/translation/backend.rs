//! Capability interfaces implemented by the translation backends.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::AzureConfig;
use crate::error::TranslateError;

use super::azure::AzureTranslator;
use super::types::{DetectedLanguage, SupportedLanguages};

/// The first-choice backend, tried before the aggregator.
#[async_trait]
pub trait PrimaryBackend: Send + Sync {
    /// Translates `text`. A `source_language` of `auto` requests detection.
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> Result<String, TranslateError>;

    async fn detect_language(&self, text: &str) -> Result<DetectedLanguage, TranslateError>;

    async fn supported_languages(&self) -> Result<SupportedLanguages, TranslateError>;
}

/// Builds a primary backend on demand.
///
/// Construction happens per call so that missing credentials surface as a
/// [`TranslateError::Configuration`] at the moment the backend is needed.
pub trait PrimaryFactory: Send + Sync {
    fn create(&self) -> Result<Box<dyn PrimaryBackend>, TranslateError>;
}

impl PrimaryFactory for AzureConfig {
    fn create(&self) -> Result<Box<dyn PrimaryBackend>, TranslateError> {
        Ok(Box::new(AzureTranslator::new(self)?))
    }
}

/// Multi-provider translation, used as the fallback of record.
///
/// Errors are opaque: callers must not depend on their type.
#[async_trait]
pub trait Aggregator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        provider: &str,
        from_language: &str,
        to_language: &str,
        timeout: Duration,
    ) -> anyhow::Result<String>;
}
