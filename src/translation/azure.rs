//! Azure Text Translation (REST API v3.0) client.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::config::AzureConfig;
use crate::error::TranslateError;

use super::AUTO_DETECT;
use super::backend::PrimaryBackend;
use super::types::{
    DetectedLanguage, DictionaryLanguage, SupportedLanguages, TranslationLanguage,
    TransliterationLanguage,
};

pub(crate) const API_VERSION: &str = "3.0";

#[derive(Debug, Serialize)]
pub(crate) struct InputText<'a> {
    #[serde(rename = "Text")]
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TranslateResult {
    #[serde(default)]
    pub detected_language: Option<RemoteDetection>,
    #[serde(default)]
    pub translations: Vec<RemoteTranslation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoteDetection {
    pub language: String,
    pub score: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoteTranslation {
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: RemoteError,
}

#[derive(Debug, Deserialize)]
struct RemoteError {
    code: i64,
    message: String,
}

#[derive(Debug, Default, Deserialize)]
struct LanguagesResponse {
    #[serde(default)]
    translation: Option<HashMap<String, RemoteTranslationLanguage>>,
    #[serde(default)]
    transliteration: Option<HashMap<String, RemoteTransliterationLanguage>>,
    #[serde(default)]
    dictionary: Option<HashMap<String, RemoteDictionaryLanguage>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteTranslationLanguage {
    name: String,
    #[serde(default)]
    native_name: String,
}

#[derive(Debug, Deserialize)]
struct RemoteTransliterationLanguage {
    name: String,
    #[serde(default)]
    scripts: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RemoteDictionaryLanguage {
    name: String,
    #[serde(default)]
    translations: Vec<serde_json::Value>,
}

impl From<LanguagesResponse> for SupportedLanguages {
    fn from(response: LanguagesResponse) -> Self {
        Self {
            translation: response
                .translation
                .unwrap_or_default()
                .into_iter()
                .map(|(code, lang)| {
                    (
                        code,
                        TranslationLanguage {
                            name: lang.name,
                            native_name: lang.native_name,
                        },
                    )
                })
                .collect(),
            transliteration: response
                .transliteration
                .unwrap_or_default()
                .into_iter()
                .map(|(code, lang)| {
                    (
                        code,
                        TransliterationLanguage {
                            name: lang.name,
                            scripts: lang.scripts.len(),
                        },
                    )
                })
                .collect(),
            dictionary: response
                .dictionary
                .unwrap_or_default()
                .into_iter()
                .map(|(code, lang)| {
                    (
                        code,
                        DictionaryLanguage {
                            name: lang.name,
                            target_languages: lang.translations.len(),
                        },
                    )
                })
                .collect(),
        }
    }
}

/// Query parameters for `POST /translate`.
///
/// `from` is omitted for [`AUTO_DETECT`] so the service detects the source.
pub(crate) fn translate_params<'a>(
    target_language: &'a str,
    source_language: &'a str,
) -> Vec<(&'static str, &'a str)> {
    let mut params = vec![("api-version", API_VERSION), ("to", target_language)];
    if source_language != AUTO_DETECT {
        params.push(("from", source_language));
    }
    params
}

/// Text of the first translation of the first result, or empty when there is none.
pub(crate) fn first_translation(results: Vec<TranslateResult>) -> String {
    results
        .into_iter()
        .next()
        .and_then(|result| result.translations.into_iter().next())
        .map(|translation| translation.text)
        .unwrap_or_default()
}

fn detection(results: Vec<TranslateResult>) -> DetectedLanguage {
    results
        .into_iter()
        .next()
        .and_then(|result| result.detected_language)
        .map_or_else(DetectedLanguage::unknown, |detected| {
            DetectedLanguage::new(detected.language, detected.score)
        })
}

/// Converts a non-success response body into a transport error.
///
/// Uses the structured `{"error": {"code", "message"}}` body when present.
fn error_from_body(status: reqwest::StatusCode, body: &str) -> TranslateError {
    serde_json::from_str::<ErrorEnvelope>(body).map_or_else(
        |_| {
            let body = body.trim();
            if body.is_empty() {
                TranslateError::Transport(format!("request failed with status {status}"))
            } else {
                TranslateError::Transport(format!("request failed with status {status}: {body}"))
            }
        },
        |envelope| TranslateError::remote(envelope.error.code, &envelope.error.message),
    )
}

/// Sends `request` and decodes a JSON body, mapping failures to transport errors.
async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, TranslateError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_from_body(status, &body));
    }

    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| TranslateError::Transport(format!("unexpected response body: {e}")))
}

/// Client for an Azure Translator resource.
pub struct AzureTranslator {
    client: Client,
    api_key: String,
    region: String,
    endpoint: String,
}

impl AzureTranslator {
    /// Creates a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Configuration`] if no API key is configured.
    pub fn new(config: &AzureConfig) -> Result<Self, TranslateError> {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: &AzureConfig, client: Client) -> Result<Self, TranslateError> {
        let api_key = config.require_api_key()?.to_string();

        Ok(Self {
            client,
            api_key,
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        })
    }

    fn url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, TranslateError> {
        let base = format!("{}/{path}", self.endpoint.trim_end_matches('/'));
        Url::parse_with_params(&base, params).map_err(|e| {
            TranslateError::Configuration(format!("invalid endpoint '{}': {e}", self.endpoint))
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header("Ocp-Apim-Subscription-Region", &self.region)
    }

    async fn post_translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> Result<Vec<TranslateResult>, TranslateError> {
        let url = self.url(
            "translate",
            &translate_params(target_language, source_language),
        )?;
        debug!(%url, region = %self.region, "sending Azure translate request");

        let request = self
            .authorized(self.client.post(url))
            .json(&[InputText { text }]);

        send_json(request).await
    }
}

#[async_trait]
impl PrimaryBackend for AzureTranslator {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> Result<String, TranslateError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let results = self
            .post_translate(text, target_language, source_language)
            .await?;
        Ok(first_translation(results))
    }

    async fn detect_language(&self, text: &str) -> Result<DetectedLanguage, TranslateError> {
        if text.is_empty() {
            return Ok(DetectedLanguage::unknown());
        }

        // Translating to English is the cheapest call that reports the source language.
        let results = self.post_translate(text, "en", AUTO_DETECT).await?;
        Ok(detection(results))
    }

    async fn supported_languages(&self) -> Result<SupportedLanguages, TranslateError> {
        let url = self.url("languages", &[("api-version", API_VERSION)])?;
        debug!(%url, "fetching Azure supported languages");

        let response: LanguagesResponse = send_json(self.client.get(url)).await?;
        Ok(response.into())
    }
}
