//! Keyless web translation endpoints behind the [`Aggregator`] interface.

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::AUTO_DETECT;
use super::azure::{self, InputText, TranslateResult};
use super::backend::Aggregator;

const EDGE_AUTH_URL: &str = "https://edge.microsoft.com/translate/auth";
const EDGE_TRANSLATE_URL: &str = "https://api-edge.cognitive.microsofttranslator.com/translate";
const GOOGLE_URL: &str = "https://translate.googleapis.com/translate_a/single";
const MYMEMORY_URL: &str = "https://api.mymemory.translated.net/get";

/// Providers served directly by [`WebAggregator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebProvider {
    Bing,
    Google,
    MyMemory,
}

impl WebProvider {
    pub const ALL: [Self; 3] = [Self::Bing, Self::Google, Self::MyMemory];

    /// Looks up a provider by case-insensitive identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|provider| provider.id().eq_ignore_ascii_case(name.trim()))
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Bing => "bing",
            Self::Google => "google",
            Self::MyMemory => "mymemory",
        }
    }
}

/// Aggregator backed by public web endpoints that need no API key.
///
/// Unknown provider names are rejected before any request is made.
pub struct WebAggregator {
    client: Client,
}

impl Default for WebAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl WebAggregator {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn bing(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let token = self
            .client
            .get(EDGE_AUTH_URL)
            .send()
            .await
            .context("Failed to fetch Bing access token")?
            .error_for_status()
            .context("Bing token endpoint rejected the request")?
            .text()
            .await?;

        self.edge_translate(EDGE_TRANSLATE_URL, token.trim(), text, from, to)
            .await
    }

    async fn edge_translate(
        &self,
        endpoint: &str,
        token: &str,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<String> {
        let url = Url::parse_with_params(endpoint, azure::translate_params(to, from))?;
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&[InputText { text }])
            .send()
            .await
            .context("Failed to reach the Bing web translator")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Bing web translator returned {status}: {}", body.trim());
        }

        let results: Vec<TranslateResult> = response
            .json()
            .await
            .context("Unexpected response from the Bing web translator")?;
        Ok(azure::first_translation(results))
    }

    async fn google(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let url = Url::parse_with_params(
            GOOGLE_URL,
            &[
                ("client", "gtx"),
                ("sl", from),
                ("tl", to),
                ("dt", "t"),
                ("q", text),
            ],
        )?;

        let response: Value = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to reach Google Translate")?
            .error_for_status()?
            .json()
            .await?;

        parse_google(&response)
    }

    async fn mymemory(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let langpair = mymemory_langpair(from, to);
        let url = Url::parse_with_params(
            MYMEMORY_URL,
            &[("q", text), ("langpair", langpair.as_str())],
        )?;

        let response: Value = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to reach MyMemory")?
            .error_for_status()?
            .json()
            .await?;

        parse_mymemory(&response)
    }
}

#[async_trait]
impl Aggregator for WebAggregator {
    async fn translate(
        &self,
        text: &str,
        provider: &str,
        from_language: &str,
        to_language: &str,
        timeout: Duration,
    ) -> Result<String> {
        let web = WebProvider::from_name(provider)
            .ok_or_else(|| anyhow!("Unsupported translator: '{provider}'"))?;
        debug!(provider = web.id(), from_language, to_language, "aggregator request");

        let call = async {
            match web {
                WebProvider::Bing => self.bing(text, from_language, to_language).await,
                WebProvider::Google => self.google(text, from_language, to_language).await,
                WebProvider::MyMemory => self.mymemory(text, from_language, to_language).await,
            }
        };

        tokio::time::timeout(timeout, call).await.map_err(|_| {
            anyhow!(
                "{} did not respond within {:.1}s",
                web.id(),
                timeout.as_secs_f64()
            )
        })?
    }
}

/// Joins the translated segments of a `translate_a/single` response.
fn parse_google(response: &Value) -> Result<String> {
    let segments = response
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("Google Translate returned no translation"))?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}

fn parse_mymemory(response: &Value) -> Result<String> {
    // responseStatus is sometimes a number and sometimes a string
    let status = match response.get("responseStatus") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    };

    if status != Some(200) {
        let details = response
            .get("responseDetails")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        bail!("MyMemory request failed: {details}");
    }

    response
        .pointer("/responseData/translatedText")
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| anyhow!("MyMemory returned no translation"))
}

fn mymemory_langpair(from: &str, to: &str) -> String {
    let from = if from == AUTO_DETECT { "Autodetect" } else { from };
    format!("{from}|{to}")
}
