//! Primary-then-aggregator translation dispatch.

use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::AzureConfig;
use crate::error::TranslateError;

use super::PRIMARY_PROVIDER;
use super::aggregator::WebAggregator;
use super::backend::{Aggregator, PrimaryFactory};
use super::types::TranslationRequest;

/// Which backend a provider identifier is routed to first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Try the primary backend, then the aggregator.
    Primary,
    /// Go straight to the aggregator.
    Aggregator,
}

/// Resolves the route for a provider identifier.
///
/// Matching ignores case and surrounding whitespace, like
/// [`WebProvider::from_name`](super::aggregator::WebProvider::from_name).
pub fn route(provider: &str) -> Route {
    if provider.trim().eq_ignore_ascii_case(PRIMARY_PROVIDER) {
        Route::Primary
    } else {
        Route::Aggregator
    }
}

/// Routes translation requests to the primary backend or the aggregator.
///
/// Cheap to clone; backends are shared.
#[derive(Clone)]
pub struct Dispatcher {
    primary: Arc<dyn PrimaryFactory>,
    aggregator: Arc<dyn Aggregator>,
}

impl Dispatcher {
    pub fn new<P, A>(primary: P, aggregator: A) -> Self
    where
        P: PrimaryFactory + 'static,
        A: Aggregator + 'static,
    {
        Self {
            primary: Arc::new(primary),
            aggregator: Arc::new(aggregator),
        }
    }

    /// Azure as the primary backend and the keyless web endpoints as the aggregator.
    pub fn from_config(config: AzureConfig) -> Self {
        Self::new(config, WebAggregator::new())
    }

    /// Translates `request.text`.
    ///
    /// Empty text returns an empty string without contacting any backend. For
    /// the primary identifier, a primary failure of any kind is logged and the
    /// aggregator is used instead.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Aggregator`] if the aggregator fails. No other
    /// error kind is returned.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        if request.text.is_empty() {
            return Ok(String::new());
        }

        if route(&request.provider) == Route::Primary {
            match self.try_primary(request).await {
                Ok(text) => return Ok(text),
                Err(err) if err.is_configuration() => {
                    info!(error = %err, "primary backend not configured, using aggregator");
                }
                Err(err) => {
                    warn!(error = %err, "primary backend failed, falling back to aggregator");
                }
            }
        }

        self.aggregate(request).await
    }

    async fn try_primary(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let backend = self.primary.create()?;
        debug!(
            from = %request.source_language,
            to = %request.target_language,
            "translating with primary backend"
        );

        backend
            .translate(
                &request.text,
                &request.target_language,
                &request.source_language,
            )
            .await
    }

    async fn aggregate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        debug!(provider = %request.provider, "translating with aggregator");

        self.aggregator
            .translate(
                &request.text,
                &request.provider,
                &request.source_language,
                &request.target_language,
                request.timeout,
            )
            .await
            .map_err(|err| TranslateError::Aggregator(format!("{err:#}")))
    }
}

static DEFAULT_DISPATCHER: OnceLock<Dispatcher> = OnceLock::new();

/// Dispatcher built from the process-wide [`AzureConfig::global`].
pub fn default_dispatcher() -> &'static Dispatcher {
    DEFAULT_DISPATCHER.get_or_init(|| Dispatcher::from_config(AzureConfig::global().clone()))
}

/// Translates `text` with the process-wide dispatcher.
///
/// See [`Dispatcher::translate`] for the fallback rules.
pub async fn translate(
    text: &str,
    provider: &str,
    source_language: &str,
    target_language: &str,
    timeout: Duration,
) -> Result<String, TranslateError> {
    let request = TranslationRequest::new(text)
        .provider(provider)
        .from(source_language)
        .to(target_language)
        .timeout(timeout);

    default_dispatcher().translate(&request).await
}
