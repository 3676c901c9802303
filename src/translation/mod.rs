mod aggregator;
mod azure;
mod backend;
mod dispatch;
#[cfg(test)]
mod local_server;
mod providers;
mod types;

/// Provider identifier of the primary backend.
pub const PRIMARY_PROVIDER: &str = "bing";

/// Source language sentinel that requests detection.
pub const AUTO_DETECT: &str = "auto";

pub use aggregator::{WebAggregator, WebProvider};
pub use azure::AzureTranslator;
pub use backend::{Aggregator, PrimaryBackend, PrimaryFactory};
pub use dispatch::{Dispatcher, Route, default_dispatcher, route, translate};
pub use providers::{PROVIDER_CATALOG, list_supported_providers, provider_id};
pub use types::{
    DetectedLanguage, DictionaryLanguage, SupportedLanguages, TranslationLanguage,
    TranslationRequest, TransliterationLanguage,
};
