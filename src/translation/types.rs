use std::collections::BTreeMap;
use std::time::Duration;

use super::{AUTO_DETECT, PRIMARY_PROVIDER};

/// A single translation call, with the defaults of the library surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    /// Case-insensitive provider identifier.
    pub provider: String,
    /// Source language code, or [`AUTO_DETECT`].
    pub source_language: String,
    pub target_language: String,
    /// Upper bound for the aggregator path.
    pub timeout: Duration,
}

impl TranslationRequest {
    /// Creates a request for `text` using the primary provider, auto-detection and English.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            provider: PRIMARY_PROVIDER.to_string(),
            source_language: AUTO_DETECT.to_string(),
            target_language: "en".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    #[must_use]
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    #[must_use]
    pub fn from(mut self, source_language: impl Into<String>) -> Self {
        self.source_language = source_language.into();
        self
    }

    #[must_use]
    pub fn to(mut self, target_language: impl Into<String>) -> Self {
        self.target_language = target_language.into();
        self
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Language reported by the remote service.
///
/// `language` is empty and `score` is zero when nothing was detected.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLanguage {
    pub language: String,
    /// Confidence in `[0, 1]`.
    pub score: f64,
}

impl DetectedLanguage {
    /// Creates a detection result, clamping `score` into `[0, 1]`.
    pub fn new(language: impl Into<String>, score: f64) -> Self {
        let score = if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, 1.0)
        };
        Self {
            language: language.into(),
            score,
        }
    }

    pub const fn unknown() -> Self {
        Self {
            language: String::new(),
            score: 0.0,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.language.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationLanguage {
    pub name: String,
    pub native_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransliterationLanguage {
    pub name: String,
    /// Number of scripts the language can be transliterated from.
    pub scripts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryLanguage {
    pub name: String,
    /// Number of languages with dictionary lookups from this one.
    pub target_languages: usize,
}

/// Languages supported by the primary backend, keyed by language code.
///
/// All three categories are always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedLanguages {
    pub translation: BTreeMap<String, TranslationLanguage>,
    pub transliteration: BTreeMap<String, TransliterationLanguage>,
    pub dictionary: BTreeMap<String, DictionaryLanguage>,
}
