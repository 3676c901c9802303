//! # xlate - translation with a primary backend and a fallback
//!
//! `xlate` translates text through Azure Translator. When Azure is not
//! configured or a request fails, the same call is retried through an
//! aggregator of other named providers.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate an argument (Azure first, then the web fallback)
//! xlate "你好，世界"
//!
//! # Translate stdin with an explicit provider and languages
//! cat notes.txt | xlate --provider google --from ja --to en
//!
//! # Detect the language of a file
//! xlate detect --file notes.txt
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! # async fn demo() -> Result<(), xlate::TranslateError> {
//! use std::time::Duration;
//!
//! let text = xlate::translate("Hello", "bing", "auto", "ja", Duration::from_secs(10)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Azure credentials come from the environment (a `.env` file is honored):
//! `AZURE_TRANSLATOR_API_KEY`, `AZURE_TRANSLATOR_REGION` and
//! `AZURE_TRANSLATOR_ENDPOINT`. CLI defaults live in `~/.config/xlate/config.toml`:
//!
//! ```toml
//! [xlate]
//! provider = "bing"
//! to = "ja"
//! timeout = 10.0
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Azure credentials and config file handling.
pub mod config;

/// Error kinds of the translation backends.
pub mod error;

/// Input reading from arguments, files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Backends, fallback dispatch and the provider catalog.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

pub use error::TranslateError;
pub use translation::{list_supported_providers, translate};
