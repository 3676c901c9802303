//! Diagnostic logging.
//!
//! Library code logs through `tracing`; the binary installs a subscriber
//! that writes to stderr so stdout carries only translated text.
//! `RUST_LOG` overrides the level chosen from the CLI flags.

use tracing_subscriber::EnvFilter;

/// How much diagnostic output the CLI should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors, including primary backend fallbacks.
    #[default]
    Normal,
    /// Everything down to request details.
    Verbose,
}

impl Verbosity {
    pub const fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, true) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }

    const fn default_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "xlate=debug,info",
        }
    }

    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }
}

/// Installs the global subscriber.
///
/// If called multiple times, subsequent calls are ignored.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .try_init();
}
