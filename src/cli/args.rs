use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "xlate")]
#[command(about = "Translate text through Azure Translator with a multi-provider fallback")]
#[command(version)]
pub struct Args {
    /// Text to translate (reads --file or stdin if not provided)
    pub text: Option<String>,

    /// File to translate
    #[arg(short = 'f', long, conflicts_with = "text")]
    pub file: Option<String>,

    /// Provider name, case-insensitive (e.g., bing, google, mymemory)
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Source language code, or "auto" to detect it
    #[arg(short = 's', long = "from")]
    pub from: Option<String>,

    /// Target language code (e.g., en, ja, zh-Hans)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Seconds to wait for a fallback provider
    #[arg(long)]
    pub timeout: Option<f64>,

    /// Only print errors to stderr
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Print request details to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List known translation providers
    Providers,
    /// List languages supported by Azure Translator
    Languages {
        /// Only show one category
        #[arg(long, value_enum)]
        kind: Option<LanguageKind>,
    },
    /// Detect the language of some text with Azure Translator
    Detect {
        /// Text to analyze (reads --file or stdin if not provided)
        text: Option<String>,

        /// File to analyze
        #[arg(short = 'f', long, conflicts_with = "text")]
        file: Option<String>,
    },
    /// Show the resolved configuration
    Config,
}

/// Categories reported by the supported-languages endpoint.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageKind {
    Translation,
    Transliteration,
    Dictionary,
}
