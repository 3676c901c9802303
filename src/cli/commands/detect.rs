use anyhow::Result;

use crate::input::{InputReader, InputSource};
use crate::translation::{AzureTranslator, DetectedLanguage, PrimaryBackend};
use crate::ui::{Spinner, Style};

use super::load_settings;

/// Prints the language Azure detects for the input, e.g. `ja (0.98)`.
///
/// Empty input prints `unknown` without contacting Azure.
pub async fn run_detect(text: Option<String>, file: Option<String>, quiet: bool) -> Result<()> {
    let source_text = InputReader::read(InputSource::from_args(text, file))?;

    let detected = if source_text.is_empty() {
        DetectedLanguage::unknown()
    } else {
        let (_, azure) = load_settings()?;
        let translator = AzureTranslator::new(&azure)?;

        let spinner = Spinner::new("Detecting...", !quiet);
        let detected = translator.detect_language(&source_text).await;
        spinner.stop();
        detected?
    };

    if detected.is_unknown() {
        println!("{}", Style::secondary("unknown"));
    } else {
        println!(
            "{} {}",
            Style::code(&detected.language),
            Style::secondary(format!("({:.2})", detected.score))
        );
    }

    Ok(())
}
