//! Supported languages listing command handler.

use anyhow::Result;

use crate::cli::LanguageKind;
use crate::translation::{AzureTranslator, PrimaryBackend, SupportedLanguages};
use crate::ui::{Spinner, Style};

use super::load_settings;

/// Prints the languages Azure Translator supports, optionally one category only.
pub async fn print_languages(kind: Option<LanguageKind>, quiet: bool) -> Result<()> {
    let (_, azure) = load_settings()?;
    let translator = AzureTranslator::new(&azure)?;

    let spinner = Spinner::new("Fetching languages...", !quiet);
    let languages = translator.supported_languages().await;
    spinner.stop();

    print!("{}", render(&languages?, kind));
    Ok(())
}

fn render(languages: &SupportedLanguages, kind: Option<LanguageKind>) -> String {
    let wants = |k: LanguageKind| kind.is_none_or(|selected| selected == k);
    let mut out = String::new();

    if wants(LanguageKind::Translation) {
        out.push_str(&format!("{}\n", Style::header("Translation")));
        for (code, lang) in &languages.translation {
            out.push_str(&format!(
                "  {:10} {} {}\n",
                Style::code(code),
                lang.name,
                Style::secondary(&lang.native_name)
            ));
        }
    }

    if wants(LanguageKind::Transliteration) {
        out.push_str(&format!("{}\n", Style::header("Transliteration")));
        for (code, lang) in &languages.transliteration {
            out.push_str(&format!(
                "  {:10} {} {}\n",
                Style::code(code),
                lang.name,
                Style::secondary(format!("({} scripts)", lang.scripts))
            ));
        }
    }

    if wants(LanguageKind::Dictionary) {
        out.push_str(&format!("{}\n", Style::header("Dictionary")));
        for (code, lang) in &languages.dictionary {
            out.push_str(&format!(
                "  {:10} {} {}\n",
                Style::code(code),
                lang.name,
                Style::secondary(format!("({} targets)", lang.target_languages))
            ));
        }
    }

    out
}
