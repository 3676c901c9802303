use anyhow::Result;

use crate::config::{ResolveOptions, resolve_config};
use crate::input::{InputReader, InputSource};
use crate::translation::{Dispatcher, TranslationRequest};
use crate::ui::Spinner;

use super::load_settings;

pub struct TranslateOptions {
    pub text: Option<String>,
    pub file: Option<String>,
    pub provider: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub timeout: Option<f64>,
    pub quiet: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let (config_file, azure) = load_settings()?;

    let resolved = resolve_config(
        &ResolveOptions {
            provider: options.provider,
            from: options.from,
            to: options.to,
            timeout: options.timeout,
        },
        &config_file,
    )?;

    let source_text = InputReader::read(InputSource::from_args(options.text, options.file))?;

    // Nothing to translate: print nothing and skip every backend.
    if source_text.is_empty() {
        return Ok(());
    }

    let dispatcher = Dispatcher::from_config(azure);
    let request = TranslationRequest::new(source_text)
        .provider(resolved.provider)
        .from(resolved.source_language)
        .to(resolved.target_language)
        .timeout(resolved.timeout);

    let spinner = Spinner::new("Translating...", !options.quiet);
    let result = dispatcher.translate(&request).await;
    spinner.stop();

    println!("{}", result?);
    Ok(())
}
