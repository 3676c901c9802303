use clap::Parser;

use xlate::TranslateError;
use xlate::cli::commands::{config, detect, languages, providers, translate};
use xlate::cli::{Args, Command};
use xlate::logging::{self, Verbosity};
use xlate::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    // .env may set RUST_LOG, so it is loaded before the subscriber
    let _ = dotenvy::dotenv();
    let verbosity = Verbosity::from_flags(args.quiet, args.verbose);
    logging::init(verbosity);

    if let Err(err) = run(args, verbosity.is_quiet()).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: Args, quiet: bool) -> anyhow::Result<()> {
    match args.command {
        Some(Command::Providers) => providers::print_providers(),
        Some(Command::Languages { kind }) => languages::print_languages(kind, quiet).await?,
        Some(Command::Detect { text, file }) => detect::run_detect(text, file, quiet).await?,
        Some(Command::Config) => config::print_config()?,
        None => {
            let options = translate::TranslateOptions {
                text: args.text,
                file: args.file,
                provider: args.provider,
                from: args.from,
                to: args.to,
                timeout: args.timeout,
                quiet,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}

fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    match err.downcast_ref::<TranslateError>() {
        Some(TranslateError::Configuration(_)) => exitcode::CONFIG,
        Some(TranslateError::Transport(_) | TranslateError::Aggregator(_)) => exitcode::UNAVAILABLE,
        None => 1,
    }
}
