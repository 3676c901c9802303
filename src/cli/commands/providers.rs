//! Provider listing command handler.

use crate::translation::{PRIMARY_PROVIDER, WebProvider, list_supported_providers, provider_id};
use crate::ui::Style;

/// Prints the provider catalog to stdout.
///
/// The primary backend and the providers the built-in aggregator can serve are marked.
pub fn print_providers() {
    println!("{}\n", Style::header("Providers"));

    for name in list_supported_providers() {
        let id = provider_id(name);
        let marker = if id == PRIMARY_PROVIDER {
            format!(" {}", Style::marker("(primary)"))
        } else if WebProvider::from_name(&id).is_some() {
            format!(" {}", Style::marker("(built-in)"))
        } else {
            String::new()
        };

        println!("  {:16} {}{marker}", Style::value(name), Style::secondary(&id));
    }

    println!(
        "\n{}",
        Style::hint(format!(
            "Use the lowercase identifier with --provider. '{PRIMARY_PROVIDER}' tries Azure first."
        ))
    );
}
