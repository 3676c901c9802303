//! Display catalog of translation providers.

/// Provider display names, primary first.
///
/// Informational only: names are not checked against what a backend can serve.
pub const PROVIDER_CATALOG: &[&str] = &[
    "Bing (Azure SDK)",
    "Google",
    "Alibaba",
    "Apertium",
    "Argos",
    "Baidu",
    "Caiyun",
    "CloudTranslation",
    "DeepL",
    "Elia",
    "Hujiang",
    "Iciba",
    "Iflytek",
    "Iflyrec",
    "Itranslate",
    "Judic",
    "LanguageWire",
    "Lingvanex",
    "Niutrans",
    "Mglip",
    "Mirai",
    "ModernMt",
    "MyMemory",
    "Papago",
    "QqFanyi",
    "QqTranSmart",
    "Reverso",
    "Sogou",
    "SysTran",
    "Tilde",
    "TranslateCom",
    "TranslateMe",
    "Utibet",
    "VolcEngine",
    "Yandex",
    "Yeekit",
    "Youdao",
];

/// Returns the provider display names in catalog order.
pub const fn list_supported_providers() -> &'static [&'static str] {
    PROVIDER_CATALOG
}

/// Identifier accepted by `translate` for a catalog display name.
///
/// `"Bing (Azure SDK)"` becomes `"bing"`, `"ModernMt"` becomes `"modernmt"`.
pub fn provider_id(display_name: &str) -> String {
    display_name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase()
}
