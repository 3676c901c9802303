mod azure;
mod manager;

pub use azure::{
    API_KEY_ENV, AzureConfig, DEFAULT_ENDPOINT, DEFAULT_REGION, ENDPOINT_ENV, REGION_ENV,
};
pub use manager::{
    AzureSection, ConfigFile, ConfigManager, DEFAULT_TIMEOUT_SECS, ResolveOptions,
    ResolvedConfig, XlateConfig, resolve_config,
};
