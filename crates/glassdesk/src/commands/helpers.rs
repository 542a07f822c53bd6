use clap::ArgMatches;
use tracing::warn;

use glassdesk_core::GlassdeskConfig;
use glassdesk_core::config;

pub(crate) fn load_config_with_warning() -> GlassdeskConfig {
    match config::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.glassdesk/config.toml and ./.glassdesk/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            GlassdeskConfig::default()
        }
    }
}

/// `--proxy` if given, else the configured proxy URL.
pub(crate) fn proxy_url<'a>(matches: &'a ArgMatches, config: &'a GlassdeskConfig) -> &'a str {
    matches
        .get_one::<String>("proxy")
        .map(|s| s.as_str())
        .unwrap_or_else(|| config.client.proxy_url())
}
