use crate::config::types::GlassdeskConfig;
use crate::errors::ConfigError;
use crate::view::{MIN_HEIGHT, MIN_WIDTH};

/// Validate a merged configuration.
pub fn validate_config(config: &GlassdeskConfig) -> Result<(), ConfigError> {
    for (name, url) in [
        ("proxy.dictionary_url", config.proxy.dictionary_url()),
        ("proxy.image_api_url", config.proxy.image_api_url()),
        ("client.proxy_url", config.client.proxy_url()),
    ] {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must be an http(s) URL, got '{}'", name, url),
            });
        }
    }

    if config.proxy.image_model().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "proxy.image_model cannot be empty".to_string(),
        });
    }

    let defaults = config.windows.window_defaults();
    for (name, value) in [
        ("windows.origin_x", defaults.origin.x),
        ("windows.origin_y", defaults.origin.y),
        ("windows.stagger", defaults.stagger),
        ("windows.default_width", defaults.size.width),
        ("windows.default_height", defaults.size.height),
    ] {
        if !value.is_finite() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must be a finite number, got {}", name, value),
            });
        }
    }

    if defaults.size.width < MIN_WIDTH || defaults.size.height < MIN_HEIGHT {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "windows.default_width/default_height must be at least {}x{}, got {}x{}",
                MIN_WIDTH, MIN_HEIGHT, defaults.size.width, defaults.size.height
            ),
        });
    }

    if defaults.stagger < 0.0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "windows.stagger cannot be negative".to_string(),
        });
    }

    Ok(())
}
