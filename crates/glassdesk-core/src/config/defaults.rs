//! Built-in configuration values and the accessors that apply them.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::types::{ClientConfig, DesktopConfig, ProxyConfig, WindowsConfig};
use crate::themes::Theme;
use crate::windows::{Position, Size, WindowDefaults};

pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DICTIONARY_URL: &str = "https://sozluk.gov.tr/gts";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_IMAGE_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_PROXY_URL: &str = "http://localhost:3000";

impl ProxyConfig {
    pub fn bind(&self) -> &str {
        self.bind.as_deref().unwrap_or(DEFAULT_BIND)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// `bind:port`, ready for a socket listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind(), self.port())
    }

    pub fn dictionary_url(&self) -> &str {
        self.dictionary_url
            .as_deref()
            .unwrap_or(DEFAULT_DICTIONARY_URL)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    pub fn public_dir(&self) -> PathBuf {
        self.public_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR))
    }

    pub fn image_api_url(&self) -> &str {
        self.image_api_url
            .as_deref()
            .unwrap_or(DEFAULT_IMAGE_API_URL)
    }

    pub fn image_model(&self) -> &str {
        self.image_model.as_deref().unwrap_or(DEFAULT_IMAGE_MODEL)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

impl WindowsConfig {
    /// Placement defaults for the window manager, falling back to the
    /// built-in layout for unset fields.
    pub fn window_defaults(&self) -> WindowDefaults {
        let builtin = WindowDefaults::default();
        WindowDefaults {
            origin: Position::new(
                self.origin_x.unwrap_or(builtin.origin.x),
                self.origin_y.unwrap_or(builtin.origin.y),
            ),
            stagger: self.stagger.unwrap_or(builtin.stagger),
            size: Size::new(
                self.default_width.unwrap_or(builtin.size.width),
                self.default_height.unwrap_or(builtin.size.height),
            ),
        }
    }
}

impl ClientConfig {
    pub fn proxy_url(&self) -> &str {
        self.proxy_url.as_deref().unwrap_or(DEFAULT_PROXY_URL)
    }
}

impl DesktopConfig {
    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::GlassdeskConfig;

    #[test]
    fn test_proxy_defaults() {
        let config = GlassdeskConfig::default();
        assert_eq!(config.proxy.listen_addr(), "0.0.0.0:3000");
        assert_eq!(config.proxy.dictionary_url(), "https://sozluk.gov.tr/gts");
        assert!(config.proxy.user_agent().starts_with("Mozilla/5.0"));
        assert_eq!(config.proxy.public_dir(), PathBuf::from("public"));
        assert_eq!(config.proxy.image_model(), "gemini-2.5-flash-image");
        assert_eq!(config.proxy.request_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_window_defaults_fall_back_per_field() {
        let config = WindowsConfig {
            stagger: Some(24.0),
            default_height: Some(420.0),
            ..Default::default()
        };
        let defaults = config.window_defaults();
        assert_eq!(defaults.origin, Position::new(100.0, 100.0));
        assert_eq!(defaults.stagger, 24.0);
        assert_eq!(defaults.size, Size::new(600.0, 420.0));
    }

    #[test]
    fn test_client_and_desktop_defaults() {
        let config = GlassdeskConfig::default();
        assert_eq!(config.client.proxy_url(), "http://localhost:3000");
        assert_eq!(config.desktop.theme(), Theme::Aurora);
    }
}
