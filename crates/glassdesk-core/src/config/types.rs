//! Configuration type definitions.
//!
//! Every field is optional in the file; accessors in
//! [`defaults`](super::defaults) supply the built-in value when a field is
//! unset, so user and project files only need to name what they change.
//!
//! # Example Configuration
//!
//! ```toml
//! [proxy]
//! port = 8080
//! public_dir = "./public"
//!
//! [windows]
//! stagger = 32
//! default_width = 720
//!
//! [client]
//! proxy_url = "http://localhost:8080"
//!
//! [desktop]
//! theme = "ocean"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::themes::Theme;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.glassdesk/config.toml`
/// 2. Project config: `./.glassdesk/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GlassdeskConfig {
    #[serde(default)]
    pub proxy: ProxyConfig,

    #[serde(default)]
    pub windows: WindowsConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub desktop: DesktopConfig,
}

/// Settings for the HTTP proxy server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProxyConfig {
    /// Interface to bind. Default: 0.0.0.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,

    /// Default: 3000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Upstream dictionary endpoint; the word is sent as the `ara` query
    /// parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary_url: Option<String>,

    /// User agent sent upstream. The dictionary service rejects requests
    /// without a browser-like one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Directory the generated wallpaper is written to and static files are
    /// served from. Default: `public`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_dir: Option<PathBuf>,

    /// Base URL of the image generation API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_api_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_model: Option<String>,

    /// Timeout for upstream requests. Default: 60 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

/// Placement of newly opened windows.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WindowsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_x: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_y: Option<f64>,

    /// Offset between consecutive windows on both axes. Default: 40.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_height: Option<f64>,
}

/// Settings for the command line client.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the proxy. Default: http://localhost:3000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DesktopConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}
