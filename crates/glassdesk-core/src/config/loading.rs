//! Configuration loading and merging.
//!
//! Handles loading configuration from multiple sources and merging them
//! according to the hierarchy: defaults, then user config, then project
//! config, then CLI flags (applied by the caller).

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{
    ClientConfig, DesktopConfig, GlassdeskConfig, ProxyConfig, WindowsConfig,
};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".glassdesk";
const CONFIG_FILE: &str = "config.toml";

/// `~/.glassdesk/config.toml`, if a home directory can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// `./.glassdesk/config.toml` relative to the working directory.
pub fn project_config_path() -> Result<PathBuf, ConfigError> {
    Ok(std::env::current_dir()?.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from the user and project files.
///
/// Missing files are skipped. A file that exists but fails to parse is an
/// error, as is a merged result that fails validation.
pub fn load_hierarchy() -> Result<GlassdeskConfig, ConfigError> {
    let mut paths = Vec::new();
    if let Some(path) = user_config_path() {
        paths.push(path);
    }
    paths.push(project_config_path()?);
    load_from_paths(&paths)
}

/// Load and merge the given files in order, later files winning.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<GlassdeskConfig, ConfigError> {
    let mut config = GlassdeskConfig::default();

    for path in paths {
        match load_config_file(path) {
            Ok(file_config) => {
                debug!(event = "core.config.file_loaded", path = %path.display());
                config = merge_configs(config, file_config);
            }
            Err(ConfigError::ConfigNotFound { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;
    Ok(config)
}

/// Parse one TOML config file.
pub fn load_config_file(path: &Path) -> Result<GlassdeskConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configs field by field. Values set in `override_config` win.
pub fn merge_configs(base: GlassdeskConfig, override_config: GlassdeskConfig) -> GlassdeskConfig {
    GlassdeskConfig {
        proxy: ProxyConfig {
            bind: override_config.proxy.bind.or(base.proxy.bind),
            port: override_config.proxy.port.or(base.proxy.port),
            dictionary_url: override_config
                .proxy
                .dictionary_url
                .or(base.proxy.dictionary_url),
            user_agent: override_config.proxy.user_agent.or(base.proxy.user_agent),
            public_dir: override_config.proxy.public_dir.or(base.proxy.public_dir),
            image_api_url: override_config
                .proxy
                .image_api_url
                .or(base.proxy.image_api_url),
            image_model: override_config.proxy.image_model.or(base.proxy.image_model),
            request_timeout_secs: override_config
                .proxy
                .request_timeout_secs
                .or(base.proxy.request_timeout_secs),
        },
        windows: WindowsConfig {
            origin_x: override_config.windows.origin_x.or(base.windows.origin_x),
            origin_y: override_config.windows.origin_y.or(base.windows.origin_y),
            stagger: override_config.windows.stagger.or(base.windows.stagger),
            default_width: override_config
                .windows
                .default_width
                .or(base.windows.default_width),
            default_height: override_config
                .windows
                .default_height
                .or(base.windows.default_height),
        },
        client: ClientConfig {
            proxy_url: override_config.client.proxy_url.or(base.client.proxy_url),
        },
        desktop: DesktopConfig {
            theme: override_config.desktop.theme.or(base.desktop.theme),
        },
    }
}
