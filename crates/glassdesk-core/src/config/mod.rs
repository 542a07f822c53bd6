//! Configuration management for glassdesk.
//!
//! Configuration is loaded from TOML files and merged in order:
//!
//! 1. Built-in defaults
//! 2. User config: `~/.glassdesk/config.toml`
//! 3. Project config: `./.glassdesk/config.toml`
//! 4. CLI flags, applied by the binaries after loading
//!
//! All fields are optional; see [`defaults`] for the fallback values.

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use loading::{
    load_config_file, load_from_paths, load_hierarchy, merge_configs, project_config_path,
    user_config_path,
};
pub use types::{ClientConfig, DesktopConfig, GlassdeskConfig, ProxyConfig, WindowsConfig};
pub use validation::validate_config;
