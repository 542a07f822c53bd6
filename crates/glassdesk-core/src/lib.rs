//! glassdesk-core: window management and shell state for the glassdesk
//! desktop.
//!
//! This library holds everything that is independent of rendering and
//! transport: the floating window manager, the command/event store around
//! it, view-side gesture and geometry helpers, the host shell (lock screen,
//! dock, search flow, themes) and the dictionary data model. It is used by
//! both the proxy server and the CLI.
//!
//! # Main Entry Points
//!
//! - [`windows`] - Window records and the [`WindowManager`]
//! - [`state`] - Commands, events and the [`DesktopStore`]
//! - [`shell`] - The [`Desktop`] host shell
//! - [`dictionary`] - Dictionary entries and lookup response parsing
//! - [`config`] - Configuration management

pub mod config;
pub mod dictionary;
pub mod dock;
pub mod errors;
pub mod events;
pub mod logging;
pub mod shell;
pub mod state;
pub mod themes;
pub mod view;
pub mod windows;

// Re-export commonly used types at crate root for convenience
pub use config::GlassdeskConfig;
pub use dictionary::{LookupError, WordEntry};
pub use errors::{ConfigError, GlassdeskError, GlassdeskResult};
pub use shell::Desktop;
pub use state::{Command, DesktopStore, Event, Payload, Store};
pub use themes::Theme;
pub use windows::{
    Position, Size, WindowDefaults, WindowId, WindowKind, WindowManager, WindowRecord,
    WindowStatus,
};

// Re-export logging initialization
pub use logging::init_logging;
