//! The host shell around the window manager: lock screen, dock launcher,
//! dictionary search flow, favorites and theme selection.

pub mod desktop;
pub mod favorites;
pub mod lock;

pub use desktop::Desktop;
pub use favorites::Favorites;
pub use lock::{ALWAYS_ON_DISPLAY_AFTER, LockScreen, UNLOCK_SWIPE_DISTANCE};
