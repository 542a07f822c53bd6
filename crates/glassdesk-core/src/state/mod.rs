//! Command/event layer over the window manager.
//!
//! Front ends describe user intents as [`Command`]s and hand them to a
//! [`Store`]. The store answers with [`Event`]s describing what changed.

pub mod dispatch;
pub mod events;
pub mod store;
pub mod types;

pub use dispatch::DesktopStore;
pub use events::Event;
pub use store::Store;
pub use types::{Command, Payload};
