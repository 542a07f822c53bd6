//! glassdesk-proxy: the HTTP side of glassdesk.
//!
//! Two upstream calls are proxied so the desktop never talks to third
//! parties directly:
//!
//! - `GET /api/tdk?q=<word>` forwards to the dictionary service
//! - `POST /api/generate-wallpaper` asks the image model for a lock screen
//!   wallpaper and saves it under the public directory
//!
//! Everything else is served from the public directory.

pub mod errors;
pub mod gemini;
pub mod handlers;
pub mod server;
pub mod state;

pub use errors::ProxyError;
pub use handlers::WallpaperResponse;
pub use server::{create_router, serve};
pub use state::{ProxyState, api_key_from_env};
