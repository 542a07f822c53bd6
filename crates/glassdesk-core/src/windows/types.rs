use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque window identifier. Assigned once at creation and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The fixed set of window categories the desktop can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    /// A single dictionary entry. Any number may be open at once.
    Word,
    /// The dictionary search panel.
    Search,
    /// The theme picker.
    Themes,
}

impl WindowKind {
    /// Singleton kinds allow at most one open window at a time.
    pub fn is_singleton(self) -> bool {
        !matches!(self, WindowKind::Word)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WindowKind::Word => "word",
            WindowKind::Search => "search",
            WindowKind::Themes => "themes",
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowStatus {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

impl fmt::Display for WindowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WindowStatus::Normal => "normal",
            WindowStatus::Minimized => "minimized",
            WindowStatus::Maximized => "maximized",
        };
        f.write_str(s)
    }
}

/// Top-left corner of a window in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One floating panel tracked by the window manager.
///
/// `P` is the content attached by the host shell. The manager never looks
/// inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord<P> {
    pub id: WindowId,
    pub title: String,
    pub kind: WindowKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<P>,
    pub position: Position,
    pub size: Size,
    pub status: WindowStatus,
    pub z_order: u64,
}

impl<P> WindowRecord<P> {
    pub fn is_minimized(&self) -> bool {
        self.status == WindowStatus::Minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.status == WindowStatus::Maximized
    }
}

/// Placement used for newly created windows.
///
/// A new window lands at `origin + stagger * n`, where `n` is the number of
/// windows already open, so consecutive windows never sit exactly on top of
/// each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowDefaults {
    pub origin: Position,
    pub stagger: f64,
    pub size: Size,
}

impl Default for WindowDefaults {
    fn default() -> Self {
        Self {
            origin: Position::new(100.0, 100.0),
            stagger: 40.0,
            size: Size::new(600.0, 500.0),
        }
    }
}

impl WindowDefaults {
    pub fn position_for(&self, open_count: usize) -> Position {
        let offset = self.stagger * open_count as f64;
        Position::new(self.origin.x + offset, self.origin.y + offset)
    }
}
