use serde::{Deserialize, Serialize};

use crate::dictionary::WordEntry;
use crate::windows::{Position, Size, WindowId, WindowKind};

/// Content the desktop attaches to a window.
///
/// The window manager treats this as opaque. Panels read it back through the
/// typed accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Payload {
    /// A dictionary entry shown by `word` and `search` windows.
    Entry(WordEntry),
}

impl Payload {
    pub fn entry(&self) -> Option<&WordEntry> {
        match self {
            Payload::Entry(entry) => Some(entry),
        }
    }
}

/// All window operations that can be dispatched through the store.
///
/// Commands use owned types so they can be serialized, stored in replay
/// scripts and sent across boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Open a window, or bring forward the existing one for singleton kinds.
    Open {
        title: String,
        kind: WindowKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Payload>,
    },
    Close { id: WindowId },
    Minimize { id: WindowId },
    /// Toggle between maximized and normal.
    Maximize { id: WindowId },
    Focus { id: WindowId },
    /// Return to normal and focus.
    Restore { id: WindowId },
    UpdatePosition { id: WindowId, position: Position },
    UpdateSize { id: WindowId, size: Size },
    UpdatePayload { id: WindowId, payload: Payload },
}
