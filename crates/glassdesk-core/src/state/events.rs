use serde::{Deserialize, Serialize};

use crate::windows::{Position, Size, WindowId, WindowKind, WindowStatus};

/// All window state changes that can result from a dispatched command.
///
/// Each variant describes _what happened_, not what should happen. A command
/// naming a window that is no longer open changes nothing and therefore
/// produces no events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A new window record was created.
    WindowOpened { id: WindowId, kind: WindowKind },
    /// A window was removed from the desktop.
    WindowClosed { id: WindowId },
    /// A window moved to the front of the stacking order.
    WindowRaised { id: WindowId, z_order: u64 },
    /// A window's status changed.
    WindowStatusChanged { id: WindowId, status: WindowStatus },
    WindowMoved { id: WindowId, position: Position },
    WindowResized { id: WindowId, size: Size },
    /// The content attached to a window was replaced.
    PayloadUpdated { id: WindowId },
    /// The active window changed. `None` means no window is active.
    ActiveWindowChanged { id: Option<WindowId> },
}

impl Event {
    /// The window this event is about, if any.
    pub fn window_id(&self) -> Option<&WindowId> {
        match self {
            Event::WindowOpened { id, .. }
            | Event::WindowClosed { id }
            | Event::WindowRaised { id, .. }
            | Event::WindowStatusChanged { id, .. }
            | Event::WindowMoved { id, .. }
            | Event::WindowResized { id, .. }
            | Event::PayloadUpdated { id } => Some(id),
            Event::ActiveWindowChanged { id } => id.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_roundtrip() {
        let event = Event::WindowRaised {
            id: WindowId::new("win-1"),
            z_order: 4,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"window_raised""#));
        let deserialized: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_window_id_accessor() {
        let cleared = Event::ActiveWindowChanged { id: None };
        assert!(cleared.window_id().is_none());

        let moved = Event::WindowMoved {
            id: WindowId::new("win-2"),
            position: Position::new(1.0, 2.0),
        };
        assert_eq!(moved.window_id().map(WindowId::as_str), Some("win-2"));
    }
}
