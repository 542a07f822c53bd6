//! Pointer gestures over windows.
//!
//! A gesture is `begin -> any number of pointer moves -> release`. Each move
//! yields the geometry command to dispatch; nothing is buffered, so a gesture
//! that is cancelled midway leaves the window at the last reported geometry.

use crate::state::Command;
use crate::view::geometry::{clamp_size, is_interactive};
use crate::windows::{Position, Size, WindowId, WindowRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Dragging the title bar moves the window.
    Drag,
    /// Dragging the bottom-right handle resizes the window.
    Resize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    window_id: WindowId,
    kind: GestureKind,
    /// Window position when the gesture began.
    window_origin: Position,
    /// Pointer position when the gesture began.
    pointer_origin: Position,
}

impl Gesture {
    pub fn window_id(&self) -> &WindowId {
        &self.window_id
    }

    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    /// Geometry command for the pointer's current position.
    pub fn update(&self, pointer: Position) -> Command {
        match self.kind {
            GestureKind::Drag => Command::UpdatePosition {
                id: self.window_id.clone(),
                position: Position::new(
                    self.window_origin.x + (pointer.x - self.pointer_origin.x),
                    self.window_origin.y + (pointer.y - self.pointer_origin.y),
                ),
            },
            GestureKind::Resize => Command::UpdateSize {
                id: self.window_id.clone(),
                size: clamp_size(Size::new(
                    pointer.x - self.window_origin.x,
                    pointer.y - self.window_origin.y,
                )),
            },
        }
    }
}

/// Tracks the gesture in progress for one pointer.
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    current: Option<Gesture>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer pressed on a window's title bar.
    ///
    /// Always focuses the window; starts a drag only when the window is
    /// normal (maximized and minimized windows do not move).
    pub fn press_title_bar<P>(
        &mut self,
        window: &WindowRecord<P>,
        pointer: Position,
    ) -> Vec<Command> {
        self.press(window, pointer, GestureKind::Drag)
    }

    /// Pointer pressed on the resize handle. The handle only exists on
    /// normal windows.
    pub fn press_resize_handle<P>(
        &mut self,
        window: &WindowRecord<P>,
        pointer: Position,
    ) -> Vec<Command> {
        self.press(window, pointer, GestureKind::Resize)
    }

    /// Pointer pressed anywhere else inside the window.
    pub fn press_body<P>(&self, window: &WindowRecord<P>) -> Vec<Command> {
        vec![Command::Focus {
            id: window.id.clone(),
        }]
    }

    /// Pointer moved. Returns the geometry update while a gesture is live.
    pub fn pointer_move(&self, pointer: Position) -> Option<Command> {
        self.current.as_ref().map(|gesture| gesture.update(pointer))
    }

    /// Pointer released. Ends the gesture, if any.
    pub fn release(&mut self) -> Option<Gesture> {
        self.current.take()
    }

    /// Pointer capture lost. Same as a release: no rollback.
    pub fn cancel(&mut self) -> Option<Gesture> {
        self.release()
    }

    pub fn current(&self) -> Option<&Gesture> {
        self.current.as_ref()
    }

    fn press<P>(
        &mut self,
        window: &WindowRecord<P>,
        pointer: Position,
        kind: GestureKind,
    ) -> Vec<Command> {
        if is_interactive(window) {
            self.current = Some(Gesture {
                window_id: window.id.clone(),
                kind,
                window_origin: window.position,
                pointer_origin: pointer,
            });
        }
        vec![Command::Focus {
            id: window.id.clone(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DesktopStore, Store};
    use crate::windows::{WindowDefaults, WindowKind, WindowStatus};

    fn record(status: WindowStatus) -> WindowRecord<()> {
        WindowRecord {
            id: WindowId::new("win-1"),
            title: "Kelime".to_string(),
            kind: WindowKind::Word,
            payload: None,
            position: Position::new(100.0, 100.0),
            size: Size::new(600.0, 500.0),
            status,
            z_order: 1,
        }
    }

    #[test]
    fn test_drag_streams_positions() {
        let mut controller = GestureController::new();
        let commands =
            controller.press_title_bar(&record(WindowStatus::Normal), Position::new(150.0, 110.0));
        assert_eq!(
            commands,
            vec![Command::Focus {
                id: WindowId::new("win-1")
            }]
        );

        assert_eq!(
            controller.pointer_move(Position::new(170.0, 90.0)),
            Some(Command::UpdatePosition {
                id: WindowId::new("win-1"),
                position: Position::new(120.0, 80.0),
            })
        );

        let finished = controller.release().unwrap();
        assert_eq!(finished.kind(), GestureKind::Drag);
        assert!(controller.pointer_move(Position::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_resize_is_clamped_at_view_boundary() {
        let mut controller = GestureController::new();
        controller.press_resize_handle(&record(WindowStatus::Normal), Position::new(700.0, 600.0));

        // Pointer dragged to 100x50 relative to the window origin.
        assert_eq!(
            controller.pointer_move(Position::new(200.0, 150.0)),
            Some(Command::UpdateSize {
                id: WindowId::new("win-1"),
                size: Size::new(300.0, 200.0),
            })
        );
        assert_eq!(
            controller.pointer_move(Position::new(900.0, 420.0)),
            Some(Command::UpdateSize {
                id: WindowId::new("win-1"),
                size: Size::new(800.0, 320.0),
            })
        );
    }

    #[test]
    fn test_maximized_window_focuses_but_does_not_drag() {
        let mut controller = GestureController::new();
        let commands = controller
            .press_title_bar(&record(WindowStatus::Maximized), Position::new(10.0, 10.0));
        assert_eq!(commands.len(), 1);
        assert!(controller.current().is_none());
        assert!(controller.pointer_move(Position::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_cancel_keeps_last_reported_geometry() {
        let mut store = DesktopStore::with_sequential_ids(WindowDefaults::default());
        let (id, _) = store.open("Kelime", WindowKind::Word, None);
        let mut controller = GestureController::new();

        let window = store.window(&id).unwrap().clone();
        for cmd in controller.press_resize_handle(&window, Position::new(700.0, 600.0)) {
            store.dispatch(cmd).unwrap();
        }
        for pointer in [Position::new(600.0, 500.0), Position::new(520.0, 430.0)] {
            if let Some(cmd) = controller.pointer_move(pointer) {
                store.dispatch(cmd).unwrap();
            }
        }
        assert!(controller.cancel().is_some());

        assert_eq!(
            store.window(&id).unwrap().size,
            Size::new(420.0, 330.0)
        );
    }

    #[test]
    fn test_press_body_only_focuses() {
        let controller = GestureController::new();
        let commands = controller.press_body(&record(WindowStatus::Normal));
        assert_eq!(commands.len(), 1);
        assert!(controller.current().is_none());
    }
}
