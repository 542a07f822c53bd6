use crate::windows::{Position, Size, WindowRecord, WindowStatus};

pub const MIN_WIDTH: f64 = 300.0;
pub const MIN_HEIGHT: f64 = 200.0;

/// Clamp each dimension to the minimum window size.
pub fn clamp_size(size: Size) -> Size {
    Size::new(size.width.max(MIN_WIDTH), size.height.max(MIN_HEIGHT))
}

/// Screen rectangle a window occupies when drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub origin: Position,
    pub size: Size,
}

/// Where and how large a window is drawn.
///
/// Maximized windows cover the viewport without touching their stored
/// geometry; minimized windows are not drawn at all (they live in the dock).
pub fn frame_for<P>(window: &WindowRecord<P>, viewport: Size) -> Option<Frame> {
    match window.status {
        WindowStatus::Normal => Some(Frame {
            origin: window.position,
            size: window.size,
        }),
        WindowStatus::Maximized => Some(Frame {
            origin: Position::new(0.0, 0.0),
            size: viewport,
        }),
        WindowStatus::Minimized => None,
    }
}

/// Whether drag and resize handles are live for this window.
pub fn is_interactive<P>(window: &WindowRecord<P>) -> bool {
    window.status == WindowStatus::Normal
}
