//! Window view helpers: geometry limits, rendered frames and pointer
//! gestures. The view turns raw pointer input into [`crate::state::Command`]s
//! and owns all size clamping; the window manager stores what it is given.

pub mod geometry;
pub mod gesture;

pub use geometry::{Frame, MIN_HEIGHT, MIN_WIDTH, clamp_size, frame_for, is_interactive};
pub use gesture::{Gesture, GestureController, GestureKind};
