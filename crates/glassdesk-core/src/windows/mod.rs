//! Floating window records and the manager that arbitrates their lifecycle,
//! focus and stacking order.

pub mod manager;
pub mod types;

pub use manager::{IdAllocator, WindowManager};
pub use types::{
    Position, Size, WindowDefaults, WindowId, WindowKind, WindowRecord, WindowStatus,
};
