//! Input subsystem.
//!
//! Platform-agnostic events and held state. Embedders translate their
//! window system's events into [`InputEvent`]s.

mod state;
mod types;

pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
    TextEvent,
};
