//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store host-primitive draw commands in paint order
//! - track the clip stack so every command records its effective scissor
//! - define the value types carried by those commands

mod cmd;
mod content;
mod list;

pub use cmd::DrawCmd;
pub use content::{AssetFilter, AssetRef, Content, CursorIcon, ScaleMode, TextureId};
pub use list::{DrawItem, DrawList};
