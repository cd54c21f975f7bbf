use crate::coords::{Rect, Vec2};

use super::content::{AssetRef, Content, CursorIcon, ScaleMode, TextureId};

/// Host-primitive draw command stream.
///
/// One variant per primitive a host exposes to the widget framework.
/// Interactive primitives record the value that was displayed, not the
/// value the host returned.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Label { rect: Rect, text: String },
    Box { rect: Rect, content: Content },
    ButtonFrame { rect: Rect, pressed: bool, enabled: bool },
    Texture { rect: Rect, texture: TextureId, mode: ScaleMode },
    TextField { rect: Rect, value: String, multiline: bool },
    NumberField { rect: Rect, value: f64 },
    Toggle { rect: Rect, value: bool, label: Content },
    Popup { rect: Rect, selected: usize, options: Vec<String> },
    Toolbar { rect: Rect, selected: usize, items: Vec<Content> },
    ObjectField { rect: Rect, current: Option<AssetRef> },
    CursorRect { rect: Rect, cursor: CursorIcon },
    /// Start of a scroll region; content is offset by `-offset`.
    ScrollRegion { viewport: Rect, offset: Vec2, content: Vec2 },
}

impl DrawCmd {
    /// The rect the command occupies (viewport for scroll regions).
    pub fn rect(&self) -> Rect {
        match self {
            DrawCmd::Label { rect, .. }
            | DrawCmd::Box { rect, .. }
            | DrawCmd::ButtonFrame { rect, .. }
            | DrawCmd::Texture { rect, .. }
            | DrawCmd::TextField { rect, .. }
            | DrawCmd::NumberField { rect, .. }
            | DrawCmd::Toggle { rect, .. }
            | DrawCmd::Popup { rect, .. }
            | DrawCmd::Toolbar { rect, .. }
            | DrawCmd::ObjectField { rect, .. }
            | DrawCmd::CursorRect { rect, .. } => *rect,
            DrawCmd::ScrollRegion { viewport, .. } => *viewport,
        }
    }
}
