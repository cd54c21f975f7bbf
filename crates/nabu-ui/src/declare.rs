//! Declarative builder surface shared by every widget.
//!
//! Widgets carry a [`Decl`] while they are being built. When the widget is
//! inserted into a [`crate::tree::UiTree`] the declaration is moved onto the
//! node and its children are inserted recursively.

use nabu_engine::coords::{Rect, Vec2};

use crate::bounds::Bounds;
use crate::widget::{Element, Widget};

/// Node data declared on a widget before it enters the tree.
pub struct Decl {
    pub(crate) bounds: Bounds,
    pub(crate) tag: Option<String>,
    pub(crate) enabled: bool,
    pub(crate) children: Vec<Element>,
}

impl Default for Decl {
    fn default() -> Self {
        Self { bounds: Bounds::default(), tag: None, enabled: true, children: Vec::new() }
    }
}

impl Decl {
    /// Declaration with a non-default size.
    pub fn sized(w: f32, h: f32) -> Self {
        let mut d = Self::default();
        d.bounds.rect.size = Vec2::new(w, h);
        d
    }
}

// ── Configure ─────────────────────────────────────────────────────────────

/// Builder setters available on every widget.
///
/// ```rust,ignore
/// Text::new("Name")
///     .height(18.0)
///     .tag("name-label")
/// ```
pub trait Configure: Widget {
    fn width(mut self, v: f32) -> Self {
        self.decl_mut().bounds.rect.size.x = v;
        self
    }

    fn height(mut self, v: f32) -> Self {
        self.decl_mut().bounds.rect.size.y = v;
        self
    }

    fn size(mut self, w: f32, h: f32) -> Self {
        self.decl_mut().bounds.rect.size = Vec2::new(w, h);
        self
    }

    fn position(mut self, x: f32, y: f32) -> Self {
        self.decl_mut().bounds.rect.origin = Vec2::new(x, y);
        self
    }

    fn bounds(mut self, rect: Rect) -> Self {
        self.decl_mut().bounds.rect = rect;
        self
    }

    /// Size is a fraction of the parent allocation (a weight in linear layouts).
    fn relative_size(mut self, v: bool) -> Self {
        self.decl_mut().bounds.relative_size = v;
        self
    }

    fn relative_position(mut self, v: bool) -> Self {
        self.decl_mut().bounds.relative_position = v;
        self
    }

    fn tag(mut self, v: impl Into<String>) -> Self {
        self.decl_mut().tag = Some(v.into());
        self
    }

    fn enabled(mut self, v: bool) -> Self {
        self.decl_mut().enabled = v;
        self
    }
}

impl<W: Widget> Configure for W {}

// ── Compose ───────────────────────────────────────────────────────────────

/// Child declaration for composite widgets.
///
/// Single-child composites keep the last child, dual-slot composites reject
/// a third one when inserted.
pub trait Compose: Widget {
    fn child(mut self, child: impl Into<Element>) -> Self {
        self.decl_mut().children.push(child.into());
        self
    }

    fn children<I, E>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        self.decl_mut().children.extend(children.into_iter().map(Into::into));
        self
    }
}
