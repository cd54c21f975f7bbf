use nabu_engine::coords::Rect;

use crate::context::DrawCx;
use crate::declare::{Compose, Decl};
use crate::node::{NodeCx, Shape};
use crate::widget::Widget;

/// Draws every child into the same rect, first child at the bottom.
///
/// # Example
/// ```rust,ignore
/// Stack::new()
///     .child(Texture::new(Some(background)))
///     .child(Text::new("overlay"))
/// ```
pub struct Stack {
    decl: Decl,
}

impl Stack {
    pub fn new() -> Self {
        Self { decl: Decl::default() }
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Compose for Stack {}

impl Widget for Stack {
    const SHAPE: Shape = Shape::Multi;

    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn draw(&mut self, node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
        for child in cx.children(node.id) {
            cx.draw_child(child, rect);
        }
    }
}
