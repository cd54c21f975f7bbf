use nabu_engine::coords::Rect;

use crate::context::DrawCx;
use crate::declare::{Compose, Decl};
use crate::node::{NodeCx, Shape};
use crate::widget::Widget;

/// Places each child at its own declared position and size.
///
/// Relative positions and sizes are fractions of the panel's rect. Children
/// are clipped to the panel.
///
/// # Example
/// ```rust,ignore
/// Panel::new()
///     .child(Text::new("top-left").position(4.0, 4.0).size(80.0, 16.0))
///     .child(Preview::new()
///         .relative_position(true).position(0.5, 0.0)
///         .relative_size(true).size(0.5, 1.0))
/// ```
pub struct Panel {
    decl: Decl,
}

impl Panel {
    pub fn new() -> Self {
        Self { decl: Decl::default() }
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Compose for Panel {}

impl Widget for Panel {
    const SHAPE: Shape = Shape::Multi;

    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn draw(&mut self, node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
        cx.host.push_clip(rect);
        for child in cx.children(node.id) {
            let placed = cx.bounds_of(child).resolve_in(rect);
            cx.draw_child(child, placed);
        }
        cx.host.pop_clip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declare::Configure;
    use crate::testing::{draw, repaint};
    use crate::widgets::text::Text;

    #[test]
    fn mixes_absolute_and_relative_children() {
        let rect = Rect::new(10.0, 20.0, 200.0, 100.0);
        let (_, painter) = draw(
            Panel::new()
                .child(Text::new("abs").position(5.0, 5.0).size(40.0, 10.0))
                .child(
                    Text::new("rel")
                        .relative_position(true)
                        .position(0.5, 0.5)
                        .relative_size(true)
                        .size(0.25, 0.5),
                ),
            rect,
            repaint(),
        );
        let items = painter.draw_list().items();
        assert_eq!(items[0].cmd.rect(), Rect::new(15.0, 25.0, 40.0, 10.0));
        assert_eq!(items[1].cmd.rect(), Rect::new(110.0, 70.0, 50.0, 50.0));
        assert!(items.iter().all(|i| i.clip_rect == Some(rect)));
        assert_eq!(painter.draw_list().clip_depth(), 0);
    }
}
