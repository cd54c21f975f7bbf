use nabu_engine::coords::Rect;
use nabu_engine::scene::Content;

use crate::context::DrawCx;
use crate::declare::Decl;
use crate::node::NodeCx;
use crate::widget::Widget;

/// A framed box showing text, an image or both.
pub struct BoxView {
    decl: Decl,
    content: Content,
    bind: Option<Box<dyn FnMut() -> Content>>,
}

impl BoxView {
    pub fn new(content: impl Into<Content>) -> Self {
        Self { decl: Decl::default(), content: content.into(), bind: None }
    }

    /// Pulls the content from `f` every draw.
    pub fn bind(mut self, f: impl FnMut() -> Content + 'static) -> Self {
        self.bind = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<Content>) {
        self.content = content.into();
    }
}

impl Widget for BoxView {
    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn draw(&mut self, _node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
        if let Some(bind) = self.bind.as_mut() {
            self.content = bind();
        }
        cx.host.box_content(rect, &self.content);
    }
}

#[cfg(test)]
mod tests {
    use nabu_engine::scene::{DrawCmd, TextureId};

    use super::*;
    use crate::testing::{draw, repaint, SCREEN};

    #[test]
    fn draws_bound_content() {
        let (_, painter) = draw(
            BoxView::new("ignored").bind(|| Content::image(TextureId(7)).tooltip("icon")),
            SCREEN,
            repaint(),
        );
        match painter.commands().next() {
            Some(DrawCmd::Box { content, .. }) => {
                assert_eq!(content.image, Some(TextureId(7)));
                assert_eq!(content.tooltip.as_deref(), Some("icon"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
