use nabu_engine::coords::Rect;

use crate::context::DrawCx;
use crate::declare::Decl;
use crate::node::NodeCx;
use crate::widget::Widget;

/// Empty filler; takes space in a layout and draws nothing.
pub struct Spacer {
    decl: Decl,
}

impl Spacer {
    pub fn new() -> Self {
        Self { decl: Decl::default() }
    }
}

impl Default for Spacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Spacer {
    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn draw(&mut self, _node: NodeCx, _cx: &mut DrawCx<'_>, _rect: Rect) {}
}
