use nabu_engine::coords::Rect;
use nabu_engine::scene::Content;

use crate::context::DrawCx;
use crate::declare::Decl;
use crate::effects::Effects;
use crate::node::NodeCx;
use crate::widget::Widget;

/// A row of mutually exclusive buttons.
///
/// Often paired with a [`crate::widgets::switch_tab::SwitchTab`]:
///
/// ```rust,ignore
/// Toolbar::new(["Mesh", "Material"])
///     .on_change(move |fx, i| fx.activate_tab(tabs, i))
/// ```
pub struct Toolbar {
    decl: Decl,
    items: Vec<Content>,
    selected: usize,
    on_change: Option<Box<dyn FnMut(&mut Effects, usize)>>,
}

impl Toolbar {
    pub fn new<I, C>(items: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Content>,
    {
        let mut items: Vec<Content> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            items.push(Content::none());
        }
        Self { decl: Decl::default(), items, selected: 0, on_change: None }
    }

    pub fn selected(mut self, i: usize) -> Self {
        self.selected = i;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(&mut Effects, usize) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn items(&self) -> &[Content] {
        &self.items
    }
}

impl Widget for Toolbar {
    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn draw(&mut self, node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
        let i = cx.host.toolbar(rect, self.selected, &self.items);
        if !node.enabled || i == self.selected {
            return;
        }
        if let Some(f) = self.on_change.as_mut() {
            f(&mut *cx.effects, i);
        }
        self.selected = i;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::painter::Painter;
    use crate::testing::{draw_with, repaint, SCREEN};

    #[test]
    fn empty_toolbar_has_one_blank_item() {
        let t = Toolbar::new(Vec::<Content>::new());
        assert_eq!(t.items(), [Content::none()]);
    }

    #[test]
    fn commits_host_selection() {
        let mut painter = Painter::new();
        painter.script_toolbar(2);
        let (win, _) = draw_with(painter, Toolbar::new(["a", "b", "c"]), SCREEN, repaint());
        assert_eq!(win.tree().get::<Toolbar>(win.root()).unwrap().selected_index(), 2);
    }
}
