use nabu_engine::coords::Rect;

use crate::context::DrawCx;
use crate::declare::{Compose, Decl};
use crate::error::TreeError;
use crate::node::{NodeCx, NodeId, Shape};
use crate::tree::UiTree;
use crate::widget::{Variant, Widget};

/// Shows one child at a time.
///
/// The active index starts at 0; an index with no child shows nothing.
/// Switching tabs asks the host for one extra repaint.
///
/// # Example
/// ```rust,ignore
/// let tabs = tree.insert(SwitchTab::new().child(mesh_page).child(material_page))?;
/// // from a callback during draw:
/// effects.activate_tab(tabs, 1);
/// ```
pub struct SwitchTab {
    decl: Decl,
    active: usize,
    changed: bool,
    on_activate: Option<Box<dyn FnMut(usize)>>,
}

impl SwitchTab {
    pub fn new() -> Self {
        Self { decl: Decl::default(), active: 0, changed: true, on_activate: None }
    }

    /// Initial tab.
    pub fn active(mut self, index: usize) -> Self {
        self.active = index;
        self
    }

    /// Called with the new index by every [`SwitchTab::activate_tab`].
    pub fn on_activate(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_activate = Some(Box::new(f));
        self
    }

    pub fn activate_tab(&mut self, index: usize) {
        self.active = index;
        self.changed = true;
        if let Some(f) = self.on_activate.as_mut() {
            f(index);
        }
    }

    #[inline]
    pub fn active_tab(&self) -> usize {
        self.active
    }
}

impl Default for SwitchTab {
    fn default() -> Self {
        Self::new()
    }
}

impl Compose for SwitchTab {}

impl Widget for SwitchTab {
    const SHAPE: Shape = Shape::Multi;

    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn draw(&mut self, node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
        cx.host.push_clip(rect);
        if let Some(child) = cx.tree.child(node.id, self.active) {
            cx.draw_child(child, rect);
        }
        cx.host.pop_clip();

        if self.changed {
            cx.request_repaint();
            self.changed = false;
        }
    }
}

impl UiTree {
    /// Unlinks the tab at `index` from a tab switcher; returns it, or `None`
    /// when the index is out of range. The active index is left as is.
    pub fn remove_tab(&mut self, tabs: NodeId, index: usize) -> Result<Option<NodeId>, TreeError> {
        match self.node(tabs) {
            None => return Err(TreeError::UnknownNode(tabs)),
            Some(n) if n.kind() != SwitchTab::KIND => return Err(TreeError::NotComposite(tabs)),
            Some(_) => {}
        }
        let Some(child) = self.child(tabs, index) else { return Ok(None) };
        self.remove_child(tabs, child)?;
        Ok(Some(child))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::testing::{draw, repaint, step, SCREEN};
    use crate::widgets::text::Text;

    fn tabs() -> SwitchTab {
        SwitchTab::new().child(Text::new("zero")).child(Text::new("one"))
    }

    #[test]
    fn draws_only_the_active_child() {
        let (_, painter) = draw(tabs(), SCREEN, repaint());
        assert_eq!(painter.labels(), ["zero"]);
    }

    #[test]
    fn first_draw_repaints_once_then_settles() {
        let (mut win, mut painter) = draw(tabs(), SCREEN, repaint());
        assert_eq!(painter.repaint_requests(), 1);
        step(&mut win, &mut painter, repaint());
        assert_eq!(painter.repaint_requests(), 0);
    }

    #[test]
    fn activate_switches_and_notifies() {
        let seen = Rc::new(Cell::new(None));
        let s = seen.clone();
        let (mut win, mut painter) =
            draw(tabs().on_activate(move |i| s.set(Some(i))), SCREEN, repaint());

        let root = win.root();
        win.tree_mut().get_mut::<SwitchTab>(root).unwrap().activate_tab(1);
        assert_eq!(seen.get(), Some(1));

        step(&mut win, &mut painter, repaint());
        assert_eq!(painter.labels(), ["one"]);
        assert_eq!(painter.repaint_requests(), 1);
    }

    #[test]
    fn out_of_range_index_draws_nothing() {
        let (mut win, mut painter) = draw(tabs().active(5), SCREEN, repaint());
        assert!(painter.labels().is_empty());

        let root = win.root();
        win.tree_mut().get_mut::<SwitchTab>(root).unwrap().activate_tab(2);
        step(&mut win, &mut painter, repaint());
        assert!(painter.labels().is_empty());
        assert_eq!(painter.draw_list().clip_depth(), 0);
    }

    #[test]
    fn remove_tab_unlinks_by_index() {
        let (mut win, mut painter) = draw(tabs(), SCREEN, repaint());
        let root = win.root();
        let removed = win.tree_mut().remove_tab(root, 0).unwrap().unwrap();
        assert_eq!(win.tree().parent(removed), None);
        assert_eq!(win.tree_mut().remove_tab(root, 9), Ok(None));

        step(&mut win, &mut painter, repaint());
        assert_eq!(painter.labels(), ["one"]);
    }
}
