//! Edits scheduled during a draw and applied after it.
//!
//! Widgets are taken out of the tree while they draw, so callbacks cannot
//! touch the tree directly. They push closures here instead; the window
//! applies them once the draw returns.

use crate::node::NodeId;
use crate::tree::UiTree;
use crate::widgets::switch_tab::SwitchTab;

type Edit = Box<dyn FnOnce(&mut UiTree)>;

#[derive(Default)]
pub struct Effects {
    queue: Vec<Edit>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules an arbitrary tree edit.
    pub fn defer(&mut self, edit: impl FnOnce(&mut UiTree) + 'static) {
        self.queue.push(Box::new(edit));
    }

    /// Schedules `SwitchTab::activate_tab(index)` on `tabs`.
    pub fn activate_tab(&mut self, tabs: NodeId, index: usize) {
        self.defer(move |tree| match tree.get_mut::<SwitchTab>(tabs) {
            Some(s) => s.activate_tab(index),
            None => log::warn!("activate_tab: {tabs:?} is not a tab switcher"),
        });
    }

    pub fn set_enabled(&mut self, id: NodeId, enabled: bool) {
        self.defer(move |tree| {
            if let Err(e) = tree.set_enabled(id, enabled) {
                log::warn!("set_enabled: {e}");
            }
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Applies queued edits in order; returns how many ran.
    pub fn apply(&mut self, tree: &mut UiTree) -> usize {
        let edits = std::mem::take(&mut self.queue);
        let n = edits.len();
        for edit in edits {
            edit(tree);
        }
        n
    }
}

impl std::fmt::Debug for Effects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Effects").field("queued", &self.queue.len()).finish()
    }
}
