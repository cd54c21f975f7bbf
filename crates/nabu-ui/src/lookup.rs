//! Tag lookup over a subtree.
//!
//! Tags are not unique. Searches walk depth-first pre-order (a node, then
//! its children in structural order) and may be narrowed to one widget kind.

use crate::node::NodeId;
use crate::tree::UiTree;
use crate::widget::{Variant, WidgetKind};

impl UiTree {
    fn matches(&self, id: NodeId, tag: &str, kind: Option<WidgetKind>) -> bool {
        self.node(id).is_some_and(|n| {
            n.tag() == Some(tag) && kind.is_none_or(|k| k == n.kind())
        })
    }

    /// First node under `root` (inclusive) tagged `tag`, optionally of `kind`.
    pub fn element_by_tag(
        &self,
        root: NodeId,
        tag: &str,
        kind: Option<WidgetKind>,
    ) -> Option<NodeId> {
        self.descendants(root).find(|id| self.matches(*id, tag, kind))
    }

    /// Every node under `root` (inclusive) tagged `tag`, in pre-order.
    ///
    /// The children of a match are searched too.
    pub fn all_elements_by_tag(
        &self,
        root: NodeId,
        tag: &str,
        kind: Option<WidgetKind>,
    ) -> Vec<NodeId> {
        self.descendants(root).filter(|id| self.matches(*id, tag, kind)).collect()
    }

    /// Typed [`UiTree::element_by_tag`].
    pub fn find<W: Variant>(&self, root: NodeId, tag: &str) -> Option<NodeId> {
        self.element_by_tag(root, tag, Some(W::KIND))
    }

    /// Typed [`UiTree::all_elements_by_tag`].
    pub fn find_all<W: Variant>(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.all_elements_by_tag(root, tag, Some(W::KIND))
    }
}
