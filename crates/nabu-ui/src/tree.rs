//! The widget arena.
//!
//! [`UiTree`] stores every node in a slot map keyed by [`NodeId`]. Parents
//! list their children by id; children keep a plain back-reference to their
//! parent. Structure is only edited through the methods here so the two
//! directions always agree.

use nabu_engine::coords::{Rect, Vec2};
use slotmap::SlotMap;

use crate::bounds::Bounds;
use crate::control::ControlId;
use crate::error::TreeError;
use crate::host::Host;
use crate::metrics::Metrics;
use crate::node::{Children, Node, NodeCx, NodeId, Slot};
use crate::widget::{Element, Variant, WidgetKind};

#[derive(Debug, Default)]
pub struct UiTree {
    nodes: SlotMap<NodeId, Node>,
}

impl UiTree {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    fn expect_node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.nodes.get(id).ok_or(TreeError::UnknownNode(id))
    }

    fn expect_node_mut(&mut self, id: NodeId) -> Result<&mut Node, TreeError> {
        self.nodes.get_mut(id).ok_or(TreeError::UnknownNode(id))
    }

    // ── Building ──────────────────────────────────────────────────────────

    /// Inserts a declared widget and, recursively, its declared children.
    ///
    /// The new node has no parent. On error nothing from this declaration
    /// remains in the tree.
    pub fn insert(&mut self, element: impl Into<Element>) -> Result<NodeId, TreeError> {
        let mut element = element.into();
        let decl = std::mem::take(element.decl_mut());
        let node = Node {
            kind: element.kind(),
            children: Children::for_shape(element.shape()),
            element: Some(element),
            bounds: decl.bounds,
            enabled: decl.enabled,
            tag: decl.tag,
            control: None,
            live: false,
            parent: None,
        };
        let id = self.nodes.insert(node);

        for child in decl.children {
            let c = match self.insert(child) {
                Ok(c) => c,
                Err(e) => {
                    self.remove(id);
                    return Err(e);
                }
            };
            match self.link(id, c) {
                // A later declared child of a single-child composite wins.
                Ok(Some(displaced)) => {
                    self.remove(displaced);
                }
                Ok(None) => {}
                Err(e) => {
                    self.remove(c);
                    self.remove(id);
                    return Err(e);
                }
            }
        }

        Ok(id)
    }

    /// Makes `child` a child of `parent`, detaching it from its old parent.
    ///
    /// A single-child composite drops its previous child, which stays in the
    /// tree without a parent.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.link(parent, child).map(|_| ())
    }

    fn link(&mut self, parent: NodeId, child: NodeId) -> Result<Option<NodeId>, TreeError> {
        let p = self.expect_node(parent)?;
        self.expect_node(child)?;

        match &p.children {
            Children::Leaf => return Err(TreeError::NotComposite(parent)),
            Children::Dual(slots)
                if slots.iter().all(Option::is_some) && !p.children.contains(child) =>
            {
                return Err(TreeError::SlotsFull(parent));
            }
            _ => {}
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::Cycle { parent, child });
        }

        self.detach(child)?;

        let displaced = self.expect_node_mut(parent)?.children.insert(parent, child)?;
        if let Some(old) = displaced {
            if let Some(n) = self.nodes.get_mut(old) {
                n.parent = None;
            }
        }
        self.expect_node_mut(child)?.parent = Some(parent);
        Ok(displaced)
    }

    /// True if `ancestor` is `node` or one of its ancestors.
    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.nodes.get(id).and_then(|n| n.parent);
        }
        false
    }

    /// Unlinks `child` from its parent, if it has one.
    pub fn detach(&mut self, child: NodeId) -> Result<(), TreeError> {
        let Some(parent) = self.expect_node(child)?.parent else {
            return Ok(());
        };
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.remove(child);
        }
        self.expect_node_mut(child)?.parent = None;
        Ok(())
    }

    /// Unlinks `child` from `parent`; fails if it is not a child of it.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        if !self.expect_node(parent)?.children.contains(child) {
            return Err(TreeError::NotAChild { parent, child });
        }
        self.detach(child)
    }

    /// Empties a slot of a dual-slot composite; returns the former occupant.
    pub fn clear_slot(&mut self, parent: NodeId, slot: Slot) -> Result<Option<NodeId>, TreeError> {
        let occupant = match &self.expect_node(parent)?.children {
            Children::Dual(slots) => slots[slot.index()],
            _ => return Err(TreeError::NotComposite(parent)),
        };
        if let Some(c) = occupant {
            self.detach(c)?;
        }
        Ok(occupant)
    }

    /// Drops `id` and its whole subtree. Host resources held by the removed
    /// widgets are released as they drop.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if self.detach(id).is_err() {
            return false;
        }
        let doomed: Vec<NodeId> = self.descendants(id).collect();
        for n in &doomed {
            self.nodes.remove(*n);
        }
        log::debug!("removed {} node(s) rooted at {id:?}", doomed.len());
        true
    }

    // ── Structure queries ─────────────────────────────────────────────────

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Children in structural order; empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes.get(id).map(|n| n.children.iter().collect()).unwrap_or_default()
    }

    pub fn child(&self, parent: NodeId, index: usize) -> Option<NodeId> {
        self.nodes.get(parent)?.children.iter().nth(index)
    }

    pub fn child_count(&self, parent: NodeId) -> usize {
        self.nodes.get(parent).map_or(0, |n| n.children.len())
    }

    /// Both slots of a dual-slot composite; `[None, None]` for other shapes.
    pub fn slots(&self, parent: NodeId) -> [Option<NodeId>; 2] {
        match self.nodes.get(parent).map(|n| &n.children) {
            Some(Children::Dual(slots)) => *slots,
            _ => [None, None],
        }
    }

    pub fn slot(&self, parent: NodeId, slot: Slot) -> Option<NodeId> {
        self.slots(parent)[slot.index()]
    }

    pub fn is_child(&self, parent: NodeId, child: NodeId) -> bool {
        self.nodes.get(parent).is_some_and(|n| n.children.contains(child))
    }

    pub fn first_child_of_kind(&self, parent: NodeId, kind: WidgetKind) -> Option<NodeId> {
        self.nodes
            .get(parent)?
            .children
            .iter()
            .find(|c| self.nodes.get(*c).is_some_and(|n| n.kind == kind))
    }

    /// `root` and everything below it, depth-first pre-order.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        let stack = if self.nodes.contains_key(root) { vec![root] } else { Vec::new() };
        Descendants { tree: self, stack }
    }

    // ── Typed access ──────────────────────────────────────────────────────

    /// The widget at `id` if it is a `W` (and not currently drawing).
    pub fn get<W: Variant>(&self, id: NodeId) -> Option<&W> {
        W::from_element(self.nodes.get(id)?.element.as_ref()?)
    }

    pub fn get_mut<W: Variant>(&mut self, id: NodeId) -> Option<&mut W> {
        W::from_element_mut(self.nodes.get_mut(id)?.element.as_mut()?)
    }

    // ── Node setters ──────────────────────────────────────────────────────

    pub fn bounds(&self, id: NodeId) -> Option<Bounds> {
        self.nodes.get(id).map(|n| n.bounds)
    }

    /// Declared bounds with the size a widget asks to be laid out with.
    pub fn layout_bounds(&self, id: NodeId, metrics: &Metrics) -> Option<Bounds> {
        let n = self.nodes.get(id)?;
        let mut b = n.bounds;
        if let Some(el) = &n.element {
            b.rect.size = el.layout_size(b.rect.size, metrics);
        }
        Some(b)
    }

    pub(crate) fn bounds_mut(&mut self, id: NodeId) -> Option<&mut Bounds> {
        self.nodes.get_mut(id).map(|n| &mut n.bounds)
    }

    pub fn set_bounds(&mut self, id: NodeId, rect: Rect) -> Result<(), TreeError> {
        self.expect_node_mut(id)?.bounds.rect = rect;
        Ok(())
    }

    pub fn set_size(&mut self, id: NodeId, size: Vec2) -> Result<(), TreeError> {
        self.expect_node_mut(id)?.bounds.rect.size = size;
        Ok(())
    }

    pub fn set_position(&mut self, id: NodeId, pos: Vec2) -> Result<(), TreeError> {
        self.expect_node_mut(id)?.bounds.rect.origin = pos;
        Ok(())
    }

    pub fn set_relative_size(&mut self, id: NodeId, v: bool) -> Result<(), TreeError> {
        self.expect_node_mut(id)?.bounds.relative_size = v;
        Ok(())
    }

    pub fn set_relative_position(&mut self, id: NodeId, v: bool) -> Result<(), TreeError> {
        self.expect_node_mut(id)?.bounds.relative_position = v;
        Ok(())
    }

    pub fn set_enabled(&mut self, id: NodeId, v: bool) -> Result<(), TreeError> {
        self.expect_node_mut(id)?.enabled = v;
        Ok(())
    }

    pub fn set_tag(&mut self, id: NodeId, tag: Option<String>) -> Result<(), TreeError> {
        self.expect_node_mut(id)?.tag = tag;
        Ok(())
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Constructs every node under `root` that is not live yet.
    ///
    /// Control ids are assigned on the first construct and kept afterwards.
    /// Returns how many nodes were constructed.
    pub fn construct(&mut self, root: NodeId, host: &mut dyn Host) -> usize {
        let ids: Vec<NodeId> = self.descendants(root).collect();
        let mut count = 0;
        for id in ids {
            let Some(node) = self.nodes.get_mut(id) else { continue };
            if node.live {
                continue;
            }
            let control = *node.control.get_or_insert_with(ControlId::next);
            let cx = NodeCx { id, control, enabled: node.enabled };
            if let Some(el) = node.element.as_mut() {
                el.on_construct(cx, host);
            }
            node.live = true;
            count += 1;
        }
        if count > 0 {
            log::debug!("constructed {count} node(s) under {root:?}");
        }
        count
    }

    /// Disables every live node under `root`, top-down.
    pub fn disable(&mut self, root: NodeId, host: &mut dyn Host) -> usize {
        let ids: Vec<NodeId> = self.descendants(root).collect();
        let mut count = 0;
        for id in ids {
            let Some(node) = self.nodes.get_mut(id) else { continue };
            let (true, Some(control)) = (node.live, node.control) else { continue };
            let cx = NodeCx { id, control, enabled: node.enabled };
            if let Some(el) = node.element.as_mut() {
                el.on_disable(cx, host);
            }
            node.live = false;
            count += 1;
        }
        log::debug!("disabled {count} node(s) under {root:?}");
        count
    }
}

// ── Descendants ───────────────────────────────────────────────────────────

/// Pre-order walk produced by [`UiTree::descendants`].
pub struct Descendants<'a> {
    tree: &'a UiTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(n) = self.tree.nodes.get(id) {
            let start = self.stack.len();
            self.stack.extend(n.children.iter());
            self.stack[start..].reverse();
        }
        Some(id)
    }
}
