use slotmap::new_key_type;

use crate::bounds::Bounds;
use crate::control::ControlId;
use crate::error::TreeError;
use crate::widget::{Element, WidgetKind};

new_key_type! {
    /// Handle to a node in a [`crate::tree::UiTree`].
    pub struct NodeId;
}

// ── Shape / Slot ──────────────────────────────────────────────────────────

/// How many children a widget kind holds.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Shape {
    Leaf,
    /// Zero or one child.
    Single,
    /// Ordered list.
    Multi,
    /// Two named slots.
    Dual,
}

/// A slot of a dual-slot composite: upper/left is `First`, lower/right is `Second`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }
}

// ── Children ──────────────────────────────────────────────────────────────

/// Child storage of one node, in structural order.
#[derive(Debug, Clone, PartialEq)]
pub enum Children {
    Leaf,
    Single(Option<NodeId>),
    Multi(Vec<NodeId>),
    Dual([Option<NodeId>; 2]),
}

impl Children {
    pub fn for_shape(shape: Shape) -> Self {
        match shape {
            Shape::Leaf => Children::Leaf,
            Shape::Single => Children::Single(None),
            Shape::Multi => Children::Multi(Vec::new()),
            Shape::Dual => Children::Dual([None, None]),
        }
    }

    /// Children in structural order (dual slots: first, then second).
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        let (single, many): (Option<NodeId>, &[NodeId]) = match self {
            Children::Leaf => (None, &[]),
            Children::Single(c) => (*c, &[]),
            Children::Multi(v) => (None, v.as_slice()),
            Children::Dual(_) => (None, &[]),
        };
        let dual = match self {
            Children::Dual(slots) => *slots,
            _ => [None, None],
        };
        single.into_iter().chain(many.iter().copied()).chain(dual.into_iter().flatten())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.iter().any(|c| c == id)
    }

    /// Adds `child` according to the shape.
    ///
    /// Returns the child displaced from a single-child composite, if any.
    pub(crate) fn insert(
        &mut self,
        parent: NodeId,
        child: NodeId,
    ) -> Result<Option<NodeId>, TreeError> {
        match self {
            Children::Leaf => Err(TreeError::NotComposite(parent)),
            Children::Single(slot) => Ok(slot.replace(child)),
            Children::Multi(v) => {
                v.push(child);
                Ok(None)
            }
            Children::Dual(slots) => match slots.iter_mut().find(|s| s.is_none()) {
                Some(free) => {
                    *free = Some(child);
                    Ok(None)
                }
                None => Err(TreeError::SlotsFull(parent)),
            },
        }
    }

    /// Removes `child`; returns whether it was present.
    pub(crate) fn remove(&mut self, child: NodeId) -> bool {
        match self {
            Children::Leaf => false,
            Children::Single(slot) => {
                if *slot == Some(child) {
                    *slot = None;
                    true
                } else {
                    false
                }
            }
            Children::Multi(v) => match v.iter().position(|c| *c == child) {
                Some(i) => {
                    v.remove(i);
                    true
                }
                None => false,
            },
            Children::Dual(slots) => match slots.iter_mut().find(|s| **s == Some(child)) {
                Some(s) => {
                    *s = None;
                    true
                }
                None => false,
            },
        }
    }
}

// ── Node ──────────────────────────────────────────────────────────────────

/// One arena entry: the widget plus the data every node carries.
pub struct Node {
    /// `None` only while the widget is being drawn.
    pub(crate) element: Option<Element>,
    pub(crate) kind: WidgetKind,
    pub(crate) bounds: Bounds,
    pub(crate) enabled: bool,
    pub(crate) tag: Option<String>,
    pub(crate) control: Option<ControlId>,
    /// Between construct and disable.
    pub(crate) live: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Children,
}

impl Node {
    #[inline]
    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Assigned by the first construct; `None` before.
    #[inline]
    pub fn control(&self) -> Option<ControlId> {
        self.control
    }

    /// Constructed and not yet disabled.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.live
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &Children {
        &self.children
    }

    /// The widget, unless it is currently being drawn.
    #[inline]
    pub fn element(&self) -> Option<&Element> {
        self.element.as_ref()
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind)
            .field("bounds", &self.bounds)
            .field("enabled", &self.enabled)
            .field("tag", &self.tag)
            .field("live", &self.live)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .finish()
    }
}

/// Per-node data handed to a widget while it draws.
#[derive(Debug, Copy, Clone)]
pub struct NodeCx {
    pub id: NodeId,
    pub control: ControlId,
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;

    fn ids(n: usize) -> (NodeId, Vec<NodeId>) {
        let mut map: SlotMap<NodeId, ()> = SlotMap::with_key();
        let parent = map.insert(());
        (parent, (0..n).map(|_| map.insert(())).collect())
    }

    #[test]
    fn leaf_rejects_children() {
        let (p, c) = ids(1);
        let mut ch = Children::for_shape(Shape::Leaf);
        assert_eq!(ch.insert(p, c[0]), Err(TreeError::NotComposite(p)));
    }

    #[test]
    fn single_replaces_and_reports_displaced() {
        let (p, c) = ids(2);
        let mut ch = Children::for_shape(Shape::Single);
        assert_eq!(ch.insert(p, c[0]), Ok(None));
        assert_eq!(ch.insert(p, c[1]), Ok(Some(c[0])));
        assert_eq!(ch.iter().collect::<Vec<_>>(), vec![c[1]]);
    }

    #[test]
    fn multi_keeps_insertion_order() {
        let (p, c) = ids(3);
        let mut ch = Children::for_shape(Shape::Multi);
        for &id in &c {
            ch.insert(p, id).unwrap();
        }
        assert_eq!(ch.iter().collect::<Vec<_>>(), c);
        assert!(ch.remove(c[1]));
        assert_eq!(ch.iter().collect::<Vec<_>>(), vec![c[0], c[2]]);
    }

    #[test]
    fn dual_fills_first_free_slot_then_rejects() {
        let (p, c) = ids(3);
        let mut ch = Children::for_shape(Shape::Dual);
        ch.insert(p, c[0]).unwrap();
        ch.insert(p, c[1]).unwrap();
        assert_eq!(ch.insert(p, c[2]), Err(TreeError::SlotsFull(p)));

        assert!(ch.remove(c[0]));
        ch.insert(p, c[2]).unwrap();
        assert_eq!(ch, Children::Dual([Some(c[2]), Some(c[1])]));
    }

    #[test]
    fn remove_missing_is_false() {
        let (_, c) = ids(2);
        let mut ch = Children::Single(Some(c[0]));
        assert!(!ch.remove(c[1]));
        assert_eq!(ch.len(), 1);
    }
}
