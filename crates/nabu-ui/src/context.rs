use nabu_engine::coords::Rect;

use crate::bounds::Bounds;
use crate::control::{HotControl, Interaction};
use crate::effects::Effects;
use crate::event::UiEvent;
use crate::host::Host;
use crate::metrics::Metrics;
use crate::node::{NodeCx, NodeId};
use crate::tree::UiTree;

/// Everything a widget can reach while it draws.
///
/// The widget being drawn is temporarily out of `tree`; its node (bounds,
/// children, tag) is still there.
pub struct DrawCx<'a> {
    pub tree: &'a mut UiTree,
    pub host: &'a mut dyn Host,
    /// The frame's event. Widgets may [`UiEvent::consume`] it.
    pub event: UiEvent,
    pub hot: &'a mut HotControl,
    pub effects: &'a mut Effects,
    pub metrics: &'a Metrics,
}

impl DrawCx<'_> {
    /// Draws `child` into `rect`.
    ///
    /// Nodes that were attached after the last construct are constructed
    /// first. Unknown ids draw nothing.
    pub fn draw_child(&mut self, child: NodeId, rect: Rect) {
        let live = match self.tree.node(child) {
            Some(n) => n.is_live(),
            None => {
                log::warn!("draw_child: unknown node {child:?}");
                return;
            }
        };
        if !live {
            self.tree.construct(child, self.host);
        }

        let Some(node) = self.tree.node_mut(child) else { return };
        let (Some(control), Some(mut element)) = (node.control, node.element.take()) else {
            log::warn!("draw_child: {child:?} is already being drawn");
            return;
        };
        let cx = NodeCx { id: child, control, enabled: node.enabled };

        element.draw(cx, self, rect);

        if let Some(node) = self.tree.node_mut(child) {
            node.element = Some(element);
        }
    }

    /// Runs the capture state machine for `node` over `rect`.
    ///
    /// Disabled nodes never hover or capture.
    pub fn interact(&mut self, node: NodeCx, rect: Rect) -> Interaction {
        if !node.enabled {
            return Interaction::default();
        }
        self.hot.interact(node.control, rect, &self.event, self.host)
    }

    #[inline]
    pub fn request_repaint(&mut self) {
        self.host.request_repaint();
    }

    /// Children of `id` in structural order.
    #[inline]
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.tree.children(id)
    }

    /// Layout bounds of `id`; default bounds for unknown ids.
    pub fn bounds_of(&self, id: NodeId) -> Bounds {
        self.tree.layout_bounds(id, self.metrics).unwrap_or_default()
    }
}
