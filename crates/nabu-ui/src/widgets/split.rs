//! Two panes separated by a draggable handle.
//!
//! A vertical split stacks an upper and a lower pane; a horizontal split
//! puts a left and a right pane side by side. Each pane is sized either in
//! pixels or as a weight against the space the handle leaves.

use nabu_engine::coords::{Axis, Rect};
use nabu_engine::scene::{Content, CursorIcon};

use crate::context::DrawCx;
use crate::declare::{Compose, Decl};
use crate::node::{NodeCx, Shape};
use crate::widget::Widget;

/// Pane extents along the split axis for an allocated extent `avail`.
///
/// Relative extents are weights; the result is always in pixels.
pub fn pane_extents(
    avail: f32,
    handle: f32,
    first: (f32, bool),
    second: (f32, bool),
) -> (f32, f32) {
    let space = avail - handle;
    match (first, second) {
        ((a, true), (b, true)) => {
            let total = a + b;
            if total == 0.0 {
                (space / 2.0, space / 2.0)
            } else {
                let unit = space / total;
                (a * unit, b * unit)
            }
        }
        ((_, true), (b, false)) => (space - b, b),
        ((a, false), (_, true)) => (a, space - a),
        ((a, false), (b, false)) => (a, b),
    }
}

/// Moves the handle by `d`, keeping both extents non-negative and their sum
/// unchanged.
pub fn apply_drag(first: f32, second: f32, d: f32) -> (f32, f32) {
    if d < -first {
        (0.0, second + first)
    } else if d > second {
        (first + second, 0.0)
    } else {
        (first + d, second - d)
    }
}

pub struct SplitView {
    decl: Decl,
    axis: Axis,
    first: f32,
    second: f32,
    first_relative: bool,
    second_relative: bool,
    handle: Option<f32>,
}

impl SplitView {
    /// Both panes default to equal weights.
    pub fn new(axis: Axis) -> Self {
        Self {
            decl: Decl::default(),
            axis,
            first: 1.0,
            second: 1.0,
            first_relative: true,
            second_relative: true,
            handle: None,
        }
    }

    /// Upper and lower panes.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Left and right panes.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Extent of the upper/left pane; a weight while it is relative.
    pub fn first_extent(mut self, v: f32) -> Self {
        self.first = v;
        self
    }

    /// Extent of the lower/right pane; a weight while it is relative.
    pub fn second_extent(mut self, v: f32) -> Self {
        self.second = v;
        self
    }

    pub fn first_relative(mut self, v: bool) -> Self {
        self.first_relative = v;
        self
    }

    pub fn second_relative(mut self, v: bool) -> Self {
        self.second_relative = v;
        self
    }

    /// Handle thickness; `Metrics::split_handle` when unset.
    pub fn handle_size(mut self, v: f32) -> Self {
        self.handle = Some(v);
        self
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Pane extents as of the last draw.
    #[inline]
    pub fn extents(&self) -> (f32, f32) {
        (self.first, self.second)
    }

    fn cursor(&self) -> CursorIcon {
        match self.axis {
            Axis::Vertical => CursorIcon::ResizeVertical,
            Axis::Horizontal => CursorIcon::ResizeHorizontal,
        }
    }
}

impl Compose for SplitView {}

impl Widget for SplitView {
    const SHAPE: Shape = Shape::Dual;

    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn draw(&mut self, node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
        let axis = self.axis;
        let handle = self.handle.unwrap_or(cx.metrics.split_handle);
        (self.first, self.second) = pane_extents(
            axis.main(rect.size),
            handle,
            (self.first, self.first_relative),
            (self.second, self.second_relative),
        );

        let start = axis.main(rect.origin);
        let cross = axis.cross(rect.origin);
        let cross_extent = axis.cross(rect.size);
        let [first, second] = cx.tree.slots(node.id);

        cx.host.push_clip(rect);

        if let Some(child) = first {
            cx.draw_child(child, Rect::along(axis, start, self.first, cross, cross_extent));
        }

        let bar = Rect::along(axis, start + self.first, handle, cross, cross_extent);
        cx.host.box_content(bar, &Content::none());
        cx.host.cursor_rect(bar, self.cursor());
        if let Some(delta) = cx.interact(node, bar).drag {
            (self.first, self.second) = apply_drag(self.first, self.second, axis.main(delta));
            cx.request_repaint();
        }

        if let Some(child) = second {
            let main = start + self.first + handle;
            let r = Rect::along(axis, main, self.second, cross, cross_extent);
            cx.draw_child(child, r);
        }

        cx.host.pop_clip();
    }
}

#[cfg(test)]
mod tests {
    use nabu_engine::coords::Vec2;
    use nabu_engine::scene::DrawCmd;

    use super::*;
    use crate::declare::Configure;
    use crate::event::UiEvent;
    use crate::testing::{draw, repaint, step};
    use crate::widgets::text::Text;

    #[test]
    fn equal_weights_split_evenly() {
        assert_eq!(pane_extents(108.0, 8.0, (1.0, true), (1.0, true)), (50.0, 50.0));
        assert_eq!(pane_extents(108.0, 8.0, (1.0, true), (3.0, true)), (25.0, 75.0));
    }

    #[test]
    fn zero_weights_split_in_half() {
        assert_eq!(pane_extents(108.0, 8.0, (0.0, true), (0.0, true)), (50.0, 50.0));
    }

    #[test]
    fn one_relative_pane_takes_the_rest() {
        assert_eq!(pane_extents(108.0, 8.0, (1.0, true), (30.0, false)), (70.0, 30.0));
        assert_eq!(pane_extents(108.0, 8.0, (40.0, false), (9.0, true)), (40.0, 60.0));
        assert_eq!(pane_extents(108.0, 8.0, (40.0, false), (10.0, false)), (40.0, 10.0));
    }

    #[test]
    fn drag_transfers_and_clamps() {
        assert_eq!(apply_drag(50.0, 50.0, 10.0), (60.0, 40.0));
        assert_eq!(apply_drag(50.0, 50.0, -80.0), (0.0, 100.0));
        assert_eq!(apply_drag(50.0, 50.0, 80.0), (100.0, 0.0));
    }

    #[test]
    fn panes_and_handle_are_laid_out_in_order() {
        let (_, painter) = draw(
            SplitView::vertical().child(Text::new("upper")).child(Text::new("lower")),
            Rect::new(0.0, 0.0, 60.0, 108.0),
            repaint(),
        );
        let cmds: Vec<_> = painter.commands().cloned().collect();
        let handle = Rect::new(0.0, 50.0, 60.0, 8.0);
        let label = |rect: Rect, text: &str| DrawCmd::Label { rect, text: text.into() };
        assert_eq!(cmds[0], label(Rect::new(0.0, 0.0, 60.0, 50.0), "upper"));
        assert_eq!(cmds[1], DrawCmd::Box { rect: handle, content: Content::none() });
        let cursor = DrawCmd::CursorRect { rect: handle, cursor: CursorIcon::ResizeVertical };
        assert_eq!(cmds[2], cursor);
        assert_eq!(cmds[3], label(Rect::new(0.0, 58.0, 60.0, 50.0), "lower"));
    }

    #[test]
    fn empty_slots_still_draw_handle() {
        let rect = Rect::new(0.0, 0.0, 104.0, 20.0);
        let (_, painter) = draw(SplitView::horizontal().handle_size(4.0), rect, repaint());
        assert_eq!(
            painter.commands().next(),
            Some(&DrawCmd::Box { rect: Rect::new(50.0, 0.0, 4.0, 20.0), content: Content::none() })
        );
    }

    #[test]
    fn dragging_handle_moves_split() {
        let (mut win, mut painter) = draw(
            SplitView::horizontal().child(Text::new("l")).child(Text::new("r")),
            Rect::new(0.0, 0.0, 108.0, 20.0),
            repaint(),
        );
        step(&mut win, &mut painter, UiEvent::mouse_down(Vec2::new(53.0, 10.0)));
        assert!(win.hot().active().is_some());

        let drag = UiEvent::mouse_drag(Vec2::new(73.0, 10.0), Vec2::new(20.0, 0.0));
        step(&mut win, &mut painter, drag);
        let root = win.root();
        assert_eq!(win.tree().get::<SplitView>(root).unwrap().extents(), (70.0, 30.0));
        assert!(painter.repaint_requests() > 0);

        step(&mut win, &mut painter, UiEvent::mouse_up(Vec2::new(73.0, 10.0)));
        assert!(win.hot().active().is_none());

        // Weights keep the dragged ratio on the next layout.
        step(&mut win, &mut painter, repaint());
        assert_eq!(win.tree().get::<SplitView>(root).unwrap().extents(), (70.0, 30.0));
    }

    #[test]
    fn disabled_split_ignores_drag() {
        let rect = Rect::new(0.0, 0.0, 108.0, 20.0);
        let (mut win, mut painter) = draw(SplitView::horizontal().enabled(false), rect, repaint());
        step(&mut win, &mut painter, UiEvent::mouse_down(Vec2::new(53.0, 10.0)));
        let drag = UiEvent::mouse_drag(Vec2::new(73.0, 10.0), Vec2::new(20.0, 0.0));
        step(&mut win, &mut painter, drag);
        let root = win.root();
        assert_eq!(win.tree().get::<SplitView>(root).unwrap().extents(), (50.0, 50.0));
    }
}
