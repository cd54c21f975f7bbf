//! Vertical and horizontal linear layouts.
//!
//! Children are stacked along the layout's axis. A child with a fixed size
//! takes its declared extent; a child with `relative_size` treats its
//! declared extent as a weight and shares whatever space the fixed children
//! leave over. Every child spans the full cross extent.
//!
//! ```rust,ignore
//! LinearLayout::vertical()
//!     .child(Toolbar::new(["Mesh", "Material"]).height(20.0))
//!     .child(Preview::new().relative_size(true).height(1.0))   // takes the rest
//!     .child(Text::new("status").height(16.0))
//! ```

use nabu_engine::coords::{Axis, Rect, Vec2};

use crate::context::DrawCx;
use crate::declare::{Compose, Decl};
use crate::event::EventKind;
use crate::node::{NodeCx, Shape};
use crate::widget::Widget;

// ── planning ──────────────────────────────────────────────────────────────

/// What a linear layout needs to know about one child.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearChild {
    /// Declared main-axis extent; a weight when `relative`.
    pub extent: f32,
    pub relative: bool,
}

/// How the children are shown through the layout's rect.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Region {
    /// Clipped to the rect.
    Clip,
    /// Scrolled; `content` is the virtual content size.
    Scroll { content: Vec2 },
}

/// Result of [`plan`]: where every child goes.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPlan {
    pub region: Region,
    /// Sum of fixed children's extents.
    pub fixed: f32,
    /// Main-axis extent per unit of weight.
    pub unit: f32,
    /// Cross extent given to every child.
    pub cross: f32,
    /// `(offset, extent)` along the main axis, from the content origin.
    pub slots: Vec<(f32, f32)>,
}

/// Lays `children` out along `axis` inside `avail`.
///
/// * `adaptive`: the layout takes the fixed children's total as its own
///   extent; relative children collapse to zero.
/// * `scroll` with overflowing fixed children: the cross extent loses
///   `allowance` for the scrollbar and relative children share one extra
///   viewport's worth of content.
/// * otherwise relative children share the leftover, or get nothing when
///   there is none.
///
/// Adaptive wins when both flags are set.
pub fn plan(
    axis: Axis,
    children: &[LinearChild],
    avail: Vec2,
    scroll: bool,
    adaptive: bool,
    allowance: f32,
) -> LinearPlan {
    let main = axis.main(avail);
    let mut cross = axis.cross(avail);

    let fixed: f32 = children.iter().filter(|c| !c.relative).map(|c| c.extent).sum();
    let weights: f32 = children.iter().filter(|c| c.relative).map(|c| c.extent).sum();

    let (region, unit) = if adaptive {
        (Region::Clip, 0.0)
    } else if scroll && fixed >= main {
        cross = (cross - allowance).max(0.0);
        let (unit, content_main) =
            if weights > 0.0 { (main / weights, fixed + main) } else { (0.0, fixed) };
        (Region::Scroll { content: axis.pack(content_main, cross) }, unit)
    } else {
        let unit = if weights > 0.0 && main > fixed { (main - fixed) / weights } else { 0.0 };
        (Region::Clip, unit)
    };

    let mut cursor = 0.0;
    let slots = children
        .iter()
        .map(|c| {
            let extent = if c.relative { c.extent * unit } else { c.extent };
            let slot = (cursor, extent);
            cursor += extent;
            slot
        })
        .collect();

    LinearPlan { region, fixed, unit, cross, slots }
}

/// Clamps a scroll offset so the viewport stays over the content.
fn clamp_scroll(axis: Axis, offset: Vec2, content: Vec2, viewport: Vec2) -> Vec2 {
    let max = (axis.main(content) - axis.main(viewport)).max(0.0);
    axis.pack(axis.main(offset).clamp(0.0, max), 0.0)
}

// ── LinearLayout ──────────────────────────────────────────────────────────

pub struct LinearLayout {
    decl: Decl,
    axis: Axis,
    scroll: bool,
    adaptive: bool,
    scroll_pos: Vec2,
}

impl LinearLayout {
    pub fn new(axis: Axis) -> Self {
        Self {
            decl: Decl::default(),
            axis,
            scroll: false,
            adaptive: false,
            scroll_pos: Vec2::zero(),
        }
    }

    /// Children top to bottom.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Children left to right.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Scroll instead of clipping when the fixed children overflow.
    pub fn enable_scroll(mut self, v: bool) -> Self {
        self.scroll = v;
        self
    }

    /// Size the layout to its fixed children along its axis.
    pub fn adaptive(mut self, v: bool) -> Self {
        self.adaptive = v;
        self
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Current scroll offset; kept across frames.
    #[inline]
    pub fn scroll_pos(&self) -> Vec2 {
        self.scroll_pos
    }

    pub fn set_scroll_pos(&mut self, pos: Vec2) {
        self.scroll_pos = pos;
    }
}

impl Compose for LinearLayout {}

impl Widget for LinearLayout {
    const SHAPE: Shape = Shape::Multi;

    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn draw(&mut self, node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
        let axis = self.axis;
        let ids = cx.children(node.id);
        let specs: Vec<LinearChild> = ids
            .iter()
            .map(|&c| {
                let b = cx.bounds_of(c);
                LinearChild { extent: b.extent(axis), relative: b.relative_size }
            })
            .collect();
        let allowance = cx.metrics.scrollbar_allowance;
        let plan = plan(axis, &specs, rect.size, self.scroll, self.adaptive, allowance);

        if self.adaptive {
            if let Some(b) = cx.tree.bounds_mut(node.id) {
                b.set_extent(axis, plan.fixed);
            }
        }

        let origin = match plan.region {
            Region::Clip => {
                cx.host.push_clip(rect);
                rect.origin
            }
            Region::Scroll { content } => {
                self.scroll_pos = clamp_scroll(axis, self.scroll_pos, content, rect.size);
                self.scroll_pos = cx.host.begin_scroll(rect, self.scroll_pos, content);
                rect.origin - self.scroll_pos
            }
        };

        for (&id, &(offset, extent)) in ids.iter().zip(&plan.slots) {
            let main = axis.main(origin) + offset;
            let r = Rect::along(axis, main, extent, axis.cross(origin), plan.cross);
            cx.draw_child(id, r);
        }

        match plan.region {
            Region::Clip => cx.host.pop_clip(),
            Region::Scroll { content } => {
                // Nested scroll layouts have drawn already and get the wheel first.
                let ev = cx.event;
                if ev.kind == EventKind::ScrollWheel && rect.contains(ev.mouse_pos) {
                    let mut d = axis.main(ev.delta);
                    if d == 0.0 {
                        d = ev.delta.y;
                    }
                    let wanted = self.scroll_pos + axis.pack(d, 0.0);
                    self.scroll_pos = clamp_scroll(axis, wanted, content, rect.size);
                    cx.event.consume();
                    cx.request_repaint();
                }
                cx.host.end_scroll();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use nabu_engine::scene::DrawCmd;

    use super::*;
    use crate::declare::Configure;
    use crate::event::UiEvent;
    use crate::testing::{draw, repaint, step};
    use crate::widgets::spacer::Spacer;
    use crate::widgets::text::Text;
    use crate::window::UiWindow;

    fn fixed(extent: f32) -> LinearChild {
        LinearChild { extent, relative: false }
    }

    fn weight(extent: f32) -> LinearChild {
        LinearChild { extent, relative: true }
    }

    fn label_rects(painter: &crate::painter::Painter) -> Vec<Rect> {
        painter
            .commands()
            .filter(|c| matches!(c, DrawCmd::Label { .. }))
            .map(DrawCmd::rect)
            .collect()
    }

    // ── plan ──────────────────────────────────────────────────────────────

    #[test]
    fn fixed_children_stack_from_zero() {
        let kids = [fixed(10.0), fixed(20.0), fixed(30.0)];
        let p = plan(Axis::Vertical, &kids, Vec2::new(80.0, 100.0), false, false, 15.0);
        assert_eq!(p.slots, vec![(0.0, 10.0), (10.0, 20.0), (30.0, 30.0)]);
        assert_eq!(p.cross, 80.0);
        assert_eq!(p.region, Region::Clip);
    }

    #[test]
    fn relative_children_share_leftover_by_weight() {
        let kids = [fixed(20.0), weight(1.0), weight(3.0)];
        let p = plan(Axis::Horizontal, &kids, Vec2::new(100.0, 30.0), false, false, 15.0);
        assert_eq!(p.slots, vec![(0.0, 20.0), (20.0, 20.0), (40.0, 60.0)]);
        let total: f32 = p.slots.iter().map(|s| s.1).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn no_leftover_gives_relative_children_nothing() {
        let kids = [fixed(120.0), weight(1.0)];
        let p = plan(Axis::Vertical, &kids, Vec2::new(50.0, 100.0), false, false, 15.0);
        assert_eq!(p.slots[1], (120.0, 0.0));
        assert_eq!(p.unit, 0.0);
    }

    #[test]
    fn zero_weights_give_zero_unit() {
        let kids = [fixed(10.0), weight(0.0)];
        let p = plan(Axis::Vertical, &kids, Vec2::new(50.0, 100.0), false, false, 15.0);
        assert_eq!(p.unit, 0.0);
        assert_eq!(p.slots[1].1, 0.0);
    }

    #[test]
    fn overflow_with_scroll_builds_virtual_content() {
        let kids = [fixed(80.0), fixed(40.0), weight(2.0)];
        let p = plan(Axis::Vertical, &kids, Vec2::new(60.0, 100.0), true, false, 15.0);
        assert_eq!(p.region, Region::Scroll { content: Vec2::new(45.0, 220.0) });
        assert_eq!(p.unit, 50.0);
        assert_eq!(p.cross, 45.0);
        assert_eq!(p.slots[2], (120.0, 100.0));

        let p = plan(Axis::Vertical, &[fixed(150.0)], Vec2::new(60.0, 100.0), true, false, 15.0);
        assert_eq!(p.region, Region::Scroll { content: Vec2::new(45.0, 150.0) });
    }

    #[test]
    fn scroll_without_overflow_clips() {
        let p = plan(Axis::Vertical, &[fixed(50.0)], Vec2::new(60.0, 100.0), true, false, 15.0);
        assert_eq!(p.region, Region::Clip);
        assert_eq!(p.cross, 60.0);
    }

    #[test]
    fn adaptive_wins_over_scroll() {
        let kids = [fixed(150.0), weight(1.0)];
        let p = plan(Axis::Vertical, &kids, Vec2::new(60.0, 100.0), true, true, 15.0);
        assert_eq!(p.region, Region::Clip);
        assert_eq!(p.fixed, 150.0);
        assert_eq!(p.slots[1].1, 0.0);
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn vertical_children_are_offset_from_rect_origin() {
        let rect = Rect::new(5.0, 7.0, 80.0, 100.0);
        let (_, painter) = draw(
            LinearLayout::vertical()
                .child(Text::new("a").height(10.0))
                .child(Text::new("b").height(20.0))
                .child(Text::new("c").height(30.0)),
            rect,
            repaint(),
        );
        assert_eq!(
            label_rects(&painter),
            vec![
                Rect::new(5.0, 7.0, 80.0, 10.0),
                Rect::new(5.0, 17.0, 80.0, 20.0),
                Rect::new(5.0, 37.0, 80.0, 30.0),
            ]
        );
        assert_eq!(painter.draw_list().clip_depth(), 0);
    }

    #[test]
    fn horizontal_relative_child_fills_rest() {
        let (_, painter) = draw(
            LinearLayout::horizontal()
                .child(Text::new("fixed").width(30.0))
                .child(Text::new("rest").relative_size(true).width(1.0)),
            Rect::new(0.0, 0.0, 100.0, 20.0),
            repaint(),
        );
        assert_eq!(label_rects(&painter)[1], Rect::new(30.0, 0.0, 70.0, 20.0));
    }

    #[test]
    fn adaptive_layout_resizes_its_node() {
        let (win, _) = draw(
            LinearLayout::vertical()
                .adaptive(true)
                .child(Spacer::new().height(12.0))
                .child(Spacer::new().height(8.0)),
            Rect::new(0.0, 0.0, 50.0, 300.0),
            repaint(),
        );
        assert_eq!(win.tree().bounds(win.root()).unwrap().size().y, 20.0);
    }

    #[test]
    fn scrolling_layout_offsets_children_and_takes_wheel() {
        let rect = Rect::new(0.0, 0.0, 60.0, 50.0);
        let (mut win, mut painter) = draw(
            LinearLayout::vertical()
                .enable_scroll(true)
                .children((0..4).map(|i| Text::new(format!("{i}")).height(40.0))),
            rect,
            repaint(),
        );
        assert!(matches!(
            painter.commands().next(),
            Some(DrawCmd::ScrollRegion { content, .. }) if *content == Vec2::new(45.0, 160.0)
        ));

        let at = Vec2::new(10.0, 10.0);
        let out = step(&mut win, &mut painter, UiEvent::scroll(at, Vec2::new(0.0, 30.0)));
        assert!(out.event_used);
        let root = win.root();
        let scroll_pos =
            |win: &UiWindow| win.tree().get::<LinearLayout>(root).unwrap().scroll_pos();
        assert_eq!(scroll_pos(&win), Vec2::new(0.0, 30.0));

        step(&mut win, &mut painter, repaint());
        assert_eq!(label_rects(&painter)[1], Rect::new(0.0, 10.0, 45.0, 40.0));

        step(&mut win, &mut painter, UiEvent::scroll(at, Vec2::new(0.0, 1000.0)));
        assert_eq!(scroll_pos(&win), Vec2::new(0.0, 110.0));
    }
}
