//! Headless helpers shared by the unit tests.

use nabu_engine::coords::{Rect, Vec2};

use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Element;
use crate::window::{FrameOutput, UiWindow};

pub const SCREEN: Rect = Rect::new(0.0, 0.0, 200.0, 100.0);

pub fn repaint() -> UiEvent {
    UiEvent::repaint(Vec2::zero())
}

/// Builds a window around `root` and draws one frame into `rect`.
pub fn draw(root: impl Into<Element>, rect: Rect, event: UiEvent) -> (UiWindow, Painter) {
    draw_with(Painter::new(), root, rect, event)
}

/// [`draw`] with a prepared painter (scripted responses, no previews, …).
pub fn draw_with(
    mut painter: Painter,
    root: impl Into<Element>,
    rect: Rect,
    event: UiEvent,
) -> (UiWindow, Painter) {
    let mut win = UiWindow::new(root).expect("test tree");
    win.construct(&mut painter);
    win.frame(&mut painter, rect, event);
    (win, painter)
}

/// Draws the next frame into the rect of the previous one.
pub fn step(win: &mut UiWindow, painter: &mut Painter, event: UiEvent) -> FrameOutput {
    painter.begin_frame();
    let rect = win.last_rect().unwrap_or(SCREEN);
    win.frame(painter, rect, event)
}
