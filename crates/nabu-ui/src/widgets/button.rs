use nabu_engine::coords::Rect;

use crate::context::DrawCx;
use crate::declare::{Compose, Decl};
use crate::effects::Effects;
use crate::node::{NodeCx, Shape};
use crate::widget::Widget;

/// A clickable frame around one child.
///
/// The button holds the pointer from press to release; the click fires when
/// the release lands inside it. Disabled buttons draw pressed and never fire.
///
/// # Example
/// ```rust,ignore
/// Button::new()
///     .height(24.0)
///     .child(Text::new("Rebuild"))
///     .on_click(move |fx| fx.activate_tab(tabs, 1))
/// ```
pub struct Button {
    decl: Decl,
    on_click: Option<Box<dyn FnMut(&mut Effects)>>,
}

impl Button {
    pub fn new() -> Self {
        Self { decl: Decl::default(), on_click: None }
    }

    /// Callback invoked when the button is clicked.
    pub fn on_click(mut self, f: impl FnMut(&mut Effects) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl Compose for Button {}

impl Widget for Button {
    const SHAPE: Shape = Shape::Single;

    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn draw(&mut self, node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
        let pressed = !node.enabled || cx.hot.is_captured(node.control);
        cx.host.button_frame(rect, pressed, node.enabled);

        for child in cx.children(node.id) {
            cx.draw_child(child, rect);
        }

        if cx.interact(node, rect).clicked {
            log::trace!("button {:?} clicked", node.id);
            if let Some(f) = self.on_click.as_mut() {
                f(&mut *cx.effects);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use nabu_engine::coords::Vec2;
    use nabu_engine::scene::DrawCmd;

    use super::*;
    use crate::declare::Configure;
    use crate::event::UiEvent;
    use crate::testing::{draw, repaint, step, SCREEN};
    use crate::widgets::text::Text;

    fn counting_button(enabled: bool) -> (Button, Rc<Cell<u32>>) {
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        let b = Button::new()
            .enabled(enabled)
            .child(Text::new("ok"))
            .on_click(move |_| c.set(c.get() + 1));
        (b, clicks)
    }

    #[test]
    fn draws_frame_then_child() {
        let (button, _) = counting_button(true);
        let (_, painter) = draw(button, SCREEN, repaint());
        let cmds: Vec<_> = painter.commands().collect();
        assert!(matches!(cmds[0], DrawCmd::ButtonFrame { pressed: false, enabled: true, .. }));
        assert!(matches!(cmds[1], DrawCmd::Label { .. }));
    }

    #[test]
    fn press_release_inside_clicks_once() {
        let (button, clicks) = counting_button(true);
        let (mut win, mut painter) = draw(button, SCREEN, repaint());
        let inside = Vec2::new(10.0, 10.0);

        step(&mut win, &mut painter, UiEvent::mouse_down(inside));
        step(&mut win, &mut painter, repaint());
        let first = painter.commands().next();
        assert!(matches!(first, Some(DrawCmd::ButtonFrame { pressed: true, .. })));
        step(&mut win, &mut painter, UiEvent::mouse_up(inside));
        assert_eq!(clicks.get(), 1);
        assert_eq!(win.hot().active(), None);
    }

    #[test]
    fn release_outside_does_not_click() {
        let (button, clicks) = counting_button(true);
        let (mut win, mut painter) = draw(button, SCREEN, repaint());

        step(&mut win, &mut painter, UiEvent::mouse_down(Vec2::new(10.0, 10.0)));
        step(&mut win, &mut painter, UiEvent::mouse_up(Vec2::new(500.0, 500.0)));
        assert_eq!(clicks.get(), 0);
        assert_eq!(win.hot().active(), None);
    }

    #[test]
    fn disabled_button_draws_pressed_and_never_fires() {
        let (button, clicks) = counting_button(false);
        let (mut win, mut painter) = draw(button, SCREEN, repaint());
        assert!(matches!(
            painter.commands().next(),
            Some(DrawCmd::ButtonFrame { pressed: true, enabled: false, .. })
        ));

        step(&mut win, &mut painter, UiEvent::mouse_down(Vec2::new(10.0, 10.0)));
        step(&mut win, &mut painter, UiEvent::mouse_up(Vec2::new(10.0, 10.0)));
        assert_eq!(clicks.get(), 0);
    }
}
