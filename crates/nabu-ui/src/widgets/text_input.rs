use nabu_engine::coords::Rect;

use crate::context::DrawCx;
use crate::declare::Decl;
use crate::effects::Effects;
use crate::node::NodeCx;
use crate::widget::Widget;

/// Editable text: a single-line field, or a text area when multiline.
pub struct TextInput {
    decl: Decl,
    value: String,
    multiline: bool,
    on_change: Option<Box<dyn FnMut(&mut Effects, &str)>>,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self { decl: Decl::default(), value: value.into(), multiline: false, on_change: None }
    }

    pub fn multiline(mut self, v: bool) -> Self {
        self.multiline = v;
        self
    }

    /// Called with the new text whenever the user edits it.
    pub fn on_change(mut self, f: impl FnMut(&mut Effects, &str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, v: impl Into<String>) {
        self.value = v.into();
    }
}

impl Widget for TextInput {
    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn draw(&mut self, node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
        let edited = if self.multiline {
            cx.host.text_area(rect, &self.value)
        } else {
            cx.host.text_field(rect, &self.value)
        };
        if !node.enabled || edited == self.value {
            return;
        }
        if let Some(f) = self.on_change.as_mut() {
            f(&mut *cx.effects, &edited);
        }
        self.value = edited;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use nabu_engine::scene::DrawCmd;

    use super::*;
    use crate::declare::Configure;
    use crate::painter::Painter;
    use crate::testing::{draw_with, repaint, SCREEN};

    #[test]
    fn edit_fires_callback_and_commits() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let mut painter = Painter::new();
        painter.script_text("world");
        let (win, _) = draw_with(
            painter,
            TextInput::new("hello").on_change(move |_, v| s.borrow_mut().push(v.to_string())),
            SCREEN,
            repaint(),
        );
        assert_eq!(*seen.borrow(), ["world"]);
        assert_eq!(win.tree().get::<TextInput>(win.root()).unwrap().value(), "world");
    }

    #[test]
    fn unchanged_value_is_silent() {
        let fired = Rc::new(RefCell::new(0));
        let f = fired.clone();
        let (_, painter) = draw_with(
            Painter::new(),
            TextInput::new("same").multiline(true).on_change(move |_, _| *f.borrow_mut() += 1),
            SCREEN,
            repaint(),
        );
        assert_eq!(*fired.borrow(), 0);
        let first = painter.commands().next();
        assert!(matches!(first, Some(DrawCmd::TextField { multiline: true, .. })));
    }

    #[test]
    fn disabled_input_ignores_edits() {
        let mut painter = Painter::new();
        painter.script_text("changed");
        let (win, _) = draw_with(painter, TextInput::new("kept").enabled(false), SCREEN, repaint());
        assert_eq!(win.tree().get::<TextInput>(win.root()).unwrap().value(), "kept");
    }
}
