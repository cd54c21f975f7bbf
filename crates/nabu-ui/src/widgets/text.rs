use nabu_engine::coords::Rect;

use crate::context::DrawCx;
use crate::declare::Decl;
use crate::node::NodeCx;
use crate::widget::Widget;

/// A read-only label.
///
/// With [`Text::bind`] the text is pulled from the closure every draw.
///
/// # Example
/// ```rust,ignore
/// let counter = Rc::new(Cell::new(0));
/// let c = counter.clone();
/// Text::new("").bind(move || format!("clicked {} times", c.get()))
/// ```
pub struct Text {
    decl: Decl,
    text: String,
    bind: Option<Box<dyn FnMut() -> String>>,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { decl: Decl::default(), text: text.into(), bind: None }
    }

    pub fn bind(mut self, f: impl FnMut() -> String + 'static) -> Self {
        self.bind = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Text {
    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn draw(&mut self, _node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
        if let Some(bind) = self.bind.as_mut() {
            self.text = bind();
        }
        cx.host.label(rect, &self.text);
    }
}
