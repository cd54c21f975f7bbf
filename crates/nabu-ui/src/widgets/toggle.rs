use nabu_engine::coords::Rect;
use nabu_engine::scene::Content;

use crate::context::DrawCx;
use crate::declare::Decl;
use crate::effects::Effects;
use crate::node::NodeCx;
use crate::widget::Widget;

/// A checkbox-style boolean with an optional label.
///
/// # Example
/// ```rust,ignore
/// Toggle::new(true)
///     .label("Cast shadows")
///     .on_change(|_, on| log::info!("shadows: {on}"))
/// ```
pub struct Toggle {
    decl: Decl,
    value: bool,
    label: Content,
    on_change: Option<Box<dyn FnMut(&mut Effects, bool)>>,
}

impl Toggle {
    pub fn new(value: bool) -> Self {
        Self { decl: Decl::default(), value, label: Content::none(), on_change: None }
    }

    pub fn label(mut self, v: impl Into<Content>) -> Self {
        self.label = v.into();
        self
    }

    pub fn on_change(mut self, f: impl FnMut(&mut Effects, bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn value(&self) -> bool {
        self.value
    }

    pub fn set_value(&mut self, v: bool) {
        self.value = v;
    }
}

impl Widget for Toggle {
    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn draw(&mut self, node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
        let v = cx.host.toggle(rect, self.value, &self.label);
        if !node.enabled || v == self.value {
            return;
        }
        if let Some(f) = self.on_change.as_mut() {
            f(&mut *cx.effects, v);
        }
        self.value = v;
    }
}
