use nabu_engine::coords::Rect;

use crate::context::DrawCx;
use crate::declare::Decl;
use crate::effects::Effects;
use crate::node::NodeCx;
use crate::widget::Widget;

const EMPTY: &str = "Empty";

/// A drop-down choosing one of a list of options.
///
/// An empty option list shows a single `"Empty"` entry. With [`Popup::bind`]
/// the options are pulled every draw; a binding returning `None` resets the
/// popup to `["Empty"]` and index 0.
pub struct Popup {
    decl: Decl,
    options: Vec<String>,
    selected: usize,
    on_change: Option<Box<dyn FnMut(&mut Effects, usize)>>,
    bind: Option<Box<dyn FnMut() -> Option<Vec<String>>>>,
}

fn empty_options() -> Vec<String> {
    vec![EMPTY.to_string()]
}

impl Popup {
    pub fn new() -> Self {
        Self {
            decl: Decl::default(),
            options: empty_options(),
            selected: 0,
            on_change: None,
            bind: None,
        }
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_options(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn selected(mut self, i: usize) -> Self {
        self.selected = i;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(&mut Effects, usize) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn bind(mut self, f: impl FnMut() -> Option<Vec<String>> + 'static) -> Self {
        self.bind = Some(Box::new(f));
        self
    }

    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = if options.is_empty() { empty_options() } else { options };
    }

    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, i: usize) {
        self.selected = i;
    }

    /// The option at `i`.
    pub fn option(&self, i: usize) -> Option<&str> {
        self.options.get(i).map(String::as_str)
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

impl Default for Popup {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Popup {
    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn draw(&mut self, node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
        if let Some(bind) = self.bind.as_mut() {
            match bind() {
                Some(options) => self.set_options(options),
                None => {
                    self.options = empty_options();
                    self.selected = 0;
                }
            }
        }

        let i = cx.host.popup(rect, self.selected, &self.options);
        if !node.enabled || i == self.selected {
            return;
        }
        if let Some(f) = self.on_change.as_mut() {
            f(&mut *cx.effects, i);
        }
        self.selected = i;
    }
}
