use nabu_engine::coords::{Rect, Vec2};

use crate::context::DrawCx;
use crate::declare::Decl;
use crate::host::Host;
use crate::metrics::Metrics;
use crate::node::{NodeCx, Shape};
use crate::widgets::{
    box_view::BoxView,
    button::Button,
    linear::LinearLayout,
    object_field::ObjectField,
    panel::Panel,
    popup::Popup,
    preview::Preview,
    property_editor::PropertyEditor,
    spacer::Spacer,
    split::SplitView,
    stack::Stack,
    switch_tab::SwitchTab,
    text::Text,
    text_input::TextInput,
    texture::Texture,
    toggle::Toggle,
    toolbar::Toolbar,
};

// ── Widget trait ──────────────────────────────────────────────────────────

/// The trait every concrete widget implements.
///
/// Widgets never own their children; composites reach them through
/// [`DrawCx::draw_child`] using the ids stored on their node.
///
/// ```rust,ignore
/// impl Widget for Spacer {
///     fn decl_mut(&mut self) -> &mut Decl { &mut self.decl }
///     fn draw(&mut self, _node: NodeCx, _cx: &mut DrawCx<'_>, _rect: Rect) {}
/// }
/// ```
pub trait Widget: Variant + Into<Element> {
    const SHAPE: Shape = Shape::Leaf;

    /// Declaration carried until the widget is inserted into a tree.
    fn decl_mut(&mut self) -> &mut Decl;

    /// Draw into `rect` (window coordinates) and react to `cx.event`.
    fn draw(&mut self, node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect);

    /// Called once per node when it is constructed.
    fn on_construct(&mut self, _node: NodeCx, _host: &mut dyn Host) {}

    /// Called when the window tears the tree down.
    fn on_disable(&mut self, _node: NodeCx, _host: &mut dyn Host) {}

    /// Size parents should lay this widget out with, given the declared one.
    fn layout_size(&self, declared: Vec2, _metrics: &Metrics) -> Vec2 {
        declared
    }
}

/// Typed access into [`Element`]; implemented for every widget kind.
pub trait Variant: Sized {
    const KIND: WidgetKind;

    fn from_element(el: &Element) -> Option<&Self>;
    fn from_element_mut(el: &mut Element) -> Option<&mut Self>;
}

// ── Element ───────────────────────────────────────────────────────────────

macro_rules! elements {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// Any widget; the closed set of kinds a tree can hold.
        pub enum Element {
            $($variant($ty)),*
        }

        /// Discriminant of [`Element`], used to filter tag lookups.
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        pub enum WidgetKind {
            $($variant),*
        }

        impl Element {
            pub fn kind(&self) -> WidgetKind {
                match self {
                    $(Element::$variant(_) => WidgetKind::$variant),*
                }
            }

            pub fn shape(&self) -> Shape {
                match self {
                    $(Element::$variant(_) => <$ty as Widget>::SHAPE),*
                }
            }

            pub(crate) fn decl_mut(&mut self) -> &mut Decl {
                match self {
                    $(Element::$variant(w) => w.decl_mut()),*
                }
            }

            pub(crate) fn draw(&mut self, node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
                match self {
                    $(Element::$variant(w) => w.draw(node, cx, rect)),*
                }
            }

            pub(crate) fn on_construct(&mut self, node: NodeCx, host: &mut dyn Host) {
                match self {
                    $(Element::$variant(w) => w.on_construct(node, host)),*
                }
            }

            pub(crate) fn on_disable(&mut self, node: NodeCx, host: &mut dyn Host) {
                match self {
                    $(Element::$variant(w) => w.on_disable(node, host)),*
                }
            }

            pub(crate) fn layout_size(&self, declared: Vec2, metrics: &Metrics) -> Vec2 {
                match self {
                    $(Element::$variant(w) => w.layout_size(declared, metrics)),*
                }
            }
        }

        $(
            impl From<$ty> for Element {
                fn from(w: $ty) -> Self {
                    Element::$variant(w)
                }
            }

            impl Variant for $ty {
                const KIND: WidgetKind = WidgetKind::$variant;

                fn from_element(el: &Element) -> Option<&Self> {
                    match el {
                        Element::$variant(w) => Some(w),
                        _ => None,
                    }
                }

                fn from_element_mut(el: &mut Element) -> Option<&mut Self> {
                    match el {
                        Element::$variant(w) => Some(w),
                        _ => None,
                    }
                }
            }
        )*
    };
}

elements! {
    Spacer(Spacer),
    Stack(Stack),
    Panel(Panel),
    SwitchTab(SwitchTab),
    LinearLayout(LinearLayout),
    SplitView(SplitView),
    Text(Text),
    Button(Button),
    TextInput(TextInput),
    Toggle(Toggle),
    BoxView(BoxView),
    Texture(Texture),
    Popup(Popup),
    Toolbar(Toolbar),
    ObjectField(ObjectField),
    Preview(Preview),
    PropertyEditor(PropertyEditor),
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Element::{:?}", self.kind())
    }
}
