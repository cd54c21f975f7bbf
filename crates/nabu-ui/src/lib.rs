//! Nabu UI — retained editor widgets on top of `nabu-engine`.
//!
//! Widgets live in an arena ([`UiTree`](tree::UiTree)) and are walked every
//! frame: each composite computes its children's rects and draws them, each
//! control draws itself through the [`Host`](host::Host) and reacts to the
//! frame's event.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use nabu_ui::prelude::*;
//!
//! let mut window = UiWindow::new(
//!     SplitView::horizontal()
//!         .child(LinearLayout::vertical().enable_scroll(true).children(rows))
//!         .child(Preview::new().models(models)),
//! )?;
//! window.construct(&mut host);
//!
//! // For every platform event:
//! window.handle_input(&mut host, viewport, &event);
//!
//! // On close:
//! window.disable(&mut host);
//! ```
//!
//! # Reaching the tree from callbacks
//!
//! A widget is out of the tree while it draws, so callbacks receive
//! [`Effects`](effects::Effects) and schedule edits there. The window applies
//! them right after the draw:
//!
//! ```rust,ignore
//! Button::new().child(Text::new("Materials")).on_click(move |fx| fx.activate_tab(tabs, 1))
//! ```

pub mod bounds;
pub mod context;
pub mod control;
pub mod declare;
pub mod effects;
pub mod error;
pub mod event;
pub mod host;
pub mod lookup;
pub mod metrics;
pub mod node;
pub mod painter;
pub mod tree;
pub mod widget;
pub mod widgets;
pub mod window;

#[cfg(test)]
mod testing;

pub use error::TreeError;
pub use metrics::{Metrics, WindowConfig};
pub use window::{FrameOutput, UiWindow};

/// Everything needed to build and drive a widget tree.
pub mod prelude {
    pub use crate::bounds::Bounds;
    pub use crate::context::DrawCx;
    pub use crate::control::{ControlId, HotControl, Interaction, KeyTracker};
    pub use crate::declare::{Compose, Configure, Decl};
    pub use crate::effects::Effects;
    pub use crate::error::TreeError;
    pub use crate::event::{EventKind, EventTranslator, UiEvent};
    pub use crate::host::{CameraPose, Host, MaterialId, MeshId, PreviewModel, PreviewSurface};
    pub use crate::metrics::{Metrics, WindowConfig};
    pub use crate::node::{NodeCx, NodeId, Shape, Slot};
    pub use crate::painter::Painter;
    pub use crate::tree::UiTree;
    pub use crate::widget::{Element, Variant, Widget, WidgetKind};
    pub use crate::widgets::{
        box_view::BoxView,
        button::Button,
        linear::LinearLayout,
        object_field::ObjectField,
        panel::Panel,
        popup::Popup,
        preview::{OrbitCamera, Preview},
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
    pub use crate::window::{FrameOutput, UiWindow};

    pub use nabu_engine::coords::{Axis, Rect, Vec2, Vec3};
    pub use nabu_engine::scene::{AssetFilter, AssetRef, Content, CursorIcon, ScaleMode, TextureId};
}
