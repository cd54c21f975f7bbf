//! Concrete widget kinds.

// Layout
pub mod linear;
pub mod panel;
pub mod split;
pub mod stack;
pub mod switch_tab;

// Controls
pub mod box_view;
pub mod button;
pub mod object_field;
pub mod popup;
pub mod preview;
pub mod property_editor;
pub mod spacer;
pub mod text;
pub mod text_input;
pub mod texture;
pub mod toggle;
pub mod toolbar;
