//! The editor host the widget tree draws through.
//!
//! A host exposes immediate-mode primitives: it draws a control for the
//! current event and returns the value the user left in it. Widgets diff
//! that value against their own state to fire change callbacks.

use nabu_engine::coords::{Rect, Vec2, Vec3};
use nabu_engine::scene::{AssetFilter, AssetRef, Content, CursorIcon, ScaleMode, TextureId};

/// Host primitives available while drawing.
///
/// Widgets that push a clip or open a scroll region pop/close it before
/// returning.
pub trait Host {
    /// Ask for another frame soon.
    fn request_repaint(&mut self);

    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);

    /// Opens a scrolling region showing `content` (size, from the region's
    /// origin) through `viewport`, currently scrolled to `offset`.
    ///
    /// Returns the offset to draw with, which the host may have changed
    /// (scrollbar drags). Children draw shifted by `-offset` and clipped to
    /// `viewport` until [`Host::end_scroll`].
    fn begin_scroll(&mut self, viewport: Rect, offset: Vec2, content: Vec2) -> Vec2;
    fn end_scroll(&mut self);

    fn label(&mut self, rect: Rect, text: &str);
    fn box_content(&mut self, rect: Rect, content: &Content);
    fn button_frame(&mut self, rect: Rect, pressed: bool, enabled: bool);
    fn texture(&mut self, rect: Rect, texture: TextureId, mode: ScaleMode);

    fn text_field(&mut self, rect: Rect, value: &str) -> String;
    fn text_area(&mut self, rect: Rect, value: &str) -> String;
    fn number_field(&mut self, rect: Rect, value: f64) -> f64;
    fn toggle(&mut self, rect: Rect, value: bool, label: &Content) -> bool;
    fn popup(&mut self, rect: Rect, selected: usize, options: &[String]) -> usize;
    fn toolbar(&mut self, rect: Rect, selected: usize, items: &[Content]) -> usize;
    fn object_field(
        &mut self,
        rect: Rect,
        current: Option<&AssetRef>,
        filter: &AssetFilter,
    ) -> Option<AssetRef>;

    /// Shows `cursor` while the pointer is over `rect`.
    fn cursor_rect(&mut self, rect: Rect, cursor: CursorIcon);

    /// Allocates an offscreen 3D preview; `None` when the host has no
    /// renderer available.
    fn create_preview(&mut self) -> Option<Box<dyn PreviewSurface>>;
}

// ── Preview ───────────────────────────────────────────────────────────────

/// Host-owned offscreen renderer backing a preview viewport.
///
/// Dropping the surface releases it.
pub trait PreviewSurface {
    /// Renders `models` seen from `camera` at `size` pixels.
    fn render(
        &mut self,
        camera: &CameraPose,
        size: Vec2,
        models: &[PreviewModel],
    ) -> Option<TextureId>;
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MeshId(pub u64);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MaterialId(pub u64);

/// One mesh drawn with one material.
///
/// Models missing either handle are skipped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PreviewModel {
    pub mesh: Option<MeshId>,
    pub material: Option<MaterialId>,
    pub position: Vec3,
    /// Quaternion `[x, y, z, w]`.
    pub rotation: [f32; 4],
}

impl PreviewModel {
    pub fn new(mesh: MeshId, material: MaterialId) -> Self {
        Self {
            mesh: Some(mesh),
            material: Some(material),
            position: Vec3::zero(),
            rotation: [0.0, 0.0, 0.0, 1.0],
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.mesh.is_some() && self.material.is_some()
    }
}

/// Where a preview renders from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub near: f32,
    pub far: f32,
}
