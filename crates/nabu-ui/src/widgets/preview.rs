use std::f32::consts::{FRAC_PI_2, PI, TAU};

use nabu_engine::coords::{Rect, Vec3};
use nabu_engine::input::Key;
use nabu_engine::scene::ScaleMode;

use crate::context::DrawCx;
use crate::control::KeyTracker;
use crate::declare::Decl;
use crate::host::{CameraPose, Host, PreviewModel, PreviewSurface};
use crate::node::NodeCx;
use crate::widget::Widget;

pub const NEAR_CLIP: f32 = 0.1;
pub const FAR_CLIP: f32 = 20.0;
const MIN_DISTANCE: f32 = 0.1;
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.025;

// ── OrbitCamera ───────────────────────────────────────────────────────────

/// Camera orbiting the origin.
///
/// Drag deltas arrive in pixels: angles move by `delta / 90` radians and
/// the distance by `delta / 10`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self { yaw: 0.0, pitch: 0.0, distance: 5.0 }
    }
}

impl OrbitCamera {
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Moves the camera away (positive) or closer; never nearer than 0.1.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance + delta / 10.0).max(MIN_DISTANCE);
    }

    /// Tilts the camera; kept just short of straight up or down.
    pub fn add_pitch(&mut self, delta: f32) {
        self.pitch = (self.pitch - delta / 90.0).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Turns the camera around the vertical axis; wraps into (-π, π].
    pub fn add_yaw(&mut self, delta: f32) {
        let yaw = (self.yaw + delta / 90.0 + PI).rem_euclid(TAU) - PI;
        self.yaw = if yaw <= -PI { yaw + TAU } else { yaw };
    }

    /// World position looking at the origin.
    pub fn position(&self) -> Vec3 {
        let h = -self.distance * self.pitch.sin();
        let m = -self.distance * self.pitch.cos();
        Vec3::new(m * self.yaw.sin(), h, m * self.yaw.cos())
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position(),
            target: Vec3::zero(),
            near: NEAR_CLIP,
            far: FAR_CLIP,
        }
    }
}

// ── Preview ───────────────────────────────────────────────────────────────

/// An interactive 3D viewport rendered by the host.
///
/// Dragging orbits the camera; dragging with Alt held zooms. The render
/// surface is acquired on construct and released on disable.
pub struct Preview {
    decl: Decl,
    models: Vec<PreviewModel>,
    camera: OrbitCamera,
    keys: KeyTracker,
    surface: Option<Box<dyn PreviewSurface>>,
}

impl Preview {
    pub fn new() -> Self {
        Self {
            decl: Decl::default(),
            models: Vec::new(),
            camera: OrbitCamera::default(),
            keys: KeyTracker::default(),
            surface: None,
        }
    }

    pub fn models(mut self, models: Vec<PreviewModel>) -> Self {
        self.models = models;
        self
    }

    pub fn set_models(&mut self, models: Vec<PreviewModel>) {
        self.models = models;
    }

    #[inline]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    #[inline]
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }
}

impl Default for Preview {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Preview {
    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn on_construct(&mut self, node: NodeCx, host: &mut dyn Host) {
        if self.surface.is_none() {
            self.surface = host.create_preview();
            if self.surface.is_none() {
                log::warn!("preview {:?}: host has no preview renderer", node.id);
            }
        }
    }

    fn on_disable(&mut self, node: NodeCx, _host: &mut dyn Host) {
        if self.surface.take().is_some() {
            log::debug!("preview {:?}: surface released", node.id);
        }
    }

    fn draw(&mut self, node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
        if rect.width() <= 1.0 || rect.height() <= 1.0 {
            return;
        }

        self.keys.observe(&cx.event);
        if let Some(d) = cx.interact(node, rect).drag {
            if self.keys.is_held(Key::Alt) || cx.event.modifiers.alt {
                self.camera.zoom(d.x + d.y);
            } else {
                self.camera.add_yaw(d.x);
                self.camera.add_pitch(d.y);
            }
            cx.request_repaint();
        }

        let Some(surface) = self.surface.as_mut() else { return };
        let drawable: Vec<PreviewModel> =
            self.models.iter().filter(|m| m.is_drawable()).copied().collect();
        if let Some(texture) = surface.render(&self.camera.pose(), rect.size, &drawable) {
            cx.host.texture(rect, texture, ScaleMode::StretchToFill);
        }
    }
}
