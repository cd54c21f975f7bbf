//! Coordinate and geometry types shared across the engine and UI.
//!
//! Canonical space:
//! - Logical pixels, window-local
//! - Origin top-left
//! - +X right, +Y down

mod axis;
mod rect;
mod vec2;
mod vec3;

pub use axis::Axis;
pub use rect::Rect;
pub use vec2::Vec2;
pub use vec3::Vec3;
