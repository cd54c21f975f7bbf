use super::Vec2;

/// Primary axis of a linear arrangement.
///
/// Axis-generic layouts read and write sizes through [`Axis::main`] and
/// [`Axis::cross`] so the vertical and horizontal variants share one
/// implementation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// Component of `v` along this axis.
    #[inline]
    pub fn main(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// Component of `v` across this axis.
    #[inline]
    pub fn cross(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.y,
            Axis::Vertical => v.x,
        }
    }

    /// Builds a vector from main/cross components.
    #[inline]
    pub fn pack(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(main, cross),
            Axis::Vertical => Vec2::new(cross, main),
        }
    }

    /// Returns `v` with its main component replaced.
    #[inline]
    pub fn with_main(self, v: Vec2, main: f32) -> Vec2 {
        self.pack(main, self.cross(v))
    }

    #[inline]
    pub fn flip(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}
