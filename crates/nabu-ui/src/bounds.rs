use nabu_engine::coords::{Axis, Rect, Vec2};

/// Size used when a widget declares none.
pub const DEFAULT_SIZE: Vec2 = Vec2::new(50.0, 20.0);

/// Author-declared placement of a node.
///
/// `rect` holds absolute pixels unless the matching `relative_*` flag is set,
/// in which case the components are fractions of the parent's allocation
/// (inside a linear layout the relative main extent is a weight instead).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub rect: Rect,
    pub relative_size: bool,
    pub relative_position: bool,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            rect: Rect::from_origin_size(Vec2::zero(), DEFAULT_SIZE),
            relative_size: false,
            relative_position: false,
        }
    }
}

impl Bounds {
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.rect.size
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.rect.origin
    }

    /// Declared extent along `axis`.
    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        axis.main(self.rect.size)
    }

    pub fn set_extent(&mut self, axis: Axis, extent: f32) {
        self.rect.size = axis.with_main(self.rect.size, extent);
    }

    /// Places these bounds inside `parent`, scaling relative components by
    /// the parent's size.
    pub fn resolve_in(&self, parent: Rect) -> Rect {
        let pos = if self.relative_position {
            self.rect.origin.scale(parent.size)
        } else {
            self.rect.origin
        };
        let size = if self.relative_size {
            self.rect.size.scale(parent.size)
        } else {
            self.rect.size
        };
        Rect::from_origin_size(parent.origin + pos, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fixed_50_by_20() {
        let b = Bounds::default();
        assert_eq!(b.rect, Rect::new(0.0, 0.0, 50.0, 20.0));
        assert!(!b.relative_size && !b.relative_position);
    }

    #[test]
    fn absolute_bounds_offset_by_parent_origin() {
        let b = Bounds { rect: Rect::new(5.0, 6.0, 30.0, 40.0), ..Bounds::default() };
        let parent = Rect::new(100.0, 200.0, 400.0, 300.0);
        assert_eq!(b.resolve_in(parent), Rect::new(105.0, 206.0, 30.0, 40.0));
    }

    #[test]
    fn relative_bounds_scale_by_parent_size() {
        let b = Bounds {
            rect: Rect::new(0.25, 0.5, 0.5, 0.5),
            relative_size: true,
            relative_position: true,
        };
        let parent = Rect::new(10.0, 10.0, 200.0, 100.0);
        assert_eq!(b.resolve_in(parent), Rect::new(60.0, 60.0, 100.0, 50.0));
    }

    #[test]
    fn set_extent_touches_main_axis_only() {
        let mut b = Bounds::default();
        b.set_extent(Axis::Vertical, 70.0);
        assert_eq!(b.size(), Vec2::new(50.0, 70.0));
    }
}
