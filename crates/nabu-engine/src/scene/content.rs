use crate::coords::{Rect, Vec2};

/// Opaque handle to a host texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub u32);

/// Label content for boxes, toggles and toolbar buttons: text, image or both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Content {
    pub text: Option<String>,
    pub image: Option<TextureId>,
    pub tooltip: Option<String>,
}

impl Content {
    /// Empty content (nothing drawn inside the frame).
    pub fn none() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), ..Self::default() }
    }

    pub fn image(texture: TextureId) -> Self {
        Self { image: Some(texture), ..Self::default() }
    }

    pub fn tooltip(mut self, tip: impl Into<String>) -> Self {
        self.tooltip = Some(tip.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.image.is_none()
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::text(s)
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::text(s)
    }
}

/// Reference to an asset or scene object picked through an object field.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AssetRef {
    /// Host-stable identifier.
    pub id: u64,
    /// Asset type name, matched against [`AssetFilter::type_name`].
    pub type_name: String,
    /// Display name.
    pub name: String,
    /// True when the object lives in an open scene rather than on disk.
    pub scene_object: bool,
}

impl AssetRef {
    pub fn new(id: u64, type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id, type_name: type_name.into(), name: name.into(), scene_object: false }
    }

    pub fn in_scene(mut self) -> Self {
        self.scene_object = true;
        self
    }
}

/// Which objects an object field accepts.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AssetFilter {
    /// Required asset type; `None` accepts any type.
    pub type_name: Option<String>,
    pub allow_scene_objects: bool,
}

impl AssetFilter {
    pub fn accepts(&self, asset: &AssetRef) -> bool {
        if asset.scene_object && !self.allow_scene_objects {
            return false;
        }
        self.type_name.as_deref().is_none_or(|t| t == asset.type_name)
    }
}

/// How a texture is fitted into its rect.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ScaleMode {
    /// Stretch to the rect, ignoring aspect ratio.
    StretchToFill,
    /// Fill the rect, cropping overflow to keep the aspect ratio.
    ScaleAndCrop,
    /// Fit entirely inside the rect, keeping the aspect ratio (letterboxed).
    #[default]
    ScaleToFit,
}

impl ScaleMode {
    /// Destination rect for a texture of `texture_size` drawn into `rect`.
    ///
    /// For `ScaleAndCrop` the result overflows `rect`; the caller clips.
    pub fn fit(self, rect: Rect, texture_size: Vec2) -> Rect {
        if texture_size.x <= 0.0 || texture_size.y <= 0.0 || rect.is_empty() {
            return rect;
        }
        let sx = rect.size.x / texture_size.x;
        let sy = rect.size.y / texture_size.y;
        let s = match self {
            ScaleMode::StretchToFill => return rect,
            ScaleMode::ScaleAndCrop => sx.max(sy),
            ScaleMode::ScaleToFit => sx.min(sy),
        };
        let size = texture_size * s;
        let origin = rect.origin + (rect.size - size) * 0.5;
        Rect::from_origin_size(origin, size)
    }
}

/// Mouse cursor shape requested over a rect.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CursorIcon {
    Arrow,
    Text,
    ResizeHorizontal,
    ResizeVertical,
    Orbit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_to_fit_letterboxes() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let out = ScaleMode::ScaleToFit.fit(rect, Vec2::new(50.0, 50.0));
        assert_eq!(out, Rect::new(50.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn scale_and_crop_overflows() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let out = ScaleMode::ScaleAndCrop.fit(rect, Vec2::new(50.0, 50.0));
        assert_eq!(out, Rect::new(0.0, -50.0, 200.0, 200.0));
    }

    #[test]
    fn stretch_returns_rect() {
        let r = Rect::new(3.0, 4.0, 10.0, 20.0);
        assert_eq!(ScaleMode::StretchToFill.fit(r, Vec2::new(1.0, 7.0)), r);
    }

    #[test]
    fn filter_rejects_scene_objects_unless_allowed() {
        let prefab = AssetRef::new(1, "Prefab", "tank").in_scene();
        let mut filter =
            AssetFilter { type_name: Some("Prefab".into()), allow_scene_objects: false };
        assert!(!filter.accepts(&prefab));
        filter.allow_scene_objects = true;
        assert!(filter.accepts(&prefab));
    }

    #[test]
    fn filter_matches_type_name() {
        let mesh = AssetRef::new(2, "Mesh", "hull");
        let filter = AssetFilter { type_name: Some("Prefab".into()), allow_scene_objects: true };
        assert!(!filter.accepts(&mesh));
        assert!(AssetFilter::default().accepts(&mesh));
    }
}
