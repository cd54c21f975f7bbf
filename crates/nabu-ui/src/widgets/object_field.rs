use nabu_engine::coords::Rect;
use nabu_engine::scene::{AssetFilter, AssetRef};

use crate::context::DrawCx;
use crate::declare::Decl;
use crate::effects::Effects;
use crate::node::NodeCx;
use crate::widget::Widget;

type Validator = Box<dyn FnMut(&mut Effects, Option<&AssetRef>) -> bool>;

/// Picks an asset reference of one type.
///
/// A new selection is passed to the validator; a rejected selection clears
/// the field. Scene objects are refused unless allowed.
///
/// # Example
/// ```rust,ignore
/// ObjectField::new()
///     .asset_type("Mesh")
///     .validate(|_, picked| picked.is_some_and(|m| !m.name.is_empty()))
/// ```
pub struct ObjectField {
    decl: Decl,
    selected: Option<AssetRef>,
    filter: AssetFilter,
    validate: Option<Validator>,
}

impl ObjectField {
    pub fn new() -> Self {
        Self {
            decl: Decl::sized(50.0, 16.0),
            selected: None,
            filter: AssetFilter::default(),
            validate: None,
        }
    }

    /// Restricts picks to assets of `type_name`.
    pub fn asset_type(mut self, type_name: impl Into<String>) -> Self {
        self.filter.type_name = Some(type_name.into());
        self
    }

    pub fn allow_scene_objects(mut self, v: bool) -> Self {
        self.filter.allow_scene_objects = v;
        self
    }

    pub fn selected(mut self, v: Option<AssetRef>) -> Self {
        self.selected = v;
        self
    }

    /// Accept/reject callback run whenever the selection changes.
    pub fn validate(
        mut self,
        f: impl FnMut(&mut Effects, Option<&AssetRef>) -> bool + 'static,
    ) -> Self {
        self.validate = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn selection(&self) -> Option<&AssetRef> {
        self.selected.as_ref()
    }
}

impl Default for ObjectField {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ObjectField {
    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn draw(&mut self, node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
        // Pointer stays with the field from press to release.
        cx.interact(node, rect);

        let picked = cx.host.object_field(rect, self.selected.as_ref(), &self.filter);
        if !node.enabled || picked == self.selected {
            return;
        }
        let picked = match picked {
            Some(asset) if !self.filter.accepts(&asset) => {
                log::debug!("object field {:?}: {} refused by filter", node.id, asset.name);
                None
            }
            other => other,
        };
        let accepted = match self.validate.as_mut() {
            Some(f) => f(&mut *cx.effects, picked.as_ref()),
            None => true,
        };
        self.selected = if accepted { picked } else { None };
    }
}

#[cfg(test)]
mod tests {
    use nabu_engine::coords::Vec2;

    use super::*;
    use crate::event::UiEvent;
    use crate::painter::Painter;
    use crate::testing::{draw, draw_with, repaint, step, SCREEN};

    fn mesh(name: &str) -> AssetRef {
        AssetRef::new(1, "Mesh", name)
    }

    fn selection(win: &crate::window::UiWindow) -> Option<AssetRef> {
        win.tree().get::<ObjectField>(win.root()).unwrap().selection().cloned()
    }

    #[test]
    fn default_height_is_one_field() {
        let mut f = ObjectField::new();
        assert_eq!(f.decl_mut().bounds.rect.size, Vec2::new(50.0, 16.0));
    }

    #[test]
    fn accepted_pick_is_kept() {
        let mut painter = Painter::new();
        painter.script_object(Some(mesh("cube")));
        let field = ObjectField::new().asset_type("Mesh").validate(|_, _| true);
        let (win, _) = draw_with(painter, field, SCREEN, repaint());
        assert_eq!(selection(&win), Some(mesh("cube")));
    }

    #[test]
    fn rejected_pick_clears_selection() {
        let mut painter = Painter::new();
        painter.script_object(Some(mesh("bad")));
        let (win, _) = draw_with(
            painter,
            ObjectField::new()
                .selected(Some(mesh("good")))
                .validate(|_, m| m.is_some_and(|m| m.name != "bad")),
            SCREEN,
            repaint(),
        );
        assert_eq!(selection(&win), None);
    }

    #[test]
    fn filter_refuses_scene_objects_and_wrong_types() {
        let mut painter = Painter::new();
        painter.script_object(Some(mesh("in scene").in_scene()));
        let (win, _) = draw_with(painter, ObjectField::new().asset_type("Mesh"), SCREEN, repaint());
        assert_eq!(selection(&win), None);

        let mut painter = Painter::new();
        painter.script_object(Some(AssetRef::new(2, "Texture", "tex")));
        let (win, _) = draw_with(painter, ObjectField::new().asset_type("Mesh"), SCREEN, repaint());
        assert_eq!(selection(&win), None);

        let mut painter = Painter::new();
        painter.script_object(Some(mesh("in scene").in_scene()));
        let field = ObjectField::new().allow_scene_objects(true);
        let (win, _) = draw_with(painter, field, SCREEN, repaint());
        assert_eq!(selection(&win), Some(mesh("in scene").in_scene()));
    }

    #[test]
    fn press_claims_capture() {
        let (mut win, mut painter) = draw(ObjectField::new(), SCREEN, repaint());
        step(&mut win, &mut painter, UiEvent::mouse_down(Vec2::new(5.0, 5.0)));
        assert!(win.hot().active().is_some());
        step(&mut win, &mut painter, UiEvent::mouse_up(Vec2::new(5.0, 5.0)));
        assert_eq!(win.hot().active(), None);
    }
}
