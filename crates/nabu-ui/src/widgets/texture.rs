use nabu_engine::coords::Rect;
use nabu_engine::scene::{ScaleMode, TextureId};

use crate::context::DrawCx;
use crate::declare::Decl;
use crate::node::NodeCx;
use crate::widget::Widget;

/// Draws a host texture; draws nothing while no texture is set.
pub struct Texture {
    decl: Decl,
    texture: Option<TextureId>,
    mode: ScaleMode,
    bind: Option<Box<dyn FnMut() -> Option<TextureId>>>,
}

impl Texture {
    pub fn new(texture: Option<TextureId>) -> Self {
        Self { decl: Decl::default(), texture, mode: ScaleMode::default(), bind: None }
    }

    pub fn scale_mode(mut self, mode: ScaleMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn bind(mut self, f: impl FnMut() -> Option<TextureId> + 'static) -> Self {
        self.bind = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    pub fn set_texture(&mut self, texture: Option<TextureId>) {
        self.texture = texture;
    }
}

impl Widget for Texture {
    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn draw(&mut self, _node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
        if let Some(bind) = self.bind.as_mut() {
            self.texture = bind();
        }
        if let Some(texture) = self.texture {
            cx.host.texture(rect, texture, self.mode);
        }
    }
}
