use std::cell::Cell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use nabu_engine::coords::{Rect, Vec2};
use nabu_engine::scene::{
    AssetFilter,
    AssetRef,
    Content,
    CursorIcon,
    DrawCmd,
    DrawList,
    ScaleMode,
    TextureId,
};

use crate::host::{CameraPose, Host, PreviewModel, PreviewSurface};

/// Headless [`Host`] that records every primitive into a [`DrawList`].
///
/// Interactive primitives echo the value they were shown unless a response
/// was scripted for them; scripted responses are consumed in call order.
/// Used by the studio demo and by tests.
///
/// ```rust,ignore
/// let mut painter = Painter::new();
/// painter.script_toggle(true);          // the next toggle drawn gets clicked
/// window.frame(&mut painter, rect, UiEvent::repaint(Vec2::zero()));
/// assert!(painter.commands().any(|c| matches!(c, DrawCmd::Toggle { .. })));
/// ```
#[derive(Debug)]
pub struct Painter {
    draw_list: DrawList,
    repaint_requests: usize,
    scroll_depth: usize,
    script: Script,
    textures: HashMap<TextureId, Vec2>,
    next_texture: u32,
    previews: PreviewPool,
}

#[derive(Debug, Default)]
struct Script {
    text: VecDeque<String>,
    numbers: VecDeque<f64>,
    toggles: VecDeque<bool>,
    popups: VecDeque<usize>,
    toolbars: VecDeque<usize>,
    objects: VecDeque<Option<AssetRef>>,
    scrolls: VecDeque<Vec2>,
}

#[derive(Debug)]
struct PreviewPool {
    available: bool,
    created: usize,
    live: Rc<Cell<usize>>,
    renders: Rc<Cell<usize>>,
    last_camera: Rc<Cell<Option<CameraPose>>>,
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter {
    pub fn new() -> Self {
        Self {
            draw_list: DrawList::new(),
            repaint_requests: 0,
            scroll_depth: 0,
            script: Script::default(),
            textures: HashMap::new(),
            next_texture: 1,
            previews: PreviewPool {
                available: true,
                created: 0,
                live: Rc::new(Cell::new(0)),
                renders: Rc::new(Cell::new(0)),
                last_camera: Rc::new(Cell::new(None)),
            },
        }
    }

    /// A painter whose `create_preview` always fails.
    pub fn without_previews() -> Self {
        let mut p = Self::new();
        p.previews.available = false;
        p
    }

    /// Clears recorded commands and repaint requests; scripts are kept.
    pub fn begin_frame(&mut self) {
        self.draw_list.clear();
        self.repaint_requests = 0;
        self.scroll_depth = 0;
    }

    // ── recorded output ───────────────────────────────────────────────────

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn commands(&self) -> impl Iterator<Item = &DrawCmd> {
        self.draw_list.commands()
    }

    /// Text of every label drawn, in order.
    pub fn labels(&self) -> Vec<&str> {
        self.commands()
            .filter_map(|c| match c {
                DrawCmd::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[inline]
    pub fn repaint_requests(&self) -> usize {
        self.repaint_requests
    }

    /// Returns whether a repaint was requested, resetting the counter.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requests) > 0
    }

    /// Preview surfaces allocated and not yet dropped.
    #[inline]
    pub fn live_previews(&self) -> usize {
        self.previews.live.get()
    }

    #[inline]
    pub fn previews_created(&self) -> usize {
        self.previews.created
    }

    #[inline]
    pub fn preview_renders(&self) -> usize {
        self.previews.renders.get()
    }

    /// Camera of the most recent preview render.
    #[inline]
    pub fn last_camera(&self) -> Option<CameraPose> {
        self.previews.last_camera.get()
    }

    // ── textures ──────────────────────────────────────────────────────────

    /// Registers a texture of `size` pixels so scale modes can fit it.
    pub fn register_texture(&mut self, size: Vec2) -> TextureId {
        let id = self.next_texture_id();
        self.textures.insert(id, size);
        id
    }

    // ── scripted responses ────────────────────────────────────────────────

    pub fn script_text(&mut self, v: impl Into<String>) { self.script.text.push_back(v.into()); }
    pub fn script_number(&mut self, v: f64) { self.script.numbers.push_back(v); }
    pub fn script_toggle(&mut self, v: bool) { self.script.toggles.push_back(v); }
    pub fn script_popup(&mut self, v: usize) { self.script.popups.push_back(v); }
    pub fn script_toolbar(&mut self, v: usize) { self.script.toolbars.push_back(v); }
    pub fn script_object(&mut self, v: Option<AssetRef>) { self.script.objects.push_back(v); }
    pub fn script_scroll(&mut self, v: Vec2) { self.script.scrolls.push_back(v); }

    fn next_texture_id(&mut self) -> TextureId {
        let id = TextureId(self.next_texture);
        self.next_texture += 1;
        id
    }
}

impl Host for Painter {
    fn request_repaint(&mut self) {
        self.repaint_requests += 1;
    }

    fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    fn pop_clip(&mut self) {
        if self.draw_list.clip_depth() == 0 {
            log::warn!("pop_clip without push_clip");
            return;
        }
        self.draw_list.pop_clip();
    }

    fn begin_scroll(&mut self, viewport: Rect, offset: Vec2, content: Vec2) -> Vec2 {
        let offset = self.script.scrolls.pop_front().unwrap_or(offset);
        self.draw_list.push(DrawCmd::ScrollRegion { viewport, offset, content });
        self.draw_list.push_clip(viewport);
        self.scroll_depth += 1;
        offset
    }

    fn end_scroll(&mut self) {
        if self.scroll_depth == 0 {
            log::warn!("end_scroll without begin_scroll");
            return;
        }
        self.scroll_depth -= 1;
        self.draw_list.pop_clip();
    }

    fn label(&mut self, rect: Rect, text: &str) {
        self.draw_list.push(DrawCmd::Label { rect, text: text.to_string() });
    }

    fn box_content(&mut self, rect: Rect, content: &Content) {
        self.draw_list.push(DrawCmd::Box { rect, content: content.clone() });
    }

    fn button_frame(&mut self, rect: Rect, pressed: bool, enabled: bool) {
        self.draw_list.push(DrawCmd::ButtonFrame { rect, pressed, enabled });
    }

    fn texture(&mut self, rect: Rect, texture: TextureId, mode: ScaleMode) {
        let rect = match self.textures.get(&texture) {
            Some(size) => mode.fit(rect, *size),
            None => rect,
        };
        self.draw_list.push(DrawCmd::Texture { rect, texture, mode });
    }

    fn text_field(&mut self, rect: Rect, value: &str) -> String {
        self.draw_list
            .push(DrawCmd::TextField { rect, value: value.to_string(), multiline: false });
        self.script.text.pop_front().unwrap_or_else(|| value.to_string())
    }

    fn text_area(&mut self, rect: Rect, value: &str) -> String {
        self.draw_list.push(DrawCmd::TextField { rect, value: value.to_string(), multiline: true });
        self.script.text.pop_front().unwrap_or_else(|| value.to_string())
    }

    fn number_field(&mut self, rect: Rect, value: f64) -> f64 {
        self.draw_list.push(DrawCmd::NumberField { rect, value });
        self.script.numbers.pop_front().unwrap_or(value)
    }

    fn toggle(&mut self, rect: Rect, value: bool, label: &Content) -> bool {
        self.draw_list.push(DrawCmd::Toggle { rect, value, label: label.clone() });
        self.script.toggles.pop_front().unwrap_or(value)
    }

    fn popup(&mut self, rect: Rect, selected: usize, options: &[String]) -> usize {
        self.draw_list.push(DrawCmd::Popup { rect, selected, options: options.to_vec() });
        self.script.popups.pop_front().unwrap_or(selected)
    }

    fn toolbar(&mut self, rect: Rect, selected: usize, items: &[Content]) -> usize {
        self.draw_list.push(DrawCmd::Toolbar { rect, selected, items: items.to_vec() });
        self.script.toolbars.pop_front().unwrap_or(selected)
    }

    fn object_field(
        &mut self,
        rect: Rect,
        current: Option<&AssetRef>,
        _filter: &AssetFilter,
    ) -> Option<AssetRef> {
        self.draw_list.push(DrawCmd::ObjectField { rect, current: current.cloned() });
        match self.script.objects.pop_front() {
            Some(picked) => picked,
            None => current.cloned(),
        }
    }

    fn cursor_rect(&mut self, rect: Rect, cursor: CursorIcon) {
        self.draw_list.push(DrawCmd::CursorRect { rect, cursor });
    }

    fn create_preview(&mut self) -> Option<Box<dyn PreviewSurface>> {
        if !self.previews.available {
            return None;
        }
        self.previews.created += 1;
        self.previews.live.set(self.previews.live.get() + 1);
        let texture = self.next_texture_id();
        Some(Box::new(RecordedSurface {
            texture,
            live: Rc::clone(&self.previews.live),
            renders: Rc::clone(&self.previews.renders),
            last_camera: Rc::clone(&self.previews.last_camera),
        }))
    }
}

// ── RecordedSurface ───────────────────────────────────────────────────────

struct RecordedSurface {
    texture: TextureId,
    live: Rc<Cell<usize>>,
    renders: Rc<Cell<usize>>,
    last_camera: Rc<Cell<Option<CameraPose>>>,
}

impl PreviewSurface for RecordedSurface {
    fn render(
        &mut self,
        camera: &CameraPose,
        _size: Vec2,
        _models: &[PreviewModel],
    ) -> Option<TextureId> {
        self.renders.set(self.renders.get() + 1);
        self.last_camera.set(Some(*camera));
        Some(self.texture)
    }
}

impl Drop for RecordedSurface {
    fn drop(&mut self) {
        self.live.set(self.live.get().saturating_sub(1));
    }
}
