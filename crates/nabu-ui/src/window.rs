//! Per-window driver: owns the tree and runs one draw per event.

use nabu_engine::coords::Rect;
use nabu_engine::input::InputEvent;

use crate::context::DrawCx;
use crate::control::HotControl;
use crate::effects::Effects;
use crate::error::TreeError;
use crate::event::{EventKind, EventTranslator, UiEvent};
use crate::host::Host;
use crate::metrics::{Metrics, WindowConfig};
use crate::node::NodeId;
use crate::tree::UiTree;
use crate::widget::Element;

/// What one [`UiWindow::frame`] did.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameOutput {
    /// Deferred edits applied after the draw.
    pub effects_applied: usize,
    /// Some widget consumed the event.
    pub event_used: bool,
}

/// A widget tree bound to one host window.
///
/// ```rust,ignore
/// let mut window = UiWindow::new(
///     LinearLayout::vertical()
///         .child(Text::new("Components").height(20.0))
///         .child(PropertyEditor::new(json!({ "hp": 100 }))),
/// )?;
/// window.construct(&mut host);
///
/// // per platform event
/// window.handle_input(&mut host, viewport, &event);
///
/// window.disable(&mut host);
/// ```
#[derive(Debug)]
pub struct UiWindow {
    config: WindowConfig,
    tree: UiTree,
    root: NodeId,
    hot: HotControl,
    translator: EventTranslator,
    effects: Effects,
    last_rect: Option<Rect>,
}

impl UiWindow {
    pub fn new(root: impl Into<Element>) -> Result<Self, TreeError> {
        Self::with_config(WindowConfig::default(), root)
    }

    pub fn with_config(config: WindowConfig, root: impl Into<Element>) -> Result<Self, TreeError> {
        let mut tree = UiTree::new();
        let root = tree.insert(root)?;
        log::debug!("window {:?}: {} node(s)", config.title, tree.len());
        Ok(Self {
            config,
            tree,
            root,
            hot: HotControl::new(),
            translator: EventTranslator::new(),
            effects: Effects::new(),
            last_rect: None,
        })
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn tree(&self) -> &UiTree {
        &self.tree
    }

    /// Direct tree access between frames.
    #[inline]
    pub fn tree_mut(&mut self) -> &mut UiTree {
        &mut self.tree
    }

    #[inline]
    pub fn hot(&self) -> &HotControl {
        &self.hot
    }

    #[inline]
    pub fn metrics(&self) -> &Metrics {
        &self.config.metrics
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Rect of the most recent frame.
    #[inline]
    pub fn last_rect(&self) -> Option<Rect> {
        self.last_rect
    }

    /// Constructs every node not yet constructed; returns how many were.
    pub fn construct(&mut self, host: &mut dyn Host) -> usize {
        self.tree.construct(self.root, host)
    }

    /// Draws the tree into `rect` for `event`, then applies deferred edits.
    pub fn frame(&mut self, host: &mut dyn Host, rect: Rect, event: UiEvent) -> FrameOutput {
        self.last_rect = Some(rect);

        let mut cx = DrawCx {
            tree: &mut self.tree,
            host: &mut *host,
            event,
            hot: &mut self.hot,
            effects: &mut self.effects,
            metrics: &self.config.metrics,
        };
        cx.draw_child(self.root, rect);
        let event_used = cx.event.is_used();

        // A captured control that was not drawn this frame can't see its release.
        if event.kind == EventKind::MouseUp && self.hot.active().is_some() {
            log::trace!("releasing orphaned capture {:?}", self.hot.active());
            self.hot.reset();
        }

        let effects_applied = self.effects.apply(&mut self.tree);
        if effects_applied > 0 {
            host.request_repaint();
        }
        FrameOutput { effects_applied, event_used }
    }

    /// Translates a platform event and draws a frame for it.
    ///
    /// Returns `None` for events the tree does not react to.
    pub fn handle_input(
        &mut self,
        host: &mut dyn Host,
        rect: Rect,
        event: &InputEvent,
    ) -> Option<FrameOutput> {
        // The release for a held control may never arrive once the pointer or
        // focus is gone.
        if matches!(event, InputEvent::PointerLeft | InputEvent::Focused(false)) {
            log::trace!("dropping capture {:?} on {event:?}", self.hot.active());
            self.hot.reset();
        }
        let ev = self.translator.translate(event.clone())?;
        Some(self.frame(host, rect, ev))
    }

    /// Draws a repaint frame at the last known pointer position.
    pub fn repaint(&mut self, host: &mut dyn Host, rect: Rect) -> FrameOutput {
        let ev = UiEvent::repaint(self.translator.pointer());
        self.frame(host, rect, ev)
    }

    /// Disables the whole tree, releasing host resources.
    pub fn disable(&mut self, host: &mut dyn Host) -> usize {
        self.hot.reset();
        self.tree.disable(self.root, host)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use nabu_engine::coords::Vec2;
    use nabu_engine::input::{
        InputEvent,
        Modifiers,
        MouseButton,
        MouseButtonState,
        PointerButtonEvent,
        PointerMoveEvent,
    };

    use super::*;
    use crate::declare::{Compose, Configure};
    use crate::painter::Painter;
    use crate::testing::{repaint, SCREEN};
    use crate::widgets::button::Button;
    use crate::widgets::linear::LinearLayout;
    use crate::widgets::preview::Preview;
    use crate::widgets::switch_tab::SwitchTab;
    use crate::widgets::text::Text;

    fn button(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    #[test]
    fn construct_is_idempotent() {
        let mut painter = Painter::new();
        let root = LinearLayout::vertical().child(Text::new("a")).child(Text::new("b"));
        let mut win = UiWindow::new(root).unwrap();
        assert_eq!(win.construct(&mut painter), 3);
        let control = win.tree().node(win.root()).unwrap().control();
        assert_eq!(win.construct(&mut painter), 0);
        assert_eq!(win.tree().node(win.root()).unwrap().control(), control);
    }

    #[test]
    fn config_is_carried() {
        let cfg = WindowConfig::new("Inspector").metrics(Metrics::default().indent(4.0));
        let win = UiWindow::with_config(cfg, Text::new("x")).unwrap();
        assert_eq!(win.title(), "Inspector");
        assert_eq!(win.metrics().indent, 4.0);
    }

    #[test]
    fn redrawing_unchanged_tree_is_stable() {
        let mut painter = Painter::new();
        let root = LinearLayout::vertical().child(Text::new("a").height(10.0));
        let mut win = UiWindow::new(root).unwrap();
        win.frame(&mut painter, SCREEN, repaint());
        let first: Vec<_> = painter.commands().cloned().collect();
        painter.begin_frame();
        win.frame(&mut painter, SCREEN, repaint());
        let second: Vec<_> = painter.commands().cloned().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn button_click_switches_tab_after_draw() {
        // Tabs are inserted first so the button callback can name them.
        let mut win = UiWindow::new(
            LinearLayout::vertical()
                .child(
                    SwitchTab::new().height(50.0).child(Text::new("one")).child(Text::new("two")),
                )
                .child(Button::new().height(20.0)),
        )
        .unwrap();
        let root = win.root();
        let tabs = win.tree().child(root, 0).unwrap();
        let button_id = win.tree().child(root, 1).unwrap();
        let replacement = Button::new().height(20.0).on_click(move |fx| fx.activate_tab(tabs, 1));
        let new_button = win.tree_mut().insert(replacement).unwrap();
        win.tree_mut().remove(button_id);
        win.tree_mut().attach(root, new_button).unwrap();

        let mut painter = Painter::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 70.0);
        let moved = InputEvent::PointerMoved(PointerMoveEvent { x: 10.0, y: 60.0 });
        win.handle_input(&mut painter, rect, &moved);
        win.handle_input(&mut painter, rect, &button(MouseButtonState::Pressed, 10.0, 60.0));
        let up = button(MouseButtonState::Released, 10.0, 60.0);
        let out = win.handle_input(&mut painter, rect, &up).unwrap();
        assert_eq!(out.effects_applied, 1);
        assert_eq!(win.tree().get::<SwitchTab>(tabs).unwrap().active_tab(), 1);

        painter.begin_frame();
        win.repaint(&mut painter, rect);
        assert_eq!(painter.labels(), ["two"]);
    }

    #[test]
    fn unhandled_input_draws_nothing() {
        let mut painter = Painter::new();
        let mut win = UiWindow::new(Text::new("x")).unwrap();
        assert!(win.handle_input(&mut painter, SCREEN, &InputEvent::Focused(true)).is_none());
        assert!(painter.commands().next().is_none());
    }

    #[test]
    fn release_frees_capture_of_undrawn_control() {
        let mut painter = Painter::new();
        let root = SwitchTab::new().child(Button::new()).child(Text::new("other"));
        let mut win = UiWindow::new(root).unwrap();
        win.frame(&mut painter, SCREEN, UiEvent::mouse_down(Vec2::new(5.0, 5.0)));
        assert!(win.hot().active().is_some());

        let root = win.root();
        win.tree_mut().get_mut::<SwitchTab>(root).unwrap().activate_tab(1);
        win.frame(&mut painter, SCREEN, UiEvent::mouse_up(Vec2::new(5.0, 5.0)));
        assert_eq!(win.hot().active(), None);
    }

    #[test]
    fn focus_loss_drops_capture() {
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        let mut win = UiWindow::new(
            LinearLayout::vertical()
                .child(Button::new().height(20.0))
                .child(Button::new().height(20.0).on_click(move |_| c.set(c.get() + 1))),
        )
        .unwrap();
        let mut painter = Painter::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);

        win.handle_input(&mut painter, rect, &button(MouseButtonState::Pressed, 10.0, 10.0));
        assert!(win.hot().active().is_some());

        assert!(win.handle_input(&mut painter, rect, &InputEvent::Focused(false)).is_none());
        assert_eq!(win.hot().active(), None);

        win.handle_input(&mut painter, rect, &button(MouseButtonState::Pressed, 10.0, 30.0));
        win.handle_input(&mut painter, rect, &button(MouseButtonState::Released, 10.0, 30.0));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn pointer_leaving_drops_capture() {
        let mut win = UiWindow::new(Button::new()).unwrap();
        let mut painter = Painter::new();
        win.handle_input(&mut painter, SCREEN, &button(MouseButtonState::Pressed, 5.0, 5.0));
        assert!(win.hot().active().is_some());
        win.handle_input(&mut painter, SCREEN, &InputEvent::PointerLeft);
        assert_eq!(win.hot().active(), None);
    }

    #[test]
    fn disable_releases_previews() {
        let mut painter = Painter::new();
        let root = LinearLayout::vertical().child(Preview::new()).child(Preview::new());
        let mut win = UiWindow::new(root).unwrap();
        win.construct(&mut painter);
        assert_eq!(painter.live_previews(), 2);
        assert_eq!(win.disable(&mut painter), 3);
        assert_eq!(painter.live_previews(), 0);
    }

    #[test]
    fn dropping_window_releases_previews() {
        let mut painter = Painter::new();
        let mut win = UiWindow::new(Preview::new()).unwrap();
        win.construct(&mut painter);
        assert_eq!(painter.live_previews(), 1);
        drop(win);
        assert_eq!(painter.live_previews(), 0);
    }
}
