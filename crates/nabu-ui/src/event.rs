use nabu_engine::coords::Vec2;
use nabu_engine::input::{
    InputEvent,
    InputState,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
};

pub use nabu_engine::input::Modifiers;

/// Pixels per wheel line when converting line deltas.
pub const WHEEL_LINE_PX: f32 = 16.0;

/// Kind of a [`UiEvent`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EventKind {
    /// Redraw only; no input.
    Repaint,
    /// Pointer moved with no button held.
    MouseMove,
    /// Primary button pressed.
    MouseDown,
    /// Pointer moved while the primary button is held.
    MouseDrag,
    /// Primary button released.
    MouseUp,
    KeyDown,
    KeyUp,
    ScrollWheel,
    /// Consumed by a widget earlier in the draw; later widgets ignore it.
    Used,
}

/// The event a frame is drawn with.
///
/// Every frame carries exactly one event; pure redraws use
/// [`EventKind::Repaint`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UiEvent {
    pub kind: EventKind,
    /// Pointer position in window coordinates.
    pub mouse_pos: Vec2,
    /// Pointer motion for drags; for wheel events the scroll amount in
    /// pixels, positive revealing content below / to the right.
    pub delta: Vec2,
    pub key: Option<Key>,
    pub modifiers: Modifiers,
}

impl UiEvent {
    pub fn new(kind: EventKind, mouse_pos: Vec2) -> Self {
        Self { kind, mouse_pos, delta: Vec2::zero(), key: None, modifiers: Modifiers::default() }
    }

    pub fn repaint(mouse_pos: Vec2) -> Self {
        Self::new(EventKind::Repaint, mouse_pos)
    }

    pub fn mouse_move(mouse_pos: Vec2) -> Self {
        Self::new(EventKind::MouseMove, mouse_pos)
    }

    pub fn mouse_down(mouse_pos: Vec2) -> Self {
        Self::new(EventKind::MouseDown, mouse_pos)
    }

    pub fn mouse_drag(mouse_pos: Vec2, delta: Vec2) -> Self {
        Self { delta, ..Self::new(EventKind::MouseDrag, mouse_pos) }
    }

    pub fn mouse_up(mouse_pos: Vec2) -> Self {
        Self::new(EventKind::MouseUp, mouse_pos)
    }

    pub fn key_down(key: Key) -> Self {
        Self { key: Some(key), ..Self::new(EventKind::KeyDown, Vec2::zero()) }
    }

    pub fn key_up(key: Key) -> Self {
        Self { key: Some(key), ..Self::new(EventKind::KeyUp, Vec2::zero()) }
    }

    pub fn scroll(mouse_pos: Vec2, delta: Vec2) -> Self {
        Self { delta, ..Self::new(EventKind::ScrollWheel, mouse_pos) }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[inline]
    pub fn is_used(&self) -> bool {
        self.kind == EventKind::Used
    }

    /// Marks the event consumed so later widgets in the same draw skip it.
    #[inline]
    pub fn consume(&mut self) {
        self.kind = EventKind::Used;
    }
}

// ── EventTranslator ───────────────────────────────────────────────────────

/// Folds engine [`InputEvent`]s into [`UiEvent`]s.
///
/// Keeps its own [`InputState`] so drags can be told apart from plain moves
/// and so key/button events can be stamped with the current pointer.
#[derive(Debug, Default)]
pub struct EventTranslator {
    state: InputState,
}

impl EventTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Last known pointer position.
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.state.pointer()
    }

    /// Translates one engine event; returns `None` for events the widget
    /// tree does not react to (focus, text, non-primary buttons, …).
    pub fn translate(&mut self, ev: InputEvent) -> Option<UiEvent> {
        let was_dragging = self.state.button_down(MouseButton::Left);
        let moved = self.state.apply_event(&ev);
        let pos = self.state.pointer();
        let modifiers = self.state.modifiers;

        let out = match ev {
            InputEvent::PointerMoved(_) if was_dragging => UiEvent::mouse_drag(pos, moved),
            InputEvent::PointerMoved(_) => UiEvent::mouse_move(pos),
            InputEvent::PointerButton(b) if b.button == MouseButton::Left => match b.state {
                MouseButtonState::Pressed => UiEvent::mouse_down(pos),
                MouseButtonState::Released => UiEvent::mouse_up(pos),
            },
            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => UiEvent { mouse_pos: pos, ..UiEvent::key_down(key) },
                KeyState::Released => UiEvent { mouse_pos: pos, ..UiEvent::key_up(key) },
            },
            InputEvent::MouseWheel { delta, .. } => {
                // Platform wheels report "up" as positive.
                let d = match delta {
                    MouseWheelDelta::Line { x, y } => Vec2::new(x, y) * WHEEL_LINE_PX,
                    MouseWheelDelta::Pixel { x, y } => Vec2::new(x, y),
                };
                UiEvent::scroll(pos, -d)
            }
            _ => return None,
        };

        Some(out.with_modifiers(modifiers))
    }
}
