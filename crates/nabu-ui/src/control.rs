//! Pointer capture ("hot control") and key tracking.
//!
//! Only one control per window may hold the pointer at a time. The token
//! lives on [`crate::window::UiWindow`] and is threaded into every draw via
//! [`crate::context::DrawCx`].
//!
//! # How capture works
//!
//! 1. A control calls [`HotControl::interact`] with its id and rect each draw.
//! 2. Pointer-down over a hovered control claims the token.
//! 3. While the token is held, drag events report their delta to the holder
//!    only, even when the pointer leaves its rect.
//! 4. Pointer-up releases the token; a click is reported when the pointer is
//!    still over the control that held it.

use std::sync::atomic::{AtomicU64, Ordering};

use nabu_engine::coords::{Rect, Vec2};
use nabu_engine::input::Key;

use crate::event::{EventKind, UiEvent};
use crate::host::Host;

static NEXT_CONTROL_ID: AtomicU64 = AtomicU64::new(1);

// ── ControlId ─────────────────────────────────────────────────────────────

/// Unique identifier for an interactive node.
///
/// Allocated once when a node is constructed and stable for its lifetime.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ControlId(u64);

impl ControlId {
    /// Allocate a new, globally unique `ControlId`.
    pub fn next() -> Self {
        ControlId(NEXT_CONTROL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

// ── Interaction ───────────────────────────────────────────────────────────

/// What happened to one control during one event.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Interaction {
    /// Pointer is over the control and no other control holds the token.
    pub hovered: bool,
    /// Control holds the token after this event.
    pub captured: bool,
    /// Control claimed the token on this event.
    pub pressed: bool,
    /// Control released the token on this event.
    pub released: bool,
    /// Pressed and released over the control.
    pub clicked: bool,
    /// Pointer motion while captured.
    pub drag: Option<Vec2>,
}

// ── HotControl ────────────────────────────────────────────────────────────

/// The per-window capture token.
#[derive(Debug, Default)]
pub struct HotControl {
    active: Option<ControlId>,
}

impl HotControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// The control currently holding the pointer, if any.
    #[inline]
    pub fn active(&self) -> Option<ControlId> {
        self.active
    }

    #[inline]
    pub fn is_captured(&self, id: ControlId) -> bool {
        self.active == Some(id)
    }

    /// Claims the token for `id`. Fails when another control holds it.
    pub fn capture(&mut self, id: ControlId) -> bool {
        match self.active {
            Some(other) if other != id => false,
            _ => {
                self.active = Some(id);
                true
            }
        }
    }

    /// Releases the token if `id` holds it.
    pub fn release(&mut self, id: ControlId) -> bool {
        if self.active == Some(id) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Drops any capture, e.g. when the pointer leaves the window.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Runs the capture state machine for `id` over `rect`.
    pub fn interact(
        &mut self,
        id: ControlId,
        rect: Rect,
        event: &UiEvent,
        host: &mut dyn Host,
    ) -> Interaction {
        let free_or_mine = self.active.is_none_or(|a| a == id);
        let mut out = Interaction {
            hovered: free_or_mine && rect.contains(event.mouse_pos),
            captured: self.active == Some(id),
            ..Interaction::default()
        };

        match event.kind {
            EventKind::MouseDown if out.hovered => {
                self.active = Some(id);
                out.captured = true;
                out.pressed = true;
                host.request_repaint();
            }
            EventKind::MouseDrag if out.captured => {
                out.drag = Some(event.delta);
            }
            EventKind::MouseUp if out.hovered || out.captured => {
                out.clicked = out.hovered && out.captured;
                if out.captured {
                    self.active = None;
                    out.released = true;
                }
                out.captured = false;
                host.request_repaint();
            }
            _ => {}
        }

        out
    }
}

// ── KeyTracker ────────────────────────────────────────────────────────────

/// Remembers the most recent key held down, for drag modifiers.
#[derive(Debug, Copy, Clone, Default)]
pub struct KeyTracker {
    current: Option<Key>,
}

impl KeyTracker {
    pub fn observe(&mut self, event: &UiEvent) {
        match event.kind {
            EventKind::KeyDown => self.current = event.key,
            EventKind::KeyUp => self.current = None,
            _ => {}
        }
    }

    #[inline]
    pub fn current(&self) -> Option<Key> {
        self.current
    }

    #[inline]
    pub fn is_held(&self, key: Key) -> bool {
        self.current == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::painter::Painter;

    fn button_rect() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 20.0)
    }

    fn at(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn control_ids_are_unique() {
        assert_ne!(ControlId::next(), ControlId::next());
    }

    #[test]
    fn press_inside_claims_token() {
        let mut hot = HotControl::new();
        let mut host = Painter::new();
        let id = ControlId::next();

        let i = hot.interact(id, button_rect(), &UiEvent::mouse_down(at(10.0, 10.0)), &mut host);
        assert!(i.pressed && i.captured && i.hovered);
        assert_eq!(hot.active(), Some(id));
        assert_eq!(host.repaint_requests(), 1);
    }

    #[test]
    fn press_outside_does_nothing() {
        let mut hot = HotControl::new();
        let mut host = Painter::new();
        let id = ControlId::next();

        let i = hot.interact(id, button_rect(), &UiEvent::mouse_down(at(200.0, 10.0)), &mut host);
        assert_eq!(i, Interaction::default());
        assert_eq!(hot.active(), None);
    }

    #[test]
    fn other_control_cannot_hover_while_captured() {
        let mut hot = HotControl::new();
        let mut host = Painter::new();
        let a = ControlId::next();
        let b = ControlId::next();

        hot.interact(a, button_rect(), &UiEvent::mouse_down(at(10.0, 10.0)), &mut host);
        let i = hot.interact(b, button_rect(), &UiEvent::mouse_down(at(10.0, 10.0)), &mut host);
        assert!(!i.hovered && !i.pressed);
        assert_eq!(hot.active(), Some(a));
    }

    #[test]
    fn drag_reports_delta_only_to_holder() {
        let mut hot = HotControl::new();
        let mut host = Painter::new();
        let a = ControlId::next();
        let b = ControlId::next();

        hot.interact(a, button_rect(), &UiEvent::mouse_down(at(10.0, 10.0)), &mut host);
        let drag = UiEvent::mouse_drag(at(300.0, 10.0), at(290.0, 0.0));
        assert_eq!(hot.interact(a, button_rect(), &drag, &mut host).drag, Some(at(290.0, 0.0)));
        assert_eq!(hot.interact(b, button_rect(), &drag, &mut host).drag, None);
    }

    #[test]
    fn release_outside_frees_token_without_click() {
        let mut hot = HotControl::new();
        let mut host = Painter::new();
        let id = ControlId::next();

        hot.interact(id, button_rect(), &UiEvent::mouse_down(at(10.0, 10.0)), &mut host);
        let i = hot.interact(id, button_rect(), &UiEvent::mouse_up(at(500.0, 500.0)), &mut host);
        assert!(i.released);
        assert!(!i.clicked);
        assert_eq!(hot.active(), None);
    }

    #[test]
    fn release_inside_clicks() {
        let mut hot = HotControl::new();
        let mut host = Painter::new();
        let id = ControlId::next();

        hot.interact(id, button_rect(), &UiEvent::mouse_down(at(10.0, 10.0)), &mut host);
        let i = hot.interact(id, button_rect(), &UiEvent::mouse_up(at(20.0, 5.0)), &mut host);
        assert!(i.clicked && i.released);
        assert!(!i.captured);
    }

    #[test]
    fn release_without_press_is_not_a_click() {
        let mut hot = HotControl::new();
        let mut host = Painter::new();
        let id = ControlId::next();

        let i = hot.interact(id, button_rect(), &UiEvent::mouse_up(at(20.0, 5.0)), &mut host);
        assert!(!i.clicked && !i.released);
    }

    #[test]
    fn capture_and_release_are_exclusive() {
        let mut hot = HotControl::new();
        let a = ControlId::next();
        let b = ControlId::next();

        assert!(hot.capture(a));
        assert!(!hot.capture(b));
        assert!(!hot.release(b));
        assert!(hot.release(a));
        assert!(hot.capture(b));
    }

    #[test]
    fn key_tracker_follows_down_and_up() {
        let mut keys = KeyTracker::default();
        keys.observe(&UiEvent::key_down(Key::Alt));
        assert!(keys.is_held(Key::Alt));
        keys.observe(&UiEvent::mouse_down(at(0.0, 0.0)));
        assert_eq!(keys.current(), Some(Key::Alt));
        keys.observe(&UiEvent::key_up(Key::Alt));
        assert_eq!(keys.current(), None);
    }
}
