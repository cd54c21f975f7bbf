//! Field-by-field editor for a JSON value.
//!
//! Every field of the edited object (or element of an array) gets one row:
//! its name in the left half, an editor in the right half. Nested objects
//! and arrays take a header row and continue one indent deeper.
//!
//! | value    | editor                 |
//! |----------|------------------------|
//! | bool     | toggle                 |
//! | number   | number field           |
//! | string   | text field             |
//! | null     | read-only `null` label |
//! | object   | nested rows            |
//! | array    | nested rows, by index  |

use nabu_engine::coords::{Rect, Vec2};
use nabu_engine::scene::Content;
use serde_json::{Number, Value};

use crate::context::DrawCx;
use crate::declare::Decl;
use crate::effects::Effects;
use crate::host::Host;
use crate::metrics::Metrics;
use crate::node::NodeCx;
use crate::widget::Widget;

/// Number of rows `value` takes in a property editor.
///
/// A scalar at the root is a single unlabeled row.
pub fn row_count(value: &Value) -> usize {
    if is_container(value) { nested_rows(value) } else { 1 }
}

fn nested_rows(value: &Value) -> usize {
    let field = |v: &Value| 1 + nested_rows(v);
    match value {
        Value::Object(map) => map.values().map(field).sum(),
        Value::Array(items) => items.iter().map(field).sum(),
        _ => 0,
    }
}

fn is_container(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

/// Keeps integers integral when the edit allows it.
fn edited_number(old: &Number, new: f64) -> Option<Number> {
    let integral = old.is_i64() || old.is_u64();
    if integral && new.fract() == 0.0 && new >= i64::MIN as f64 && new <= i64::MAX as f64 {
        Some(Number::from(new as i64))
    } else {
        Number::from_f64(new)
    }
}

pub struct PropertyEditor {
    decl: Decl,
    value: Value,
    field_height: Option<f32>,
    adaptive: bool,
    on_change: Option<Box<dyn FnMut(&mut Effects, &Value)>>,
}

impl PropertyEditor {
    /// Edits `value`; adaptive height is on.
    pub fn new(value: Value) -> Self {
        Self { decl: Decl::default(), value, field_height: None, adaptive: true, on_change: None }
    }

    /// Row height; `Metrics::field_height` when unset.
    pub fn field_height(mut self, h: f32) -> Self {
        self.field_height = Some(h);
        self
    }

    /// Size the editor's height to its rows.
    pub fn adaptive(mut self, v: bool) -> Self {
        self.adaptive = v;
        self
    }

    /// Called with the whole edited value after any field changes.
    pub fn on_change(mut self, f: impl FnMut(&mut Effects, &Value) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    fn row_height(&self, metrics: &Metrics) -> f32 {
        self.field_height.unwrap_or(metrics.field_height)
    }
}

impl Widget for PropertyEditor {
    fn decl_mut(&mut self) -> &mut Decl {
        &mut self.decl
    }

    fn draw(&mut self, node: NodeCx, cx: &mut DrawCx<'_>, rect: Rect) {
        let mut rows = Rows {
            host: &mut *cx.host,
            area: rect,
            height: self.row_height(cx.metrics),
            indent: cx.metrics.indent,
            enabled: node.enabled,
            next: 0,
        };

        rows.host.push_clip(rect);
        let changed = if is_container(&self.value) {
            rows.fields(0, &mut self.value)
        } else {
            rows.field(0, "", &mut self.value)
        };
        rows.host.pop_clip();

        if changed {
            if let Some(f) = self.on_change.as_mut() {
                f(&mut *cx.effects, &self.value);
            }
        }
    }

    fn layout_size(&self, declared: Vec2, metrics: &Metrics) -> Vec2 {
        if !self.adaptive {
            return declared;
        }
        Vec2::new(declared.x, row_count(&self.value) as f32 * self.row_height(metrics))
    }
}

/// Row cursor for one draw.
struct Rows<'h> {
    host: &'h mut dyn Host,
    area: Rect,
    height: f32,
    indent: f32,
    enabled: bool,
    next: usize,
}

impl Rows<'_> {
    fn fields(&mut self, depth: usize, value: &mut Value) -> bool {
        let mut changed = false;
        match value {
            Value::Object(map) => {
                for (key, v) in map.iter_mut() {
                    changed |= self.field(depth, key, v);
                }
            }
            Value::Array(items) => {
                for (i, v) in items.iter_mut().enumerate() {
                    changed |= self.field(depth, &i.to_string(), v);
                }
            }
            _ => {}
        }
        changed
    }

    fn field(&mut self, depth: usize, name: &str, value: &mut Value) -> bool {
        let indent = depth as f32 * self.indent;
        let half = self.area.width() / 2.0;
        let y = self.area.y() + self.next as f32 * self.height;
        self.next += 1;

        let label = Rect::new(self.area.x() + indent, y, (half - indent).max(0.0), self.height);
        let editor = Rect::new(self.area.x() + half, y, half, self.height);
        self.host.label(label, name);

        match value {
            Value::Null => {
                self.host.label(editor, "null");
                false
            }
            Value::Bool(b) => {
                let new = self.host.toggle(editor, *b, &Content::none());
                self.commit(b, new)
            }
            Value::Number(n) => {
                let old = n.as_f64().unwrap_or(0.0);
                let new = self.host.number_field(editor, old);
                if !self.enabled || new == old {
                    return false;
                }
                match edited_number(n, new) {
                    Some(num) => {
                        *n = num;
                        true
                    }
                    None => false,
                }
            }
            Value::String(s) => {
                let new = self.host.text_field(editor, s);
                self.commit(s, new)
            }
            Value::Object(_) | Value::Array(_) => self.fields(depth + 1, value),
        }
    }

    fn commit<T: PartialEq>(&self, slot: &mut T, new: T) -> bool {
        if !self.enabled || *slot == new {
            return false;
        }
        *slot = new;
        true
    }
}
