/// Layout constants shared by every widget in a window.
///
/// The defaults match the editor look the widgets were designed for.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Metrics {
    /// Cross-axis space reserved for the scrollbar of a scrolling layout.
    pub scrollbar_allowance: f32,
    /// Thickness of a split view's drag handle.
    pub split_handle: f32,
    /// Row height of property editors.
    pub field_height: f32,
    /// Per-level indentation of nested property rows.
    pub indent: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            scrollbar_allowance: 15.0,
            split_handle: 8.0,
            field_height: 16.0,
            indent: 10.0,
        }
    }
}

impl Metrics {
    pub fn scrollbar_allowance(mut self, v: f32) -> Self { self.scrollbar_allowance = v; self }
    pub fn split_handle(mut self, v: f32) -> Self { self.split_handle = v; self }
    pub fn field_height(mut self, v: f32) -> Self { self.field_height = v; self }
    pub fn indent(mut self, v: f32) -> Self { self.indent = v; self }
}

/// Window-level configuration.
///
/// ```rust,ignore
/// let config = WindowConfig::new("Inspector")
///     .metrics(Metrics::default().split_handle(6.0));
/// let window = UiWindow::with_config(config, root)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub metrics: Metrics,
}

impl WindowConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), metrics: Metrics::default() }
    }

    pub fn metrics(mut self, v: Metrics) -> Self { self.metrics = v; self }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new("Nabu")
    }
}
