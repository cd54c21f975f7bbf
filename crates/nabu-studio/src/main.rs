//! Headless component editor.
//!
//! Builds the component-editor window (database list with a 3D preview, a
//! new-component form and a property editor), then replays a short scripted
//! session against the recording painter and logs what happened.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::Context;
use serde_json::{json, Value};

use nabu_engine::logging::{init_logging, LoggingConfig};
use nabu_ui::prelude::*;

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);
const ROW: f32 = 24.0;

/// Component database shared between callbacks.
#[derive(Debug)]
struct Database {
    components: Vec<Value>,
    selected: Option<usize>,
}

impl Database {
    fn sample() -> Self {
        Self {
            components: vec![
                json!({
                    "name": "Light Tank",
                    "hp": 320,
                    "armor": { "front": 40, "side": 20 },
                    "amphibious": false,
                }),
                json!({
                    "name": "Scout Drone",
                    "hp": 60,
                    "armor": { "front": 2, "side": 2 },
                    "amphibious": true,
                }),
                json!({
                    "name": "Artillery",
                    "hp": 180,
                    "armor": { "front": 10, "side": 8 },
                    "amphibious": false,
                }),
            ],
            selected: None,
        }
    }
}

type Shared = Rc<RefCell<Database>>;

/// Tab indices of the page switcher (0 is the database list).
mod page {
    pub const NEW: usize = 1;
    pub const EDIT: usize = 2;
}

fn database_page(db: &Shared, tabs: &Rc<Cell<Option<NodeId>>>) -> LinearLayout {
    let names: Vec<String> = db
        .borrow()
        .components
        .iter()
        .map(|c| c["name"].as_str().unwrap_or("?").to_string())
        .collect();

    let rows = names.into_iter().enumerate().map(|(i, name)| {
        let db = db.clone();
        let tabs = tabs.clone();
        Button::new()
            .height(ROW)
            .child(Text::new(name))
            .on_click(move |fx| {
                let value = {
                    let mut db = db.borrow_mut();
                    db.selected = Some(i);
                    db.components[i].clone()
                };
                let Some(tabs) = tabs.get() else { return };
                fx.defer(move |tree| {
                    if let Some(editor) = tree.find::<PropertyEditor>(tabs, "objEdit") {
                        if let Some(e) = tree.get_mut::<PropertyEditor>(editor) {
                            e.set_value(value);
                        }
                    }
                });
                fx.activate_tab(tabs, page::EDIT);
            })
    });

    let model = PreviewModel::new(MeshId(1), MaterialId(1));

    LinearLayout::vertical().child(
        SplitView::horizontal()
            .relative_size(true)
            .height(1.0)
            .child(LinearLayout::vertical().enable_scroll(true).children(rows))
            .child(Preview::new().models(vec![model]).tag("preview")),
    )
}

fn new_component_page(db: &Shared) -> LinearLayout {
    let name = Rc::new(RefCell::new(String::new()));
    let typed = name.clone();
    let db = db.clone();

    LinearLayout::vertical()
        .child(Text::new("Name").height(ROW))
        .child(
            TextInput::new("")
                .height(ROW)
                .on_change(move |_, v| *typed.borrow_mut() = v.to_string()),
        )
        .child(Text::new("Prefab").height(ROW))
        .child(
            ObjectField::new()
                .asset_type("Prefab")
                .validate(|_, picked| picked.is_none_or(|a| !a.name.is_empty())),
        )
        .child(Button::new().height(ROW).child(Text::new("Create")).on_click(move |_| {
            let name = name.borrow().clone();
            if name.is_empty() {
                log::warn!("create: component needs a name");
                return;
            }
            db.borrow_mut().components.push(json!({ "name": name, "hp": 100 }));
            log::info!("created component {name:?}");
        }))
}

fn edit_page(db: &Shared) -> LinearLayout {
    let db = db.clone();
    LinearLayout::vertical().enable_scroll(true).child(
        PropertyEditor::new(Value::Null).tag("objEdit").on_change(move |_, v| {
            let mut db = db.borrow_mut();
            if let Some(i) = db.selected {
                log::info!("component {i} edited: {v}");
                db.components[i] = v.clone();
            }
        }),
    )
}

fn build(db: &Shared) -> (LinearLayout, Rc<Cell<Option<NodeId>>>) {
    let tabs = Rc::new(Cell::new(None));
    let toolbar_tabs = tabs.clone();

    let root = LinearLayout::vertical()
        .child(Toolbar::new(["Database", "New Component", "Edit Component"]).height(20.0).on_change(
            move |fx, i| {
                if let Some(tabs) = toolbar_tabs.get() {
                    fx.activate_tab(tabs, i);
                }
            },
        ))
        .child(
            SwitchTab::new()
                .tag("pages")
                .relative_size(true)
                .height(1.0)
                .child(database_page(db, &tabs))
                .child(new_component_page(db))
                .child(edit_page(db)),
        );
    (root, tabs)
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let db: Shared = Rc::new(RefCell::new(Database::sample()));
    let (root, tabs) = build(&db);

    let mut window = UiWindow::with_config(WindowConfig::new("Component Editor"), root)?;
    let pages = window
        .tree()
        .find::<SwitchTab>(window.root(), "pages")
        .context("page switcher missing")?;
    tabs.set(Some(pages));

    let mut host = Painter::new();
    let built = window.construct(&mut host);
    log::info!(
        "{}: constructed {built} node(s), {} preview(s)",
        window.title(),
        host.live_previews()
    );

    host.begin_frame();
    window.repaint(&mut host, VIEWPORT);
    log::info!("database page: {:?}", host.labels());

    // Orbit the preview: the right pane starts past the list and the handle.
    let preview_at = Vec2::new(300.0, 150.0);
    for ev in [
        UiEvent::mouse_down(preview_at),
        UiEvent::mouse_drag(preview_at + Vec2::new(45.0, 9.0), Vec2::new(45.0, 9.0)),
        UiEvent::mouse_up(preview_at + Vec2::new(45.0, 9.0)),
    ] {
        host.begin_frame();
        window.frame(&mut host, VIEWPORT, ev);
    }
    let preview = window
        .tree()
        .find::<Preview>(window.root(), "preview")
        .context("preview missing")?;
    if let Some(cam) = host.last_camera() {
        log::info!("preview {preview:?} camera at {:?}", cam.position);
    }

    // Pick the second component; its row sits under the toolbar.
    let row = Vec2::new(20.0, 20.0 + ROW * 1.5);
    for ev in [UiEvent::mouse_down(row), UiEvent::mouse_up(row)] {
        host.begin_frame();
        let out = window.frame(&mut host, VIEWPORT, ev);
        log::debug!("{ev:?} -> {out:?}");
    }
    let active = window.tree().get::<SwitchTab>(pages).map(SwitchTab::active_tab);
    log::info!("active page after pick: {active:?}");

    // Edit the first number field (armor.front) of the picked component.
    host.script_number(3.0);
    host.begin_frame();
    window.repaint(&mut host, VIEWPORT);
    log::info!("edit page: {:?}", host.labels());

    // Over to the new-component form.
    host.script_toolbar(page::NEW);
    host.begin_frame();
    window.repaint(&mut host, VIEWPORT);
    host.script_text("Harvester");
    host.begin_frame();
    window.repaint(&mut host, VIEWPORT);

    let create = Vec2::new(20.0, 20.0 + ROW * 3.0 + 16.0 + ROW / 2.0);
    for ev in [UiEvent::mouse_down(create), UiEvent::mouse_up(create)] {
        host.begin_frame();
        window.frame(&mut host, VIEWPORT, ev);
    }

    let db = db.borrow();
    log::info!("{} component(s); selected {:?}", db.components.len(), db.selected);
    for c in &db.components {
        log::info!("  {c}");
    }

    let released = window.disable(&mut host);
    log::info!("disabled {released} node(s); live previews: {}", host.live_previews());
    Ok(())
}
