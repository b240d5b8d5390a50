//! Easel context menu demo.
//!
//! Builds a small drawing, opens the canvas and element menus, prints what
//! they render, and commits a few entries.

use anyhow::Result;
use easel_api::{Element, ElementId, ElementKind, Scene};
use easel_ui::context_menu::MenuRow;
use easel_ui::{Document, Editor, MenuConfig};
use tracing_subscriber::EnvFilter;

fn print_menu(title: &str, editor: &Editor) {
    println!("{}", title);
    if let Some(placement) = editor.context_menu_placement() {
        println!(
            "  at ({:.0}, {:.0}) size {:.0}x{:.0}",
            placement.position.x, placement.position.y, placement.size.width, placement.size.height
        );
    }
    for (i, row) in editor.context_menu_rows().iter().enumerate() {
        match row {
            MenuRow::Separator => println!("  {:>2} ─────────", i),
            MenuRow::Entry(entry) => println!(
                "  {:>2} {}{:<24} {}{}",
                i,
                if entry.checked { "✓ " } else { "  " },
                entry.label,
                entry.shortcut,
                if entry.dangerous { "  (dangerous)" } else { "" },
            ),
        }
    }
}

fn main() -> Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = MenuConfig::load_default().unwrap_or_else(|e| {
        tracing::warn!("Failed to load menu config: {:#}", e);
        MenuConfig::default()
    });
    let locale = config.locale()?;

    let scene = Scene::new(vec![
        Element::new("box", ElementKind::Rectangle).with_bounds(40.0, 40.0, 120.0, 80.0),
        Element::text("note", "Meeting notes").with_bounds(200.0, 60.0, 160.0, 40.0),
    ]);
    let mut editor = Editor::new(Document::new(scene), config).with_locale(locale);

    tracing::info!("Starting Easel context menu demo");

    editor.open_context_menu_at(300.0, 980.0, None);
    print_menu("Canvas menu:", &editor);
    // Show grid
    editor.commit_row(5)?;

    let note = ElementId::new("note");
    editor.open_context_menu_at(70.0, 210.0, Some(&note));
    print_menu("Text element menu:", &editor);
    // Insert current date
    editor.commit_row(0)?;

    if let Some(text) = editor.document().scene.get(&note).and_then(Element::as_text) {
        println!("Note now reads: {:?}", text.text);
    }
    println!("Grid enabled: {}", editor.document().app_state.grid_mode_enabled);

    editor.document_mut().app_state.clear_selection();
    editor.open_context_menu_at(300.0, 500.0, None);
    // Undo
    editor.commit_row(0)?;
    if let Some(text) = editor.document().scene.get(&note).and_then(Element::as_text) {
        println!("After undo: {:?}", text.text);
    }

    Ok(())
}
