//! Transient UI: overlay lifecycle for the context menu.
//!
//! At most one menu is open; showing a new one replaces the old.

use easel_api::MenuAnchor;

use crate::context_menu::{ContextMenu, ContextMenuItems};

pub(crate) struct TransientUi {
    context_menu: Option<ContextMenu>,
}

impl TransientUi {
    pub fn new() -> Self {
        Self { context_menu: None }
    }

    pub fn context_menu(&self) -> Option<&ContextMenu> {
        self.context_menu.as_ref()
    }

    pub fn show_context_menu(&mut self, anchor: MenuAnchor, items: ContextMenuItems) {
        self.context_menu = Some(ContextMenu::new(anchor, items));
    }

    pub fn dismiss_context_menu(&mut self) -> Option<ContextMenu> {
        self.context_menu.take()
    }

    /// Check if any transient overlay is currently visible.
    pub fn has_overlay(&self) -> bool {
        self.context_menu.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context_menu::MenuLiteral;

    fn anchor(top: f32, left: f32) -> MenuAnchor {
        MenuAnchor { top, left }
    }

    #[test]
    fn test_new_has_no_overlay() {
        let ui = TransientUi::new();
        assert!(ui.context_menu().is_none());
        assert!(!ui.has_overlay());
    }

    #[test]
    fn test_show_context_menu_stores_items() {
        let mut ui = TransientUi::new();
        let items = ContextMenuItems::new().item(MenuLiteral::Undo).separator();
        ui.show_context_menu(anchor(100.0, 200.0), items.clone());

        let menu = ui.context_menu().expect("menu should be present");
        assert_eq!(menu.anchor(), anchor(100.0, 200.0));
        assert_eq!(menu.items(), &items);
    }

    #[test]
    fn test_dismiss_when_already_empty() {
        let mut ui = TransientUi::new();
        assert!(ui.dismiss_context_menu().is_none()); // Should not panic
    }

    #[test]
    fn test_show_replaces_open_menu() {
        let mut ui = TransientUi::new();
        ui.show_context_menu(anchor(10.0, 20.0), ContextMenuItems::new());
        ui.show_context_menu(anchor(30.0, 40.0), ContextMenuItems::new());
        assert_eq!(ui.context_menu().unwrap().anchor(), anchor(30.0, 40.0));

        assert!(ui.dismiss_context_menu().is_some());
        assert!(!ui.has_overlay());
    }
}
