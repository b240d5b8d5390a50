//! Application state snapshot handed to predicates and labels.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::ElementId;

/// Where an open context menu is anchored, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MenuAnchor {
    pub top: f32,
    pub left: f32,
}

/// Live editor state. Read-only from the context menu's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Selected elements, in selection order.
    pub selected_element_ids: IndexSet<ElementId>,
    /// Canvas offset within the window.
    pub offset_left: f32,
    pub offset_top: f32,
    /// Canvas viewport size.
    pub width: f32,
    pub height: f32,
    /// Set while a context menu is open.
    pub context_menu: Option<MenuAnchor>,
    pub grid_mode_enabled: bool,
    pub view_mode_enabled: bool,
    pub zen_mode_enabled: bool,
    /// Transient status message.
    pub toast: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selected_element_ids: IndexSet::new(),
            offset_left: 0.0,
            offset_top: 0.0,
            width: 1024.0,
            height: 768.0,
            context_menu: None,
            grid_mode_enabled: false,
            view_mode_enabled: false,
            zen_mode_enabled: false,
            toast: None,
        }
    }
}

impl AppState {
    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected_element_ids.contains(id)
    }

    pub fn select(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        self.selected_element_ids = ids.into_iter().collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected_element_ids.clear();
    }
}

/// Props supplied by the embedding host. `Some` means the host controls the
/// setting and the user cannot toggle it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppProps {
    pub grid_mode_enabled: Option<bool>,
    pub view_mode_enabled: Option<bool>,
    pub zen_mode_enabled: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub is_mobile: bool,
    pub is_touch_screen: bool,
}

/// Application-level context that is neither document nor host props.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppContext {
    pub device: Device,
    pub theme: Theme,
}
