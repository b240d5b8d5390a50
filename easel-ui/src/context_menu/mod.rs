//! Context menu: item resolution, formatting, placement and dispatch.
//!
//! Rendering a menu is a pure function of the raw item list and the current
//! document; nothing is cached between renders. Committing an entry goes
//! through [`dispatch::commit`], which closes the menu before the entry's
//! effect runs.

pub mod affordance;
pub mod dispatch;
pub mod format;
pub mod items;
pub mod popover;
pub mod resolve;

use easel_api::{AppContext, AppProps, AppState, Element, MenuAnchor};

use crate::actions::ShortcutTable;
use crate::config::MenuConfig;
use crate::i18n::Translate;

pub use dispatch::{MenuCommit, MenuEffect, MenuHost};
pub use items::{ContextMenuItem, ContextMenuItems, MenuLiteral};
pub use popover::{Placement, PopoverEvent, Viewport};

/// Everything a render reads.
pub struct MenuView<'a> {
    pub elements: &'a [Element],
    pub app_state: &'a AppState,
    pub props: &'a AppProps,
    pub context: &'a AppContext,
    pub translator: &'a dyn Translate,
    pub shortcuts: &'a ShortcutTable,
    pub config: &'a MenuConfig,
}

/// A clickable row.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub label: String,
    pub shortcut: String,
    pub checked: bool,
    pub dangerous: bool,
    /// The action name, for UI tests.
    pub test_id: Option<&'static str>,
    pub commit: MenuCommit,
}

/// One rendered row. Separators carry no commit.
#[derive(Debug, Clone)]
pub enum MenuRow {
    Separator,
    Entry(MenuEntry),
}

impl MenuRow {
    pub fn entry(&self) -> Option<&MenuEntry> {
        match self {
            Self::Entry(entry) => Some(entry),
            Self::Separator => None,
        }
    }

    pub fn label(&self) -> &str {
        self.entry().map(|entry| entry.label.as_str()).unwrap_or("")
    }
}

/// An open context menu: where it was requested and what it may show.
#[derive(Debug, Clone)]
pub struct ContextMenu {
    anchor: MenuAnchor,
    items: ContextMenuItems,
}

impl ContextMenu {
    pub fn new(anchor: MenuAnchor, items: ContextMenuItems) -> Self {
        Self { anchor, items }
    }

    pub fn anchor(&self) -> MenuAnchor {
        self.anchor
    }

    pub fn items(&self) -> &ContextMenuItems {
        &self.items
    }

    /// Resolve and format the rows for the current state.
    pub fn rows(&self, view: &MenuView<'_>) -> Vec<MenuRow> {
        let resolved = resolve::resolve_items(
            self.items.as_slice(),
            view.elements,
            view.app_state,
            view.props,
            view.context,
        );

        let mut rows = Vec::with_capacity(resolved.len() + 1);

        if let Some(text) = affordance::selected_text_element(view.elements, view.app_state) {
            rows.push(MenuRow::Entry(MenuEntry {
                label: view.translator.translate(affordance::INSERT_DATE_LABEL_KEY),
                shortcut: String::new(),
                checked: false,
                dangerous: false,
                test_id: None,
                commit: MenuCommit::InsertCurrentDate(text.id.clone()),
            }));
        }

        for item in &resolved {
            let Some(commit) = MenuCommit::for_item(item) else {
                rows.push(MenuRow::Separator);
                continue;
            };
            rows.push(MenuRow::Entry(MenuEntry {
                label: format::label_of(item, view.elements, view.app_state, view.context, view.translator),
                shortcut: format::shortcut_of(item, view.shortcuts),
                checked: format::is_checked(item, view.app_state),
                dangerous: format::is_dangerous(item, view.config),
                test_id: item.action().map(|action| action.name.as_str()),
                commit,
            }));
        }

        rows
    }

    pub fn placement(&self, rows: &[MenuRow], view: &MenuView<'_>) -> Placement {
        popover::place(self.anchor, rows, &Viewport::of(view.app_state), view.config)
    }
}
