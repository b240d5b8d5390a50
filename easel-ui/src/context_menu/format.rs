//! Label and shortcut formatting for menu entries.

use easel_api::{AppContext, AppState, Element};

use crate::actions::{KeyCombo, KeySpec, Modifiers, ShortcutTable};
use crate::config::MenuConfig;
use crate::i18n::Translate;

use super::items::{ContextMenuItem, MenuLiteral};

pub const UNDO_LABEL_KEY: &str = "buttons.undo";
pub const REDO_LABEL_KEY: &str = "buttons.redo";

pub const UNDO_SHORTCUT: KeyCombo = KeyCombo::new(Modifiers::PRIMARY, KeySpec::char('z'));
pub const REDO_SHORTCUT: KeyCombo = KeyCombo::new(Modifiers::PRIMARY_SHIFT, KeySpec::char('z'));

/// Display label of an entry. Actions without a label render empty.
pub fn label_of(
    item: &ContextMenuItem,
    elements: &[Element],
    state: &AppState,
    ctx: &AppContext,
    translator: &dyn Translate,
) -> String {
    match item {
        ContextMenuItem::Literal(MenuLiteral::Undo) => translator.translate(UNDO_LABEL_KEY),
        ContextMenuItem::Literal(MenuLiteral::Redo) => translator.translate(REDO_LABEL_KEY),
        ContextMenuItem::Literal(MenuLiteral::Separator) => String::new(),
        ContextMenuItem::Action(action) => action
            .label_key(elements, state, ctx)
            .map(|key| translator.translate(key))
            .unwrap_or_default(),
    }
}

/// Shortcut hint of an entry, or empty.
pub fn shortcut_of(item: &ContextMenuItem, shortcuts: &ShortcutTable) -> String {
    match item {
        ContextMenuItem::Literal(MenuLiteral::Undo) => UNDO_SHORTCUT.display(),
        ContextMenuItem::Literal(MenuLiteral::Redo) => REDO_SHORTCUT.display(),
        ContextMenuItem::Literal(MenuLiteral::Separator) => String::new(),
        ContextMenuItem::Action(action) => shortcuts.shortcut_for(action.name.as_str()),
    }
}

pub fn is_checked(item: &ContextMenuItem, state: &AppState) -> bool {
    item.action().is_some_and(|action| action.is_checked(state))
}

pub fn is_dangerous(item: &ContextMenuItem, config: &MenuConfig) -> bool {
    item.action()
        .is_some_and(|action| config.is_dangerous(action.name.as_str()))
}
