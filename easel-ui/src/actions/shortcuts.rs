//! Shortcut table: action name to key combos.

use iced_core::keyboard::{self, Key, key::Named};
use indexmap::IndexMap;

use super::types::{KeyCombo, KeySpec, Modifiers};

/// Key combos bound to each action, in display-priority order.
#[derive(Debug, Clone, Default)]
pub struct ShortcutTable {
    bindings: IndexMap<&'static str, Vec<KeyCombo>>,
}

impl ShortcutTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default bindings for the built-in actions.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.bind("undo", KeyCombo::new(Modifiers::PRIMARY, KeySpec::char('z')));
        table.bind("redo", KeyCombo::new(Modifiers::PRIMARY_SHIFT, KeySpec::char('z')));
        table.bind("selectAll", KeyCombo::new(Modifiers::PRIMARY, KeySpec::char('a')));
        table.bind("deleteSelectedElements", KeyCombo::new(Modifiers::NONE, KeySpec::named(Named::Delete)));
        table.bind("deleteSelectedElements", KeyCombo::new(Modifiers::NONE, KeySpec::named(Named::Backspace)));
        table.bind("duplicateSelection", KeyCombo::new(Modifiers::PRIMARY, KeySpec::char('d')));
        table.bind("bringToFront", KeyCombo::new(Modifiers::PRIMARY_SHIFT, KeySpec::char(']')));
        table.bind("sendToBack", KeyCombo::new(Modifiers::PRIMARY_SHIFT, KeySpec::char('[')));
        table.bind("toggleElementLock", KeyCombo::new(Modifiers::PRIMARY_SHIFT, KeySpec::char('l')));
        table.bind("toggleGridMode", KeyCombo::new(Modifiers::PRIMARY, KeySpec::char('\'')));
        table.bind("toggleZenMode", KeyCombo::new(Modifiers::ALT, KeySpec::char('z')));
        table.bind("toggleViewMode", KeyCombo::new(Modifiers::ALT, KeySpec::char('r')));
        table
    }

    /// Add a binding. Earlier bindings win for display.
    pub fn bind(&mut self, name: &'static str, combo: KeyCombo) {
        self.bindings.entry(name).or_default().push(combo);
    }

    pub fn combos(&self, name: &str) -> &[KeyCombo] {
        self.bindings.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Display string of the first combo bound to `name`, or empty.
    pub fn shortcut_for(&self, name: &str) -> String {
        self.combos(name)
            .first()
            .map(KeyCombo::display)
            .unwrap_or_default()
    }

    /// Find the action bound to a key press.
    pub fn action_for_key(&self, key: &Key, modifiers: &keyboard::Modifiers) -> Option<&'static str> {
        self.bindings
            .iter()
            .find(|(_, combos)| combos.iter().any(|combo| combo.matches(key, modifiers)))
            .map(|(name, _)| *name)
    }
}
