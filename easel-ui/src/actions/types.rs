//! Core types for the Action system.

use std::fmt;

use easel_api::{AppContext, AppProps, AppState, Element};
use iced_core::keyboard::{self, Key};

use crate::document::Document;

/// Unique identifier for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionName(pub &'static str);

impl ActionName {
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The UI surface an action was invoked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionSource {
    ContextMenu,
    Keyboard,
    Ui,
    Api,
}

impl ActionSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ContextMenu => "contextMenu",
            Self::Keyboard => "keyboard",
            Self::Ui => "ui",
            Self::Api => "api",
        }
    }
}

impl fmt::Display for ActionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyboard modifiers for key combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub cmd: bool,  // Command on macOS, Super/Win on other platforms
}

impl Modifiers {
    pub const NONE: Self = Self { ctrl: false, alt: false, shift: false, cmd: false };
    pub const CMD: Self = Self { ctrl: false, alt: false, shift: false, cmd: true };
    pub const CTRL: Self = Self { ctrl: true, alt: false, shift: false, cmd: false };
    pub const ALT: Self = Self { ctrl: false, alt: true, shift: false, cmd: false };
    pub const SHIFT: Self = Self { ctrl: false, alt: false, shift: true, cmd: false };

    /// Cmd on macOS, Ctrl elsewhere.
    pub const PRIMARY: Self = if cfg!(target_os = "macos") { Self::CMD } else { Self::CTRL };
    pub const PRIMARY_SHIFT: Self = Self { shift: true, ..Self::PRIMARY };

    /// Check if these modifiers match the iced keyboard modifiers.
    pub fn matches(&self, iced_mods: &keyboard::Modifiers) -> bool {
        self.ctrl == iced_mods.control()
            && self.alt == iced_mods.alt()
            && self.shift == iced_mods.shift()
            && self.cmd == iced_mods.logo()
    }
}

/// A key combination (modifiers + key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    pub key: KeySpec,
}

impl KeyCombo {
    pub const fn new(modifiers: Modifiers, key: KeySpec) -> Self {
        Self { modifiers, key }
    }

    /// Check if this combo matches a key press event.
    pub fn matches(&self, key: &Key, modifiers: &keyboard::Modifiers) -> bool {
        self.modifiers.matches(modifiers) && self.key.matches(key)
    }

    /// Format for display (e.g., "⌘Z", "Ctrl+Shift+Z").
    pub fn display(&self) -> String {
        let mut result = String::new();

        #[cfg(target_os = "macos")]
        {
            if self.modifiers.ctrl { result.push('⌃'); }
            if self.modifiers.alt { result.push('⌥'); }
            if self.modifiers.shift { result.push('⇧'); }
            if self.modifiers.cmd { result.push('⌘'); }
        }

        #[cfg(not(target_os = "macos"))]
        {
            if self.modifiers.ctrl { result.push_str("Ctrl+"); }
            if self.modifiers.alt { result.push_str("Alt+"); }
            if self.modifiers.shift { result.push_str("Shift+"); }
            if self.modifiers.cmd { result.push_str("Super+"); }
        }

        result.push_str(&self.key.display());
        result
    }
}

/// A key to match: a character or a named key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySpec {
    Char(char),
    Named(keyboard::key::Named),
}

impl KeySpec {
    pub const fn char(c: char) -> Self {
        Self::Char(c)
    }

    pub const fn named(n: keyboard::key::Named) -> Self {
        Self::Named(n)
    }

    pub fn matches(&self, key: &Key) -> bool {
        match (self, key) {
            (KeySpec::Char(c), Key::Character(s)) => {
                let pressed = s.to_lowercase().chars().next();
                pressed == Some(c.to_ascii_lowercase()) || pressed.is_some_and(|p| shifted(*c) == Some(p))
            }
            (KeySpec::Named(n), Key::Named(key_named)) => n == key_named,
            _ => false,
        }
    }

    pub fn display(&self) -> String {
        match self {
            KeySpec::Char(c) => c.to_uppercase().to_string(),
            KeySpec::Named(n) => match n {
                keyboard::key::Named::Escape => "Esc".to_string(),
                keyboard::key::Named::Enter => "↩".to_string(),
                keyboard::key::Named::Backspace => "⌫".to_string(),
                keyboard::key::Named::Delete => "Delete".to_string(),
                keyboard::key::Named::ArrowUp => "↑".to_string(),
                keyboard::key::Named::ArrowDown => "↓".to_string(),
                keyboard::key::Named::ArrowLeft => "←".to_string(),
                keyboard::key::Named::ArrowRight => "→".to_string(),
                keyboard::key::Named::Space => "Space".to_string(),
                other => format!("{:?}", other),
            },
        }
    }
}

/// The character a US layout produces for `c` with Shift held. Shifted
/// punctuation arrives as its own character, so `Shift+]` reports `}`.
fn shifted(c: char) -> Option<char> {
    let shifted = match c {
        '[' => '{',
        ']' => '}',
        ';' => ':',
        '\'' => '"',
        ',' => '<',
        '.' => '>',
        '/' => '?',
        '\\' => '|',
        '-' => '_',
        '=' => '+',
        '`' => '~',
        '1' => '!',
        '2' => '@',
        '3' => '#',
        '4' => '$',
        '5' => '%',
        '6' => '^',
        '7' => '&',
        '8' => '*',
        '9' => '(',
        '0' => ')',
        _ => return None,
    };
    Some(shifted)
}

/// Visibility check: (elements, app state, host props, app context).
pub type PredicateFn = fn(&[Element], &AppState, &AppProps, &AppContext) -> bool;

/// Computes a translation key from current state.
pub type LabelFn = fn(&[Element], &AppState, &AppContext) -> &'static str;

/// Whether the action shows a checkmark.
pub type CheckedFn = fn(&AppState) -> bool;

/// Execute the action against the document.
pub type PerformFn = fn(&mut Document, ActionSource) -> CaptureUpdate;

/// Whether an action's element changes go on the undo stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureUpdate {
    Immediately,
    Never,
}

/// The display label of an action: a fixed translation key or one derived
/// from state.
#[derive(Clone, Copy)]
pub enum ActionLabel {
    Key(&'static str),
    Dynamic(LabelFn),
}

impl ActionLabel {
    pub fn key(&self, elements: &[Element], state: &AppState, ctx: &AppContext) -> &'static str {
        match self {
            Self::Key(key) => *key,
            Self::Dynamic(label) => label(elements, state, ctx),
        }
    }
}

impl fmt::Debug for ActionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// A user-invokable canvas action with metadata.
pub struct Action {
    /// Unique identifier, also the shortcut-table key.
    pub name: ActionName,
    /// Translation key for the menu label.
    pub label: Option<ActionLabel>,
    /// Dynamic check for whether the action is currently offered.
    pub predicate: Option<PredicateFn>,
    /// Checkmark state for toggles.
    pub checked: Option<CheckedFn>,
    /// Execute the action.
    pub perform: PerformFn,
}

impl Action {
    /// Actions without a predicate are always visible.
    pub fn is_visible(
        &self,
        elements: &[Element],
        state: &AppState,
        props: &AppProps,
        ctx: &AppContext,
    ) -> bool {
        self.predicate
            .is_none_or(|predicate| predicate(elements, state, props, ctx))
    }

    pub fn is_checked(&self, state: &AppState) -> bool {
        self.checked.is_some_and(|checked| checked(state))
    }

    pub fn label_key(
        &self,
        elements: &[Element],
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<&'static str> {
        self.label.map(|label| label.key(elements, state, ctx))
    }

    /// Run the action. Callers should go through [`super::ActionRegistry::execute`]
    /// so history capture happens.
    pub fn run(&self, doc: &mut Document, source: ActionSource) -> CaptureUpdate {
        (self.perform)(doc, source)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("label", &self.label)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyboard::key::Named;

    fn noop(_: &mut Document, _: ActionSource) -> CaptureUpdate {
        CaptureUpdate::Never
    }

    fn action(predicate: Option<PredicateFn>) -> Action {
        Action {
            name: ActionName("test"),
            label: None,
            predicate,
            checked: None,
            perform: noop,
        }
    }

    #[test]
    fn test_action_without_predicate_is_visible() {
        let visible = action(None).is_visible(
            &[],
            &AppState::default(),
            &AppProps::default(),
            &AppContext::default(),
        );
        assert!(visible);
    }

    #[test]
    fn test_action_predicate_gates_visibility() {
        let hidden = action(Some(|_, _, _, _| false)).is_visible(
            &[],
            &AppState::default(),
            &AppProps::default(),
            &AppContext::default(),
        );
        assert!(!hidden);
    }

    #[test]
    fn test_unchecked_without_checked_fn() {
        assert!(!action(None).is_checked(&AppState::default()));
    }

    #[test]
    fn test_dynamic_label_reads_state() {
        let label = ActionLabel::Dynamic(|_, state, _| {
            if state.grid_mode_enabled { "labels.hideGrid" } else { "labels.showGrid" }
        });
        let mut state = AppState::default();
        assert_eq!(label.key(&[], &state, &AppContext::default()), "labels.showGrid");
        state.grid_mode_enabled = true;
        assert_eq!(label.key(&[], &state, &AppContext::default()), "labels.hideGrid");
    }

    #[test]
    fn test_source_tag() {
        assert_eq!(ActionSource::ContextMenu.to_string(), "contextMenu");
    }

    #[test]
    fn test_key_spec_char_matches_case_insensitive() {
        assert!(KeySpec::char('z').matches(&Key::Character("Z".into())));
        assert!(!KeySpec::char('z').matches(&Key::Named(Named::Escape)));
    }

    #[test]
    fn test_key_spec_matches_shifted_punctuation() {
        assert!(KeySpec::char(']').matches(&Key::Character("}".into())));
        assert!(KeySpec::char('[').matches(&Key::Character("{".into())));
        assert!(!KeySpec::char(']').matches(&Key::Character("{".into())));
    }

    #[test]
    fn test_key_combo_matches_modifiers() {
        let combo = KeyCombo::new(Modifiers::CTRL, KeySpec::char('d'));
        assert!(combo.matches(&Key::Character("d".into()), &keyboard::Modifiers::CTRL));
        assert!(!combo.matches(&Key::Character("d".into()), &keyboard::Modifiers::SHIFT));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_key_combo_display() {
        let combo = KeyCombo::new(Modifiers::PRIMARY_SHIFT, KeySpec::char('z'));
        assert_eq!(combo.display(), "Ctrl+Shift+Z");
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_key_combo_display() {
        let combo = KeyCombo::new(Modifiers::PRIMARY_SHIFT, KeySpec::char('z'));
        assert_eq!(combo.display(), "⇧⌘Z");
    }
}
