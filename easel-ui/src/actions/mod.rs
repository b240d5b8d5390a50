//! Action Registry for Easel.
//!
//! Centralizes all user-invokable canvas actions with metadata for:
//! - Context menus (filtered by per-action predicates)
//! - Keybindings (shortcut table keyed by action name)
//! - Dynamic labels and checked state
//!
//! This is the "control layer" that decouples the menu from action logic.

mod registry;
mod shortcuts;
mod types;

pub use registry::{ActionExecutor, ActionRegistry};
pub use shortcuts::ShortcutTable;
pub use types::{
    Action, ActionLabel, ActionName, ActionSource, CaptureUpdate, CheckedFn, KeyCombo, KeySpec,
    LabelFn, Modifiers, PerformFn, PredicateFn,
};
