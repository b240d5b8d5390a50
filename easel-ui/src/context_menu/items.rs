//! Menu item types and raw item lists.

use std::fmt;
use std::sync::Arc;

use crate::actions::{Action, ActionName, ActionRegistry};

/// Built-in entries that carry no action descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuLiteral {
    Separator,
    Undo,
    Redo,
}

#[derive(Clone)]
pub enum ContextMenuItem {
    Literal(MenuLiteral),
    Action(Arc<Action>),
}

pub const CONTEXT_MENU_SEPARATOR: ContextMenuItem = ContextMenuItem::Literal(MenuLiteral::Separator);
pub const CONTEXT_MENU_UNDO: ContextMenuItem = ContextMenuItem::Literal(MenuLiteral::Undo);
pub const CONTEXT_MENU_REDO: ContextMenuItem = ContextMenuItem::Literal(MenuLiteral::Redo);

impl ContextMenuItem {
    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Literal(MenuLiteral::Separator))
    }

    pub fn action(&self) -> Option<&Arc<Action>> {
        match self {
            Self::Action(action) => Some(action),
            Self::Literal(_) => None,
        }
    }
}

impl From<MenuLiteral> for ContextMenuItem {
    fn from(literal: MenuLiteral) -> Self {
        Self::Literal(literal)
    }
}

impl From<Arc<Action>> for ContextMenuItem {
    fn from(action: Arc<Action>) -> Self {
        Self::Action(action)
    }
}

/// Actions compare by name.
impl PartialEq for ContextMenuItem {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Action(a), Self::Action(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl fmt::Debug for ContextMenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{:?}", literal),
            Self::Action(action) => write!(f, "Action({})", action.name),
        }
    }
}

/// The caller-ordered raw list. `None` entries are placeholders left by
/// conditional inclusion and are dropped during resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMenuItems(Vec<Option<ContextMenuItem>>);

impl ContextMenuItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, item: Option<ContextMenuItem>) -> Self {
        self.0.push(item);
        self
    }

    pub fn item(self, item: impl Into<ContextMenuItem>) -> Self {
        self.push(Some(item.into()))
    }

    /// Push an action looked up elsewhere; `None` stays a placeholder.
    pub fn action(self, action: Option<Arc<Action>>) -> Self {
        self.push(action.map(ContextMenuItem::Action))
    }

    pub fn separator(self) -> Self {
        self.item(MenuLiteral::Separator)
    }

    /// Push `item` when `include` holds, a placeholder otherwise.
    pub fn item_if(self, include: bool, item: impl Into<ContextMenuItem>) -> Self {
        let item = include.then(|| item.into());
        self.push(item)
    }

    pub fn as_slice(&self) -> &[Option<ContextMenuItem>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Option<ContextMenuItem>>> for ContextMenuItems {
    fn from(items: Vec<Option<ContextMenuItem>>) -> Self {
        Self(items)
    }
}

impl FromIterator<Option<ContextMenuItem>> for ContextMenuItems {
    fn from_iter<I: IntoIterator<Item = Option<ContextMenuItem>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Items for a right-click on empty canvas.
pub fn canvas_menu(registry: &ActionRegistry) -> ContextMenuItems {
    ContextMenuItems::new()
        .item(MenuLiteral::Undo)
        .item(MenuLiteral::Redo)
        .separator()
        .action(registry.get(ActionName("selectAll")))
        .separator()
        .action(registry.get(ActionName("toggleGridMode")))
        .action(registry.get(ActionName("toggleZenMode")))
        .action(registry.get(ActionName("toggleViewMode")))
}

/// Items for a right-click on a selected element.
pub fn element_menu(registry: &ActionRegistry) -> ContextMenuItems {
    ContextMenuItems::new()
        .action(registry.get(ActionName("duplicateSelection")))
        .action(registry.get(ActionName("toggleElementLock")))
        .separator()
        .action(registry.get(ActionName("bringToFront")))
        .action(registry.get(ActionName("sendToBack")))
        .separator()
        .action(registry.get(ActionName("deleteSelectedElements")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_if_false_leaves_placeholder() {
        let items = ContextMenuItems::new()
            .item_if(false, MenuLiteral::Undo)
            .item_if(true, MenuLiteral::Redo);
        assert_eq!(items.as_slice(), &[None, Some(CONTEXT_MENU_REDO)]);
    }

    #[test]
    fn test_unregistered_action_is_placeholder() {
        let registry = ActionRegistry::empty();
        let items = canvas_menu(&registry);
        assert_eq!(items.len(), 8);
        assert!(items.as_slice()[3].is_none());
    }

    #[test]
    fn test_actions_compare_by_name() {
        let registry = ActionRegistry::new();
        let a = ContextMenuItem::from(registry.get(ActionName("selectAll")).unwrap());
        let b = ContextMenuItem::from(registry.get(ActionName("selectAll")).unwrap());
        assert_eq!(a, b);
        assert_ne!(a, CONTEXT_MENU_SEPARATOR);
    }
}
