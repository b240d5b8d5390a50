//! Dismiss-then-dispatch: a committed entry closes the menu first and runs
//! its effect only after the close has been applied.

use std::fmt;
use std::sync::Arc;

use easel_api::{ElementId, SceneError};

use crate::actions::{Action, ActionExecutor, ActionSource};
use crate::error::MenuError;

use super::items::{ContextMenuItem, MenuLiteral};

pub const UNDO_ACTION: &str = "undo";
pub const REDO_ACTION: &str = "redo";

/// A committed menu entry. Consumed by [`commit`].
#[derive(Clone)]
pub enum MenuCommit {
    Undo,
    Redo,
    Action(Arc<Action>),
    InsertCurrentDate(ElementId),
}

impl MenuCommit {
    /// The commit for a resolved item; separators have none.
    pub fn for_item(item: &ContextMenuItem) -> Option<Self> {
        match item {
            ContextMenuItem::Literal(MenuLiteral::Separator) => None,
            ContextMenuItem::Literal(MenuLiteral::Undo) => Some(Self::Undo),
            ContextMenuItem::Literal(MenuLiteral::Redo) => Some(Self::Redo),
            ContextMenuItem::Action(action) => Some(Self::Action(Arc::clone(action))),
        }
    }
}

impl fmt::Debug for MenuCommit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undo => f.write_str("Undo"),
            Self::Redo => f.write_str("Redo"),
            Self::Action(action) => write!(f, "Action({})", action.name),
            Self::InsertCurrentDate(id) => write!(f, "InsertCurrentDate({})", id),
        }
    }
}

/// Work deferred until after the menu has closed.
#[derive(Clone)]
pub enum MenuEffect {
    RegisteredAction { name: &'static str, source: ActionSource },
    Action { action: Arc<Action>, source: ActionSource },
    InsertCurrentDate(ElementId),
}

impl From<MenuCommit> for MenuEffect {
    fn from(commit: MenuCommit) -> Self {
        let source = ActionSource::ContextMenu;
        match commit {
            MenuCommit::Undo => Self::RegisteredAction { name: UNDO_ACTION, source },
            MenuCommit::Redo => Self::RegisteredAction { name: REDO_ACTION, source },
            MenuCommit::Action(action) => Self::Action { action, source },
            MenuCommit::InsertCurrentDate(id) => Self::InsertCurrentDate(id),
        }
    }
}

impl fmt::Debug for MenuEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegisteredAction { name, source } => {
                write!(f, "RegisteredAction({}, {})", name, source)
            }
            Self::Action { action, source } => write!(f, "Action({}, {})", action.name, source),
            Self::InsertCurrentDate(id) => write!(f, "InsertCurrentDate({})", id),
        }
    }
}

/// Appends today's date to a text element.
pub trait DateStamp {
    fn insert_current_date(&mut self, id: &ElementId) -> Result<(), SceneError>;
}

/// Owner of the menu-open state.
pub trait MenuHost {
    /// Close the menu. When `then` is given, run it after the close state
    /// transition has been applied, never before.
    fn request_close(&mut self, then: Option<MenuEffect>) -> Result<(), MenuError>;
}

impl MenuEffect {
    /// Run the effect. Hosts call this from `request_close` once closed.
    pub fn run<T>(self, target: &mut T) -> Result<(), MenuError>
    where
        T: ActionExecutor + DateStamp + ?Sized,
    {
        match self {
            Self::RegisteredAction { name, source } => {
                target.execute_registered_action(name, source)?;
            }
            Self::Action { action, source } => target.execute_action(&action, source)?,
            Self::InsertCurrentDate(id) => target.insert_current_date(&id)?,
        }
        Ok(())
    }
}

/// Commit an entry: request the close and hand over the effect to run after it.
pub fn commit<H: MenuHost + ?Sized>(host: &mut H, request: MenuCommit) -> Result<(), MenuError> {
    let effect = MenuEffect::from(request);
    tracing::debug!(effect = ?effect, "context menu commit");
    host.request_close(Some(effect))
}

/// Close without committing anything.
pub fn dismiss<H: MenuHost + ?Sized>(host: &mut H) -> Result<(), MenuError> {
    host.request_close(None)
}
