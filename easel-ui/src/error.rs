//! Context menu and action error types.

use easel_api::SceneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("action not registered: {0}")]
    NotRegistered(String),
}

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("no context menu is open")]
    NotOpen,

    #[error("menu row {0} cannot be committed")]
    NotCommittable(usize),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}
