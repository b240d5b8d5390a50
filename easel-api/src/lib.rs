//! Easel API - Shared scene and application-state types for the Easel canvas.

mod element;
mod scene;
mod state;

pub use element::*;
pub use scene::*;
pub use state::*;
