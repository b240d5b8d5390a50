//! Easel UI - Context menu and action dispatch for the Easel canvas.
//!
//! # Module Organization
//!
//! - `actions`: Action descriptors, registry and shortcut table
//! - `context_menu`: Item resolution, formatting, placement and dispatch
//! - `editor`: Host that owns the document and the open menu
//! - `config`: Menu configuration loaded from `~/.easel`
//! - `i18n`: Translation lookup
//! - `constants`: Shared defaults

// Shared constants (no dependencies)
pub mod constants;

pub mod error;
pub mod i18n;
pub mod config;

// Document and undo history (depends on easel-api)
pub mod history;
pub mod document;

// Actions (depends on document)
pub mod actions;

// Context menu (depends on actions, config, i18n)
pub mod context_menu;

// Editor host (depends on everything)
pub mod editor;

pub use config::MenuConfig;
pub use document::Document;
pub use editor::{Editor, ElementPipeline, LogPipeline};
pub use error::{ActionError, MenuError};
