//! Shared constants for the Easel UI.
//!
//! Defaults for context menu metrics and configuration locations.

/// Context menu width.
pub const MENU_WIDTH: f32 = 200.0;

/// Height of an entry row.
pub const MENU_ROW_HEIGHT: f32 = 30.0;

/// Height of a separator row.
pub const MENU_SEPARATOR_HEIGHT: f32 = 9.0;

/// Inner padding above the first and below the last row.
pub const MENU_PADDING: f32 = 6.0;

/// Gap kept between the menu and the right viewport edge when clamping.
pub const VIEWPORT_MARGIN: f32 = 10.0;

/// Date appended by "insert current date" (en-US short date).
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Actions rendered with the dangerous style.
pub const DEFAULT_DANGEROUS_ACTIONS: &[&str] = &["deleteSelectedElements"];

/// Directory under $HOME holding Easel configuration.
pub const CONFIG_DIR: &str = ".easel";

/// Context menu configuration file inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "context_menu.json";
