//! Popover glue: measuring the menu, keeping it inside the viewport, and
//! turning outside clicks / Escape into close requests.

use easel_api::{AppState, MenuAnchor};
use iced_core::{Point, Size};

use crate::config::MenuConfig;

use super::MenuRow;

/// The visible canvas area, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub offset_left: f32,
    pub offset_top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn of(state: &AppState) -> Self {
        Self {
            offset_left: state.offset_left,
            offset_top: state.offset_top,
            width: state.width,
            height: state.height,
        }
    }
}

/// Dismissal requests reported by the popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverEvent {
    OutsideClick,
    Escape,
}

/// Where the menu lands, relative to the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Point,
    pub size: Size,
}

/// Size of the rendered menu.
pub fn measure(rows: &[MenuRow], config: &MenuConfig) -> Size {
    let height = rows.iter().fold(config.padding * 2.0, |h, row| {
        h + match row {
            MenuRow::Separator => config.separator_height,
            MenuRow::Entry(_) => config.row_height,
        }
    });
    Size::new(config.width, height)
}

/// Convert the anchor to canvas coordinates and pull the menu back inside the
/// viewport when it would overflow the right or bottom edge.
pub fn fit_in_viewport(anchor: MenuAnchor, size: Size, viewport: &Viewport, margin: f32) -> Point {
    let mut x = anchor.left - viewport.offset_left;
    let mut y = anchor.top - viewport.offset_top;

    if x + size.width > viewport.width {
        x = viewport.width - size.width - margin;
    }
    if y + size.height > viewport.height {
        y = viewport.height - size.height;
    }

    Point::new(x.max(0.0), y.max(0.0))
}

pub fn place(anchor: MenuAnchor, rows: &[MenuRow], viewport: &Viewport, config: &MenuConfig) -> Placement {
    let size = measure(rows, config);
    let position = if config.fit_in_viewport {
        fit_in_viewport(anchor, size, viewport, config.viewport_margin)
    } else {
        Point::new(anchor.left - viewport.offset_left, anchor.top - viewport.offset_top)
    };
    Placement { position, size }
}
