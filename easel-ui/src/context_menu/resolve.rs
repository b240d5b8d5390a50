//! Menu item resolution: visibility filtering and separator collapsing.

use easel_api::{AppContext, AppProps, AppState, Element};

use super::items::ContextMenuItem;

/// Filter the raw list down to the entries that render.
///
/// Placeholders are dropped, literals always survive, and actions survive
/// when they have no predicate or their predicate holds. Separators are then
/// collapsed so the result never starts or ends with one and never holds two
/// in a row. Surviving entries keep their relative order.
pub fn resolve_items(
    raw: &[Option<ContextMenuItem>],
    elements: &[Element],
    state: &AppState,
    props: &AppProps,
    ctx: &AppContext,
) -> Vec<ContextMenuItem> {
    let mut resolved: Vec<ContextMenuItem> = Vec::with_capacity(raw.len());

    for item in raw.iter().flatten() {
        let visible = match item {
            ContextMenuItem::Literal(_) => true,
            ContextMenuItem::Action(action) => action.is_visible(elements, state, props, ctx),
        };
        if !visible {
            continue;
        }
        if item.is_separator() && resolved.last().is_none_or(ContextMenuItem::is_separator) {
            continue;
        }
        resolved.push(item.clone());
    }

    if resolved.last().is_some_and(ContextMenuItem::is_separator) {
        resolved.pop();
    }

    tracing::trace!(raw = raw.len(), resolved = resolved.len(), "resolved context menu items");
    resolved
}
