//! Action Registry - central store for all actions.

use std::collections::HashMap;
use std::sync::Arc;

use easel_api::{AppState, Element, ElementId, ElementUpdate};

use crate::document::Document;
use crate::error::ActionError;

use super::types::{Action, ActionLabel, ActionName, ActionSource, CaptureUpdate};

/// Runs actions on behalf of a UI surface.
///
/// The context menu only talks to this trait; the editor implements it by
/// routing through the registry against its document.
pub trait ActionExecutor {
    /// Look up a registered action by name and run it.
    fn execute_registered_action(&mut self, name: &str, source: ActionSource) -> Result<(), ActionError>;

    /// Run an action descriptor the caller already holds.
    fn execute_action(&mut self, action: &Action, source: ActionSource) -> Result<(), ActionError>;
}

/// Central registry of all actions.
pub struct ActionRegistry {
    actions: Vec<Arc<Action>>,
    by_name: HashMap<&'static str, usize>,
}

impl ActionRegistry {
    /// Create a new registry with all built-in actions.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_builtin_actions();
        registry
    }

    /// A registry with nothing in it.
    pub fn empty() -> Self {
        Self {
            actions: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register an action, replacing any action with the same name.
    pub fn register(&mut self, action: Action) -> Arc<Action> {
        let action = Arc::new(action);
        match self.by_name.get(action.name.0) {
            Some(&idx) => self.actions[idx] = Arc::clone(&action),
            None => {
                self.by_name.insert(action.name.0, self.actions.len());
                self.actions.push(Arc::clone(&action));
            }
        }
        action
    }

    /// Get an action by name.
    pub fn get(&self, name: ActionName) -> Option<Arc<Action>> {
        self.get_by_str(name.0)
    }

    pub fn get_by_str(&self, name: &str) -> Option<Arc<Action>> {
        self.by_name.get(name).map(|&idx| Arc::clone(&self.actions[idx]))
    }

    /// Get all actions.
    pub fn all(&self) -> &[Arc<Action>] {
        &self.actions
    }

    /// Run an action against the document, recording an undo step when the
    /// action asks for it.
    pub fn execute(&self, action: &Action, source: ActionSource, doc: &mut Document) -> CaptureUpdate {
        tracing::info!(action = %action.name, source = %source, "executing action");
        let before = doc.scene.elements().to_vec();
        let capture = action.run(doc, source);
        if capture == CaptureUpdate::Immediately && doc.scene.elements() != before.as_slice() {
            doc.history.record(before);
        }
        capture
    }

    /// Look up `name` and run it.
    pub fn execute_by_name(
        &self,
        name: &str,
        source: ActionSource,
        doc: &mut Document,
    ) -> Result<CaptureUpdate, ActionError> {
        let action = self
            .get_by_str(name)
            .ok_or_else(|| ActionError::NotRegistered(name.to_string()))?;
        Ok(self.execute(&action, source, doc))
    }

    /// Register all built-in actions.
    fn register_builtin_actions(&mut self) {
        // =====================================================================
        // History
        // =====================================================================

        self.register(Action {
            name: ActionName("undo"),
            label: Some(ActionLabel::Key("buttons.undo")),
            predicate: None,
            checked: None,
            perform: action_undo,
        });

        self.register(Action {
            name: ActionName("redo"),
            label: Some(ActionLabel::Key("buttons.redo")),
            predicate: None,
            checked: None,
            perform: action_redo,
        });

        // =====================================================================
        // Selection
        // =====================================================================

        self.register(Action {
            name: ActionName("selectAll"),
            label: Some(ActionLabel::Key("labels.selectAll")),
            predicate: Some(|elements, _, _, _| elements.iter().any(|el| !el.is_deleted)),
            checked: None,
            perform: action_select_all,
        });

        self.register(Action {
            name: ActionName("duplicateSelection"),
            label: Some(ActionLabel::Key("labels.duplicateSelection")),
            predicate: Some(|elements, state, _, _| !state.view_mode_enabled && has_selection(elements, state)),
            checked: None,
            perform: action_duplicate_selection,
        });

        self.register(Action {
            name: ActionName("toggleElementLock"),
            label: Some(ActionLabel::Dynamic(|elements, state, _| {
                if all_selected_locked(elements, state) {
                    "labels.elementLock.unlock"
                } else {
                    "labels.elementLock.lock"
                }
            })),
            predicate: Some(|elements, state, _, _| has_selection(elements, state)),
            checked: None,
            perform: action_toggle_element_lock,
        });

        self.register(Action {
            name: ActionName("deleteSelectedElements"),
            label: Some(ActionLabel::Key("labels.delete")),
            predicate: Some(|elements, state, _, _| !state.view_mode_enabled && has_selection(elements, state)),
            checked: None,
            perform: action_delete_selected,
        });

        // =====================================================================
        // Z-order
        // =====================================================================

        self.register(Action {
            name: ActionName("bringToFront"),
            label: Some(ActionLabel::Key("labels.bringToFront")),
            predicate: Some(|elements, state, _, _| has_selection(elements, state)),
            checked: None,
            perform: |doc, _| restack_selected(doc, true),
        });

        self.register(Action {
            name: ActionName("sendToBack"),
            label: Some(ActionLabel::Key("labels.sendToBack")),
            predicate: Some(|elements, state, _, _| has_selection(elements, state)),
            checked: None,
            perform: |doc, _| restack_selected(doc, false),
        });

        // =====================================================================
        // View toggles
        // =====================================================================

        self.register(Action {
            name: ActionName("toggleGridMode"),
            label: Some(ActionLabel::Key("labels.showGrid")),
            predicate: Some(|_, _, props, _| props.grid_mode_enabled.is_none()),
            checked: Some(|state| state.grid_mode_enabled),
            perform: |doc, _| {
                doc.app_state.grid_mode_enabled = !doc.app_state.grid_mode_enabled;
                CaptureUpdate::Never
            },
        });

        self.register(Action {
            name: ActionName("toggleZenMode"),
            label: Some(ActionLabel::Key("buttons.zenMode")),
            predicate: Some(|_, _, props, ctx| !ctx.device.is_mobile && props.zen_mode_enabled.is_none()),
            checked: Some(|state| state.zen_mode_enabled),
            perform: |doc, _| {
                doc.app_state.zen_mode_enabled = !doc.app_state.zen_mode_enabled;
                CaptureUpdate::Never
            },
        });

        self.register(Action {
            name: ActionName("toggleViewMode"),
            label: Some(ActionLabel::Key("labels.viewMode")),
            predicate: Some(|_, _, props, _| props.view_mode_enabled.is_none()),
            checked: Some(|state| state.view_mode_enabled),
            perform: |doc, _| {
                doc.app_state.view_mode_enabled = !doc.app_state.view_mode_enabled;
                CaptureUpdate::Never
            },
        });
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn has_selection(elements: &[Element], state: &AppState) -> bool {
    elements
        .iter()
        .any(|el| !el.is_deleted && state.is_selected(&el.id))
}

fn all_selected_locked(elements: &[Element], state: &AppState) -> bool {
    let mut selected = elements
        .iter()
        .filter(|el| !el.is_deleted && state.is_selected(&el.id))
        .peekable();
    selected.peek().is_some() && selected.all(|el| el.locked)
}

fn selected_ids(doc: &Document) -> Vec<ElementId> {
    doc.scene
        .selected(&doc.app_state)
        .map(|el| el.id.clone())
        .collect()
}

// =============================================================================
// Action Implementations
// =============================================================================

fn action_undo(doc: &mut Document, _source: ActionSource) -> CaptureUpdate {
    if !doc.history.undo(&mut doc.scene) {
        tracing::debug!("nothing to undo");
    }
    CaptureUpdate::Never
}

fn action_redo(doc: &mut Document, _source: ActionSource) -> CaptureUpdate {
    if !doc.history.redo(&mut doc.scene) {
        tracing::debug!("nothing to redo");
    }
    CaptureUpdate::Never
}

fn action_select_all(doc: &mut Document, _source: ActionSource) -> CaptureUpdate {
    let ids: Vec<ElementId> = doc
        .scene
        .non_deleted()
        .filter(|el| !el.locked)
        .map(|el| el.id.clone())
        .collect();
    doc.app_state.select(ids);
    CaptureUpdate::Never
}

fn action_duplicate_selection(doc: &mut Document, _source: ActionSource) -> CaptureUpdate {
    let originals: Vec<Element> = doc.scene.selected(&doc.app_state).cloned().collect();
    let mut ids = Vec::with_capacity(originals.len());
    for mut copy in originals {
        // Inserted one at a time so each new id also avoids the copies before it.
        copy.id = doc.scene.unused_copy_id(&copy.id);
        copy.x += 10.0;
        copy.y += 10.0;
        copy.version = 1;
        ids.push(copy.id.clone());
        doc.scene.insert(copy);
    }
    doc.app_state.select(ids);
    CaptureUpdate::Immediately
}

fn action_toggle_element_lock(doc: &mut Document, _source: ActionSource) -> CaptureUpdate {
    let lock = !all_selected_locked(doc.scene.elements(), &doc.app_state);
    for id in selected_ids(doc) {
        let update = ElementUpdate {
            locked: Some(lock),
            ..Default::default()
        };
        if let Err(e) = doc.scene.mutate_element(&id, update) {
            tracing::warn!("Failed to toggle lock on {}: {}", id, e);
        }
    }
    if lock {
        doc.app_state.clear_selection();
    }
    CaptureUpdate::Immediately
}

fn action_delete_selected(doc: &mut Document, _source: ActionSource) -> CaptureUpdate {
    for id in selected_ids(doc) {
        let update = ElementUpdate {
            is_deleted: Some(true),
            ..Default::default()
        };
        if let Err(e) = doc.scene.mutate_element(&id, update) {
            tracing::warn!("Failed to delete {}: {}", id, e);
        }
    }
    doc.app_state.clear_selection();
    CaptureUpdate::Immediately
}

fn restack_selected(doc: &mut Document, to_front: bool) -> CaptureUpdate {
    let mut ids = selected_ids(doc);
    // Sending to back walks in reverse so the selection keeps its relative order.
    if !to_front {
        ids.reverse();
    }
    for id in ids {
        if let Err(e) = doc.scene.restack(&id, to_front) {
            tracing::warn!("Failed to restack {}: {}", id, e);
        }
    }
    CaptureUpdate::Immediately
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_api::{AppContext, AppProps, ElementKind, Scene};

    fn document() -> Document {
        Document::new(Scene::new(vec![
            Element::new("r1", ElementKind::Rectangle),
            Element::new("r2", ElementKind::Ellipse),
            Element::text("t1", "note"),
        ]))
    }

    #[test]
    fn test_builtin_actions_registered() {
        let registry = ActionRegistry::new();
        assert!(registry.get(ActionName("undo")).is_some());
        assert!(registry.get(ActionName("redo")).is_some());
        assert!(registry.get(ActionName("deleteSelectedElements")).is_some());
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = ActionRegistry::empty();
        registry.register(Action {
            name: ActionName("x"),
            label: Some(ActionLabel::Key("first")),
            predicate: None,
            checked: None,
            perform: |_, _| CaptureUpdate::Never,
        });
        registry.register(Action {
            name: ActionName("x"),
            label: Some(ActionLabel::Key("second")),
            predicate: None,
            checked: None,
            perform: |_, _| CaptureUpdate::Never,
        });
        assert_eq!(registry.all().len(), 1);
        let action = registry.get(ActionName("x")).unwrap();
        assert!(matches!(action.label, Some(ActionLabel::Key("second"))));
    }

    #[test]
    fn test_execute_unknown_name() {
        let registry = ActionRegistry::new();
        let mut doc = document();
        let err = registry
            .execute_by_name("nope", ActionSource::Api, &mut doc)
            .unwrap_err();
        assert!(matches!(err, ActionError::NotRegistered(name) if name == "nope"));
    }

    #[test]
    fn test_delete_then_undo_restores() {
        let registry = ActionRegistry::new();
        let mut doc = document();
        doc.app_state.select([ElementId::new("r1")]);

        registry
            .execute_by_name("deleteSelectedElements", ActionSource::Keyboard, &mut doc)
            .unwrap();
        assert!(doc.scene.get(&ElementId::new("r1")).unwrap().is_deleted);
        assert!(doc.app_state.selected_element_ids.is_empty());

        registry.execute_by_name("undo", ActionSource::Keyboard, &mut doc).unwrap();
        assert!(!doc.scene.get(&ElementId::new("r1")).unwrap().is_deleted);

        registry.execute_by_name("redo", ActionSource::Keyboard, &mut doc).unwrap();
        assert!(doc.scene.get(&ElementId::new("r1")).unwrap().is_deleted);
    }

    #[test]
    fn test_duplicate_twice_keeps_ids_unique() {
        let registry = ActionRegistry::new();
        let mut doc = document();
        for _ in 0..2 {
            doc.app_state.select([ElementId::new("r1")]);
            registry
                .execute_by_name("duplicateSelection", ActionSource::ContextMenu, &mut doc)
                .unwrap();
        }

        let ids: Vec<_> = doc.scene.elements().iter().map(|el| el.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2", "t1", "r1-copy", "r1-copy-2"]);

        doc.app_state.select([ElementId::new("r1-copy"), ElementId::new("r1-copy-2")]);
        registry
            .execute_by_name("deleteSelectedElements", ActionSource::ContextMenu, &mut doc)
            .unwrap();
        let deleted = doc.scene.elements().iter().filter(|el| el.is_deleted).count();
        assert_eq!(deleted, 2);
    }

    #[test]
    fn test_duplicate_multi_selection_in_one_step() {
        let registry = ActionRegistry::new();
        let mut doc = document();
        doc.app_state.select([ElementId::new("r1"), ElementId::new("r2")]);
        registry
            .execute_by_name("duplicateSelection", ActionSource::ContextMenu, &mut doc)
            .unwrap();
        registry
            .execute_by_name("duplicateSelection", ActionSource::ContextMenu, &mut doc)
            .unwrap();

        let mut ids: Vec<_> = doc.scene.elements().iter().map(|el| el.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(total, 7);
    }

    #[test]
    fn test_toggle_grid_is_not_recorded() {
        let registry = ActionRegistry::new();
        let mut doc = document();
        registry.execute_by_name("toggleGridMode", ActionSource::Ui, &mut doc).unwrap();
        assert!(doc.app_state.grid_mode_enabled);
        assert!(!doc.history.can_undo());
    }

    #[test]
    fn test_lock_label_follows_selection() {
        let registry = ActionRegistry::new();
        let mut doc = document();
        doc.app_state.select([ElementId::new("r1")]);
        let action = registry.get(ActionName("toggleElementLock")).unwrap();
        let ctx = AppContext::default();

        let key = action.label_key(doc.scene.elements(), &doc.app_state, &ctx);
        assert_eq!(key, Some("labels.elementLock.lock"));

        doc.scene
            .mutate_element(&ElementId::new("r1"), ElementUpdate { locked: Some(true), ..Default::default() })
            .unwrap();
        let key = action.label_key(doc.scene.elements(), &doc.app_state, &ctx);
        assert_eq!(key, Some("labels.elementLock.unlock"));
    }

    #[test]
    fn test_select_all_skips_locked() {
        let registry = ActionRegistry::new();
        let mut doc = document();
        doc.scene
            .mutate_element(&ElementId::new("r2"), ElementUpdate { locked: Some(true), ..Default::default() })
            .unwrap();

        registry.execute_by_name("selectAll", ActionSource::ContextMenu, &mut doc).unwrap();
        let ids: Vec<_> = doc.app_state.selected_element_ids.iter().map(ElementId::as_str).collect();
        assert_eq!(ids, vec!["r1", "t1"]);
    }

    #[test]
    fn test_send_to_back_keeps_relative_order() {
        let registry = ActionRegistry::new();
        let mut doc = document();
        doc.app_state.select([ElementId::new("r2"), ElementId::new("t1")]);

        registry.execute_by_name("sendToBack", ActionSource::ContextMenu, &mut doc).unwrap();
        let order: Vec<_> = doc.scene.elements().iter().map(|el| el.id.as_str()).collect();
        assert_eq!(order, vec!["r2", "t1", "r1"]);
    }

    #[test]
    fn test_grid_toggle_hidden_when_host_controls_it() {
        let registry = ActionRegistry::new();
        let doc = document();
        let action = registry.get(ActionName("toggleGridMode")).unwrap();
        let props = AppProps { grid_mode_enabled: Some(true), ..Default::default() };
        assert!(!action.is_visible(doc.scene.elements(), &doc.app_state, &props, &AppContext::default()));
    }
}
