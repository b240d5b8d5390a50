//! Editor host: owns the document and the open context menu, and applies
//! menu close requests before running their deferred effects.

mod transient_ui;

use chrono::NaiveDate;
use easel_api::{Element, ElementChange, ElementId, MenuAnchor, SceneError};
use iced_core::keyboard::{self, Key, key::Named};

use crate::actions::{Action, ActionExecutor, ActionRegistry, ActionSource, ShortcutTable};
use crate::config::MenuConfig;
use crate::context_menu::dispatch::{self, DateStamp};
use crate::context_menu::{
    ContextMenuItems, MenuEffect, MenuHost, MenuRow, MenuView, Placement, PopoverEvent, affordance,
    items,
};
use crate::document::Document;
use crate::error::{ActionError, MenuError};
use crate::i18n::Locale;

use transient_ui::TransientUi;

/// Receives element edits made outside the regular action path.
pub trait ElementPipeline {
    fn on_element_change(&mut self, element: &Element, change: ElementChange);
}

/// Default pipeline: logs the change.
pub struct LogPipeline;

impl ElementPipeline for LogPipeline {
    fn on_element_change(&mut self, element: &Element, change: ElementChange) {
        tracing::debug!(
            element = %element.id,
            version = element.version,
            existing = change.is_existing_element,
            "element changed"
        );
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub struct Editor {
    document: Document,
    registry: ActionRegistry,
    shortcuts: ShortcutTable,
    locale: Locale,
    config: MenuConfig,
    transient: TransientUi,
    pipeline: Box<dyn ElementPipeline>,
    today: fn() -> NaiveDate,
}

impl Editor {
    pub fn new(document: Document, config: MenuConfig) -> Self {
        Self {
            document,
            registry: ActionRegistry::new(),
            shortcuts: ShortcutTable::builtin(),
            locale: Locale::english(),
            config,
            transient: TransientUi::new(),
            pipeline: Box::new(LogPipeline),
            today: local_today,
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_pipeline(mut self, pipeline: impl ElementPipeline + 'static) -> Self {
        self.pipeline = Box::new(pipeline);
        self
    }

    /// Override the date source used by "insert current date".
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ActionRegistry {
        &mut self.registry
    }

    pub fn shortcuts_mut(&mut self) -> &mut ShortcutTable {
        &mut self.shortcuts
    }

    pub fn is_menu_open(&self) -> bool {
        self.transient.has_overlay()
    }

    /// Open a menu with an explicit item list. Replaces any open menu.
    pub fn open_context_menu(&mut self, top: f32, left: f32, items: ContextMenuItems) {
        let anchor = MenuAnchor { top, left };
        tracing::debug!(top, left, items = items.len(), "opening context menu");
        self.transient.show_context_menu(anchor, items);
        self.document.app_state.context_menu = Some(anchor);
    }

    /// Open the standard menu for a right-click. `target` is the element under
    /// the pointer; it becomes the selection unless it is already selected.
    pub fn open_context_menu_at(&mut self, top: f32, left: f32, target: Option<&ElementId>) {
        let hit = target.filter(|id| {
            self.document
                .scene
                .get(id)
                .is_some_and(|el| !el.is_deleted)
        });
        let items = match hit {
            Some(id) => {
                if !self.document.app_state.is_selected(id) {
                    self.document.app_state.select([id.clone()]);
                }
                items::element_menu(&self.registry)
            }
            None => items::canvas_menu(&self.registry),
        };
        self.open_context_menu(top, left, items);
    }

    fn view(&self) -> MenuView<'_> {
        MenuView {
            elements: self.document.scene.elements(),
            app_state: &self.document.app_state,
            props: &self.document.props,
            context: &self.document.context,
            translator: &self.locale,
            shortcuts: &self.shortcuts,
            config: &self.config,
        }
    }

    /// Rows of the open menu; empty when closed.
    pub fn context_menu_rows(&self) -> Vec<MenuRow> {
        self.transient
            .context_menu()
            .map(|menu| menu.rows(&self.view()))
            .unwrap_or_default()
    }

    pub fn context_menu_placement(&self) -> Option<Placement> {
        let menu = self.transient.context_menu()?;
        let view = self.view();
        let rows = menu.rows(&view);
        Some(menu.placement(&rows, &view))
    }

    /// Commit the row at `index` of the currently rendered rows.
    pub fn commit_row(&mut self, index: usize) -> Result<(), MenuError> {
        let menu = self.transient.context_menu().ok_or(MenuError::NotOpen)?;
        let commit = menu
            .rows(&self.view())
            .into_iter()
            .nth(index)
            .and_then(|row| match row {
                MenuRow::Entry(entry) => Some(entry.commit),
                MenuRow::Separator => None,
            })
            .ok_or(MenuError::NotCommittable(index))?;
        dispatch::commit(self, commit)
    }

    pub fn on_popover_event(&mut self, event: PopoverEvent) -> Result<(), MenuError> {
        if !self.is_menu_open() {
            return Ok(());
        }
        tracing::debug!(?event, "context menu dismissed");
        dispatch::dismiss(self)
    }

    /// Route a key press: Escape dismisses an open menu, otherwise a bound
    /// action runs if it is currently visible. Returns whether it was handled.
    pub fn handle_key_press(&mut self, key: &Key, modifiers: &keyboard::Modifiers) -> Result<bool, MenuError> {
        if self.is_menu_open() && matches!(key, Key::Named(Named::Escape)) {
            self.on_popover_event(PopoverEvent::Escape)?;
            return Ok(true);
        }

        let Some(name) = self.shortcuts.action_for_key(key, modifiers) else {
            return Ok(false);
        };
        let Some(action) = self.registry.get_by_str(name) else {
            tracing::warn!("Shortcut bound to unregistered action {}", name);
            return Ok(false);
        };
        let doc = &self.document;
        if !action.is_visible(doc.scene.elements(), &doc.app_state, &doc.props, &doc.context) {
            return Ok(false);
        }
        self.execute_action(&action, ActionSource::Keyboard)?;
        Ok(true)
    }
}

impl MenuHost for Editor {
    fn request_close(&mut self, then: Option<MenuEffect>) -> Result<(), MenuError> {
        self.transient.dismiss_context_menu();
        self.document.app_state.context_menu = None;
        tracing::debug!(effect = ?then, "context menu closed");

        match then {
            Some(effect) => effect.run(self),
            None => Ok(()),
        }
    }
}

impl ActionExecutor for Editor {
    fn execute_registered_action(&mut self, name: &str, source: ActionSource) -> Result<(), ActionError> {
        self.registry.execute_by_name(name, source, &mut self.document)?;
        Ok(())
    }

    fn execute_action(&mut self, action: &Action, source: ActionSource) -> Result<(), ActionError> {
        self.registry.execute(action, source, &mut self.document);
        Ok(())
    }
}

impl DateStamp for Editor {
    fn insert_current_date(&mut self, id: &ElementId) -> Result<(), SceneError> {
        let before = self.document.scene.elements().to_vec();
        let today = (self.today)();
        let element = affordance::insert_date(&mut self.document.scene, id, today, &self.config.date_format)?;
        self.pipeline.on_element_change(element, ElementChange::EXISTING);
        self.document.history.record(before);
        Ok(())
    }
}
