//! Scene - owner of the element list.

use thiserror::Error;

use crate::{AppState, Element, ElementId, ElementKind, ElementUpdate};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("element not found: {0}")]
    ElementNotFound(ElementId),

    #[error("element is not a text element: {0}")]
    NotText(ElementId),
}

/// The ordered element list of a drawing. Later elements draw on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// All elements, including deleted ones.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn non_deleted(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|el| !el.is_deleted)
    }

    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| &el.id == id)
    }

    /// Selected, non-deleted elements in z-order.
    pub fn selected<'a>(&'a self, state: &'a AppState) -> impl Iterator<Item = &'a Element> {
        self.non_deleted().filter(|el| state.is_selected(&el.id))
    }

    /// An id derived from `base` that no element in the scene uses yet:
    /// `{base}-copy`, then `{base}-copy-2`, `{base}-copy-3`, ...
    pub fn unused_copy_id(&self, base: &ElementId) -> ElementId {
        let first = ElementId::new(format!("{}-copy", base));
        if self.get(&first).is_none() {
            return first;
        }
        (2..)
            .map(|n| ElementId::new(format!("{}-copy-{}", base, n)))
            .find(|id| self.get(id).is_none())
            .unwrap_or(first)
    }

    pub fn insert(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn replace_all(&mut self, elements: Vec<Element>) {
        self.elements = elements;
    }

    /// Move an element to the top or bottom of the z-order.
    pub fn restack(&mut self, id: &ElementId, to_front: bool) -> Result<(), SceneError> {
        let idx = self
            .position(id)
            .ok_or_else(|| SceneError::ElementNotFound(id.clone()))?;
        let element = self.elements.remove(idx);
        if to_front {
            self.elements.push(element);
        } else {
            self.elements.insert(0, element);
        }
        Ok(())
    }

    /// Apply a partial update in place and bump the element version.
    pub fn mutate_element(
        &mut self,
        id: &ElementId,
        update: ElementUpdate,
    ) -> Result<&Element, SceneError> {
        let idx = self
            .position(id)
            .ok_or_else(|| SceneError::ElementNotFound(id.clone()))?;
        let element = &mut self.elements[idx];

        if update.text.is_some() || update.original_text.is_some() {
            let ElementKind::Text(content) = &mut element.kind else {
                return Err(SceneError::NotText(id.clone()));
            };
            if let Some(text) = update.text {
                content.text = text;
            }
            if let Some(original) = update.original_text {
                content.original_text = original;
            }
        }
        if let Some(locked) = update.locked {
            element.locked = locked;
        }
        if let Some(deleted) = update.is_deleted {
            element.is_deleted = deleted;
        }
        if let Some((x, y)) = update.position {
            element.x = x;
            element.y = y;
        }
        element.version += 1;
        Ok(element)
    }

    fn position(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|el| &el.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextContent;

    fn scene() -> Scene {
        Scene::new(vec![
            Element::new("r1", ElementKind::Rectangle),
            Element::text("t1", "hello"),
        ])
    }

    #[test]
    fn test_mutate_text_bumps_version() {
        let mut scene = scene();
        let id = ElementId::new("t1");
        let update = ElementUpdate {
            text: Some("bye".into()),
            original_text: Some("bye".into()),
            ..Default::default()
        };

        let element = scene.mutate_element(&id, update).unwrap();
        assert_eq!(element.as_text().unwrap().text, "bye");
        assert_eq!(element.version, 2);
    }

    #[test]
    fn test_mutate_text_on_shape_is_rejected() {
        let mut scene = scene();
        let id = ElementId::new("r1");
        let update = ElementUpdate {
            text: Some("nope".into()),
            ..Default::default()
        };

        assert_eq!(scene.mutate_element(&id, update), Err(SceneError::NotText(id.clone())));
        assert_eq!(scene.get(&id).unwrap().version, 1);
    }

    #[test]
    fn test_mutate_missing_element() {
        let mut scene = scene();
        let id = ElementId::new("ghost");
        assert!(matches!(
            scene.mutate_element(&id, ElementUpdate::default()),
            Err(SceneError::ElementNotFound(_))
        ));
    }

    #[test]
    fn test_unused_copy_id_skips_taken_ids() {
        let mut scene = scene();
        let base = ElementId::new("r1");
        assert_eq!(scene.unused_copy_id(&base).as_str(), "r1-copy");

        scene.insert(Element::new("r1-copy", ElementKind::Rectangle));
        scene.insert(Element::new("r1-copy-2", ElementKind::Rectangle));
        assert_eq!(scene.unused_copy_id(&base).as_str(), "r1-copy-3");
    }

    #[test]
    fn test_restack_to_back() {
        let mut scene = scene();
        scene.restack(&ElementId::new("t1"), false).unwrap();
        assert_eq!(scene.elements()[0].id.as_str(), "t1");
    }

    #[test]
    fn test_selected_skips_deleted() {
        let mut scene = scene();
        let mut state = AppState::default();
        state.select([ElementId::new("r1"), ElementId::new("t1")]);
        scene
            .mutate_element(&ElementId::new("r1"), ElementUpdate { is_deleted: Some(true), ..Default::default() })
            .unwrap();

        let ids: Vec<_> = scene.selected(&state).map(|el| el.id.as_str()).collect();
        assert_eq!(ids, vec!["t1"]);
    }

    #[test]
    fn test_source_text_falls_back_to_display_text() {
        let content = TextContent { text: "shown".into(), original_text: String::new() };
        assert_eq!(content.source_text(), "shown");
    }
}
