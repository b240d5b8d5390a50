//! The "insert current date" row offered when a single text element is
//! selected.

use std::fmt::Write;

use chrono::NaiveDate;
use easel_api::{AppState, Element, ElementId, ElementUpdate, Scene, SceneError, TextContent};

use crate::constants::DEFAULT_DATE_FORMAT;

pub const INSERT_DATE_LABEL_KEY: &str = "contextMenu.insertCurrentDate";

/// The selected element, if exactly one element is selected and it is a
/// live text element.
pub fn selected_text_element<'a>(elements: &'a [Element], state: &AppState) -> Option<&'a Element> {
    if state.selected_element_ids.len() != 1 {
        return None;
    }
    let id = state.selected_element_ids.first()?;
    elements
        .iter()
        .find(|el| &el.id == id && !el.is_deleted && el.is_text())
}

/// The element's text with a newline and the formatted date appended.
pub fn date_stamped_text(content: &TextContent, date: NaiveDate, format: &str) -> String {
    let mut text = content.source_text().to_string();
    text.push('\n');
    if write!(text, "{}", date.format(format)).is_err() {
        tracing::warn!("Invalid date format {:?}, using default", format);
        text.truncate(content.source_text().len() + 1);
        text.push_str(&date.format(DEFAULT_DATE_FORMAT).to_string());
    }
    text
}

/// Append the date to both the original and the display text of `id`.
pub fn insert_date<'a>(
    scene: &'a mut Scene,
    id: &ElementId,
    date: NaiveDate,
    format: &str,
) -> Result<&'a Element, SceneError> {
    let element = scene
        .get(id)
        .ok_or_else(|| SceneError::ElementNotFound(id.clone()))?;
    let content = element
        .as_text()
        .ok_or_else(|| SceneError::NotText(id.clone()))?;
    let text = date_stamped_text(content, date, format);
    let update = ElementUpdate {
        original_text: Some(text.clone()),
        text: Some(text),
        ..Default::default()
    };
    scene.mutate_element(id, update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_api::ElementKind;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn elements() -> Vec<Element> {
        vec![
            Element::text("t1", "hello"),
            Element::text("t2", "world"),
            Element::new("r1", ElementKind::Rectangle),
        ]
    }

    fn selecting(ids: &[&str]) -> AppState {
        let mut state = AppState::default();
        state.select(ids.iter().map(|id| ElementId::new(*id)));
        state
    }

    #[test]
    fn test_single_text_selection() {
        let elements = elements();
        let found = selected_text_element(&elements, &selecting(&["t1"]));
        assert_eq!(found.map(|el| el.id.as_str()), Some("t1"));
    }

    #[test]
    fn test_no_selection() {
        assert!(selected_text_element(&elements(), &selecting(&[])).is_none());
    }

    #[test]
    fn test_two_text_elements_selected() {
        assert!(selected_text_element(&elements(), &selecting(&["t1", "t2"])).is_none());
    }

    #[test]
    fn test_non_text_selected() {
        assert!(selected_text_element(&elements(), &selecting(&["r1"])).is_none());
    }

    #[test]
    fn test_stamp_uses_original_text() {
        let content = TextContent {
            text: "wrapped\ntext".into(),
            original_text: "wrapped text".into(),
        };
        assert_eq!(
            date_stamped_text(&content, date(), DEFAULT_DATE_FORMAT),
            "wrapped text\n10/16/2026"
        );
    }

    #[test]
    fn test_stamp_falls_back_to_display_text() {
        let content = TextContent { text: "shown".into(), original_text: String::new() };
        assert_eq!(date_stamped_text(&content, date(), "%Y-%m-%d"), "shown\n2026-10-16");
    }

    #[test]
    fn test_invalid_format_uses_default() {
        let content = TextContent::new("x");
        assert_eq!(date_stamped_text(&content, date(), "%"), "x\n10/16/2026");
    }

    #[test]
    fn test_insert_date_updates_both_texts() {
        let mut scene = Scene::new(elements());
        let element = insert_date(&mut scene, &ElementId::new("t2"), date(), DEFAULT_DATE_FORMAT).unwrap();
        let content = element.as_text().unwrap();
        assert_eq!(content.text, "world\n10/16/2026");
        assert_eq!(content.original_text, content.text);
        assert_eq!(element.version, 2);
    }

    #[test]
    fn test_insert_date_rejects_shapes() {
        let mut scene = Scene::new(elements());
        let err = insert_date(&mut scene, &ElementId::new("r1"), date(), DEFAULT_DATE_FORMAT).unwrap_err();
        assert_eq!(err, SceneError::NotText(ElementId::new("r1")));
    }
}
