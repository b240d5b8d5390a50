//! Undo/redo stacks of element snapshots.

use std::collections::VecDeque;

use easel_api::{Element, Scene};

/// Maximum number of undo steps kept.
const HISTORY_LIMIT: usize = 100;

#[derive(Debug, Default)]
pub struct History {
    /// Oldest step at the front; dropped first when the limit is hit.
    undo: VecDeque<Vec<Element>>,
    redo: Vec<Vec<Element>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push the elements as they were before a change. Clears redo.
    pub fn record(&mut self, before: Vec<Element>) {
        self.push_undo(before);
        self.redo.clear();
    }

    fn push_undo(&mut self, snapshot: Vec<Element>) {
        self.undo.push_back(snapshot);
        if self.undo.len() > HISTORY_LIMIT {
            self.undo.pop_front();
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self, scene: &mut Scene) -> bool {
        let Some(previous) = self.undo.pop_back() else {
            return false;
        };
        self.redo.push(scene.elements().to_vec());
        scene.replace_all(previous);
        true
    }

    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self, scene: &mut Scene) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        self.push_undo(scene.elements().to_vec());
        scene.replace_all(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_api::ElementKind;

    #[test]
    fn test_undo_on_empty_history() {
        let mut history = History::new();
        let mut scene = Scene::default();
        assert!(!history.undo(&mut scene));
        assert!(!history.redo(&mut scene));
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new();
        let mut scene = Scene::new(vec![Element::new("a", ElementKind::Line)]);

        history.record(Vec::new());
        assert!(history.undo(&mut scene));
        assert!(scene.elements().is_empty());
        assert!(history.can_redo());

        history.record(Vec::new());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = History::new();
        for _ in 0..HISTORY_LIMIT + 5 {
            history.record(Vec::new());
        }
        assert_eq!(history.undo.len(), HISTORY_LIMIT);
    }

    #[test]
    fn test_bounded_history_drops_oldest_step() {
        let mut history = History::new();
        for i in 0..HISTORY_LIMIT + 1 {
            history.record(vec![Element::new(format!("e{}", i), ElementKind::Line)]);
        }
        assert_eq!(history.undo.front().unwrap()[0].id.as_str(), "e1");

        let mut scene = Scene::default();
        assert!(history.undo(&mut scene));
        assert_eq!(scene.elements()[0].id.as_str(), format!("e{}", HISTORY_LIMIT));
    }
}
