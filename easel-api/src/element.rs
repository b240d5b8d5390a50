//! Canvas elements - the shapes and text living on the drawing surface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a canvas element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text payload of a text element.
///
/// `original_text` is what the user typed; `text` is what gets drawn (after
/// wrapping). An empty `original_text` means the two have never diverged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub text: String,
    pub original_text: String,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            original_text: text.clone(),
            text,
        }
    }

    /// The text to edit from: the original text, or the display text when no
    /// original was recorded.
    pub fn source_text(&self) -> &str {
        if self.original_text.is_empty() {
            &self.text
        } else {
            &self.original_text
        }
    }
}

/// What kind of shape an element is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementKind {
    Rectangle,
    Ellipse,
    Diamond,
    Arrow,
    Line,
    Freedraw,
    Image,
    Text(TextContent),
}

impl ElementKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Diamond => "diamond",
            Self::Arrow => "arrow",
            Self::Line => "line",
            Self::Freedraw => "freedraw",
            Self::Image => "image",
            Self::Text(_) => "text",
        }
    }
}

/// A single element on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub locked: bool,
    pub is_deleted: bool,
    /// Bumped on every mutation.
    pub version: u32,
}

impl Element {
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: ElementId::new(id),
            kind,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            locked: false,
            is_deleted: false,
            version: 1,
        }
    }

    pub fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Text(TextContent::new(text)))
    }

    pub fn with_bounds(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    pub fn as_text(&self) -> Option<&TextContent> {
        match &self.kind {
            ElementKind::Text(content) => Some(content),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        self.as_text().is_some()
    }
}

/// A partial update applied through [`crate::Scene::mutate_element`].
///
/// Text fields only apply to text elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementUpdate {
    pub text: Option<String>,
    pub original_text: Option<String>,
    pub locked: Option<bool>,
    pub is_deleted: Option<bool>,
    pub position: Option<(f32, f32)>,
}

/// Describes a change handed to the element-update pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementChange {
    /// True when an existing element was edited rather than newly created.
    pub is_existing_element: bool,
}

impl ElementChange {
    pub const EXISTING: Self = Self { is_existing_element: true };
    pub const CREATED: Self = Self { is_existing_element: false };
}
