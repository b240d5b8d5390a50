//! Translation lookup for menu labels.

use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde_json::Value;

/// Resolves translation keys to display strings.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

/// Built-in English strings.
const ENGLISH: &[(&str, &str)] = &[
    ("buttons.undo", "Undo"),
    ("buttons.redo", "Redo"),
    ("buttons.zenMode", "Zen mode"),
    ("labels.selectAll", "Select all"),
    ("labels.duplicateSelection", "Duplicate"),
    ("labels.delete", "Delete"),
    ("labels.bringToFront", "Bring to front"),
    ("labels.sendToBack", "Send to back"),
    ("labels.elementLock.lock", "Lock"),
    ("labels.elementLock.unlock", "Unlock"),
    ("labels.showGrid", "Show grid"),
    ("labels.viewMode", "View mode"),
    ("contextMenu.insertCurrentDate", "Insert current date"),
];

fn english(key: &str) -> Option<&'static str> {
    ENGLISH.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// A flat key → string table for one language.
#[derive(Debug, Clone, Default)]
pub struct Locale {
    code: String,
    strings: IndexMap<String, String>,
}

impl Locale {
    pub fn english() -> Self {
        Self {
            code: "en".to_string(),
            strings: ENGLISH
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Parse a translation file. Nested objects are flattened into dotted
    /// keys, so `{"buttons": {"undo": "…"}}` defines `buttons.undo`.
    pub fn from_json(code: impl Into<String>, json: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let mut strings = IndexMap::new();
        flatten("", &value, &mut strings);
        Ok(Self {
            code: code.into(),
            strings,
        })
    }

    /// Load a translation file; the file stem is the language code.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read locale: {:?}", path))?;
        let code = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("custom");
        Self::from_json(code, &raw).with_context(|| format!("Invalid locale: {:?}", path))
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }
}

impl Translate for Locale {
    /// Falls back to English, then to the key itself.
    fn translate(&self, key: &str) -> String {
        if let Some(text) = self.lookup(key) {
            return text.to_string();
        }
        match english(key) {
            Some(text) => text.to_string(),
            None => {
                tracing::debug!("Missing translation for {:?} in {}", key, self.code);
                key.to_string()
            }
        }
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut IndexMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{}.{}", prefix, k)
                };
                flatten(&key, v, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        _ => {}
    }
}
