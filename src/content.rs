//! The content document driving all terminal output.
//!
//! A single JSON file holds everything the terminal can render: page
//! metadata, theme settings, the prompt, the startup banner, and the
//! command entries. The document is replaced wholesale on every load or
//! settings save; nothing mutates it in place.

use crate::theme::Theme;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentDocument {
    pub meta: Meta,
    pub theme: Theme,
    pub prompt: String,
    pub banner: Banner,
    /// Command name -> entry, in document order. Order matters: it is the
    /// order `help` and tab completion list commands in.
    #[serde(default)]
    pub commands: IndexMap<String, CommandEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(default)]
    pub ascii_art: String,
    #[serde(default)]
    pub subtitle: String,
}

/// One value in `commands`, polymorphic over the four entry shapes.
///
/// Untagged: the shape is inferred from the JSON structure. Variant order
/// matters for deserialization: arrays match `Records`, then objects are
/// tried by their required fields (`list`, `content`, `email`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandEntry {
    /// Ordered structured records (projects, experience, education).
    Records(Vec<Record>),
    /// A titled list: skill bars when items carry a level, plain named
    /// items (certifications, awards) otherwise.
    Listing(Listing),
    /// Free text under a title.
    Text(TextEntry),
    /// Contact block: email plus platform -> URL links.
    Contact(ContactEntry),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextEntry {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub list: Vec<ListItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItem {
    pub name: String,
    /// Proficiency 0-100; present on skill entries only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactEntry {
    pub email: String,
    #[serde(default)]
    pub links: IndexMap<String, String>,
}

/// One structured record in a `Records` entry. Every field is optional;
/// rendering emits only the fields present, in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
}

impl ContentDocument {
    /// Load a content document from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ContentError::Io(e.to_string()))?;

        let document: ContentDocument =
            serde_json::from_str(&contents).map_err(|e| ContentError::Parse(e.to_string()))?;

        Ok(document)
    }

    /// Persist the document back to its JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ContentError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ContentError::Serialize(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ContentError::Io(e.to_string()))?;

        Ok(())
    }

    /// Look up a command entry by its dispatch name (already lower-cased).
    /// Keys are stored as written in the document; matching ignores case.
    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.commands
            .iter()
            .find(|(key, _)| key.to_lowercase() == name)
            .map(|(_, entry)| entry)
    }
}

/// Content document error types
#[derive(Debug)]
pub enum ContentError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Io(msg) => write!(f, "IO error: {msg}"),
            ContentError::Parse(msg) => write!(f, "Parse error: {msg}"),
            ContentError::Serialize(msg) => write!(f, "Serialize error: {msg}"),
        }
    }
}

impl std::error::Error for ContentError {}
