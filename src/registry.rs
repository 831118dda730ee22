//! The set of valid command names.
//!
//! Derived from the content document's command keys plus the fixed
//! built-ins, rebuilt whenever a document is adopted.

use crate::content::ContentDocument;

/// Commands handled by the interpreter directly, never looked up in the
/// content document. Built-ins shadow same-named content entries.
pub const BUILTINS: [&str; 3] = ["help", "clear", "settings"];

#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    /// Lower-cased names in registry order: document keys first (insertion
    /// order), built-ins appended last.
    names: Vec<String>,
}

impl CommandRegistry {
    pub fn from_document(document: Option<&ContentDocument>) -> Self {
        let mut names: Vec<String> = document
            .map(|doc| {
                doc.commands
                    .keys()
                    .map(|key| key.to_lowercase())
                    .filter(|key| !BUILTINS.contains(&key.as_str()))
                    .collect()
            })
            .unwrap_or_default();

        names.extend(BUILTINS.iter().map(|name| name.to_string()));
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Command names excluding the built-ins, for the `help` listing.
    pub fn content_names(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| !BUILTINS.contains(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// All names starting with `prefix`, in registry order. No ranking, no
    /// fuzzy matching; an empty prefix matches everything.
    pub fn complete(&self, prefix: &str) -> Vec<&str> {
        self.names
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }
}
