use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// One registry office: its code and display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    pub code: String,
    pub name: String,
}

impl CodeEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Office names keyed by code, as extracted from the source table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: HashMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an office, replacing the name of an already-seen code.
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        let code = code.into();
        let name = name.into();
        if let Some(previous) = self.entries.insert(code.clone(), name.clone()) {
            warn!(
                "Duplicate code {}: replacing '{}' with '{}'",
                code, previous, name
            );
        }
    }

    pub fn remove(&mut self, code: &str) -> Option<String> {
        self.entries.remove(code)
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by code, compared byte-wise.
    pub fn sorted_entries(&self) -> Vec<CodeEntry> {
        let mut entries: Vec<CodeEntry> = self
            .entries
            .iter()
            .map(|(code, name)| CodeEntry::new(code.as_str(), name.as_str()))
            .collect();
        entries.sort_by(|a, b| a.code.cmp(&b.code));
        entries
    }
}

impl FromIterator<CodeEntry> for Registry {
    fn from_iter<I: IntoIterator<Item = CodeEntry>>(iter: I) -> Self {
        let mut registry = Registry::new();
        for entry in iter {
            registry.insert(entry.code, entry.name);
        }
        registry
    }
}

/// Text of each cell in one table row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<String>,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Cell text at `index`, or `None` past the end of the row.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The (code, name) pair held by the first two cells.
    pub fn code_and_name(&self) -> Option<(&str, &str)> {
        Some((self.cell(0)?, self.cell(1)?))
    }
}
