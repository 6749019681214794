//! Record tree types for parsed DSS text.

use std::fmt;

/// Reserved attribute key holding a record's command tag.
pub const COMMAND_KEY: &str = "!CMD";

/// One parsed DSS directive: a command tag plus ordered attributes.
#[derive(Debug, Clone)]
pub struct Record {
    /// Command tag (first token of the line, e.g. `new`, `setbusxy`)
    pub command: String,
    /// Attributes in first-encounter order
    attributes: Vec<(String, String)>,
    /// Source line number for error reporting (1-indexed, 0 if built in code)
    pub line: usize,
}

impl Record {
    /// Create a record with no attributes.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            attributes: Vec::new(),
            line: 0,
        }
    }

    /// Create a record remembering the source line it came from.
    pub fn at_line(command: impl Into<String>, line: usize) -> Self {
        Self {
            line,
            ..Self::new(command)
        }
    }

    /// Builder-style [`Record::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Look up an attribute. [`COMMAND_KEY`] returns the command tag.
    pub fn get(&self, key: &str) -> Option<&str> {
        if key == COMMAND_KEY {
            return Some(&self.command);
        }
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether an attribute is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set an attribute. An existing key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if key == COMMAND_KEY {
            self.command = value;
            return;
        }
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Remove an attribute, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.attributes.iter().position(|(k, _)| k == key)?;
        Some(self.attributes.remove(idx).1)
    }

    /// Iterate attributes (excluding the command tag) in order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes, not counting the command tag.
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}

// Source line is bookkeeping only.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.command == other.command && self.attributes == other.attributes
    }
}

impl Eq for Record {}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)?;
        for (key, value) in &self.attributes {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}

/// Ordered record sequence for a whole DSS file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DssTree {
    records: Vec<Record>,
}

impl DssTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Mutable access for edits between parse and emit.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Record> {
        self.records.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl From<Vec<Record>> for DssTree {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for DssTree {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DssTree {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a DssTree {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
