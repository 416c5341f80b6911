//! String table for one class.
//!
//! Entries are deduplicated by content and keep first-seen order. The class
//! name is always entry 0 (the downcast check compares against the start of
//! the packed buffer) and the empty string always has entry 1.

use indexmap::IndexSet;
use moctab_format::StringId;

/// Position of one entry inside the packed buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringEntry {
    pub index: usize,
    pub offset: usize,
    pub len: usize,
}

#[derive(Debug, Clone)]
pub struct StringTable {
    strings: IndexSet<String>,
}

impl StringTable {
    pub fn new(class_name: &str) -> Self {
        let mut table = Self {
            strings: IndexSet::new(),
        };
        table.intern(class_name);
        table.intern("");
        table
    }

    /// Get or create the id for `text`.
    pub fn intern(&mut self, text: &str) -> StringId {
        if let Some(index) = self.strings.get_index_of(text) {
            return StringId::new(index as u32);
        }
        let (index, _) = self.strings.insert_full(text.to_string());
        StringId::new(index as u32)
    }

    /// Id of the reserved empty string.
    pub fn empty(&self) -> StringId {
        StringId::new(1)
    }

    pub fn get(&self, id: StringId) -> Option<&str> {
        self.strings.get_index(id.index()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(String::as_str)
    }

    /// Entries with their byte offsets; each entry is followed by a terminator.
    pub fn entries(&self) -> impl Iterator<Item = StringEntry> + '_ {
        self.strings
            .iter()
            .enumerate()
            .scan(0usize, |offset, (index, s)| {
                let entry = StringEntry {
                    index,
                    offset: *offset,
                    len: s.len(),
                };
                *offset += s.len() + 1;
                Some(entry)
            })
    }

    /// Declared size of the packed buffer, including the implicit final terminator.
    pub fn byte_len(&self) -> usize {
        1 + self.strings.iter().map(|s| s.len() + 1).sum::<usize>()
    }

    pub fn into_strings(self) -> Vec<String> {
        self.strings.into_iter().collect()
    }
}
