//! The assembled data array, kept as rows of [`Word`]s.

use moctab_format::{END_OF_DATA, Word};

/// One line of the array, optionally followed by a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub words: Vec<Word>,
    pub comment: Option<String>,
}

impl TableRow {
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A run of rows under an optional title comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSection {
    pub title: Option<String>,
    pub rows: Vec<TableRow>,
}

impl TableSection {
    pub fn titled(title: impl Into<String>, rows: Vec<TableRow>) -> Self {
        Self {
            title: Some(title.into()),
            rows,
        }
    }

    pub fn untitled(rows: Vec<TableRow>) -> Self {
        Self { title: None, rows }
    }

    /// Words in this section.
    pub fn len(&self) -> usize {
        self.rows.iter().map(TableRow::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Sections in array order. The terminator is implicit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaData {
    pub sections: Vec<TableSection>,
}

impl MetaData {
    pub fn push(&mut self, section: Option<TableSection>) {
        if let Some(section) = section {
            self.sections.push(section);
        }
    }

    /// Words before the terminator; also the offset the next section lands on.
    pub fn len(&self) -> usize {
        self.sections.iter().map(TableSection::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = Word> + '_ {
        self.sections
            .iter()
            .flat_map(|s| &s.rows)
            .flat_map(|r| r.words.iter().copied())
    }

    /// Numeric array including the terminator.
    pub fn values(&self) -> Vec<u32> {
        self.words()
            .map(Word::value)
            .chain(std::iter::once(END_OF_DATA))
            .collect()
    }
}
