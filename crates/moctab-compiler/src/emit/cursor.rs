//! Word cursor shared by the layout and the encoders.
//!
//! Both the layout pass and the descriptor pass advance through the parameter
//! block with [`parameter_words`]; they must never disagree.

use moctab_core::{ClassDescription, MemberRole, MethodClone};
use moctab_format::PRIVATE_HEADER_WORDS;

/// Words one overload occupies in the parameter block: result type, then a
/// type and a name word per argument.
pub fn parameter_words(argc: usize) -> usize {
    1 + 2 * argc
}

/// Size of the whole parameter block: signals, slots, methods, constructors.
pub fn parameter_table_words(class: &ClassDescription) -> usize {
    class
        .expand_invokables()
        .chain(class.expand(MemberRole::Constructor))
        .map(|clone| parameter_words(clone.argc()))
        .sum()
}

/// Monotonic position in the data array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexCursor {
    position: usize,
}

impl IndexCursor {
    pub fn new(position: usize) -> Self {
        Self { position }
    }

    /// Cursor positioned right after the private header.
    pub fn after_header() -> Self {
        Self::new(PRIVATE_HEADER_WORDS)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Reserve `words` and return their offset. Reserving nothing returns 0
    /// and leaves the cursor in place.
    pub fn reserve(&mut self, words: usize) -> usize {
        if words == 0 {
            return 0;
        }
        let offset = self.position;
        self.position += words;
        offset
    }

    /// Reserve the parameter block of one overload and return its offset.
    pub fn reserve_parameters(&mut self, clone: &MethodClone<'_>) -> usize {
        let offset = self.position;
        self.position += parameter_words(clone.argc());
        offset
    }
}
