//! One entry of the data array.
//!
//! The compiler builds rows out of [`Word`]s so that the same value can be
//! rendered as source text (`0x80000000 | 4`) and folded to its numeric form
//! for decoding and tests.

use std::fmt;

use crate::constants::{UNRESOLVED_TYPE, VOID_TYPE_ID};

/// Index into the string table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringId(u32);

impl StringId {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Word {
    /// Count, offset or index.
    Int(u32),
    /// Signed value stored in an unsigned word (enum keys).
    Value(i32),
    Str(StringId),
    /// Flag bits, written in hex.
    Flags(u32),
    /// The builtin `void` type.
    Void,
    /// A type known only by its spelling.
    Unresolved(StringId),
}

impl Word {
    pub fn int(value: usize) -> Self {
        Word::Int(value as u32)
    }

    /// Numeric value as stored in the array.
    pub fn value(self) -> u32 {
        match self {
            Word::Int(n) | Word::Flags(n) => n,
            Word::Value(v) => v as u32,
            Word::Str(id) => id.get(),
            Word::Void => VOID_TYPE_ID,
            Word::Unresolved(id) => UNRESOLVED_TYPE | id.get(),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Word::Int(n) => write!(f, "{n}"),
            Word::Value(v) if *v < 0 => write!(f, "uint({v})"),
            Word::Value(v) => write!(f, "{v}"),
            Word::Str(id) => write!(f, "{id}"),
            Word::Flags(bits) => write!(f, "0x{bits:x}"),
            Word::Void => f.write_str("QMetaType::Void"),
            Word::Unresolved(id) => write!(f, "0x80000000 | {id}"),
        }
    }
}
