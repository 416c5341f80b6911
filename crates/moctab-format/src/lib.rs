//! Revision-7 meta-object data array format.
//!
//! This crate contains:
//! - Layout constants (header size, row widths, type tagging)
//! - Flag words for methods, properties and enums
//! - [`Word`], one entry of the data array as it is written in source form
//! - [`MetaDataView`], a read-only decoder over a finished array, and [`dump`]

mod constants;
mod dump;
mod flags;
mod header;
mod view;
mod word;

#[cfg(test)]
mod flags_tests;

pub use constants::{
    CLASS_INFO_ROW_WORDS, CONSTRUCTOR_ROW_WORDS, END_OF_DATA, ENUM_KEY_WORDS, ENUM_ROW_WORDS,
    METHOD_ROW_WORDS, OUTPUT_REVISION, PRIVATE_HEADER_WORDS, PROPERTY_ROW_WORDS, UNRESOLVED_TYPE,
    VOID_TYPE_ID,
};
pub use dump::{DumpStyle, dump};
pub use flags::{EnumFlags, MethodFlags, PropertyFlags};
pub use header::{Header, Section};
pub use view::{EnumRow, MetaDataView, MethodRow, ParameterRow, PropertyRow, ViewError};
pub use word::{StringId, Word};
