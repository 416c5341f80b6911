//! Data array emission from a class description.
//!
//! This module handles:
//! - String table construction and interning
//! - Section layout with the shared index cursor
//! - Method, property and enum row encoding
//! - Assembly of the finished table

mod cursor;
mod emitter;
mod enums;
mod error;
pub mod layout;
mod methods;
mod properties;
mod string_table;
mod table;

#[cfg(test)]
mod cursor_tests;
#[cfg(test)]
mod emitter_tests;

pub use cursor::{IndexCursor, parameter_table_words, parameter_words};
pub use emitter::{Emitted, emit};
pub use enums::EnumTableEncoder;
pub use error::EmitError;
pub use layout::{Layout, Slot};
pub use methods::{MethodTableEncoder, method_flags, type_word};
pub use properties::{PropertyTableEncoder, property_flags};
pub use string_table::{StringEntry, StringTable};
pub use table::{MetaData, TableRow, TableSection};
