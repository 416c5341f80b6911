//! Fixed numbers of the revision-7 layout.

/// Layout revision understood by the runtime.
pub const OUTPUT_REVISION: u32 = 7;

/// Size of the private header at the start of every data array.
pub const PRIVATE_HEADER_WORDS: usize = 14;

pub const CLASS_INFO_ROW_WORDS: usize = 2;
/// name, argc, parameters, tag, flags
pub const METHOD_ROW_WORDS: usize = 5;
/// name, type, flags
pub const PROPERTY_ROW_WORDS: usize = 3;
/// name, flags, count, data
pub const ENUM_ROW_WORDS: usize = 4;
/// key, value
pub const ENUM_KEY_WORDS: usize = 2;
pub const CONSTRUCTOR_ROW_WORDS: usize = 5;

/// Tag on a type word whose low bits index the string table.
pub const UNRESOLVED_TYPE: u32 = 0x8000_0000;

/// Builtin type id of `void`.
pub const VOID_TYPE_ID: u32 = 43;

/// Terminating word.
pub const END_OF_DATA: u32 = 0;
