//! Enum rows and key data.

use moctab_core::ClassDescription;
use moctab_format::{ENUM_KEY_WORDS, EnumFlags, Word};

use super::string_table::StringTable;
use super::table::{TableRow, TableSection};

pub struct EnumTableEncoder<'a> {
    class: &'a ClassDescription,
}

impl<'a> EnumTableEncoder<'a> {
    pub fn new(class: &'a ClassDescription) -> Self {
        Self { class }
    }

    /// `(name, flags, count, data)` per enum; key data starts at `data_offset`.
    pub fn rows(&self, strings: &mut StringTable, data_offset: usize) -> Option<TableSection> {
        if self.class.enums.is_empty() {
            return None;
        }

        let mut data = data_offset;
        let rows = self
            .class
            .enums
            .iter()
            .map(|e| {
                let flags = if e.is_flag {
                    EnumFlags::IS_FLAG
                } else {
                    EnumFlags::empty()
                };
                let row = TableRow::new(vec![
                    Word::Str(strings.intern(&e.name)),
                    Word::Flags(flags.bits()),
                    Word::int(e.keys.len()),
                    Word::int(data),
                ]);
                data += e.keys.len() * ENUM_KEY_WORDS;
                row
            })
            .collect();

        Some(TableSection::titled("enums: name, flags, count, data", rows))
    }

    /// `(key, value)` for every key of every enum.
    pub fn data_section(&self, strings: &mut StringTable) -> Option<TableSection> {
        if self.class.enums.iter().all(|e| e.keys.is_empty()) {
            return None;
        }

        let rows = self
            .class
            .enums
            .iter()
            .flat_map(|e| &e.keys)
            .map(|key| TableRow::new(vec![Word::Str(strings.intern(&key.name)), Word::Value(key.value)]))
            .collect();

        Some(TableSection::titled("enum data: key, value", rows))
    }
}
