//! Read-only decoder over a finished data array.
//!
//! Construction checks the header and that every section, parameter block,
//! extension block and enum key block lies inside the array. Accessors then
//! index freely.

use crate::constants::{
    CLASS_INFO_ROW_WORDS, CONSTRUCTOR_ROW_WORDS, END_OF_DATA, ENUM_KEY_WORDS, ENUM_ROW_WORDS,
    METHOD_ROW_WORDS, OUTPUT_REVISION, PROPERTY_ROW_WORDS,
};
use crate::flags::{EnumFlags, MethodFlags, PropertyFlags};
use crate::header::{Header, Section};
use crate::word::StringId;

/// A data array that does not decode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("data array has {len} words, fewer than the 14-word header")]
    TooShort { len: usize },

    #[error("unsupported revision {0}, expected 7")]
    UnsupportedRevision(u32),

    #[error("data array does not end with the 0 terminator")]
    MissingEndOfData,

    #[error("{section} section is empty but records offset {offset}")]
    EmptySectionOffset { section: &'static str, offset: u32 },

    #[error("{section} words {start}..{end} lie outside the {len}-word array")]
    OutOfBounds {
        section: &'static str,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("signal count {signals} exceeds method count {methods}")]
    TooManySignals { signals: u32, methods: u32 },
}

/// One method or constructor row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MethodRow {
    pub index: usize,
    pub name: StringId,
    pub argc: u32,
    /// Word offset of this row's parameter block.
    pub parameters: u32,
    pub tag: u32,
    pub flags: MethodFlags,
}

/// Result type word, then one type word and one name word per argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterRow<'a> {
    pub result: u32,
    pub types: &'a [u32],
    pub names: &'a [u32],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyRow {
    pub index: usize,
    pub name: StringId,
    pub ty: u32,
    pub flags: PropertyFlags,
    /// Present only when the row carries the notify bit.
    pub notify: Option<u32>,
    /// Present only when the row carries the revisioned bit.
    pub revision: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumRow<'a> {
    pub index: usize,
    pub name: StringId,
    pub flags: EnumFlags,
    pub data_offset: u32,
    data: &'a [u32],
}

impl<'a> EnumRow<'a> {
    pub fn key_count(&self) -> usize {
        self.data.len() / ENUM_KEY_WORDS
    }

    /// Key name and value pairs in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = (StringId, i32)> + 'a {
        self.data
            .chunks_exact(ENUM_KEY_WORDS)
            .map(|pair| (StringId::new(pair[0]), pair[1] as i32))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MetaDataView<'a> {
    words: &'a [u32],
    header: Header,
    method_revisions: bool,
    property_notify: bool,
    property_revisions: bool,
}

impl<'a> MetaDataView<'a> {
    pub fn new(words: &'a [u32]) -> Result<Self, ViewError> {
        let header = Header::from_words(words)?;
        if header.revision != OUTPUT_REVISION {
            return Err(ViewError::UnsupportedRevision(header.revision));
        }
        if words.last() != Some(&END_OF_DATA) {
            return Err(ViewError::MissingEndOfData);
        }

        let mut view = Self {
            words,
            header,
            method_revisions: false,
            property_notify: false,
            property_revisions: false,
        };

        view.check_section("classinfo", header.class_info, CLASS_INFO_ROW_WORDS)?;
        view.check_section("methods", header.methods, METHOD_ROW_WORDS)?;
        view.check_section("properties", header.properties, PROPERTY_ROW_WORDS)?;
        view.check_section("enums", header.enums, ENUM_ROW_WORDS)?;
        view.check_section("constructors", header.constructors, CONSTRUCTOR_ROW_WORDS)?;

        if header.signal_count > header.methods.count {
            return Err(ViewError::TooManySignals {
                signals: header.signal_count,
                methods: header.methods.count,
            });
        }

        let method_count = header.methods.count as usize;
        let method_revisions = view
            .methods()
            .any(|row| row.flags.contains(MethodFlags::REVISIONED));
        if method_revisions {
            view.check_span("method revisions", view.method_extension_start(), method_count)?;
        }
        view.method_revisions = method_revisions;

        for row in view.methods().chain(view.constructors()) {
            view.check_span(
                "parameters",
                row.parameters as usize,
                1 + 2 * row.argc as usize,
            )?;
        }

        let property_count = header.properties.count as usize;
        let property_flags: Vec<PropertyFlags> = (0..property_count)
            .map(|i| view.property_flags(i))
            .collect();
        let notify = property_flags
            .iter()
            .any(|f| f.contains(PropertyFlags::NOTIFY));
        let revisions = property_flags
            .iter()
            .any(|f| f.contains(PropertyFlags::REVISIONED));
        let blocks = usize::from(notify) + usize::from(revisions);
        view.check_span(
            "property extensions",
            view.property_extension_start(),
            blocks * property_count,
        )?;
        view.property_notify = notify;
        view.property_revisions = revisions;

        for index in 0..header.enums.count as usize {
            let row = view.enum_row_words(index);
            view.check_span("enum data", row[3] as usize, row[2] as usize * ENUM_KEY_WORDS)?;
        }

        Ok(view)
    }

    fn check_section(&self, section: &'static str, s: Section, width: usize) -> Result<(), ViewError> {
        if s.is_empty() {
            if s.offset != 0 {
                return Err(ViewError::EmptySectionOffset {
                    section,
                    offset: s.offset,
                });
            }
            return Ok(());
        }
        self.check_span(section, s.offset as usize, s.count as usize * width)
    }

    fn check_span(&self, section: &'static str, start: usize, len: usize) -> Result<(), ViewError> {
        let end = start + len;
        if len > 0 && end > self.words.len() {
            return Err(ViewError::OutOfBounds {
                section,
                start,
                end,
                len: self.words.len(),
            });
        }
        Ok(())
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn words(&self) -> &'a [u32] {
        self.words
    }

    pub fn class_info(&self) -> impl Iterator<Item = (StringId, StringId)> + 'a {
        let start = self.header.class_info.offset as usize;
        let len = self.header.class_info.count as usize * CLASS_INFO_ROW_WORDS;
        self.words[start..start + len]
            .chunks_exact(CLASS_INFO_ROW_WORDS)
            .map(|pair| (StringId::new(pair[0]), StringId::new(pair[1])))
    }

    pub fn method_count(&self) -> usize {
        self.header.methods.count as usize
    }

    pub fn signal_count(&self) -> usize {
        self.header.signal_count as usize
    }

    pub fn method(&self, index: usize) -> MethodRow {
        self.method_row(self.header.methods.offset as usize, index)
    }

    pub fn methods(&self) -> impl Iterator<Item = MethodRow> + '_ {
        (0..self.method_count()).map(|i| self.method(i))
    }

    pub fn has_method_revisions(&self) -> bool {
        self.method_revisions
    }

    /// Revision word of a revisioned method.
    pub fn method_revision(&self, index: usize) -> Option<u32> {
        if !self.method(index).flags.contains(MethodFlags::REVISIONED) {
            return None;
        }
        Some(self.words[self.method_extension_start() + index])
    }

    pub fn constructor_count(&self) -> usize {
        self.header.constructors.count as usize
    }

    pub fn constructor(&self, index: usize) -> MethodRow {
        self.method_row(self.header.constructors.offset as usize, index)
    }

    pub fn constructors(&self) -> impl Iterator<Item = MethodRow> + '_ {
        (0..self.constructor_count()).map(|i| self.constructor(i))
    }

    pub fn parameters(&self, row: &MethodRow) -> ParameterRow<'a> {
        let start = row.parameters as usize;
        let argc = row.argc as usize;
        let block = &self.words[start..start + 1 + 2 * argc];
        ParameterRow {
            result: block[0],
            types: &block[1..1 + argc],
            names: &block[1 + argc..],
        }
    }

    pub fn property_count(&self) -> usize {
        self.header.properties.count as usize
    }

    pub fn property(&self, index: usize) -> PropertyRow {
        let start = self.header.properties.offset as usize + index * PROPERTY_ROW_WORDS;
        let row = &self.words[start..start + PROPERTY_ROW_WORDS];
        let flags = PropertyFlags::from_bits_retain(row[2]);

        let extensions = self.property_extension_start();
        let count = self.property_count();
        let notify = flags
            .contains(PropertyFlags::NOTIFY)
            .then(|| self.words[extensions + index]);
        let revision_block = if self.property_notify {
            extensions + count
        } else {
            extensions
        };
        let revision = flags
            .contains(PropertyFlags::REVISIONED)
            .then(|| self.words[revision_block + index]);

        PropertyRow {
            index,
            name: StringId::new(row[0]),
            ty: row[1],
            flags,
            notify,
            revision,
        }
    }

    pub fn properties(&self) -> impl Iterator<Item = PropertyRow> + '_ {
        (0..self.property_count()).map(|i| self.property(i))
    }

    pub fn has_property_notify(&self) -> bool {
        self.property_notify
    }

    pub fn has_property_revisions(&self) -> bool {
        self.property_revisions
    }

    pub fn enum_count(&self) -> usize {
        self.header.enums.count as usize
    }

    pub fn enum_at(&self, index: usize) -> EnumRow<'a> {
        let row = self.enum_row_words(index);
        let start = row[3] as usize;
        let len = row[2] as usize * ENUM_KEY_WORDS;
        EnumRow {
            index,
            name: StringId::new(row[0]),
            flags: EnumFlags::from_bits_retain(row[1]),
            data_offset: row[3],
            data: &self.words[start..start + len],
        }
    }

    pub fn enums(&self) -> impl Iterator<Item = EnumRow<'a>> + '_ {
        (0..self.enum_count()).map(|i| self.enum_at(i))
    }

    fn method_row(&self, section: usize, index: usize) -> MethodRow {
        let start = section + index * METHOD_ROW_WORDS;
        let row = &self.words[start..start + METHOD_ROW_WORDS];
        MethodRow {
            index,
            name: StringId::new(row[0]),
            argc: row[1],
            parameters: row[2],
            tag: row[3],
            flags: MethodFlags::from_bits_retain(row[4]),
        }
    }

    fn method_extension_start(&self) -> usize {
        self.header.methods.offset as usize + self.method_count() * METHOD_ROW_WORDS
    }

    fn property_extension_start(&self) -> usize {
        self.header.properties.offset as usize + self.property_count() * PROPERTY_ROW_WORDS
    }

    fn property_flags(&self, index: usize) -> PropertyFlags {
        let start = self.header.properties.offset as usize + index * PROPERTY_ROW_WORDS;
        PropertyFlags::from_bits_retain(self.words[start + 2])
    }

    fn enum_row_words(&self, index: usize) -> &'a [u32] {
        let start = self.header.enums.offset as usize + index * ENUM_ROW_WORDS;
        &self.words[start..start + ENUM_ROW_WORDS]
    }
}
