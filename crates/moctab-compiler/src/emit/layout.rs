//! Section layout.
//!
//! Sections are placed in a fixed order behind the private header:
//! class info, method rows, method revisions, the parameter block, property
//! rows, notify words, property revisions, enum rows, enum key data and
//! constructor rows. Each reservation goes through one [`IndexCursor`]; an
//! empty section records offset 0 and does not move it.

use moctab_core::ClassDescription;
use moctab_format::{
    CLASS_INFO_ROW_WORDS, CONSTRUCTOR_ROW_WORDS, ENUM_KEY_WORDS, ENUM_ROW_WORDS, Header,
    METHOD_ROW_WORDS, PROPERTY_ROW_WORDS, Section, StringId,
};
use tracing::debug;

use super::cursor::{IndexCursor, parameter_table_words};

/// Row count and offset of one header section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slot {
    pub count: usize,
    pub offset: usize,
}

impl Slot {
    fn reserve(cursor: &mut IndexCursor, name: &str, count: usize, width: usize) -> Self {
        let offset = cursor.reserve(count * width);
        debug!(section = name, count, offset, "reserved");
        Self { count, offset }
    }

    fn section(&self) -> Section {
        Section::new(self.count as u32, self.offset as u32)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub class_info: Slot,
    pub methods: Slot,
    /// Present when any signal, slot or method carries a revision.
    pub method_revisions: Option<usize>,
    /// First word of the parameter block.
    pub parameters: usize,
    pub properties: Slot,
    /// Present when any property has a notify signal.
    pub property_notify: Option<usize>,
    /// Present when any property has a nonzero revision.
    pub property_revisions: Option<usize>,
    pub enums: Slot,
    /// First word of the enum key data.
    pub enum_data: usize,
    pub constructors: Slot,
    pub signal_count: usize,
    /// Offset of the terminator.
    pub end: usize,
}

impl Layout {
    pub fn compute(class: &ClassDescription) -> Self {
        let mut cursor = IndexCursor::after_header();

        let class_info = Slot::reserve(
            &mut cursor,
            "classinfo",
            class.class_info.len(),
            CLASS_INFO_ROW_WORDS,
        );

        let method_count = class.method_count();
        let methods = Slot::reserve(&mut cursor, "methods", method_count, METHOD_ROW_WORDS);
        let method_revisions = class
            .expand_invokables()
            .any(|clone| clone.member.revision().is_some())
            .then(|| cursor.reserve(method_count));

        let parameters = cursor.position();
        cursor.reserve(parameter_table_words(class));
        debug!(offset = parameters, end = cursor.position(), "reserved parameters");

        let property_count = class.properties.len();
        let properties = Slot::reserve(
            &mut cursor,
            "properties",
            property_count,
            PROPERTY_ROW_WORDS,
        );
        let property_notify = class
            .properties
            .iter()
            .any(|p| p.notify.is_some())
            .then(|| cursor.reserve(property_count));
        let property_revisions = class
            .properties
            .iter()
            .any(|p| p.revision > 0)
            .then(|| cursor.reserve(property_count));

        let enums = Slot::reserve(&mut cursor, "enums", class.enums.len(), ENUM_ROW_WORDS);
        let enum_data = cursor.position();
        let key_count: usize = class.enums.iter().map(|e| e.keys.len()).sum();
        cursor.reserve(key_count * ENUM_KEY_WORDS);

        let constructors = Slot::reserve(
            &mut cursor,
            "constructors",
            class.constructor_count(),
            CONSTRUCTOR_ROW_WORDS,
        );

        Self {
            class_info,
            methods,
            method_revisions,
            parameters,
            properties,
            property_notify,
            property_revisions,
            enums,
            enum_data,
            constructors,
            signal_count: class.signal_count(),
            end: cursor.position(),
        }
    }

    /// Header words for this layout. The class name is always string 0.
    pub fn header(&self) -> Header {
        Header {
            class_name: StringId::new(0),
            class_info: self.class_info.section(),
            methods: self.methods.section(),
            properties: self.properties.section(),
            enums: self.enums.section(),
            constructors: self.constructors.section(),
            signal_count: self.signal_count as u32,
            ..Header::default()
        }
    }

    /// Length of the finished array, terminator included.
    pub fn total_words(&self) -> usize {
        self.end + 1
    }
}
