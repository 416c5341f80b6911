//! The 14-word private header.
//!
//! Word order: revision, classname, classinfo (count, offset), methods
//! (count, offset), properties (count, offset), enums (count, offset),
//! constructors (count, offset), flags, signalCount.

use crate::constants::{OUTPUT_REVISION, PRIVATE_HEADER_WORDS};
use crate::view::ViewError;
use crate::word::StringId;

/// Row count and first word of one section. An absent section has offset 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Section {
    pub count: u32,
    pub offset: u32,
}

impl Section {
    pub const fn new(count: u32, offset: u32) -> Self {
        Self { count, offset }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub revision: u32,
    pub class_name: StringId,
    pub class_info: Section,
    pub methods: Section,
    pub properties: Section,
    pub enums: Section,
    pub constructors: Section,
    /// Always 0 at this revision.
    pub flags: u32,
    /// Leading entries of the method section that are signals.
    pub signal_count: u32,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            revision: OUTPUT_REVISION,
            class_name: StringId::new(0),
            class_info: Section::default(),
            methods: Section::default(),
            properties: Section::default(),
            enums: Section::default(),
            constructors: Section::default(),
            flags: 0,
            signal_count: 0,
        }
    }
}

impl Header {
    /// Decode the header from the start of a data array.
    pub fn from_words(words: &[u32]) -> Result<Self, ViewError> {
        let Some(w) = words.get(..PRIVATE_HEADER_WORDS) else {
            return Err(ViewError::TooShort { len: words.len() });
        };

        Ok(Self {
            revision: w[0],
            class_name: StringId::new(w[1]),
            class_info: Section::new(w[2], w[3]),
            methods: Section::new(w[4], w[5]),
            properties: Section::new(w[6], w[7]),
            enums: Section::new(w[8], w[9]),
            constructors: Section::new(w[10], w[11]),
            flags: w[12],
            signal_count: w[13],
        })
    }

    pub fn to_words(&self) -> [u32; PRIVATE_HEADER_WORDS] {
        [
            self.revision,
            self.class_name.get(),
            self.class_info.count,
            self.class_info.offset,
            self.methods.count,
            self.methods.offset,
            self.properties.count,
            self.properties.offset,
            self.enums.count,
            self.enums.offset,
            self.constructors.count,
            self.constructors.offset,
            self.flags,
            self.signal_count,
        ]
    }
}
