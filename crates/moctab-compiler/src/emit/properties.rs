//! Property rows and their notify and revision words.

use moctab_core::{ClassDescription, FlagValue, PropertyMember};
use moctab_format::{PropertyFlags, Word};
use tracing::trace;

use super::string_table::StringTable;
use super::table::{TableRow, TableSection};

/// Flag word of one property.
pub fn property_flags(property: &PropertyMember) -> PropertyFlags {
    let mut flags = PropertyFlags::empty();

    if property.is_readable() {
        flags |= PropertyFlags::READABLE;
    }
    if property.is_writable() {
        flags |= PropertyFlags::WRITABLE;
    }
    if property.is_resettable() {
        flags |= PropertyFlags::RESETTABLE;
    }

    flags |= attribute_flags(
        &property.designable,
        PropertyFlags::DESIGNABLE,
        PropertyFlags::RESOLVE_DESIGNABLE,
    );
    flags |= attribute_flags(
        &property.scriptable,
        PropertyFlags::SCRIPTABLE,
        PropertyFlags::RESOLVE_SCRIPTABLE,
    );
    flags |= attribute_flags(
        &property.stored,
        PropertyFlags::STORED,
        PropertyFlags::RESOLVE_STORED,
    );
    flags |= attribute_flags(
        &property.editable,
        PropertyFlags::EDITABLE,
        PropertyFlags::RESOLVE_EDITABLE,
    );
    flags |= attribute_flags(&property.user, PropertyFlags::USER, PropertyFlags::RESOLVE_USER);

    if property.notify.is_some() {
        flags |= PropertyFlags::NOTIFY;
    }
    if property.revision > 0 {
        flags |= PropertyFlags::REVISIONED;
    }
    if property.constant {
        flags |= PropertyFlags::CONSTANT;
    }
    if property.is_final {
        flags |= PropertyFlags::FINAL;
    }

    flags
}

/// Unset resolves at runtime; anything but a literal `false` sets the bit.
fn attribute_flags(value: &FlagValue, set: PropertyFlags, resolve: PropertyFlags) -> PropertyFlags {
    match value {
        FlagValue::Unset => resolve,
        FlagValue::Literal(false) => PropertyFlags::empty(),
        FlagValue::Literal(true) | FlagValue::Expression(_) => set,
    }
}

pub struct PropertyTableEncoder<'a> {
    class: &'a ClassDescription,
}

impl<'a> PropertyTableEncoder<'a> {
    pub fn new(class: &'a ClassDescription) -> Self {
        Self { class }
    }

    /// `(name, type, flags)` per property. Property types are always written
    /// as unresolved spellings.
    pub fn rows(&self, strings: &mut StringTable) -> Option<TableSection> {
        if self.class.properties.is_empty() {
            return None;
        }

        let rows: Vec<TableRow> = self
            .class
            .properties
            .iter()
            .map(|p| {
                let name = strings.intern(&p.name);
                let ty = strings.intern(&p.ty);
                TableRow::new(vec![
                    Word::Str(name),
                    Word::Unresolved(ty),
                    Word::Flags(property_flags(p).bits()),
                ])
                .with_comment(p.name.clone())
            })
            .collect();

        trace!(rows = rows.len(), "encoded property rows");
        Some(TableSection::titled("properties: name, type, flags", rows))
    }

    /// Notify signal index per property, when any property notifies.
    pub fn notify_section(&self) -> Option<TableSection> {
        if !self.class.properties.iter().any(|p| p.notify.is_some()) {
            return None;
        }

        let rows = self
            .class
            .properties
            .iter()
            .map(|p| TableRow::new(vec![Word::Int(p.notify.unwrap_or(0))]))
            .collect();

        Some(TableSection::titled("properties: notify_signal_id", rows))
    }

    /// Revision per property, when any property is revisioned.
    pub fn revision_section(&self) -> Option<TableSection> {
        if !self.class.properties.iter().any(|p| p.revision > 0) {
            return None;
        }

        let rows = self
            .class
            .properties
            .iter()
            .map(|p| TableRow::new(vec![Word::Int(p.revision)]))
            .collect();

        Some(TableSection::titled("properties: revision", rows))
    }
}
