//! Method, slot, signal and constructor rows.
//!
//! Every role is encoded twice: once as descriptor rows (which advance the
//! parameter cursor) and once as parameter rows. Both passes walk the same
//! clone expansion, so row `i` of one pass always pairs with row `i` of the
//! other.

use moctab_core::{Access, Attribute, ClassDescription, MemberRole, MethodClone, TypeRef};
use moctab_format::{MethodFlags, Word};
use tracing::trace;

use super::cursor::IndexCursor;
use super::string_table::StringTable;
use super::table::{TableRow, TableSection};

/// Flag word of one overload.
pub fn method_flags(clone: &MethodClone<'_>) -> MethodFlags {
    let mut flags = match clone.role {
        MemberRole::Signal => MethodFlags::SIGNAL,
        MemberRole::Slot => MethodFlags::SLOT,
        MemberRole::Method => MethodFlags::METHOD,
        MemberRole::Constructor => MethodFlags::CONSTRUCTOR,
    };

    // Signals are reported as protected whatever their declared access.
    flags |= if clone.role == MemberRole::Signal {
        MethodFlags::ACCESS_PROTECTED
    } else {
        match clone.member.access {
            Access::Private => MethodFlags::ACCESS_PRIVATE,
            Access::Protected => MethodFlags::ACCESS_PROTECTED,
            Access::Public => MethodFlags::ACCESS_PUBLIC,
        }
    };

    if clone.is_cloned() {
        flags |= MethodFlags::CLONED;
    }

    for attribute in &clone.member.attributes {
        flags |= match attribute {
            Attribute::Scriptable => MethodFlags::SCRIPTABLE,
            Attribute::Compat => MethodFlags::COMPATIBILITY,
            Attribute::Revision(_) => MethodFlags::REVISIONED,
        };
    }

    flags
}

/// Type word: the builtin id for `void`, otherwise the tagged spelling.
pub fn type_word(ty: &TypeRef, strings: &mut StringTable) -> Word {
    match ty {
        TypeRef::Void => Word::Void,
        TypeRef::Named(named) => Word::Unresolved(strings.intern(&named.spelling)),
    }
}

pub struct MethodTableEncoder<'a> {
    class: &'a ClassDescription,
}

impl<'a> MethodTableEncoder<'a> {
    pub fn new(class: &'a ClassDescription) -> Self {
        Self { class }
    }

    /// `(name, argc, parameters, tag, flags)` per overload of `role`.
    pub fn descriptor_section(
        &self,
        role: MemberRole,
        strings: &mut StringTable,
        params: &mut IndexCursor,
    ) -> Option<TableSection> {
        if self.class.members(role).is_empty() {
            return None;
        }

        let rows: Vec<TableRow> = self
            .class
            .expand(role)
            .map(|clone| {
                let name = if clone.member.is_anonymous() {
                    strings.empty()
                } else {
                    strings.intern(&clone.member.name)
                };
                let offset = params.reserve_parameters(&clone);
                TableRow::new(vec![
                    Word::Str(name),
                    Word::int(clone.argc()),
                    Word::int(offset),
                    Word::Int(0),
                    Word::Flags(method_flags(&clone).bits()),
                ])
            })
            .collect();

        trace!(%role, rows = rows.len(), "encoded descriptor rows");
        Some(TableSection::titled(
            format!("{}: name, argc, parameters, tag, flags", role.plural()),
            rows,
        ))
    }

    /// One revision word per overload of `role` (0 when unrevisioned).
    pub fn revision_section(&self, role: MemberRole) -> Option<TableSection> {
        if self.class.members(role).is_empty() {
            return None;
        }

        let rows = self
            .class
            .expand(role)
            .map(|clone| TableRow::new(vec![Word::Int(clone.member.revision().unwrap_or(0))]))
            .collect();

        Some(TableSection::titled(
            format!("{}: revision", role.plural()),
            rows,
        ))
    }

    /// Result type, argument types, then argument names per overload of `role`.
    pub fn parameter_section(
        &self,
        role: MemberRole,
        strings: &mut StringTable,
    ) -> Option<TableSection> {
        if self.class.members(role).is_empty() {
            return None;
        }

        let rows: Vec<TableRow> = self
            .class
            .expand(role)
            .map(|clone| {
                let mut words = vec![type_word(&clone.member.result, strings)];
                for param in clone.parameters() {
                    words.push(type_word(&param.ty, strings));
                }
                for param in clone.parameters() {
                    let name = match param.name.as_deref() {
                        Some(name) if !name.is_empty() => strings.intern(name),
                        _ => strings.empty(),
                    };
                    words.push(Word::Str(name));
                }
                TableRow::new(words)
            })
            .collect();

        trace!(%role, rows = rows.len(), "encoded parameter rows");
        Some(TableSection::titled(
            format!("{}: parameters", role.plural()),
            rows,
        ))
    }
}
