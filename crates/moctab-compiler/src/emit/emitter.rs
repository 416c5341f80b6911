//! Core table emission logic.

use moctab_core::{ClassDescription, INVOKABLE_ROLES, MemberRole};
use moctab_format::{Header, Word};

use super::EmitError;
use super::cursor::{IndexCursor, parameter_table_words};
use super::enums::EnumTableEncoder;
use super::layout::{Layout, Slot};
use super::methods::MethodTableEncoder;
use super::properties::PropertyTableEncoder;
use super::string_table::StringTable;
use super::table::{MetaData, TableRow, TableSection};

/// Result of table emission for one class.
#[derive(Debug, Clone)]
pub struct Emitted {
    pub layout: Layout,
    pub table: MetaData,
    pub strings: StringTable,
}

/// Validate `class` and build its data array and string table.
///
/// Sections are appended in layout order; in debug builds every section is
/// checked to start where the layout reserved it.
pub fn emit(class: &ClassDescription) -> Result<Emitted, EmitError> {
    class.validate()?;

    let layout = Layout::compute(class);
    if layout.total_words() > i32::MAX as usize {
        return Err(EmitError::TableTooLarge(layout.total_words()));
    }

    let mut strings = StringTable::new(&class.qualified_name);
    let mut table = MetaData::default();

    table.push(Some(header_section(&layout.header())));
    check_slot(&table, &layout.class_info);
    table.push(class_info_section(class, &mut strings));

    let methods = MethodTableEncoder::new(class);
    let mut params = IndexCursor::new(layout.parameters);
    check_slot(&table, &layout.methods);
    for role in INVOKABLE_ROLES {
        table.push(methods.descriptor_section(role, &mut strings, &mut params));
    }

    if let Some(offset) = layout.method_revisions {
        debug_assert_eq!(table.len(), offset, "method revisions misplaced");
        for role in INVOKABLE_ROLES {
            table.push(methods.revision_section(role));
        }
    }

    debug_assert_eq!(table.len(), layout.parameters, "parameter block misplaced");
    for role in INVOKABLE_ROLES.into_iter().chain([MemberRole::Constructor]) {
        table.push(methods.parameter_section(role, &mut strings));
    }

    let properties = PropertyTableEncoder::new(class);
    check_slot(&table, &layout.properties);
    table.push(properties.rows(&mut strings));
    if let Some(offset) = layout.property_notify {
        debug_assert_eq!(table.len(), offset, "notify words misplaced");
        table.push(properties.notify_section());
    }
    if let Some(offset) = layout.property_revisions {
        debug_assert_eq!(table.len(), offset, "property revisions misplaced");
        table.push(properties.revision_section());
    }

    let enums = EnumTableEncoder::new(class);
    check_slot(&table, &layout.enums);
    table.push(enums.rows(&mut strings, layout.enum_data));
    debug_assert_eq!(table.len(), layout.enum_data, "enum data misplaced");
    table.push(enums.data_section(&mut strings));

    check_slot(&table, &layout.constructors);
    table.push(methods.descriptor_section(MemberRole::Constructor, &mut strings, &mut params));

    debug_assert_eq!(
        params.position(),
        layout.parameters + parameter_table_words(class),
        "descriptor rows and parameter block disagree"
    );
    debug_assert_eq!(table.len(), layout.end, "table length differs from layout");

    Ok(Emitted {
        layout,
        table,
        strings,
    })
}

fn check_slot(table: &MetaData, slot: &Slot) {
    if slot.count > 0 {
        debug_assert_eq!(table.len(), slot.offset, "section misplaced");
    }
}

fn header_section(header: &Header) -> TableSection {
    let pair = |count: u32, offset: u32, comment: &str| {
        TableRow::new(vec![Word::Int(count), Word::Int(offset)]).with_comment(comment)
    };

    TableSection::untitled(vec![
        TableRow::new(vec![Word::Int(header.revision)]).with_comment("revision"),
        TableRow::new(vec![Word::Str(header.class_name)]).with_comment("classname"),
        pair(header.class_info.count, header.class_info.offset, "classinfo"),
        pair(header.methods.count, header.methods.offset, "methods"),
        pair(header.properties.count, header.properties.offset, "properties"),
        pair(header.enums.count, header.enums.offset, "enums/sets"),
        pair(
            header.constructors.count,
            header.constructors.offset,
            "constructors",
        ),
        TableRow::new(vec![Word::Int(header.flags)]).with_comment("flags"),
        TableRow::new(vec![Word::Int(header.signal_count)]).with_comment("signalCount"),
    ])
}

fn class_info_section(class: &ClassDescription, strings: &mut StringTable) -> Option<TableSection> {
    if class.class_info.is_empty() {
        return None;
    }

    let rows = class
        .class_info
        .iter()
        .map(|(key, value)| {
            let key = strings.intern(key);
            let value = strings.intern(value);
            TableRow::new(vec![Word::Str(key), Word::Str(value)])
        })
        .collect();

    Some(TableSection::titled("classinfo: key, value", rows))
}
