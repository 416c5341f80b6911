use std::collections::HashSet;

use moctab_core::{Attribute, CallableMember, ClassDescription, DescriptionError, PropertyMember};
use moctab_format::{MetaDataView, MethodFlags, StringId};

use super::{EmitError, emit, parameter_words};
use crate::test_utils::{signal_only, widget};

const T: u32 = 0x8000_0000;

#[test]
fn signal_only_array() {
    let emitted = emit(&signal_only()).unwrap();

    assert_eq!(
        emitted.table.values(),
        [
            7, 0, 0, 0, 1, 14, 0, 0, 0, 0, 0, 0, 0, 1, // header
            2, 0, 19, 0, 0x5, // changed()
            43, // void
            0,
        ]
    );
    assert_eq!(emitted.strings.iter().collect::<Vec<_>>(), ["Counter", "", "changed"]);
}

#[test]
fn widget_array() {
    let emitted = emit(&widget()).unwrap();

    #[rustfmt::skip]
    let expected = [
        7, 0, 1, 14, 4, 16, 1, 52, 1, 56, 2, 64, 0, 1,
        2, 3,
        4, 1, 36, 0, 0x5,
        5, 2, 39, 0, 0xa,
        5, 1, 44, 0, 0x2a,
        6, 0, 47, 0, 0x2,
        43, T | 7, 8,
        43, T | 7, T | 9, 8, 10,
        43, T | 7, 8,
        T | 11,
        43, T | 12, 13,
        43,
        8, T | 7, 0x6a_a003,
        0,
        14, 0, 2, 60,
        15, 0, 16, 1,
        1, 1, 48, 0, 0xe,
        1, 0, 51, 0, 0x2e,
        0,
    ];
    assert_eq!(emitted.table.values(), expected);
    assert_eq!(emitted.table.len(), emitted.layout.end);
    assert_eq!(emitted.strings.len(), 17);
}

#[test]
fn descriptor_offsets_match_parameter_block() {
    let emitted = emit(&widget()).unwrap();
    let words = emitted.table.values();
    let view = MetaDataView::new(&words).unwrap();

    let mut expected = emitted.layout.parameters;
    for row in view.methods().chain(view.constructors()) {
        assert_eq!(row.parameters as usize, expected, "row {}", row.index);
        expected += parameter_words(row.argc as usize);
    }
    assert_eq!(expected, emitted.layout.properties.offset);
}

#[test]
fn view_reads_back_widget() {
    let emitted = emit(&widget()).unwrap();
    let words = emitted.table.values();
    let view = MetaDataView::new(&words).unwrap();
    let name = |id: StringId| emitted.strings.get(id).unwrap();

    let info: Vec<_> = view.class_info().map(|(k, v)| (name(k), name(v))).collect();
    assert_eq!(info, [("Author", "moctab")]);

    let cloned = view.method(2);
    assert_eq!(name(cloned.name), "setValue");
    assert_eq!(cloned.argc, 1);
    assert!(cloned.flags.contains(MethodFlags::CLONED));

    let params = view.parameters(&view.method(1));
    assert_eq!(params.result, 43);
    assert_eq!(params.names, [8, 10]);

    let property = view.property(0);
    assert_eq!(name(property.name), "value");
    assert_eq!(property.notify, Some(0));
    assert_eq!(property.revision, None);

    let mode = view.enum_at(0);
    let keys: Vec<_> = mode.keys().map(|(k, v)| (name(k), v)).collect();
    assert_eq!(keys, [("Fast", 0), ("Slow", 1)]);

    assert_eq!(view.constructor(0).name, StringId::new(1));
    assert_eq!(view.constructor(1).parameters, 51);
}

#[test]
fn absent_sections_have_zero_offset() {
    let emitted = emit(&signal_only()).unwrap();
    let header = emitted.layout.header();

    assert_eq!((header.class_info.count, header.class_info.offset), (0, 0));
    assert_eq!((header.properties.count, header.properties.offset), (0, 0));
    assert_eq!((header.enums.count, header.enums.offset), (0, 0));
    assert_eq!((header.constructors.count, header.constructors.offset), (0, 0));
}

#[test]
fn empty_class_is_header_and_terminator() {
    let emitted = emit(&ClassDescription::new("Empty")).unwrap();

    assert_eq!(emitted.table.values(), [7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(emitted.strings.len(), 2);
}

#[test]
fn strings_are_unique_and_class_name_first() {
    let emitted = emit(&widget()).unwrap();
    let strings: Vec<_> = emitted.strings.iter().collect();
    let unique: HashSet<_> = strings.iter().collect();

    assert_eq!(unique.len(), strings.len());
    assert_eq!(strings[0], "ui::Widget");
    assert_eq!(strings[1], "");
}

#[test]
fn emission_is_deterministic() {
    let a = emit(&widget()).unwrap();
    let b = emit(&widget()).unwrap();

    assert_eq!(a.table, b.table);
    assert_eq!(
        a.strings.iter().collect::<Vec<_>>(),
        b.strings.iter().collect::<Vec<_>>()
    );
}

#[test]
fn method_revisions_are_emitted_per_row() {
    let mut class = ClassDescription::new("R");
    class.signals.push(CallableMember::new("a"));
    class
        .slots
        .push(CallableMember::new("b").with_attribute(Attribute::Revision(2)));

    let emitted = emit(&class).unwrap();
    let words = emitted.table.values();
    let view = MetaDataView::new(&words).unwrap();

    assert!(view.has_method_revisions());
    assert_eq!(view.method_revision(0), Some(0));
    assert_eq!(view.method_revision(1), Some(2));
    assert!(view.method(1).flags.contains(MethodFlags::REVISIONED));
}

#[test]
fn property_revision_follows_notify() {
    let mut class = ClassDescription::new("P");
    class.signals.push(CallableMember::new("changed"));
    let mut a = PropertyMember::new("a", "int");
    a.notify = Some(0);
    let mut b = PropertyMember::new("b", "int");
    b.revision = 5;
    class.properties = vec![a, b];

    let emitted = emit(&class).unwrap();
    let words = emitted.table.values();
    let view = MetaDataView::new(&words).unwrap();

    assert_eq!(view.property(0).notify, Some(0));
    assert_eq!(view.property(0).revision, None);
    assert_eq!(view.property(1).notify, None);
    assert_eq!(view.property(1).revision, Some(5));
    assert_eq!(&words[26..30], [0, 0, 0, 5]);
}

#[test]
fn negative_enum_values_survive() {
    let mut class = ClassDescription::new("E");
    class.enums.push(
        moctab_core::EnumMember::new("Sign")
            .with_key("Minus", -1)
            .with_key("Plus", 1),
    );

    let emitted = emit(&class).unwrap();
    let words = emitted.table.values();
    let view = MetaDataView::new(&words).unwrap();

    let values: Vec<i32> = view.enum_at(0).keys().map(|(_, v)| v).collect();
    assert_eq!(values, [-1, 1]);
}

#[test]
fn invalid_description_is_rejected() {
    let mut class = signal_only();
    class.slots.push(CallableMember::new("f").with_min_required_args(1));

    let err = emit(&class).unwrap_err();

    assert!(matches!(
        err,
        EmitError::Description(DescriptionError::RequiredArgsExceedParameters { .. })
    ));
}
