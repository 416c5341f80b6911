use moctab_core::{CallableMember, ClassDescription, MemberRole, Parameter};

use super::{IndexCursor, parameter_table_words, parameter_words};

#[test]
fn reserve_nothing_returns_zero_without_advancing() {
    let mut cursor = IndexCursor::after_header();

    assert_eq!(cursor.reserve(0), 0);
    assert_eq!(cursor.position(), 14);
}

#[test]
fn reserve_returns_previous_position() {
    let mut cursor = IndexCursor::after_header();

    assert_eq!(cursor.reserve(10), 14);
    assert_eq!(cursor.reserve(3), 24);
    assert_eq!(cursor.position(), 27);
}

#[test]
fn parameter_words_counts_result_types_and_names() {
    assert_eq!(parameter_words(0), 1);
    assert_eq!(parameter_words(3), 7);
}

#[test]
fn parameter_reservation_matches_block_size() {
    let mut class = ClassDescription::new("A");
    class.slots.push(
        CallableMember::new("f")
            .with_parameter(Parameter::unnamed("int"))
            .with_parameter(Parameter::unnamed("int"))
            .with_min_required_args(0),
    );
    class.constructors.push(CallableMember::new("").with_parameter(Parameter::unnamed("int")));

    let mut cursor = IndexCursor::new(100);
    for clone in class.expand(MemberRole::Slot).chain(class.expand(MemberRole::Constructor)) {
        cursor.reserve_parameters(&clone);
    }

    // f(int, int), f(int), f(), A(int)
    assert_eq!(parameter_table_words(&class), 5 + 3 + 1 + 3);
    assert_eq!(cursor.position() - 100, parameter_table_words(&class));
}
