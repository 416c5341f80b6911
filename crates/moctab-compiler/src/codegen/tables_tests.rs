use moctab_core::ClassDescription;

use super::generator::CodeGenerator;
use super::packed_literal;
use crate::Config;
use crate::emit::emit;
use crate::test_utils::signal_only;

fn tables(class: &ClassDescription, config: &Config) -> String {
    let emitted = emit(class).unwrap();
    let mut generator = CodeGenerator::new(class, &emitted, config);
    generator.write_data_array().unwrap();
    generator.write_string_data().unwrap();
    generator.write_static_record().unwrap();
    generator.output
}

#[test]
fn signal_only_tables() {
    let source = tables(&signal_only(), &Config::default());

    insta::assert_snapshot!(source.trim(), @r#"
    static const uint qt_meta_data_Counter[] = {
        7, // revision
        0, // classname
        0, 0, // classinfo
        1, 14, // methods
        0, 0, // properties
        0, 0, // enums/sets
        0, 0, // constructors
        0, // flags
        1, // signalCount

     // signals: name, argc, parameters, tag, flags
        2, 0, 19, 0, 0x5,

     // signals: parameters
        QMetaType::Void,

        0    // eod
    };
    struct qt_meta_stringdata_Counter_t {
        QByteArrayData data[3];
        char stringdata[18];
    };
    #define QT_MOC_LITERAL(idx, ofs, len) \
        Q_STATIC_BYTE_ARRAY_DATA_HEADER_INITIALIZER_WITH_OFFSET(len, \
        offsetof(qt_meta_stringdata_Counter_t, stringdata) + ofs \
            - idx * sizeof(QByteArrayData) \
        )
    static const qt_meta_stringdata_Counter_t qt_meta_stringdata_Counter = {
        {
    QT_MOC_LITERAL(0, 0, 7),
    QT_MOC_LITERAL(1, 8, 0),
    QT_MOC_LITERAL(2, 9, 7)
        },
        "Counter\0\0changed\0"
    };
    #undef QT_MOC_LITERAL
    const QMetaObject Counter::staticMetaObject = {
        { &QObject::staticMetaObject, qt_meta_stringdata_Counter.data,
          qt_meta_data_Counter, qt_static_metacall, 0, 0}
    };
    "#);
}

#[test]
fn comments_can_be_disabled() {
    let config = Config::new().comments(false);
    let source = tables(&signal_only(), &config);
    let array = source.split("struct").next().unwrap();

    insta::assert_snapshot!(array.trim(), @r"
    static const uint qt_meta_data_Counter[] = {
        7,
        0,
        0, 0,
        1, 14,
        0, 0,
        0, 0,
        0, 0,
        0,
        1,
        2, 0, 19, 0, 0x5,
        QMetaType::Void,

        0
    };
    ");
}

#[test]
fn record_without_base_or_dispatch() {
    let mut class = ClassDescription::new("ns::Plain");
    class.has_introspection_root = false;

    let source = tables(&class, &Config::default());

    assert!(source.contains("static const uint qt_meta_data_ns__Plain[] = {"));
    assert!(source.contains(
        "    { 0, qt_meta_stringdata_ns__Plain.data,\n      qt_meta_data_ns__Plain, 0, 0, 0}"
    ));
}

#[test]
fn packed_literal_terminates_every_entry() {
    assert_eq!(packed_literal(["A", "", "b"], 72), r"A\0\0b\0");
}

#[test]
fn packed_literal_guards_leading_digits() {
    assert_eq!(packed_literal(["A", "1x"], 72), r#"A\0""1x\0"#);
}

#[test]
fn packed_literal_wraps_long_lines() {
    assert_eq!(
        packed_literal(["abcdefgh", "ij"], 10),
        "abcdefgh\\0\"\n    \"ij\\0"
    );
}

#[test]
fn packed_literal_escapes_special_bytes() {
    assert_eq!(packed_literal(["a\"b\\c\n\t\u{1}"], 72), r#"a\"b\\c\n\t\001\0"#);
    assert_eq!(packed_literal(["é"], 72), r"\303\251\0");
}
