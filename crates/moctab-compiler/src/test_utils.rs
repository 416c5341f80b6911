//! Shared fixtures for compiler tests.

use moctab_core::{CallableMember, ClassDescription, EnumMember, Parameter, PropertyMember};

/// `Counter : QObject` with a single `changed()` signal.
pub fn signal_only() -> ClassDescription {
    let mut class = ClassDescription::new("Counter");
    class.base_name = "QObject".to_string();
    class.signals.push(CallableMember::new("changed"));
    class
}

/// `ui::Widget : QObject` exercising every table section:
/// - class info `Author = moctab`
/// - signal `valueChanged(int value)`
/// - slot `setValue(int value, bool notify = ...)`
/// - invokable `QString label() const`
/// - constructor `Widget(QObject *parent = ...)`
/// - property `int value` (read, write, notify through signal 0)
/// - enum `Mode { Fast = 0, Slow = 1 }`
pub fn widget() -> ClassDescription {
    let mut value = PropertyMember::new("value", "int");
    value.read = "value".to_string();
    value.write = "setValue".to_string();
    value.notify = Some(0);

    ClassDescription {
        qualified_name: "ui::Widget".to_string(),
        base_name: "QObject".to_string(),
        has_introspection_root: true,
        class_info: vec![("Author".to_string(), "moctab".to_string())],
        signals: vec![CallableMember::new("valueChanged").with_parameter(Parameter::new("int", "value"))],
        slots: vec![
            CallableMember::new("setValue")
                .with_parameter(Parameter::new("int", "value"))
                .with_parameter(Parameter::new("bool", "notify"))
                .with_min_required_args(1),
        ],
        methods: vec![CallableMember::new("label").with_result("QString").constant()],
        constructors: vec![
            CallableMember::new("")
                .with_parameter(Parameter::new("QObject *", "parent"))
                .with_min_required_args(0),
        ],
        properties: vec![value],
        enums: vec![EnumMember::new("Mode").with_key("Fast", 0).with_key("Slow", 1)],
    }
}
