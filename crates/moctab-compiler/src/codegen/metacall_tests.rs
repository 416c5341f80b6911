use moctab_core::{ClassDescription, FlagValue, PropertyMember};

use super::generator::CodeGenerator;
use crate::Config;
use crate::emit::emit;
use crate::test_utils::{signal_only, widget};

fn metacall(class: &ClassDescription) -> String {
    let emitted = emit(class).unwrap();
    let config = Config::default();
    let mut generator = CodeGenerator::new(class, &emitted, &config);
    generator.write_metacall().unwrap();
    generator.output
}

fn panel() -> ClassDescription {
    let mut width = PropertyMember::new("width", "int");
    width.member = "m_width".to_string();
    width.in_private_class = "d_func()".to_string();
    width.reset = "resetWidth()".to_string();
    width.stored = FlagValue::from("isStored()");

    let mut title = PropertyMember::new("title", "QString");
    title.read = "title".to_string();
    title.constant = true;
    title.designable = FlagValue::from("canDesign()");
    title.user = FlagValue::Literal(false);

    let mut class = ClassDescription::new("Panel");
    class.properties = vec![width, title];
    class
}

#[test]
fn methods_only() {
    insta::assert_snapshot!(metacall(&signal_only()).trim(), @r"
    int Counter::qt_metacall(QMetaObject::Call _c, int _id, void **_a)
    {
        _id = QObject::qt_metacall(_c, _id, _a);
        if (_id < 0)
            return _id;
        if (_c == QMetaObject::InvokeMetaMethod) {
            if (_id < 1)
                qt_static_metacall(this, _c, _id, _a);
            _id -= 1;
        } else if (_c == QMetaObject::RegisterMethodArgumentMetaType) {
            if (_id < 1)
                *reinterpret_cast<int*>(_a[0]) = -1;
            _id -= 1;
        }
        return _id;
    }
    ");
}

#[test]
fn methods_then_properties() {
    insta::assert_snapshot!(metacall(&widget()).trim(), @r"
    int ui::Widget::qt_metacall(QMetaObject::Call _c, int _id, void **_a)
    {
        _id = QObject::qt_metacall(_c, _id, _a);
        if (_id < 0)
            return _id;
        if (_c == QMetaObject::InvokeMetaMethod) {
            if (_id < 4)
                qt_static_metacall(this, _c, _id, _a);
            _id -= 4;
        } else if (_c == QMetaObject::RegisterMethodArgumentMetaType) {
            if (_id < 4)
                *reinterpret_cast<int*>(_a[0]) = -1;
            _id -= 4;
        }
    #ifndef QT_NO_PROPERTIES
        else if (_c == QMetaObject::ReadProperty) {
            switch (_id) {
            case 0: *reinterpret_cast< int*>(_a[0]) = value(); break;
            }
            _id -= 1;
        } else if (_c == QMetaObject::WriteProperty) {
            switch (_id) {
            case 0: setValue(*reinterpret_cast< int*>(_a[0])); break;
            }
            _id -= 1;
        } else if (_c == QMetaObject::ResetProperty) {
            _id -= 1;
        } else if (_c == QMetaObject::QueryPropertyDesignable) {
            _id -= 1;
        } else if (_c == QMetaObject::QueryPropertyScriptable) {
            _id -= 1;
        } else if (_c == QMetaObject::QueryPropertyStored) {
            _id -= 1;
        } else if (_c == QMetaObject::QueryPropertyEditable) {
            _id -= 1;
        } else if (_c == QMetaObject::QueryPropertyUser) {
            _id -= 1;
        } else if (_c == QMetaObject::RegisterPropertyMetaType) {
            if (_id < 1)
                *reinterpret_cast<int*>(_a[0]) = -1;
            _id -= 1;
        }
    #endif // QT_NO_PROPERTIES
        return _id;
    }
    ");
}

#[test]
fn property_dispatch_without_base() {
    insta::assert_snapshot!(metacall(&panel()).trim(), @r"
    int Panel::qt_metacall(QMetaObject::Call _c, int _id, void **_a)
    {
        if (_id < 0)
            return _id;
    #ifndef QT_NO_PROPERTIES
        if (_c == QMetaObject::ReadProperty) {
            switch (_id) {
            case 0: *reinterpret_cast< int*>(_a[0]) = d_func()->m_width; break;
            case 1: *reinterpret_cast< QString*>(_a[0]) = title(); break;
            }
            _id -= 2;
        } else if (_c == QMetaObject::WriteProperty) {
            switch (_id) {
            case 0: d_func()->m_width = *reinterpret_cast< int*>(_a[0]); break;
            case 1: break;
            }
            _id -= 2;
        } else if (_c == QMetaObject::ResetProperty) {
            switch (_id) {
            case 0: d_func()->resetWidth(); break;
            case 1: break;
            }
            _id -= 2;
        } else if (_c == QMetaObject::QueryPropertyDesignable) {
            switch (_id) {
            case 0: break;
            case 1: *reinterpret_cast<bool*>(_a[0]) = canDesign(); break;
            }
            _id -= 2;
        } else if (_c == QMetaObject::QueryPropertyScriptable) {
            _id -= 2;
        } else if (_c == QMetaObject::QueryPropertyStored) {
            switch (_id) {
            case 0: *reinterpret_cast<bool*>(_a[0]) = isStored(); break;
            case 1: break;
            }
            _id -= 2;
        } else if (_c == QMetaObject::QueryPropertyEditable) {
            _id -= 2;
        } else if (_c == QMetaObject::QueryPropertyUser) {
            _id -= 2;
        } else if (_c == QMetaObject::RegisterPropertyMetaType) {
            if (_id < 2)
                *reinterpret_cast<int*>(_a[0]) = -1;
            _id -= 2;
        }
    #endif // QT_NO_PROPERTIES
        return _id;
    }
    ");
}

#[test]
fn non_call_expressions_are_not_dispatched() {
    let mut class = panel();
    class.properties[0].stored = FlagValue::from("m_stored");
    class.properties[0].reset = "resetWidth".to_string();

    let source = metacall(&class);

    assert!(!source.contains("m_stored"));
    assert!(!source.contains("resetWidth"));
}

#[test]
fn user_query_is_dispatched_once() {
    let mut class = panel();
    class.properties[1].user = FlagValue::from("isUser()");

    let source = metacall(&class);

    assert_eq!(source.matches("QueryPropertyUser").count(), 1);
    assert_eq!(source.matches("= isUser();").count(), 1);
}

#[test]
fn empty_class_only_returns() {
    let source = metacall(&ClassDescription::new("Empty"));

    assert!(!source.contains("QT_NO_PROPERTIES"));
    assert!(!source.contains("InvokeMetaMethod"));
    assert!(source.ends_with("    return _id;\n}\n"));
}
