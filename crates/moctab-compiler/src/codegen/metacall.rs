//! `qt_metacall()`: base chaining, method forwarding and property dispatch.

use std::fmt::{self, Write as _};

use moctab_core::utils::is_call_form;
use moctab_core::{ClassDescription, FlagValue, PropertyMember};

use super::generator::CodeGenerator;

/// Property operations in dispatch order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PropertyOp {
    Read,
    Write,
    Reset,
    Designable,
    Scriptable,
    Stored,
    Editable,
    User,
}

impl PropertyOp {
    const ALL: [PropertyOp; 8] = [
        PropertyOp::Read,
        PropertyOp::Write,
        PropertyOp::Reset,
        PropertyOp::Designable,
        PropertyOp::Scriptable,
        PropertyOp::Stored,
        PropertyOp::Editable,
        PropertyOp::User,
    ];

    fn action(self) -> &'static str {
        match self {
            PropertyOp::Read => "ReadProperty",
            PropertyOp::Write => "WriteProperty",
            PropertyOp::Reset => "ResetProperty",
            PropertyOp::Designable => "QueryPropertyDesignable",
            PropertyOp::Scriptable => "QueryPropertyScriptable",
            PropertyOp::Stored => "QueryPropertyStored",
            PropertyOp::Editable => "QueryPropertyEditable",
            PropertyOp::User => "QueryPropertyUser",
        }
    }

    fn query<'p>(self, p: &'p PropertyMember) -> Option<&'p FlagValue> {
        match self {
            PropertyOp::Designable => Some(&p.designable),
            PropertyOp::Scriptable => Some(&p.scriptable),
            PropertyOp::Stored => Some(&p.stored),
            PropertyOp::Editable => Some(&p.editable),
            PropertyOp::User => Some(&p.user),
            PropertyOp::Read | PropertyOp::Write | PropertyOp::Reset => None,
        }
    }

    /// Whether `p` makes this operation emit a switch.
    fn needed_by(self, p: &PropertyMember) -> bool {
        match self {
            PropertyOp::Read => p.is_readable(),
            PropertyOp::Write => p.is_writable(),
            PropertyOp::Reset => p.is_resettable(),
            _ => self.query(p).and_then(call_form_expression).is_some(),
        }
    }

    /// Statement for the case of `p`, or `None` for an empty case.
    fn statement(self, p: &PropertyMember) -> Option<String> {
        let prefix = p.accessor_prefix();
        let arg = format!("*reinterpret_cast< {}*>(_a[0])", p.ty);
        match self {
            PropertyOp::Read => {
                if !p.read.is_empty() {
                    Some(format!("{arg} = {prefix}{}(); ", p.read))
                } else if !p.member.is_empty() {
                    Some(format!("{arg} = {prefix}{}; ", p.member))
                } else {
                    None
                }
            }
            PropertyOp::Write => {
                if p.constant {
                    None
                } else if !p.write.is_empty() {
                    Some(format!("{prefix}{}({arg}); ", p.write))
                } else if !p.member.is_empty() {
                    Some(format!("{prefix}{} = {arg}; ", p.member))
                } else {
                    None
                }
            }
            PropertyOp::Reset => {
                is_call_form(&p.reset).then(|| format!("{prefix}{}; ", p.reset))
            }
            _ => self
                .query(p)
                .and_then(call_form_expression)
                .map(|expr| format!("*reinterpret_cast<bool*>(_a[0]) = {expr}; ")),
        }
    }
}

fn call_form_expression(value: &FlagValue) -> Option<&str> {
    value.expression().filter(|expr| is_call_form(expr))
}

impl CodeGenerator<'_> {
    pub(super) fn write_metacall(&mut self) -> fmt::Result {
        let class = self.class;
        let method_count = class.method_count();
        let out = &mut self.output;

        writeln!(out)?;
        writeln!(
            out,
            "int {}::qt_metacall(QMetaObject::Call _c, int _id, void **_a)",
            class.qualified_name
        )?;
        writeln!(out, "{{")?;
        if class.has_base() {
            writeln!(out, "    _id = {}::qt_metacall(_c, _id, _a);", class.base_name)?;
        }
        writeln!(out, "    if (_id < 0)")?;
        writeln!(out, "        return _id;")?;

        if method_count > 0 {
            writeln!(out, "    if (_c == QMetaObject::InvokeMetaMethod) {{")?;
            writeln!(out, "        if (_id < {method_count})")?;
            writeln!(out, "            qt_static_metacall(this, _c, _id, _a);")?;
            writeln!(out, "        _id -= {method_count};")?;
            writeln!(
                out,
                "    }} else if (_c == QMetaObject::RegisterMethodArgumentMetaType) {{"
            )?;
            writeln!(out, "        if (_id < {method_count})")?;
            writeln!(out, "            *reinterpret_cast<int*>(_a[0]) = -1;")?;
            writeln!(out, "        _id -= {method_count};")?;
            writeln!(out, "    }}")?;
        }

        if !class.properties.is_empty() {
            write_property_dispatch(out, class, method_count > 0)?;
        }

        writeln!(out, "    return _id;")?;
        writeln!(out, "}}")
    }
}

fn write_property_dispatch(
    out: &mut String,
    class: &ClassDescription,
    after_methods: bool,
) -> fmt::Result {
    let count = class.properties.len();
    let mut opener = if after_methods { "    else if" } else { "    if" };

    writeln!(out, "#ifndef QT_NO_PROPERTIES")?;
    for op in PropertyOp::ALL {
        writeln!(out, "{opener} (_c == QMetaObject::{}) {{", op.action())?;
        if class.properties.iter().any(|p| op.needed_by(p)) {
            writeln!(out, "        switch (_id) {{")?;
            for (i, p) in class.properties.iter().enumerate() {
                let statement = op.statement(p).unwrap_or_default();
                writeln!(out, "        case {i}: {statement}break;")?;
            }
            writeln!(out, "        }}")?;
        }
        writeln!(out, "        _id -= {count};")?;
        opener = "    } else if";
    }

    writeln!(out, "{opener} (_c == QMetaObject::RegisterPropertyMetaType) {{")?;
    writeln!(out, "        if (_id < {count})")?;
    writeln!(out, "            *reinterpret_cast<int*>(_a[0]) = -1;")?;
    writeln!(out, "        _id -= {count};")?;
    writeln!(out, "    }}")?;
    writeln!(out, "#endif // QT_NO_PROPERTIES")
}
