//! `qt_static_metacall()`: constructors, invocation and signal lookup.

use std::fmt::{self, Write as _};

use moctab_core::{ClassDescription, MemberRole};

use super::generator::CodeGenerator;
use super::types::{pointer_to, returns_value, unmarshal_arguments, unqualified};

impl CodeGenerator<'_> {
    pub(super) fn write_static_metacall(&mut self) -> fmt::Result {
        let class = self.class;
        let out = &mut self.output;

        writeln!(out)?;
        writeln!(
            out,
            "void {}::qt_static_metacall(QObject *_o, QMetaObject::Call _c, int _id, void **_a)",
            class.qualified_name
        )?;
        writeln!(out, "{{")?;

        let mut opener = "    if";
        if !class.constructors.is_empty() {
            write_create_instance(out, class, opener)?;
            opener = "    } else if";
        }
        if class.method_count() > 0 {
            write_invoke(out, class, opener)?;
            opener = "    } else if";
        }
        if !class.signals.is_empty() {
            write_index_of_method(out, class, opener)?;
            opener = "    } else if";
        }
        if opener != "    if" {
            writeln!(out, "    }}")?;
        }

        writeln!(out, "    Q_UNUSED(_o); Q_UNUSED(_id); Q_UNUSED(_c); Q_UNUSED(_a);")?;
        writeln!(out, "}}")
    }
}

fn write_create_instance(out: &mut String, class: &ClassDescription, opener: &str) -> fmt::Result {
    writeln!(out, "{opener} (_c == QMetaObject::CreateInstance) {{")?;
    writeln!(out, "        switch (_id) {{")?;
    for (index, clone) in class.expand(MemberRole::Constructor).enumerate() {
        writeln!(
            out,
            "        case {index}: {{ QObject *_r = new {}({});",
            class.qualified_name,
            unmarshal_arguments(clone.parameters())
        )?;
        writeln!(
            out,
            "            if (_a[0]) *reinterpret_cast<QObject**>(_a[0]) = _r; }} break;"
        )?;
    }
    writeln!(out, "        }}")
}

/// Case labels are method indices; anonymous members get no case but still
/// consume their indices.
fn write_invoke(out: &mut String, class: &ClassDescription, opener: &str) -> fmt::Result {
    let q = &class.qualified_name;
    writeln!(out, "{opener} (_c == QMetaObject::InvokeMetaMethod) {{")?;
    writeln!(out, "        {q} *_t = static_cast<{q} *>(_o);")?;
    writeln!(out, "        switch (_id) {{")?;

    for (index, clone) in class.expand_invokables().enumerate() {
        let member = clone.member;
        if member.is_anonymous() {
            continue;
        }

        let call = format!(
            "_t->{}({});",
            member.name,
            unmarshal_arguments(clone.parameters())
        );
        if returns_value(&member.result) {
            let result = unqualified(&member.result);
            writeln!(out, "        case {index}: {{ {result} _r = {call}")?;
            writeln!(
                out,
                "            if (_a[0]) *reinterpret_cast< {} >(_a[0]) = _r; }} break;",
                pointer_to(result)
            )?;
        } else {
            writeln!(out, "        case {index}: {call} break;")?;
        }
    }

    writeln!(out, "        }}")
}

/// One comparison per declared signal against its canonical overload.
fn write_index_of_method(out: &mut String, class: &ClassDescription, opener: &str) -> fmt::Result {
    let q = &class.qualified_name;
    writeln!(out, "{opener} (_c == QMetaObject::IndexOfMethod) {{")?;
    writeln!(out, "        int *result = reinterpret_cast<int *>(_a[0]);")?;
    writeln!(out, "        void **func = reinterpret_cast<void **>(_a[1]);")?;

    for (index, signal) in class.canonical_signals() {
        if signal.is_static || signal.is_anonymous() {
            continue;
        }
        let params = signal
            .parameters
            .iter()
            .map(|p| p.ty.spelling())
            .collect::<Vec<_>>()
            .join(",");
        let constness = if signal.is_const { " const" } else { "" };

        writeln!(out, "        {{")?;
        writeln!(
            out,
            "            typedef {} ({q}::*_t)({params}){constness};",
            signal.result.spelling()
        )?;
        writeln!(
            out,
            "            if (*reinterpret_cast<_t *>(func) == static_cast<_t>(&{q}::{})) {{",
            signal.name
        )?;
        writeln!(out, "                *result = {index};")?;
        writeln!(out, "            }}")?;
        writeln!(out, "        }}")?;
    }

    Ok(())
}
