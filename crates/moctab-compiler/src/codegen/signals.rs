//! Signal emission functions.

use std::fmt::{self, Write as _};

use moctab_core::CallableMember;

use super::generator::CodeGenerator;
use super::types::unqualified;

impl CodeGenerator<'_> {
    /// One function per declared signal, numbered by its canonical index.
    /// Pure and anonymous signals get no body but keep their index.
    pub(super) fn write_signals(&mut self) -> fmt::Result {
        let class = self.class;
        for (index, signal) in class.canonical_signals() {
            if signal.is_pure || signal.is_anonymous() {
                continue;
            }
            write_signal(&mut self.output, &class.qualified_name, signal, index)?;
        }
        Ok(())
    }
}

fn write_signal(out: &mut String, q: &str, signal: &CallableMember, index: usize) -> fmt::Result {
    let params = signal
        .parameters
        .iter()
        .enumerate()
        .map(|(j, p)| format!("{} _t{}", p.ty.spelling(), j + 1))
        .collect::<Vec<_>>()
        .join(",");

    writeln!(out)?;
    writeln!(out, "// SIGNAL {index}")?;
    write!(
        out,
        "{} {q}::{}({params})",
        signal.result.spelling(),
        signal.name
    )?;
    let receiver = if signal.is_const {
        write!(out, " const")?;
        format!("const_cast< {q} *>(this)")
    } else {
        "this".to_string()
    };
    writeln!(out)?;
    writeln!(out, "{{")?;

    let is_void = signal.result.is_void();
    if is_void && signal.parameters.is_empty() {
        writeln!(
            out,
            "    QMetaObject::activate({receiver}, &staticMetaObject, {index}, 0);"
        )?;
        return writeln!(out, "}}");
    }

    if signal.result.is_pointer() {
        writeln!(out, "    {} _t0 = 0;", signal.result.spelling())?;
    } else if !is_void {
        let holder = unqualified(&signal.result);
        writeln!(out, "    {holder} _t0 = {holder}();")?;
    }

    let mut slots = vec![if is_void { "0" } else { "&_t0" }.to_string()];
    for (j, p) in signal.parameters.iter().enumerate() {
        let erased = if p.ty.is_volatile() {
            "const volatile void*"
        } else {
            "const void*"
        };
        slots.push(format!(
            "const_cast<void*>(reinterpret_cast<{erased}>(&_t{}))",
            j + 1
        ));
    }
    writeln!(out, "    void *_a[] = {{ {} }};", slots.join(", "))?;
    writeln!(
        out,
        "    QMetaObject::activate({receiver}, &staticMetaObject, {index}, _a);"
    )?;
    if !is_void {
        writeln!(out, "    return _t0;")?;
    }
    writeln!(out, "}}")
}
