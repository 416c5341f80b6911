//! `metaObject()` and `qt_metacast()`.

use std::fmt::{self, Write as _};

use super::generator::CodeGenerator;

impl CodeGenerator<'_> {
    pub(super) fn write_meta_object(&mut self) -> fmt::Result {
        let q = &self.class.qualified_name;
        let out = &mut self.output;

        writeln!(out, "const QMetaObject *{q}::metaObject() const")?;
        writeln!(out, "{{")?;
        writeln!(
            out,
            "    return QObject::d_ptr->metaObject ? QObject::d_ptr->dynamicMetaObject() : &staticMetaObject;"
        )?;
        writeln!(out, "}}")
    }

    /// Compares against string 0 (the class name) before deferring to the base.
    pub(super) fn write_metacast(&mut self) -> fmt::Result {
        let class = self.class;
        let q = &class.qualified_name;
        let out = &mut self.output;

        writeln!(out, "void *{q}::qt_metacast(const char *_clname)")?;
        writeln!(out, "{{")?;
        writeln!(out, "    if (!_clname) return 0;")?;
        writeln!(
            out,
            "    if (!strcmp(_clname, qt_meta_stringdata_{}.stringdata))",
            self.ident
        )?;
        writeln!(
            out,
            "        return static_cast<void*>(const_cast<{q}*>(this));"
        )?;
        if class.has_base() {
            writeln!(out, "    return {}::qt_metacast(_clname);", class.base_name)?;
        } else {
            writeln!(out, "    return 0;")?;
        }
        writeln!(out, "}}")
    }
}
