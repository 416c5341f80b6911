//! Human-readable listing of a decoded data array.

use std::fmt;

use moctab_core::utils::width_for_count;

use crate::constants::{UNRESOLVED_TYPE, VOID_TYPE_ID};
use crate::header::Section;
use crate::view::{MetaDataView, MethodRow};
use crate::word::StringId;

/// Decoration of the listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpStyle {
    #[default]
    Plain,
    /// ANSI escapes per [`Role`].
    Ansi,
}

/// What a painted span of the listing stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Role {
    /// `[methods]` and the like.
    Section,
    /// Member, property, enum and class-info key names.
    Member,
    /// Class-info values.
    Literal,
    /// Offsets, flag descriptions, notify and revision suffixes.
    Detail,
}

impl DumpStyle {
    fn open(self, role: Role) -> &'static str {
        match (self, role) {
            (DumpStyle::Plain, _) => "",
            (DumpStyle::Ansi, Role::Section) => "\x1b[1;34m",
            (DumpStyle::Ansi, Role::Member) => "\x1b[36m",
            (DumpStyle::Ansi, Role::Literal) => "\x1b[32m",
            (DumpStyle::Ansi, Role::Detail) => "\x1b[2m",
        }
    }

    fn close(self) -> &'static str {
        match self {
            DumpStyle::Plain => "",
            DumpStyle::Ansi => "\x1b[0m",
        }
    }

    fn paint(self, role: Role, text: impl fmt::Display) -> String {
        format!("{}{text}{}", self.open(role), self.close())
    }
}

/// Render `view` section by section, resolving string indices via `strings`.
pub fn dump(view: &MetaDataView<'_>, strings: &[&str], style: DumpStyle) -> String {
    Dump {
        view,
        strings,
        style,
    }
    .to_string()
}

struct Dump<'v, 'a> {
    view: &'v MetaDataView<'a>,
    strings: &'v [&'v str],
    style: DumpStyle,
}

impl fmt::Display for Dump<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.header(f)?;
        self.class_info(f)?;
        self.methods(f)?;
        self.properties(f)?;
        self.enums(f)?;
        self.constructors(f)
    }
}

impl Dump<'_, '_> {
    fn string(&self, id: StringId) -> &str {
        self.strings.get(id.index()).copied().unwrap_or("<?>")
    }

    fn type_name(&self, word: u32) -> String {
        if word & UNRESOLVED_TYPE != 0 {
            self.string(StringId::new(word & !UNRESOLVED_TYPE)).to_string()
        } else if word == VOID_TYPE_ID {
            "void".to_string()
        } else {
            format!("#{word}")
        }
    }

    fn heading(&self, f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.style.paint(Role::Section, format_args!("[{title}]")))
    }

    fn header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.view.header();
        writeln!(f, "{}", self.style.paint(Role::Section, "[header]"))?;
        writeln!(f, "revision     {}", h.revision)?;
        writeln!(
            f,
            "classname    {}",
            self.style.paint(Role::Member, self.string(h.class_name))
        )?;
        for (label, section) in [
            ("classinfo", h.class_info),
            ("methods", h.methods),
            ("properties", h.properties),
            ("enums", h.enums),
            ("constructors", h.constructors),
        ] {
            writeln!(f, "{label:<12} {}", self.section(section))?;
        }
        writeln!(f, "flags        {}", h.flags)?;
        writeln!(f, "signals      {}", h.signal_count)
    }

    fn section(&self, s: Section) -> String {
        if s.is_empty() {
            "0".to_string()
        } else {
            let offset = format!("@{}", s.offset);
            format!("{} {}", s.count, self.style.paint(Role::Detail, offset))
        }
    }

    fn class_info(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs = self.view.class_info().peekable();
        if pairs.peek().is_none() {
            return Ok(());
        }
        self.heading(f, "classinfo")?;
        for (key, value) in pairs {
            let value = format!("{:?}", self.string(value));
            writeln!(
                f,
                "{} = {}",
                self.style.paint(Role::Member, self.string(key)),
                self.style.paint(Role::Literal, value)
            )?;
        }
        Ok(())
    }

    fn methods(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.view.method_count();
        if count == 0 {
            return Ok(());
        }
        self.heading(f, "methods")?;
        let w = width_for_count(count);
        for row in self.view.methods() {
            let revision = self.view.method_revision(row.index);
            self.method_line(f, &row, w, None, revision)?;
        }
        Ok(())
    }

    fn constructors(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.view.constructor_count();
        if count == 0 {
            return Ok(());
        }
        self.heading(f, "constructors")?;
        let w = width_for_count(count);
        let class_name = self.string(self.view.header().class_name);
        for row in self.view.constructors() {
            self.method_line(f, &row, w, Some(class_name), None)?;
        }
        Ok(())
    }

    fn method_line(
        &self,
        f: &mut fmt::Formatter<'_>,
        row: &MethodRow,
        width: usize,
        constructs: Option<&str>,
        revision: Option<u32>,
    ) -> fmt::Result {
        let params = self.view.parameters(row);
        let arguments = params
            .types
            .iter()
            .zip(params.names)
            .map(|(&ty, &name)| {
                let name = self.string(StringId::new(name));
                if name.is_empty() {
                    self.type_name(ty)
                } else {
                    format!("{} {name}", self.type_name(ty))
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        let signature = match constructs {
            Some(class_name) => {
                format!("{}({arguments})", self.style.paint(Role::Member, class_name))
            }
            None => format!(
                "{} {}({arguments})",
                self.type_name(params.result),
                self.style.paint(Role::Member, self.string(row.name))
            ),
        };

        let mut detail = row.flags.describe();
        if let Some(revision) = revision {
            detail.push_str(&format!(" r{revision}"));
        }
        writeln!(
            f,
            "{:>width$} {signature}  {}",
            row.index,
            self.style.paint(Role::Detail, detail)
        )
    }

    fn properties(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.view.property_count();
        if count == 0 {
            return Ok(());
        }
        self.heading(f, "properties")?;
        let w = width_for_count(count);
        for row in self.view.properties() {
            let mut detail = row.flags.describe();
            if let Some(signal) = row.notify {
                detail.push_str(&format!(" ->{signal}"));
            }
            if let Some(revision) = row.revision {
                detail.push_str(&format!(" r{revision}"));
            }
            writeln!(
                f,
                "{:>w$} {} {}  {}",
                row.index,
                self.type_name(row.ty),
                self.style.paint(Role::Member, self.string(row.name)),
                self.style.paint(Role::Detail, detail)
            )?;
        }
        Ok(())
    }

    fn enums(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.view.enum_count();
        if count == 0 {
            return Ok(());
        }
        self.heading(f, "enums")?;
        let w = width_for_count(count);
        for row in self.view.enums() {
            let kind = if row.flags.contains(crate::EnumFlags::IS_FLAG) {
                "flag"
            } else {
                "enum"
            };
            writeln!(
                f,
                "{:>w$} {} {}",
                row.index,
                self.style.paint(Role::Member, self.string(row.name)),
                self.style.paint(Role::Detail, kind)
            )?;
            for (key, value) in row.keys() {
                writeln!(f, "{:w$}   {} = {value}", "", self.string(key))?;
            }
        }
        Ok(())
    }
}
