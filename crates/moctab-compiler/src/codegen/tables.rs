//! Data array, string data and the static meta-object record.

use std::fmt::{self, Write as _};

use moctab_format::Word;

use super::generator::CodeGenerator;

impl CodeGenerator<'_> {
    pub(super) fn write_data_array(&mut self) -> fmt::Result {
        let comments = self.config.has_comments();
        let out = &mut self.output;

        writeln!(out)?;
        writeln!(out, "static const uint qt_meta_data_{}[] = {{", self.ident)?;

        for section in &self.emitted.table.sections {
            if comments && let Some(title) = &section.title {
                writeln!(out)?;
                writeln!(out, " // {title}")?;
            }
            for row in &section.rows {
                let words: Vec<String> = row.words.iter().map(Word::to_string).collect();
                write!(out, "    {},", words.join(", "))?;
                if comments && let Some(comment) = &row.comment {
                    write!(out, " // {comment}")?;
                }
                out.push('\n');
            }
        }

        writeln!(out)?;
        if comments {
            writeln!(out, "    0    // eod")?;
        } else {
            writeln!(out, "    0")?;
        }
        writeln!(out, "}};")
    }

    pub(super) fn write_string_data(&mut self) -> fmt::Result {
        let strings = &self.emitted.strings;
        let id = &self.ident;
        let out = &mut self.output;

        writeln!(out, "struct qt_meta_stringdata_{id}_t {{")?;
        writeln!(out, "    QByteArrayData data[{}];", strings.len())?;
        writeln!(out, "    char stringdata[{}];", strings.byte_len())?;
        writeln!(out, "}};")?;
        writeln!(out, "#define QT_MOC_LITERAL(idx, ofs, len) \\")?;
        writeln!(
            out,
            "    Q_STATIC_BYTE_ARRAY_DATA_HEADER_INITIALIZER_WITH_OFFSET(len, \\"
        )?;
        writeln!(
            out,
            "    offsetof(qt_meta_stringdata_{id}_t, stringdata) + ofs \\"
        )?;
        writeln!(out, "        - idx * sizeof(QByteArrayData) \\")?;
        writeln!(out, "    )")?;
        writeln!(
            out,
            "static const qt_meta_stringdata_{id}_t qt_meta_stringdata_{id} = {{"
        )?;
        writeln!(out, "    {{")?;

        let literals: Vec<String> = strings
            .entries()
            .map(|e| format!("QT_MOC_LITERAL({}, {}, {})", e.index, e.offset, e.len))
            .collect();
        writeln!(out, "{}", literals.join(",\n"))?;

        writeln!(out, "    }},")?;
        writeln!(
            out,
            "    \"{}\"",
            packed_literal(strings.iter(), self.config.wrap_column())
        )?;
        writeln!(out, "}};")?;
        writeln!(out, "#undef QT_MOC_LITERAL")
    }

    pub(super) fn write_static_record(&mut self) -> fmt::Result {
        let class = self.class;
        let id = &self.ident;
        let out = &mut self.output;

        let base = if class.has_base() {
            format!("&{}::staticMetaObject", class.base_name)
        } else {
            "0".to_string()
        };
        let static_metacall = if class.has_introspection_root {
            "qt_static_metacall"
        } else {
            "0"
        };

        writeln!(
            out,
            "const QMetaObject {}::staticMetaObject = {{",
            class.qualified_name
        )?;
        writeln!(out, "    {{ {base}, qt_meta_stringdata_{id}.data,")?;
        writeln!(out, "      qt_meta_data_{id}, {static_metacall}, 0, 0}}")?;
        writeln!(out, "}};")
    }
}

/// Body of the packed string literal: every entry followed by `\0`, split
/// into adjacent literals once a line would reach `wrap` columns.
///
/// An entry starting with a digit is preceded by `""` so the digit does not
/// extend the previous `\0` escape.
pub fn packed_literal<'s>(strings: impl IntoIterator<Item = &'s str>, wrap: usize) -> String {
    let mut out = String::new();
    let mut col = 0;

    for s in strings {
        if col > 0 && col + s.len() >= wrap {
            out.push_str("\"\n    \"");
            col = 0;
        } else if s.starts_with(|c: char| c.is_ascii_digit()) {
            out.push_str("\"\"");
        }
        escape_into(&mut out, s);
        out.push_str("\\0");
        col += 2 + s.len();
    }

    out
}

fn escape_into(out: &mut String, s: &str) {
    for byte in s.bytes() {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'"' => out.push_str("\\\""),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\{byte:03o}")),
        }
    }
}
