//! Stringified type references.
//!
//! The front-end hands over types as spellings, not as resolved type objects.
//! The table only ever needs the spelling itself; the dispatch glue also needs
//! to know whether the type is a reference or pointer, whether it is volatile,
//! and how it reads with references and top-level qualifiers removed.
//!
//! On the wire a type is either a bare spelling (`"const QString &"`), from which
//! the qualifiers are inferred, or a detailed object that states them.

use serde::{Deserialize, Serialize};

/// A result or parameter type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawTypeRef", into = "RawTypeRef")]
pub enum TypeRef {
    /// No value.
    #[default]
    Void,
    Named(NamedType),
}

/// A non-void type spelling plus the qualifiers dispatch code cares about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedType {
    /// Spelling as declared, e.g. `const QString &`.
    pub spelling: String,
    /// Spelling without reference and top-level cv-qualifiers, e.g. `QString`.
    pub unqualified: String,
    pub reference: bool,
    pub pointer: bool,
    pub volatile: bool,
}

impl TypeRef {
    /// Build a type from its declared spelling. `void` maps to [`TypeRef::Void`].
    pub fn from_spelling(spelling: &str) -> Self {
        let spelling = spelling.trim();
        if spelling == "void" {
            return TypeRef::Void;
        }
        TypeRef::Named(NamedType::from_spelling(spelling))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Void)
    }

    /// Declared spelling (`void` for the void marker).
    pub fn spelling(&self) -> &str {
        match self {
            TypeRef::Void => "void",
            TypeRef::Named(named) => &named.spelling,
        }
    }

    pub fn as_named(&self) -> Option<&NamedType> {
        match self {
            TypeRef::Void => None,
            TypeRef::Named(named) => Some(named),
        }
    }

    pub fn is_reference(&self) -> bool {
        self.as_named().is_some_and(|n| n.reference)
    }

    pub fn is_pointer(&self) -> bool {
        self.as_named().is_some_and(|n| n.pointer)
    }

    pub fn is_volatile(&self) -> bool {
        self.as_named().is_some_and(|n| n.volatile)
    }
}

impl From<&str> for TypeRef {
    fn from(spelling: &str) -> Self {
        TypeRef::from_spelling(spelling)
    }
}

impl NamedType {
    /// Infer qualifiers from a declared spelling.
    ///
    /// References are recognized by a trailing `&` (or `&&`), pointers by a
    /// trailing `*` once the reference and any trailing `const`/`volatile`
    /// (spaced or glued, `* const` and `*const`) are stripped. Leading
    /// qualifiers are top-level unless the type is a pointer, in which case
    /// they belong to the pointee.
    pub fn from_spelling(spelling: &str) -> Self {
        let spelling = spelling.trim().to_string();
        let reference = spelling.ends_with('&');
        let base = strip_suffix_qualifiers(spelling.trim_end_matches('&').trim_end());
        let pointer = base.ends_with('*');
        let volatile = spelling
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .any(|word| word == "volatile");

        let unqualified = if pointer {
            base.to_string()
        } else {
            strip_prefix_qualifiers(base).to_string()
        };

        Self {
            spelling,
            unqualified,
            reference,
            pointer,
            volatile,
        }
    }
}

fn strip_prefix_qualifiers(mut s: &str) -> &str {
    loop {
        let next = s
            .strip_prefix("const ")
            .or_else(|| s.strip_prefix("volatile "))
            .map(str::trim_start);
        match next {
            Some(rest) => s = rest,
            None => return s,
        }
    }
}

fn strip_suffix_qualifiers(mut s: &str) -> &str {
    loop {
        let next = strip_trailing_word(s, "const").or_else(|| strip_trailing_word(s, "volatile"));
        match next {
            Some(rest) => s = rest.trim_end(),
            None => return s,
        }
    }
}

/// Strips `word` when it stands alone at the end: after a space, or glued to
/// a `*` as in `QObject *const`.
fn strip_trailing_word<'s>(s: &'s str, word: &str) -> Option<&'s str> {
    let rest = s.strip_suffix(word)?;
    if rest.ends_with(' ') || rest.ends_with('*') {
        Some(rest)
    } else {
        None
    }
}

/// Wire form: a bare spelling, or a spelling with explicit qualifiers.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawTypeRef {
    Spelling(String),
    Detailed {
        spelling: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unqualified: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reference: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pointer: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        volatile: Option<bool>,
    },
}

impl From<RawTypeRef> for TypeRef {
    fn from(raw: RawTypeRef) -> Self {
        match raw {
            RawTypeRef::Spelling(spelling) => TypeRef::from_spelling(&spelling),
            RawTypeRef::Detailed {
                spelling,
                unqualified,
                reference,
                pointer,
                volatile,
            } => {
                let TypeRef::Named(inferred) = TypeRef::from_spelling(&spelling) else {
                    return TypeRef::Void;
                };
                TypeRef::Named(NamedType {
                    unqualified: unqualified.unwrap_or(inferred.unqualified),
                    reference: reference.unwrap_or(inferred.reference),
                    pointer: pointer.unwrap_or(inferred.pointer),
                    volatile: volatile.unwrap_or(inferred.volatile),
                    spelling: inferred.spelling,
                })
            }
        }
    }
}

impl From<TypeRef> for RawTypeRef {
    fn from(ty: TypeRef) -> Self {
        match ty {
            TypeRef::Void => RawTypeRef::Spelling("void".to_string()),
            TypeRef::Named(named) => RawTypeRef::Detailed {
                spelling: named.spelling,
                unqualified: Some(named.unqualified),
                reference: Some(named.reference),
                pointer: Some(named.pointer),
                volatile: Some(named.volatile),
            },
        }
    }
}
