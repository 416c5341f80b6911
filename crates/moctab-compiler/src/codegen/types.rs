//! Type spellings used by dispatch code.

use moctab_core::{Parameter, TypeRef};

/// Spelling of a pointer to `ty`, e.g. `int *` or `QObject **`.
pub fn pointer_to(ty: &str) -> String {
    if ty.ends_with('*') {
        format!("{ty}*")
    } else {
        format!("{ty} *")
    }
}

/// Spelling without reference and top-level qualifiers.
pub fn unqualified(ty: &TypeRef) -> &str {
    match ty {
        TypeRef::Void => "void",
        TypeRef::Named(named) => &named.unqualified,
    }
}

/// Whether an invocation writes a result back. Reference results are
/// treated as void.
pub fn returns_value(ty: &TypeRef) -> bool {
    !ty.is_void() && !ty.is_reference()
}

/// `*reinterpret_cast< T * >(_a[i])` for each argument, comma separated.
pub fn unmarshal_arguments(params: &[Parameter]) -> String {
    params
        .iter()
        .enumerate()
        .map(|(j, p)| {
            format!(
                "*reinterpret_cast< {} >(_a[{}])",
                pointer_to(unqualified(&p.ty)),
                j + 1
            )
        })
        .collect::<Vec<_>>()
        .join(",")
}
