/// Turn a qualified C++ name into a fragment usable inside an identifier.
///
/// # Examples
/// ```
/// use moctab_core::utils::mangle_qualified_name;
/// assert_eq!(mangle_qualified_name("app::Counter"), "app__Counter");
/// ```
pub fn mangle_qualified_name(name: &str) -> String {
    name.replace(':', "_")
}

/// Whether an accessor expression is written in call form, e.g. `reset()`.
pub fn is_call_form(expr: &str) -> bool {
    expr.trim_end().ends_with(')')
}

/// Digits needed to print indices below `count`.
pub fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        (count - 1).to_string().len()
    }
}
