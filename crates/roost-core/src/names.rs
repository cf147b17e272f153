//! Name and shortcut equality.
//!
//! Every comparison of category, group and project names or shortcuts goes
//! through this module so the whole crate agrees on case-insensitivity.

/// Case-folded form used as a comparison key.
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Case-insensitive equality. An absent `b` never matches.
pub fn matches(a: &str, b: Option<&str>) -> bool {
    b.is_some_and(|b| fold(a) == fold(b))
}
