//! Duplicate-name resolution for folders.

/// Resolve a desired folder name against its sibling names.
///
/// A sibling named exactly `desired` counts as suffix 0, and a sibling
/// named `desired (n)` counts as suffix `n`. With no colliding sibling the
/// desired name is returned unchanged; otherwise the result is
/// `desired (max + 1)`.
pub fn resolve_name(desired: &str, existing_names: &[String]) -> String {
    let max_suffix = existing_names
        .iter()
        .filter_map(|name| collision_suffix(desired, name))
        .max();

    match max_suffix {
        None => desired.to_string(),
        Some(max) => format!("{desired} ({})", max + 1),
    }
}

/// Suffix contributed by an existing name, or `None` if it does not
/// collide with `desired`.
fn collision_suffix(desired: &str, existing: &str) -> Option<u32> {
    if existing == desired {
        return Some(0);
    }

    let rest = existing.strip_prefix(desired)?;
    let inner = rest.strip_prefix(" (")?.strip_suffix(')')?;
    inner.parse::<u32>().ok()
}
