//! Dot-path lookups into props
//!
//! A path such as `"color.primary"` walks nested maps one segment at a time.
//! `.` always separates segments; a key that itself contains a dot is written
//! with the dot escaped, so `"a\.b"` names the single key `a.b`. Lists are
//! indexed by numeric segments (`"tones.2"`).

use crate::value::Value;

/// Split a path into its segments, honouring `\.` escapes.
pub fn split_path(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'.') => {
                current.push('.');
                chars.next();
            }
            '.' => segments.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    segments.push(current);
    segments
}

/// Borrow the value at `path`, or `None` if any segment is missing.
///
/// Walking stops at `undefined`, `null`, scalars and functions.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in split_path(path) {
        current = current.get(&segment)?;
    }
    Some(current)
}

/// Resolve `path` against `root`, falling back to `default`.
///
/// Missing segments and an `undefined` leaf both produce the default; a
/// present `null` is returned as is. Never fails.
pub fn resolve_path(root: &Value, path: &str, default: Value) -> Value {
    match lookup(root, path) {
        Some(value) if !value.is_undefined() => value.clone(),
        _ => default,
    }
}
