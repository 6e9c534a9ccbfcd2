//! Helpers for building SQL `LIKE`/`ILIKE` patterns from user input.

/// Wraps `text` in `%...%` for a substring match, escaping the LIKE
/// metacharacters so they match literally.
///
/// PostgreSQL uses backslash as the default LIKE escape character.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(contains_pattern("pebble"), "%pebble%");
/// assert_eq!(contains_pattern("100%"), "%100\\%%");
/// ```
pub fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
