//! Markup escaping for untrusted text fields.
//!
//! Both the client (before transmission) and the server (before storage)
//! run text through [`escape_markup`]. The function is idempotent: an `&`
//! that already opens one of the entities it produces is left as is, so
//! escaping twice yields the same string as escaping once.

const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&#039;"];

/// Trim and escape `& < > " '`, dropping backslashes.
pub fn escape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for (idx, ch) in input.char_indices() {
        match ch {
            '&' if ENTITIES.iter().any(|e| input[idx..].starts_with(e)) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '\\' => {}
            c => out.push(c),
        }
    }

    // Trim last: removing a backslash can expose surrounding whitespace
    out.trim().to_string()
}

/// Escape an optional field, mapping blank results to `None`
pub fn escape_optional(input: Option<&str>) -> Option<String> {
    input.map(escape_markup).filter(|s| !s.is_empty())
}
