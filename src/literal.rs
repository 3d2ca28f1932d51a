//! String-literal detection.
//!
//! Decides whether a selection is a quoted string literal and strips the
//! enclosing quotes when it is.

/// Quote characters that can delimit a string literal.
const QUOTES: [char; 2] = ['"', '\''];

/// Extract the content between matching quote delimiters, if the text is a
/// quoted string literal.
///
/// A literal is any text of at least two code units whose first and last
/// characters are the same quote character (`"` or `'`). The content is
/// returned as-is: escape sequences are not processed and interior quotes
/// are not validated, so `"a"b"` yields `a"b`. `None` is the normal
/// outcome for anything else (including a lone quote character), and the
/// caller analyzes the raw selection instead.
pub fn detect_literal(text: &str) -> Option<&str> {
    // The length guard counts code units so a single character outside the
    // Basic Multilingual Plane does not slip past it.
    if text.encode_utf16().take(2).count() < 2 {
        return None;
    }

    for quote in QUOTES {
        if text.starts_with(quote) && text.ends_with(quote) {
            // Both delimiters are one-byte ASCII, so byte slicing stays on
            // char boundaries.
            return Some(&text[1..text.len() - 1]);
        }
    }

    None
}
