//! Plain-text search for the find/replace dialog
//!
//! Case-sensitive substring search over the document text. Positions are
//! byte offsets on char boundaries (the caret position the widget
//! reports). Searches wrap around once when nothing is found ahead of the
//! caret.

/// Find the next occurrence of `query` relative to a caret position
///
/// Forward searches start at `from`; backward searches consider matches
/// starting strictly before `from`. When no match is found and the caret
/// is not at the start, the search wraps around the whole text once.
/// Returns the match as a `(start, end)` byte range.
pub fn find_next(text: &str, query: &str, from: usize, forward: bool) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }
    let from = from.min(text.len());

    let found = if forward {
        text.get(from..)
            .and_then(|rest| rest.find(query))
            .map(|i| i + from)
    } else {
        text.match_indices(query)
            .take_while(|(i, _)| *i < from)
            .last()
            .map(|(i, _)| i)
    };

    let found = match found {
        Some(i) => Some(i),
        // Wrap around once, unless we already searched from the start
        None if from != 0 => {
            if forward {
                text.find(query)
            } else {
                text.rfind(query)
            }
        }
        None => None,
    };

    found.map(|start| (start, start + query.len()))
}

/// Replace every occurrence of `query`, returning the new text and the
/// number of replacements made
pub fn replace_all(text: &str, query: &str, replacement: &str) -> (String, usize) {
    if query.is_empty() {
        return (text.to_string(), 0);
    }
    let count = text.matches(query).count();
    (text.replace(query, replacement), count)
}
