// src/core/sanitize.rs

use crate::config::consts::{ELLIPSIS, SENTINELS};

/// Collapse every whitespace run to one space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// "nan", "N/A", "Not Stated": placeholders that mean "no value".
pub fn is_sentinel(s: &str) -> bool {
    SENTINELS.contains(&s)
}

/// Trim, and collapse missing values and sentinels to "".
pub fn clean_text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !is_sentinel(v) => s!(v),
        _ => s!(),
    }
}

/// True for `None` or whitespace-only text.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Keep at most `max` chars; append the ellipsis when something was cut.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => join!(&s[..cut], ELLIPSIS),
        None => s!(s),
    }
}

/// Break a collapsed string into fill chunks: words, the single spaces
/// between them, and hyphenated words split after each inner hyphen.
fn fill_chunks(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for (i, word) in text.split(' ').enumerate() {
        if i > 0 {
            out.push(" ");
        }
        let chars: Vec<(usize, char)> = word.char_indices().collect();
        let mut start = 0;
        for w in chars.windows(3) {
            if w[1].1 == '-' && w[0].1.is_alphanumeric() && w[2].1.is_alphanumeric() {
                out.push(&word[start..w[2].0]);
                start = w[2].0;
            }
        }
        out.push(&word[start..]);
    }
    out
}

/// Word-boundary shortening.
///
/// Whitespace is collapsed first. If the text still exceeds `width` chars,
/// chunks are taken greedily, then dropped from the end until the ellipsis
/// fits after a non-space chunk. A leading word longer than `width` leaves
/// only the ellipsis.
pub fn shorten(text: &str, width: usize) -> String {
    let collapsed = normalize_ws(text);
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let mut line: Vec<&str> = Vec::new();
    let mut used = 0usize;
    for chunk in fill_chunks(&collapsed) {
        let n = chunk.chars().count();
        if used + n > width {
            break;
        }
        line.push(chunk);
        used += n;
    }

    let mark = ELLIPSIS.chars().count();
    while let Some(&last) = line.last() {
        if !last.trim().is_empty() && used + mark <= width {
            break;
        }
        used -= last.chars().count();
        line.pop();
    }

    let mut out = line.concat();
    out.push_str(ELLIPSIS);
    out
}

/// Split on commas, trim each part, drop the empty ones.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
