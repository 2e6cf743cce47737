//! Small string helpers shared by the gazetteer and the registry views.

/// Title-cases `s` word by word: a letter is upper-cased when the previous
/// character is not a letter, lower-cased otherwise.
///
/// `"hà tĩnh"` -> `"Hà Tĩnh"`, `"tp.hcm"` -> `"Tp.Hcm"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

/// Truncates to `max_chars` characters (not bytes), appending `...` when
/// anything was cut.
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &s[..byte_idx]),
        None => s.to_string(),
    }
}
