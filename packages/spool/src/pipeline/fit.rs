//! Length fitting for post content.

/// Fit text within a character budget, preferring natural break points.
///
/// Tries, in order: the text as-is, a cut at the last sentence boundary
/// past the midpoint, a cut at the last word boundary, and finally a
/// hard character cut. All cuts except the sentence cut append `...`.
/// Budgets are counted in characters, and output from one call passes
/// through a second call unchanged.
pub fn fit(text: &str, max_length: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_length {
        return text.to_string();
    }

    // Too small to hold an ellipsis, so take a bare prefix.
    if max_length <= 3 {
        return chars[..max_length].iter().collect();
    }

    let cut_limit = max_length - 3;

    if let Some(period) = last_index_at_or_before(&chars, '.', cut_limit) {
        if period > max_length / 2 {
            return chars[..=period].iter().collect();
        }
    }

    if let Some(space) = last_index_at_or_before(&chars, ' ', cut_limit) {
        if space > 0 {
            let mut cut: String = chars[..space].iter().collect();
            cut.push_str("...");
            return cut;
        }
    }

    let mut cut: String = chars[..cut_limit].iter().collect();
    cut.push_str("...");
    cut
}

/// Index of the last occurrence of `needle` at or before `limit`.
fn last_index_at_or_before(chars: &[char], needle: char, limit: usize) -> Option<usize> {
    let end = (limit + 1).min(chars.len());
    chars[..end].iter().rposition(|&c| c == needle)
}
