//! Text helpers shared across crates.

/// Strip a markdown code fence wrapped around the whole of `content`.
///
/// Handles `` ```sql ... ``` ``, `` ``` ... ``` `` and other language
/// identifiers. Text that is not fully fenced is only trimmed.
#[must_use]
pub fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    if trimmed.len() >= 6 && trimmed.starts_with("```") && trimmed.ends_with("```") {
        let without_prefix = trimmed.strip_prefix("```").unwrap_or(trimmed);
        let without_suffix = without_prefix.strip_suffix("```").unwrap_or(without_prefix);
        return match without_suffix.split_once('\n') {
            Some((first, rest)) if is_fence_tag(first) => rest.trim(),
            _ => without_suffix.trim(),
        };
    }
    trimmed
}

/// A fence opening line holds at most a language tag such as `sql` or `sqlite3`.
fn is_fence_tag(line: &str) -> bool {
    let tag = line.trim();
    tag.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+' | '.'))
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
