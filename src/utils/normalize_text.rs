/// Canonicalize free text for alias matching: lowercase, replace every
/// character that is not alphanumeric, `_`, or whitespace with a space, then
/// collapse whitespace runs and trim.
///
/// Pure and idempotent: `normalize_text(normalize_text(s)) == normalize_text(s)`.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
