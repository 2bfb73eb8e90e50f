/// Lowercase `text`. Nothing else changes: whitespace is not trimmed and
/// punctuation is kept, so `" happy"` still splits into `["", "happy"]`.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}
