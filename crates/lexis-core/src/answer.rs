/// Fill-in-the-blank comparison: case-insensitive, nothing else is folded
pub fn free_text_matches(expected: &str, given: &str) -> bool {
    expected.to_lowercase() == given.to_lowercase()
}
