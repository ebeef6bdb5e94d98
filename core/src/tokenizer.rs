/// Split text into words on the ASCII space character.
///
/// Runs of spaces are not collapsed: each extra space yields an empty word, and
/// empty input yields a single empty word. Callers that build terms from the
/// result skip the empty entries.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').collect()
}
