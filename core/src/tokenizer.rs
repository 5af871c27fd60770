/// Split text into tokens on the ASCII space character.
///
/// Runs of spaces never produce empty tokens. Other whitespace (tabs, newlines)
/// is kept inside the token it belongs to.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}
