use crate::tokenizer::tokenize;
use std::collections::HashSet;

/// Words dropped from both documents and queries before anything else sees them.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Build the set from a space-separated list.
    pub fn parse(text: &str) -> Self {
        Self { words: tokenize(text).map(str::to_string).collect() }
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    /// Keep every token that is not a stop word, in input order.
    pub fn filter<'a, I>(&self, tokens: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens.into_iter().filter(|word| !self.contains(word)).collect()
    }

    /// Tokenize `text` and drop stop words.
    pub fn split_into_words_no_stop<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.filter(tokenize(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_space_separated_list() {
        let stop = StopWords::parse("a in  the a");
        assert_eq!(stop.len(), 3);
        assert!(stop.contains("in"));
        assert!(!stop.contains(""));
    }

    #[test]
    fn filter_is_exact_and_order_preserving() {
        let stop = StopWords::parse("the on");
        let words = stop.split_into_words_no_stop("The cat on the mat");
        assert_eq!(words, vec!["The", "cat", "mat"]);
    }

    #[test]
    fn empty_set_keeps_everything() {
        let stop = StopWords::new();
        assert!(stop.is_empty());
        assert_eq!(stop.split_into_words_no_stop("a b"), vec!["a", "b"]);
    }
}
