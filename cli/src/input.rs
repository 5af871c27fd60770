//! Line-oriented input of the classic driver:
//!
//! ```text
//! <stop words>
//! <document count>
//! <document text>        \ repeated
//! <N> <r1> ... <rN>      / per document
//! <query>
//! ```

use anyhow::{bail, Context, Result};
use std::io::BufRead;

#[derive(Debug, PartialEq)]
pub struct ClassicDocument {
    pub text: String,
    pub ratings: Vec<i32>,
}

#[derive(Debug, PartialEq)]
pub struct ClassicInput {
    pub stop_words: String,
    pub documents: Vec<ClassicDocument>,
    pub query: String,
}

struct Lines<R> {
    reader: R,
    lineno: usize,
}

impl<R: BufRead> Lines<R> {
    /// Next line without its terminator. Running out of input is an error.
    fn next_line(&mut self) -> Result<String> {
        let mut line = String::new();
        self.lineno += 1;
        if self.reader.read_line(&mut line)? == 0 {
            bail!("line {}: unexpected end of input", self.lineno);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }
}

pub fn read_classic_input<R: BufRead>(reader: R) -> Result<ClassicInput> {
    let mut lines = Lines { reader, lineno: 0 };
    let stop_words = lines.next_line()?;

    let count_line = lines.next_line()?;
    let count: usize = count_line
        .trim()
        .parse()
        .with_context(|| format!("line {}: invalid document count {:?}", lines.lineno, count_line))?;

    // count is untrusted, so the vector grows with the lines actually read
    let mut documents = Vec::new();
    for _ in 0..count {
        let text = lines.next_line()?;
        let ratings_line = lines.next_line()?;
        let ratings = parse_ratings(&ratings_line).with_context(|| format!("line {}", lines.lineno))?;
        documents.push(ClassicDocument { text, ratings });
    }

    let query = lines.next_line()?;
    Ok(ClassicInput { stop_words, documents, query })
}

/// `N r1 ... rN`; the leading count must match the number of ratings.
pub fn parse_ratings(line: &str) -> Result<Vec<i32>> {
    let mut values = line.split_whitespace();
    let declared: usize = match values.next() {
        Some(n) => n.parse().with_context(|| format!("invalid rating count {n:?}"))?,
        None => bail!("missing rating count"),
    };
    let ratings = values
        .map(|v| v.parse::<i32>().with_context(|| format!("invalid rating {v:?}")))
        .collect::<Result<Vec<_>>>()?;
    if ratings.len() != declared {
        bail!("expected {declared} ratings, found {}", ratings.len());
    }
    Ok(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_full_input() {
        let text = "и в на\n2\nбелый кот\n2 8 -3\nпёс\n0\nкот -пёс\n";
        let input = read_classic_input(text.as_bytes()).unwrap();
        assert_eq!(input.stop_words, "и в на");
        assert_eq!(input.documents.len(), 2);
        assert_eq!(input.documents[0], ClassicDocument { text: "белый кот".into(), ratings: vec![8, -3] });
        assert!(input.documents[1].ratings.is_empty());
        assert_eq!(input.query, "кот -пёс");
    }

    #[test]
    fn crlf_is_stripped() {
        let input = read_classic_input("a\r\n1\r\ncat\r\n1 5\r\ncat\r\n".as_bytes()).unwrap();
        assert_eq!(input.documents[0].text, "cat");
        assert_eq!(input.query, "cat");
    }

    #[test]
    fn rejects_bad_document_count() {
        let err = read_classic_input("\nmany\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn huge_document_count_fails_on_missing_lines() {
        let err = read_classic_input("\n99999999999999\ncat\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("unexpected end of input"));
    }

    #[test]
    fn missing_query_line_is_an_error() {
        assert!(read_classic_input("a\n1\ncat\n1 5\n".as_bytes()).is_err());
        let input = read_classic_input("a\n0\n\n".as_bytes()).unwrap();
        assert_eq!(input.query, "");
    }

    #[test]
    fn rating_count_must_match() {
        assert_eq!(parse_ratings("3 1 2 3").unwrap(), vec![1, 2, 3]);
        assert!(parse_ratings("3 1 2").is_err());
        assert!(parse_ratings("1 x").is_err());
        assert!(parse_ratings("").is_err());
    }
}
