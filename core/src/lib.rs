pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod query;
pub mod ranker;
pub mod search_server;
pub mod stop_words;
pub mod tokenizer;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use config::{SearchConfig, MAX_RESULT_DOCUMENT_COUNT};
pub use error::SearchError;
pub use search_server::SearchServer;

pub type DocId = u32;

/// One ranked search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i32,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id,
            format_general(self.relevance),
            self.rating
        )
    }
}

/// Formats a float the way printf's `%g` does with the default precision of 6.
pub fn format_general(value: f64) -> String {
    const PRECISION: i32 = 6;
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    // The exponent has to be taken after rounding, e.g. 999999.5 prints as 1e+06.
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (PRECISION - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
