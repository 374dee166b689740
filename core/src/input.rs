//! Parsing of loosely formatted numeric argument lists such as `"2, 3 3,5"`.

use crate::prelude::{ParseError, ParseResult};

/// Splits `text` on commas and whitespace and parses every field as `f64`.
///
/// Empty fields are skipped, so `""` and `" , "` both yield an empty list.
pub fn parse_values(text: &str) -> ParseResult<Vec<f64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token.parse::<f64>().map_err(|_| ParseError::NotANumber {
                position: index + 1,
                token: token.to_string(),
            })
        })
        .collect()
}
