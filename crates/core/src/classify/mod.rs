//! Token classification
//!
//! Splits an ordered sequence of tokens into odd numbers, even numbers,
//! alphabetic tokens and special characters, sums the integers and builds the
//! alternating-case concatenation of every letter seen.

pub mod concat;
pub mod token;
pub mod types;

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

pub use concat::alternating_caps;
pub use token::stringify;
pub use types::{ClassificationResult, ClassifyError, TokenKind};

fn integer_regex() -> &'static Regex {
    static RE_INTEGER: OnceLock<Regex> = OnceLock::new();
    RE_INTEGER.get_or_init(|| Regex::new(r"^[+-]?[0-9]+$").unwrap())
}

/// Decide which bucket a stringified token belongs to.
///
/// Rules are tried in order: strict base-10 integer, single ASCII letter,
/// ASCII-only word, and finally the special-character fallback.
pub fn token_kind(token: &str) -> TokenKind {
    if integer_regex().is_match(token) {
        return TokenKind::Integer;
    }

    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => TokenKind::Letter,
        (Some(_), Some(_)) if token.chars().all(|c| c.is_ascii_alphabetic()) => TokenKind::Word,
        _ => TokenKind::Special,
    }
}

/// Classify a sequence of JSON values.
///
/// Every value is stringified with [`stringify`] before classification.
pub fn classify(tokens: &[Value]) -> Result<ClassificationResult, ClassifyError> {
    classify_strings(tokens.iter().map(stringify))
}

/// Classify a sequence of already-stringified tokens.
///
/// Fails only when an integer token, or the running sum, does not fit in an
/// `i128`.
pub fn classify_strings<I, S>(tokens: I) -> Result<ClassificationResult, ClassifyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut odd_numbers = Vec::new();
    let mut even_numbers = Vec::new();
    let mut alphabets = Vec::new();
    let mut special_characters = Vec::new();
    let mut letters: Vec<char> = Vec::new();
    let mut total: i128 = 0;

    for token in tokens {
        let token = token.as_ref();

        match token_kind(token) {
            TokenKind::Integer => {
                let value: i128 = token
                    .parse()
                    .map_err(|_| ClassifyError::IntegerOutOfRange(token.to_string()))?;
                total = total.checked_add(value).ok_or(ClassifyError::SumOverflow)?;

                if value % 2 == 0 {
                    even_numbers.push(token.to_string());
                } else {
                    odd_numbers.push(token.to_string());
                }
            }
            TokenKind::Letter | TokenKind::Word => {
                alphabets.push(token.to_ascii_uppercase());
                letters.extend(token.chars());
            }
            TokenKind::Special => special_characters.push(token.to_string()),
        }
    }

    Ok(ClassificationResult {
        odd_numbers,
        even_numbers,
        alphabets,
        special_characters,
        sum: total.to_string(),
        concat_string: alternating_caps(&letters),
    })
}
