use serde::{Deserialize, Serialize};

/// Category a single stringified token falls into.
///
/// Variants are listed in evaluation order: the first rule that matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Optional sign followed by ASCII digits only.
    Integer,
    /// Exactly one ASCII letter.
    Letter,
    /// Two or more ASCII letters.
    Word,
    /// Anything else, including the empty string.
    Special,
}

/// Categorized output of a single classification run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub odd_numbers: Vec<String>,
    pub even_numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub special_characters: Vec<String>,
    pub sum: String,
    pub concat_string: String,
}

impl ClassificationResult {
    /// Result of classifying an empty sequence.
    pub fn empty() -> Self {
        Self {
            odd_numbers: Vec::new(),
            even_numbers: Vec::new(),
            alphabets: Vec::new(),
            special_characters: Vec::new(),
            sum: "0".to_string(),
            concat_string: String::new(),
        }
    }

    /// Number of tokens placed across all four buckets
    pub fn bucket_len(&self) -> usize {
        self.odd_numbers.len()
            + self.even_numbers.len()
            + self.alphabets.len()
            + self.special_characters.len()
    }
}

impl Default for ClassificationResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Faults raised while classifying.
///
/// Malformed tokens are never errors. These only fire when integer arithmetic
/// leaves the native range.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Integer token out of range: {0}")]
    IntegerOutOfRange(String),

    #[error("Sum of integer tokens overflowed")]
    SumOverflow,
}
