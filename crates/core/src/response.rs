//! Request and response payloads for the `/bfhl` endpoint
//!
//! The classifier returns a `Result`; [`BfhlResponse::from_outcome`] is the
//! only place a fault turns into the canned unsuccessful payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::classify::{ClassificationResult, ClassifyError};

pub const DEFAULT_USER_ID: &str = "john_doe_17091999";
pub const DEFAULT_EMAIL: &str = "john@xyz.com";
pub const DEFAULT_ROLL_NUMBER: &str = "ABCD123";

pub const SERVICE_NAME: &str = "BFHL Array Data Processing API";

/// Fixed identity echoed back in every response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
}

impl Identity {
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        roll_number: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            roll_number: roll_number.into(),
        }
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new(DEFAULT_USER_ID, DEFAULT_EMAIL, DEFAULT_ROLL_NUMBER)
    }
}

/// Incoming request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BfhlRequest {
    pub data: Vec<Value>,
}

/// Response body for the `/bfhl` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfhlResponse {
    pub is_success: bool,
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
    pub odd_numbers: Vec<String>,
    pub even_numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub special_characters: Vec<String>,
    pub sum: String,
    pub concat_string: String,
}

impl BfhlResponse {
    /// Wrap a classification result with the configured identity
    pub fn success(identity: &Identity, result: ClassificationResult) -> Self {
        Self::build(true, identity, result)
    }

    /// Canned payload returned whenever classification fails.
    ///
    /// All lists are empty, the sum is `"0"` and the identity is still filled in.
    pub fn failure(identity: &Identity) -> Self {
        Self::build(false, identity, ClassificationResult::empty())
    }

    /// Map a classifier outcome onto the response, ignoring the error cause.
    pub fn from_outcome(
        identity: &Identity,
        outcome: Result<ClassificationResult, ClassifyError>,
    ) -> Self {
        match outcome {
            Ok(result) => Self::success(identity, result),
            Err(_) => Self::failure(identity),
        }
    }

    fn build(is_success: bool, identity: &Identity, result: ClassificationResult) -> Self {
        Self {
            is_success,
            user_id: identity.user_id.clone(),
            email: identity.email.clone(),
            roll_number: identity.roll_number.clone(),
            odd_numbers: result.odd_numbers,
            even_numbers: result.even_numbers,
            alphabets: result.alphabets,
            special_characters: result.special_characters,
            sum: result.sum,
            concat_string: result.concat_string,
        }
    }
}

/// Static payload served by the informational endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOutput {
    pub message: String,
    pub status: String,
}

impl StatusOutput {
    pub fn running() -> Self {
        Self {
            message: SERVICE_NAME.to_string(),
            status: "running".to_string(),
        }
    }
}
