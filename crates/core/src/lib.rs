//! Core library for bfhl
//!
//! This crate implements the **Functional Core** of the bfhl service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The bfhl project uses a two-crate architecture:
//!
//! - **`bfhl_core`** (this crate): Pure classification functions with zero I/O
//! - **`bfhl`**: HTTP server, CLI and configuration (the Imperative Shell)
//!
//! Everything in this crate is deterministic: the same token sequence always
//! produces the same result, no function logs, touches the network, or keeps
//! state between calls.
//!
//! # Module Organization
//!
//! - [`classify`]: Token classification, integer sum and the alternating-case
//!   concatenation of letters
//! - [`response`]: Request/response payloads and the adapter that turns a
//!   classifier fault into the unsuccessful response
//!
//! # Example Usage
//!
//! ```rust
//! use bfhl_core::classify::classify_strings;
//! use bfhl_core::response::{BfhlResponse, Identity};
//!
//! let outcome = classify_strings(["a", "1", "334", "4", "R", "$"]);
//! let response = BfhlResponse::from_outcome(&Identity::default(), outcome);
//!
//! assert!(response.is_success);
//! assert_eq!(response.sum, "339");
//! assert_eq!(response.concat_string, "rA");
//! ```

pub mod classify;
pub mod response;
