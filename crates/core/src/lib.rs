//! Core library for chuck
//!
//! This crate implements the **Functional Core** of the chuck application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`chuck_core`** (this crate): Pure transformation functions with zero I/O
//! - **`chuck`**: HTTP requests, file appends, and command dispatch (the Imperative Shell)
//!
//! Every function here takes already-fetched data (raw bytes or a parsed
//! [`serde_json::Value`]) and returns either a domain value or a plain `String`
//! describing what was wrong with it. The shell decides how those descriptions
//! are classified and reported.
//!
//! # Module Organization
//!
//! - [`jokes`]: Response shape validation for the three joke API endpoints
//! - [`output`]: Serializable output models used by `--json`
//!
//! # Example Usage
//!
//! ```rust
//! use chuck_core::jokes::{apply_limit, extract_search_results, parse_json};
//!
//! let body = br#"{"result":[{"value":"A"},{"value":"B"},{"value":"C"}]}"#;
//! let data = parse_json(body).unwrap();
//! let results = extract_search_results(data).unwrap();
//!
//! assert_eq!(apply_limit(results.jokes, Some(2)), vec!["A", "B"]);
//! ```

pub mod jokes;
pub mod output;
