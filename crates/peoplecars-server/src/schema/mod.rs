//! API schema types for request/response definitions.
//!
//! [`query`] defines the structured query document accepted by the single
//! endpoint; [`common`] defines the response envelope. Types use serde
//! derives for JSON serialization/deserialization.

pub mod common;
pub mod query;
