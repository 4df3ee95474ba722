//! Portfolio Core — shared domain abstractions.
//!
//! This crate defines the error type and record traits that the content
//! service depends on. It contains no infrastructure code.

pub mod error;
pub mod record;
