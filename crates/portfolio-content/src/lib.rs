//! Portfolio Content — the content service bounded context.
//!
//! Holds the fixed profile, experience, blog and rambling collections,
//! loads them once at startup, and answers read-only queries over them.
//! The contact command acknowledges submissions without storing them.

pub mod application;
pub mod domain;
