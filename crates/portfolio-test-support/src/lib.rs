//! Shared test fixtures for the portfolio content service.

mod catalog;
mod records;

pub use catalog::{catalog_with_blogs, small_catalog};
pub use records::{blog_post, experience_entry, profile, rambling};
