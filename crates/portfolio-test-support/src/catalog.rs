//! Catalog fixtures.

use portfolio_content::domain::catalog::ContentCatalog;

use crate::records::{blog_post, experience_entry, profile, rambling};

/// A catalog with two entries in each list.
#[must_use]
pub fn small_catalog() -> ContentCatalog {
    ContentCatalog::new(
        profile(),
        vec![experience_entry(1), experience_entry(2)],
        vec![blog_post(1), blog_post(2)],
        vec![rambling(1), rambling(2)],
    )
    .expect("fixture catalog is valid")
}

/// A catalog holding blog posts with exactly the given ids, in order.
#[must_use]
pub fn catalog_with_blogs(ids: &[u32]) -> ContentCatalog {
    ContentCatalog::new(
        profile(),
        Vec::new(),
        ids.iter().copied().map(blog_post).collect(),
        Vec::new(),
    )
    .expect("fixture catalog is valid")
}
