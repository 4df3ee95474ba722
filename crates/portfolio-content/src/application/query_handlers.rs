//! Query handlers for the content service.
//!
//! Every query is a pure read of the catalog. Collections come back in
//! declaration order, unfiltered.

use portfolio_core::error::DomainError;
use portfolio_core::record::find_by_id;

use crate::domain::catalog::ContentCatalog;
use crate::domain::records::{BlogPost, ExperienceEntry, Profile, Rambling};

/// Greeting returned by the API root.
pub const WELCOME_MESSAGE: &str = "Welcome to Aarya's Portfolio API";

/// Returns the fixed greeting. It does not depend on the loaded content.
#[must_use]
pub fn welcome_message() -> &'static str {
    WELCOME_MESSAGE
}

/// Returns the profile singleton.
#[must_use]
pub fn get_profile(catalog: &ContentCatalog) -> &Profile {
    catalog.profile()
}

/// Returns all experience entries.
#[must_use]
pub fn list_experience(catalog: &ContentCatalog) -> &[ExperienceEntry] {
    catalog.experience()
}

/// Returns all blog posts, content included.
#[must_use]
pub fn list_blog_posts(catalog: &ContentCatalog) -> &[BlogPost] {
    catalog.blogs()
}

/// Retrieves a blog post by its id.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no post has that id.
pub fn get_blog_post_by_id(catalog: &ContentCatalog, id: u32) -> Result<&BlogPost, DomainError> {
    find_by_id(catalog.blogs(), id)
}

/// Returns all ramblings.
#[must_use]
pub fn list_ramblings(catalog: &ContentCatalog) -> &[Rambling] {
    catalog.ramblings()
}
