//! The immutable content catalog.
//!
//! A catalog is built once at startup, either from the YAML document
//! compiled into the binary or from a file with the same schema, and is
//! shared read-only for the rest of the process lifetime.

use std::path::Path;

use portfolio_core::error::DomainError;
use portfolio_core::record::ensure_unique_ids;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::domain::records::{BlogPost, ExperienceEntry, Profile, Rambling};

/// The content document compiled into the binary.
pub const EMBEDDED_CONTENT: &str = include_str!("../../content/portfolio.yaml");

/// On-disk shape of a content document.
#[derive(Debug, Deserialize)]
struct ContentDocument {
    profile: Profile,
    experience: Vec<ExperienceEntry>,
    blogs: Vec<BlogPost>,
    ramblings: Vec<Rambling>,
}

/// Borrowed view used to derive the version hash.
#[derive(Serialize)]
struct CanonicalContent<'a> {
    profile: &'a Profile,
    experience: &'a [ExperienceEntry],
    blogs: &'a [BlogPost],
    ramblings: &'a [Rambling],
}

/// The four fixed collections served by the API.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    profile: Profile,
    experience: Vec<ExperienceEntry>,
    blogs: Vec<BlogPost>,
    ramblings: Vec<Rambling>,
    version_hash: String,
}

impl ContentCatalog {
    /// Builds a catalog from already-constructed collections.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateId` if any collection repeats an id, or
    /// `DomainError::Validation` if a rambling is missing its title, content
    /// or mood.
    pub fn new(
        profile: Profile,
        experience: Vec<ExperienceEntry>,
        blogs: Vec<BlogPost>,
        ramblings: Vec<Rambling>,
    ) -> Result<Self, DomainError> {
        ensure_unique_ids(&experience)?;
        ensure_unique_ids(&blogs)?;
        ensure_unique_ids(&ramblings)?;
        for rambling in &ramblings {
            validate_rambling(rambling)?;
        }

        let version_hash = compute_version_hash(&CanonicalContent {
            profile: &profile,
            experience: &experience,
            blogs: &blogs,
            ramblings: &ramblings,
        })?;

        Ok(Self {
            profile,
            experience,
            blogs,
            ramblings,
            version_hash,
        })
    }

    /// Loads the catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the embedded document is invalid.
    pub fn embedded() -> Result<Self, DomainError> {
        Self::from_yaml_str(EMBEDDED_CONTENT)
    }

    /// Parses a catalog from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the document does not match the
    /// content schema, and any error from [`ContentCatalog::new`].
    pub fn from_yaml_str(source: &str) -> Result<Self, DomainError> {
        let document: ContentDocument = serde_yaml::from_str(source)
            .map_err(|e| DomainError::Validation(format!("invalid content document: {e}")))?;
        let catalog = Self::new(
            document.profile,
            document.experience,
            document.blogs,
            document.ramblings,
        )?;

        info!(
            experience = catalog.experience.len(),
            blogs = catalog.blogs.len(),
            ramblings = catalog.ramblings.len(),
            version_hash = %catalog.version_hash,
            "content catalog loaded"
        );

        Ok(catalog)
    }

    /// Reads and parses a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the file cannot be read, and
    /// any error from [`ContentCatalog::from_yaml_str`].
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Infrastructure(format!(
                "failed to read content file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_yaml_str(&source)
    }

    /// The profile singleton.
    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Experience entries in declaration order.
    #[must_use]
    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.experience
    }

    /// Blog posts in declaration order.
    #[must_use]
    pub fn blogs(&self) -> &[BlogPost] {
        &self.blogs
    }

    /// Ramblings in declaration order.
    #[must_use]
    pub fn ramblings(&self) -> &[Rambling] {
        &self.ramblings
    }

    /// Hex SHA-256 of the catalog's canonical JSON form.
    #[must_use]
    pub fn version_hash(&self) -> &str {
        &self.version_hash
    }
}

fn validate_rambling(rambling: &Rambling) -> Result<(), DomainError> {
    let missing = [
        ("title", rambling.title.as_str()),
        ("content", rambling.content.as_str()),
        ("mood", rambling.mood.as_str()),
    ]
    .into_iter()
    .find(|(_, value)| value.trim().is_empty());

    match missing {
        Some((field, _)) => Err(DomainError::Validation(format!(
            "rambling {} has an empty {field}",
            rambling.id
        ))),
        None => Ok(()),
    }
}

fn compute_version_hash(content: &CanonicalContent<'_>) -> Result<String, DomainError> {
    let bytes = serde_json::to_vec(content)
        .map_err(|e| DomainError::Infrastructure(format!("content serialization failed: {e}")))?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use indexmap::IndexMap;

    fn profile() -> Profile {
        Profile {
            name: "Test Owner".to_owned(),
            title: "Engineer".to_owned(),
            tagline: "Tagline".to_owned(),
            location: "Nowhere".to_owned(),
            email: "owner@example.com".to_owned(),
            phone: "+00 0000000000".to_owned(),
            github: "owner".to_owned(),
            linkedin: "owner".to_owned(),
            bio: "Bio".to_owned(),
            skills: IndexMap::new(),
        }
    }

    fn blog_post(id: u32) -> BlogPost {
        BlogPost {
            id,
            title: format!("Post {id}"),
            excerpt: "Excerpt".to_owned(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            tags: vec![],
            content: "Body".to_owned(),
        }
    }

    fn rambling(id: u32) -> Rambling {
        Rambling {
            id,
            title: format!("Rambling {id}"),
            content: "Thoughts".to_owned(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            mood: "calm".to_owned(),
        }
    }

    #[test]
    fn test_embedded_catalog_has_fixed_dataset() {
        // Act
        let catalog = ContentCatalog::embedded().unwrap();

        // Assert
        assert_eq!(catalog.profile().name, "Aarya Jha");
        assert_eq!(catalog.experience().len(), 3);
        assert_eq!(catalog.blogs().len(), 3);
        assert_eq!(catalog.ramblings().len(), 8);
    }

    #[test]
    fn test_embedded_catalog_preserves_declaration_order() {
        let catalog = ContentCatalog::embedded().unwrap();

        let experience_ids: Vec<u32> = catalog.experience().iter().map(|e| e.id).collect();
        let rambling_ids: Vec<u32> = catalog.ramblings().iter().map(|r| r.id).collect();

        assert_eq!(experience_ids, vec![1, 2, 3]);
        assert_eq!(rambling_ids, (1..=8).collect::<Vec<_>>());
        assert_eq!(catalog.experience()[0].company, "Atomberg Technologies");
    }

    #[test]
    fn test_embedded_profile_skills_keep_category_order() {
        let catalog = ContentCatalog::embedded().unwrap();

        let categories: Vec<&str> = catalog
            .profile()
            .skills
            .keys()
            .map(String::as_str)
            .collect();

        assert_eq!(categories, vec!["languages", "tools", "frameworks", "expertise"]);
    }

    #[test]
    fn test_version_hash_is_stable_across_loads() {
        let first = ContentCatalog::embedded().unwrap();
        let second = ContentCatalog::embedded().unwrap();

        assert_eq!(first.version_hash(), second.version_hash());
        assert_eq!(first.version_hash().len(), 64);
    }

    #[test]
    fn test_version_hash_changes_with_content() {
        let a = ContentCatalog::new(profile(), vec![], vec![blog_post(1)], vec![]).unwrap();
        let b = ContentCatalog::new(profile(), vec![], vec![blog_post(2)], vec![]).unwrap();

        assert_ne!(a.version_hash(), b.version_hash());
    }

    #[test]
    fn test_new_rejects_duplicate_blog_ids() {
        let result = ContentCatalog::new(
            profile(),
            vec![],
            vec![blog_post(1), blog_post(2), blog_post(1)],
            vec![],
        );

        assert_eq!(
            result.unwrap_err(),
            DomainError::DuplicateId { kind: "Blog", id: 1 }
        );
    }

    #[test]
    fn test_new_rejects_rambling_without_mood() {
        let mut entry = rambling(4);
        entry.mood = "  ".to_owned();

        let result = ContentCatalog::new(profile(), vec![], vec![], vec![entry]);

        match result.unwrap_err() {
            DomainError::Validation(message) => {
                assert_eq!(message, "rambling 4 has an empty mood");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_from_yaml_str_rejects_document_missing_collections() {
        let result = ContentCatalog::from_yaml_str("profile: {}\n");

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_from_path_reports_missing_file_as_infrastructure() {
        let result = ContentCatalog::from_path(Path::new("/nonexistent/portfolio.yaml"));

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
