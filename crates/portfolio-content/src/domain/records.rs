//! Record types held by the content catalog.

use chrono::NaiveDate;
use indexmap::IndexMap;
use portfolio_core::record::Record;
use serde::{Deserialize, Serialize};

/// Skill category name mapped to an ordered list of skills.
///
/// Categories keep their declaration order when serialized.
pub type Skills = IndexMap<String, Vec<String>>;

/// The portfolio owner's profile. There is exactly one per catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name.
    pub name: String,
    /// Professional title.
    pub title: String,
    /// One-line tagline.
    pub tagline: String,
    /// City and region.
    pub location: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// GitHub handle.
    pub github: String,
    /// LinkedIn handle.
    pub linkedin: String,
    /// Biography text.
    pub bio: String,
    /// Skills grouped by category.
    pub skills: Skills,
}

/// A single position in the work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Unique, sequential identifier.
    pub id: u32,
    /// Employer name.
    pub company: String,
    /// Role held.
    pub position: String,
    /// Free-text date range, e.g. `Jul. 2023 — Present`.
    pub duration: String,
    /// Where the work took place.
    pub location: String,
    /// Ordered description bullets.
    pub description: Vec<String>,
}

impl Record for ExperienceEntry {
    const KIND: &'static str = "Experience";

    fn id(&self) -> u32 {
        self.id
    }
}

/// A published blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Unique identifier.
    pub id: u32,
    /// Post title.
    pub title: String,
    /// Short summary shown in listings.
    pub excerpt: String,
    /// Publication date.
    pub date: NaiveDate,
    /// Topic tags.
    pub tags: Vec<String>,
    /// Full post body.
    pub content: String,
}

impl Record for BlogPost {
    const KIND: &'static str = "Blog";

    fn id(&self) -> u32 {
        self.id
    }
}

/// An informal journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rambling {
    /// Unique identifier.
    pub id: u32,
    /// Entry title.
    pub title: String,
    /// Entry body.
    pub content: String,
    /// Date written.
    pub date: NaiveDate,
    /// Free-text mood label, e.g. `contemplative`.
    pub mood: String,
}

impl Record for Rambling {
    const KIND: &'static str = "Rambling";

    fn id(&self) -> u32 {
        self.id
    }
}
