//! Record fixtures — small, predictable records keyed by id.

use chrono::NaiveDate;
use indexmap::IndexMap;
use portfolio_content::domain::records::{BlogPost, ExperienceEntry, Profile, Rambling};

fn fixture_date(id: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|d| d.checked_add_days(chrono::Days::new(u64::from(id))))
        .expect("fixture date is in range")
}

/// A profile for a fictional owner named `Test Owner`.
#[must_use]
pub fn profile() -> Profile {
    let mut skills = IndexMap::new();
    skills.insert("languages".to_owned(), vec!["Rust".to_owned(), "SQL".to_owned()]);
    skills.insert("tools".to_owned(), vec!["Cargo".to_owned()]);

    Profile {
        name: "Test Owner".to_owned(),
        title: "Fixture Engineer".to_owned(),
        tagline: "Deterministic by default".to_owned(),
        location: "Testville".to_owned(),
        email: "owner@example.com".to_owned(),
        phone: "+00 0000000000".to_owned(),
        github: "test-owner".to_owned(),
        linkedin: "test-owner".to_owned(),
        bio: "Exists only in tests.".to_owned(),
        skills,
    }
}

/// An experience entry whose fields are derived from `id`.
#[must_use]
pub fn experience_entry(id: u32) -> ExperienceEntry {
    ExperienceEntry {
        id,
        company: format!("Company {id}"),
        position: "Engineer".to_owned(),
        duration: "Jan. 2020 — Present".to_owned(),
        location: "Remote".to_owned(),
        description: vec![format!("Did thing {id}")],
    }
}

/// A blog post whose fields are derived from `id`.
#[must_use]
pub fn blog_post(id: u32) -> BlogPost {
    BlogPost {
        id,
        title: format!("Post {id}"),
        excerpt: format!("Excerpt {id}"),
        date: fixture_date(id),
        tags: vec!["fixture".to_owned()],
        content: format!("Content of post {id}"),
    }
}

/// A rambling whose fields are derived from `id`.
#[must_use]
pub fn rambling(id: u32) -> Rambling {
    Rambling {
        id,
        title: format!("Rambling {id}"),
        content: format!("Thought number {id}"),
        date: fixture_date(id),
        mood: "curious".to_owned(),
    }
}
