//! Integer-identified records and lookups over them.

use std::collections::HashSet;

use crate::error::DomainError;

/// A record that belongs to a collection and carries a stable integer id.
pub trait Record {
    /// Record kind used in error messages, e.g. `Blog`.
    const KIND: &'static str;

    /// Returns the record's id.
    fn id(&self) -> u32;
}

/// Returns the first record whose id equals `id`.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no record matches.
pub fn find_by_id<R: Record>(records: &[R], id: u32) -> Result<&R, DomainError> {
    records
        .iter()
        .find(|record| record.id() == id)
        .ok_or(DomainError::NotFound { kind: R::KIND, id })
}

/// Checks that no two records share an id.
///
/// # Errors
///
/// Returns `DomainError::DuplicateId` naming the first repeated id.
pub fn ensure_unique_ids<R: Record>(records: &[R]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(DomainError::DuplicateId {
                kind: R::KIND,
                id: record.id(),
            });
        }
    }
    Ok(())
}
