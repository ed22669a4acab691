use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use super::entities::{ChildRow, Identified};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderValidationError {
    #[error("At least one {label} ID is required")]
    EmptyInput { label: &'static str },

    #[error("Duplicate {label} IDs: {}", format_ids(.ids))]
    DuplicateIds { label: &'static str, ids: Vec<Uuid> },

    #[error(
        "Invalid {label} IDs: missing {}, unknown {}",
        format_ids(.missing),
        format_ids(.unknown)
    )]
    IdSetMismatch {
        label: &'static str,
        missing: Vec<Uuid>,
        unknown: Vec<Uuid>,
    },

    #[error("Skill item {item_id} does not belong to category {expected_parent}")]
    WrongParent { item_id: Uuid, expected_parent: Uuid },
}

fn format_ids(ids: &[Uuid]) -> String {
    let joined = ids
        .iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

fn reject_empty_or_duplicates(
    label: &'static str,
    requested: &[Uuid],
) -> Result<(), ReorderValidationError> {
    if requested.is_empty() {
        return Err(ReorderValidationError::EmptyInput { label });
    }

    let mut seen = HashSet::with_capacity(requested.len());
    let mut duplicates = Vec::new();
    for id in requested {
        if !seen.insert(*id) && !duplicates.contains(id) {
            duplicates.push(*id);
        }
    }

    if !duplicates.is_empty() {
        return Err(ReorderValidationError::DuplicateIds {
            label,
            ids: duplicates,
        });
    }

    Ok(())
}

/// Check a requested ordering against the current members of a collection.
///
/// The requested ids must be non-empty, free of duplicates and set-equal to
/// the ids of `current`. On success the members come back in requested
/// order, ready for rank assignment. Nothing is written here.
pub fn validate<T: Identified>(
    label: &'static str,
    requested: &[Uuid],
    current: Vec<T>,
) -> Result<Vec<T>, ReorderValidationError> {
    reject_empty_or_duplicates(label, requested)?;

    let requested_set: HashSet<Uuid> = requested.iter().copied().collect();
    let missing: Vec<Uuid> = current
        .iter()
        .map(Identified::id)
        .filter(|id| !requested_set.contains(id))
        .collect();

    let mut by_id: HashMap<Uuid, T> = current.into_iter().map(|m| (m.id(), m)).collect();
    let unknown: Vec<Uuid> = requested
        .iter()
        .copied()
        .filter(|id| !by_id.contains_key(id))
        .collect();

    if !missing.is_empty() || !unknown.is_empty() {
        return Err(ReorderValidationError::IdSetMismatch {
            label,
            missing,
            unknown,
        });
    }

    // Set-equal and duplicate free, so every lookup hits exactly once.
    Ok(requested.iter().filter_map(|id| by_id.remove(id)).collect())
}

/// Parent-scoped variant used for skill items within one category.
///
/// `resolved` holds the rows found for the requested ids regardless of their
/// parent. Any of them owned by another parent is rejected as `WrongParent`
/// before the set comparison against `current` (the expected parent's
/// members) runs.
pub fn validate_scoped(
    label: &'static str,
    requested: &[Uuid],
    expected_parent: Uuid,
    resolved: &[ChildRow],
    current: Vec<ChildRow>,
) -> Result<Vec<ChildRow>, ReorderValidationError> {
    reject_empty_or_duplicates(label, requested)?;

    if let Some(stray) = requested.iter().find_map(|id| {
        resolved
            .iter()
            .find(|row| row.id == *id && row.parent_id != expected_parent)
    }) {
        return Err(ReorderValidationError::WrongParent {
            item_id: stray.id,
            expected_parent,
        });
    }

    validate(label, requested, current)
}
