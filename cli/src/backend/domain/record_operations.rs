//! Record operations for the CD inventory.
//!
//! Every operation takes the store by value (or by reference when it only
//! reads) and hands back the updated store, so the caller keeps sole
//! ownership of the one mutable inventory. Nothing here prints; outcomes are
//! returned as values and the console layer decides how to present them.

use log::{debug, info, warn};
use shared::{CdRecord, RecordId, RecordStore};
use std::collections::HashSet;

/// Result of a delete-by-ID request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The first record with the requested ID was removed
    Removed(CdRecord),
    /// No record carries the requested ID; the store is unchanged
    NotFound,
}

impl DeleteOutcome {
    /// User-facing message for this outcome
    pub fn message(&self) -> &'static str {
        match self {
            DeleteOutcome::Removed(_) => "The CD was removed.",
            DeleteOutcome::NotFound => "Could not find this CD!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdError {
    #[error("Input must be an integer. Returning to menu.")]
    NotAnInteger { input: String },
}

/// Append a new record to the end of the store.
///
/// No uniqueness check is made; callers pass an ID from [`generate_id`].
pub fn add_entry(mut store: RecordStore, id: RecordId, title: String, artist: String) -> RecordStore {
    info!("Adding CD {}: '{}' by '{}'", id, title, artist);
    store.records.push(CdRecord { id, title, artist });
    store
}

/// Remove the first record whose ID matches `id`
pub fn delete_entry(mut store: RecordStore, id: RecordId) -> (RecordStore, DeleteOutcome) {
    match store.records.iter().position(|r| r.id == id) {
        Some(index) => {
            let removed = store.records.remove(index);
            info!("Removed CD {} ('{}') at position {}", removed.id, removed.title, index);
            (store, DeleteOutcome::Removed(removed))
        }
        None => {
            warn!("Delete requested for unknown CD ID {}", id);
            (store, DeleteOutcome::NotFound)
        }
    }
}

/// Smallest positive ID not already used by a record in the store
pub fn generate_id(store: &RecordStore) -> RecordId {
    let taken: HashSet<RecordId> = store.iter().map(|r| r.id).collect();
    let mut candidate: RecordId = 1;
    while taken.contains(&candidate) {
        candidate += 1;
    }
    debug!("Generated CD ID {} ({} IDs in use)", candidate, taken.len());
    candidate
}

/// Parse a raw, user-typed CD ID
pub fn parse_record_id(input: &str) -> Result<RecordId, RecordIdError> {
    input.trim().parse::<RecordId>().map_err(|_| {
        warn!("Rejected non-integer CD ID input: '{}'", input);
        RecordIdError::NotAnInteger {
            input: input.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_ids(ids: &[RecordId]) -> RecordStore {
        RecordStore::from_records(
            ids.iter()
                .map(|id| CdRecord::new(*id, format!("Title {}", id), format!("Artist {}", id)))
                .collect(),
        )
    }

    #[test]
    fn test_generate_id_empty_store() {
        assert_eq!(generate_id(&RecordStore::new()), 1);
    }

    #[test]
    fn test_generate_id_fills_gap() {
        assert_eq!(generate_id(&store_with_ids(&[1, 2, 4])), 3);
        assert_eq!(generate_id(&store_with_ids(&[2, 3])), 1);
        assert_eq!(generate_id(&store_with_ids(&[3, 1, 2])), 4);
    }

    #[test]
    fn test_generate_id_ignores_non_positive_ids() {
        assert_eq!(generate_id(&store_with_ids(&[0, -5, 1])), 2);
    }

    #[test]
    fn test_add_entry_appends() {
        let store = store_with_ids(&[1, 2]);
        let before = store.clone();

        let store = add_entry(store, 7, "Kid A".to_string(), "Radiohead".to_string());

        assert_eq!(store.len(), 3);
        assert_eq!(store.records[..2], before.records[..]);
        assert_eq!(store.records[2], CdRecord::new(7, "Kid A", "Radiohead"));
    }

    #[test]
    fn test_add_entry_accepts_empty_fields() {
        let store = add_entry(RecordStore::new(), 1, String::new(), String::new());
        assert_eq!(store.records, vec![CdRecord::new(1, "", "")]);
    }

    #[test]
    fn test_delete_entry_removes_match() {
        let (store, outcome) = delete_entry(store_with_ids(&[1, 2, 3]), 2);

        assert_eq!(outcome, DeleteOutcome::Removed(CdRecord::new(2, "Title 2", "Artist 2")));
        assert_eq!(outcome.message(), "The CD was removed.");
        let ids: Vec<RecordId> = store.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_delete_entry_not_found_leaves_store() {
        let original = store_with_ids(&[1, 2]);
        let (store, outcome) = delete_entry(original.clone(), 9);

        assert_eq!(outcome, DeleteOutcome::NotFound);
        assert_eq!(outcome.message(), "Could not find this CD!");
        assert_eq!(store, original);
    }

    #[test]
    fn test_delete_entry_duplicate_ids_removes_first_only() {
        let store = RecordStore::from_records(vec![
            CdRecord::new(5, "First", "A"),
            CdRecord::new(5, "Second", "B"),
        ]);

        let (store, outcome) = delete_entry(store, 5);

        assert_eq!(outcome, DeleteOutcome::Removed(CdRecord::new(5, "First", "A")));
        assert_eq!(store.records, vec![CdRecord::new(5, "Second", "B")]);
    }

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id("12"), Ok(12));
        assert_eq!(parse_record_id("  7 "), Ok(7));
        assert_eq!(parse_record_id("-3"), Ok(-3));

        let err = parse_record_id("abc").unwrap_err();
        assert!(matches!(err, RecordIdError::NotAnInteger { .. }));
        assert_eq!(err.to_string(), "Input must be an integer. Returning to menu.");
        assert!(parse_record_id("").is_err());
        assert!(parse_record_id("1.5").is_err());
    }
}
