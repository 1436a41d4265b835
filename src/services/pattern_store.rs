//! Persistence for named saved patterns.
//!
//! The whole collection lives as one JSON array under a single storage key
//! and is rewritten in full on every mutation. An internal mutex serializes
//! each read-modify-write cycle so concurrent handlers cannot silently drop
//! each other's writes.

use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use crate::models::saved_pattern::{CreateSavedPattern, SavedPattern};
use crate::storage::{StorageBackend, StorageError};

const STORAGE_KEY: &str = "saved-regex-patterns";

/// Ordered collection of saved patterns over an injected persistence backend.
pub struct PatternStore {
    backend: Box<dyn StorageBackend>,
    write_lock: Mutex<()>,
}

impl PatternStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            write_lock: Mutex::new(()),
        }
    }

    /// All saved patterns in insertion order.
    ///
    /// Missing or unparsable stored data is treated as an empty collection
    /// and logged; it is never surfaced to the caller.
    pub fn list(&self) -> Vec<SavedPattern> {
        let _guard = self.lock();
        self.read_all()
    }

    /// Save a new pattern, assigning its `id` and `created_at`, and append it
    /// to the end of the collection. The persisted collection is untouched if
    /// the write is rejected.
    pub fn create(&self, req: &CreateSavedPattern) -> Result<SavedPattern, StorageError> {
        let _guard = self.lock();
        let record = SavedPattern {
            id: Uuid::now_v7().to_string(),
            name: req.name.clone(),
            pattern: req.pattern.clone(),
            description: req.description.clone(),
            example: req.example.clone(),
            created_at: Utc::now(),
        };

        let mut patterns = self.read_all();
        patterns.push(record.clone());
        self.write_all(&patterns)?;

        tracing::debug!(id = %record.id, name = %record.name, "Saved pattern");
        Ok(record)
    }

    /// Remove the pattern with the given id, preserving the relative order of
    /// the rest. A missing id is a no-op, not an error.
    pub fn delete(&self, id: &str) -> Result<(), StorageError> {
        let _guard = self.lock();
        let mut patterns = self.read_all();
        patterns.retain(|p| p.id != id);
        self.write_all(&patterns)
    }

    /// Probe the persistence backend, for readiness checks.
    pub fn health_check(&self) -> Result<(), StorageError> {
        self.backend.get(STORAGE_KEY).map(|_| ())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn read_all(&self) -> Vec<SavedPattern> {
        let raw = match self.backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read saved patterns");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(patterns) => patterns,
            Err(e) => {
                tracing::warn!(error = %e, "Stored pattern data is corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    fn write_all(&self, patterns: &[SavedPattern]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(patterns)?;
        self.backend.set(STORAGE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryBackend;

    fn store_with_backend() -> (PatternStore, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        (PatternStore::new(backend.clone()), backend)
    }

    fn request(name: &str) -> CreateSavedPattern {
        CreateSavedPattern {
            name: name.to_string(),
            pattern: r"\d+".to_string(),
            description: "digits".to_string(),
            example: "a12b34".to_string(),
        }
    }

    #[test]
    fn list_starts_empty() {
        let (store, _) = store_with_backend();
        assert!(store.list().is_empty());
    }

    #[test]
    fn create_appends_to_end_with_fresh_id() {
        let (store, _) = store_with_backend();
        let first = store.create(&request("first")).unwrap();
        let second = store.create(&request("second")).unwrap();
        assert_ne!(first.id, second.id);

        let listed = store.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
        assert_eq!(listed[1].name, "second");
    }

    #[test]
    fn create_round_trips_all_fields() {
        let (store, _) = store_with_backend();
        let req = request("Digits");
        let created = store.create(&req).unwrap();

        let listed = store.list();
        assert_eq!(listed, vec![created.clone()]);
        assert_eq!(listed[0].name, req.name);
        assert_eq!(listed[0].pattern, req.pattern);
        assert_eq!(listed[0].description, req.description);
        assert_eq!(listed[0].example, req.example);
        assert!(!created.id.is_empty());
    }

    #[test]
    fn delete_removes_only_the_target_and_keeps_order() {
        let (store, _) = store_with_backend();
        let a = store.create(&request("a")).unwrap();
        let b = store.create(&request("b")).unwrap();
        let c = store.create(&request("c")).unwrap();

        store.delete(&b.id).unwrap();

        let ids: Vec<_> = store.list().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[test]
    fn delete_missing_id_is_a_noop() {
        let (store, _) = store_with_backend();
        let a = store.create(&request("a")).unwrap();
        store.delete("no-such-id").unwrap();
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].id, a.id);
    }

    #[test]
    fn corrupt_stored_data_reads_as_empty() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set(STORAGE_KEY, "not valid json{").unwrap();
        let store = PatternStore::new(backend);
        assert!(store.list().is_empty());
    }

    #[test]
    fn rejected_write_surfaces_and_leaves_collection_intact() {
        let (store, backend) = store_with_backend();
        let a = store.create(&request("a")).unwrap();

        backend.fail_writes(true);
        assert!(store.create(&request("b")).is_err());
        assert!(store.delete(&a.id).is_err());
        backend.fail_writes(false);

        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, a.id);
    }
}
