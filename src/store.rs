//! In-memory resource store: one ordered collection per entity kind behind a reader/writer lock.
//!
//! Mutations (create, update, delete) hold the write lock, so they exclude every other operation
//! on the same store. Reads share the read lock. Separate stores never lock each other.

use crate::config::IdStrategy;
use crate::error::AppError;
use crate::id::IdGenerator;
use crate::models::{ProgressRecord, Resource};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct Inner<T> {
    items: Vec<T>,
    ids: IdGenerator,
}

/// Shared handle to one collection. Cloning is cheap and every clone sees the same data.
pub struct ResourceStore<T> {
    inner: Arc<RwLock<Inner<T>>>,
}

impl<T> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        ResourceStore {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Resource> ResourceStore<T> {
    pub fn new(strategy: IdStrategy) -> Self {
        Self::with_entries(strategy, Vec::new())
    }

    /// Store pre-populated with `entries` in order. Entries keep their ids; blank ids are assigned.
    pub fn with_entries(strategy: IdStrategy, entries: Vec<T>) -> Self {
        let mut ids = IdGenerator::new(strategy, T::ID_PREFIX, entries.len());
        let mut items: Vec<T> = Vec::with_capacity(entries.len());
        for mut entity in entries {
            if entity.id().is_empty() {
                let id = ids.next_id(|candidate| items.iter().any(|e| e.id() == candidate));
                entity.set_id(id);
            }
            items.push(entity);
        }
        ResourceStore {
            inner: Arc::new(RwLock::new(Inner { items, ids })),
        }
    }

    // Every operation leaves the collection consistent before anything that could panic,
    // so a poisoned lock still guards valid data.
    fn read(&self) -> RwLockReadGuard<'_, Inner<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All entries in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.read().items.clone()
    }

    pub fn get(&self, id: &str) -> Result<T, AppError> {
        self.read()
            .items
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or(AppError::NotFound(T::KIND))
    }

    /// Assign a fresh id (overwriting any the client sent) and append.
    pub fn create(&self, mut entity: T) -> T {
        let mut guard = self.write();
        let inner = &mut *guard;
        let items = &inner.items;
        let id = inner.ids.next_id(|candidate| items.iter().any(|e| e.id() == candidate));
        entity.set_id(id);
        inner.items.push(entity.clone());
        tracing::debug!(kind = T::KIND, id = %entity.id(), "created");
        entity
    }

    /// Replace the whole entity at `id`, keeping its id and position. Not a merge.
    pub fn update(&self, id: &str, mut replacement: T) -> Result<T, AppError> {
        let mut guard = self.write();
        let slot = guard
            .items
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(AppError::NotFound(T::KIND))?;
        replacement.set_id(id.to_string());
        *slot = replacement.clone();
        tracing::debug!(kind = T::KIND, id = %id, "updated");
        Ok(replacement)
    }

    /// Remove the entity at `id`; the rest keep their relative order.
    pub fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut guard = self.write();
        let pos = guard
            .items
            .iter()
            .position(|e| e.id() == id)
            .ok_or(AppError::NotFound(T::KIND))?;
        guard.items.remove(pos);
        tracing::debug!(kind = T::KIND, id = %id, "deleted");
        Ok(())
    }

    /// Entries matching `predicate`, in collection order.
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.read().items.iter().filter(|e| predicate(e)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().items.is_empty()
    }
}

impl ResourceStore<ProgressRecord> {
    /// Records owned by `user_id`. Empty when none match; the user need not exist.
    pub fn list_by_user_id(&self, user_id: &str) -> Vec<ProgressRecord> {
        self.filter(|record| record.user_id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UserProfile, WorkoutPlan};
    use std::collections::HashSet;

    fn workout(name: &str) -> WorkoutPlan {
        WorkoutPlan {
            name: name.into(),
            difficulty: "beginner".into(),
            exercises: vec!["Squats".into()],
            duration_minutes: 20,
            ..WorkoutPlan::default()
        }
    }

    fn names(store: &ResourceStore<WorkoutPlan>) -> Vec<String> {
        store.list().into_iter().map(|w| w.name).collect()
    }

    #[test]
    fn create_then_get_returns_input_with_assigned_id() {
        let store = ResourceStore::new(IdStrategy::Sequential);
        let input = workout("Legs");
        let created = store.create(input.clone());
        assert!(!created.id.is_empty());

        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched, WorkoutPlan { id: created.id.clone(), ..input });
    }

    #[test]
    fn client_supplied_id_is_ignored() {
        let store = ResourceStore::new(IdStrategy::Sequential);
        let created = store.create(WorkoutPlan {
            id: "mine".into(),
            ..workout("Arms")
        });
        assert_ne!(created.id, "mine");
        assert!(store.get("mine").is_err());
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store: ResourceStore<WorkoutPlan> = ResourceStore::new(IdStrategy::Sequential);
        let err = store.get("999").unwrap_err();
        assert_eq!(err.to_string(), "Workout not found");
    }

    #[test]
    fn update_replaces_whole_entity_in_place() {
        let store = ResourceStore::new(IdStrategy::Sequential);
        let first = store.create(workout("A"));
        store.create(workout("B"));

        let replacement = WorkoutPlan {
            id: "ignored".into(),
            name: "A2".into(),
            ..WorkoutPlan::default()
        };
        let updated = store.update(&first.id, replacement).unwrap();
        assert_eq!(updated.id, first.id);
        assert_eq!(updated.exercises, Vec::<String>::new());
        assert_eq!(store.get(&first.id).unwrap(), updated);
        assert_eq!(names(&store), vec!["A2", "B"]);
    }

    #[test]
    fn update_unknown_id_leaves_list_unchanged() {
        let store = ResourceStore::new(IdStrategy::Sequential);
        store.create(workout("A"));
        let before = store.list();
        assert!(store.update("nope", workout("X")).is_err());
        assert_eq!(store.list(), before);
    }

    #[test]
    fn delete_preserves_order_of_remaining() {
        let store = ResourceStore::new(IdStrategy::Sequential);
        store.create(workout("A"));
        let b = store.create(workout("B"));
        store.create(workout("C"));

        store.delete(&b.id).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.get(&b.id).is_err());
        assert_eq!(names(&store), vec!["A", "C"]);
        assert!(store.delete(&b.id).is_err());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = ResourceStore::new(IdStrategy::Sequential);
        let a = store.create(workout("A"));
        let b = store.create(workout("B"));
        store.delete(&a.id).unwrap();
        let c = store.create(workout("C"));
        assert_ne!(c.id, a.id);
        assert_ne!(c.id, b.id);
    }

    #[test]
    fn seeded_entries_keep_ids_and_counter_continues() {
        let seeded = WorkoutPlan {
            id: "1".into(),
            ..workout("Seed")
        };
        let store = ResourceStore::with_entries(IdStrategy::Sequential, vec![seeded]);
        let created = store.create(workout("New"));
        assert_eq!(created.id, "workout_2");
        assert_eq!(store.get("1").unwrap().name, "Seed");
    }

    #[test]
    fn prefixed_seed_id_is_skipped_by_the_counter() {
        let seeded = WorkoutPlan {
            id: "workout_2".into(),
            ..workout("Seed")
        };
        let store = ResourceStore::with_entries(IdStrategy::Sequential, vec![seeded]);
        let created = store.create(workout("New"));
        assert_eq!(created.id, "workout_3");
        assert_eq!(store.get("workout_2").unwrap().name, "Seed");
    }

    #[test]
    fn list_by_user_id_is_an_ordered_subset() {
        let store: ResourceStore<ProgressRecord> = ResourceStore::new(IdStrategy::Sequential);
        for (user, minutes) in [("1", 10), ("2", 20), ("1", 30), ("3", 40), ("1", 50)] {
            store.create(ProgressRecord {
                user_id: user.into(),
                duration_minutes: minutes,
                ..ProgressRecord::default()
            });
        }
        let expected: Vec<_> = store.list().into_iter().filter(|r| r.user_id == "1").collect();
        let got = store.list_by_user_id("1");
        assert_eq!(got, expected);
        assert_eq!(got.iter().map(|r| r.duration_minutes).collect::<Vec<_>>(), vec![10, 30, 50]);
        assert!(store.list_by_user_id("nobody").is_empty());
    }

    #[test]
    fn concurrent_creates_never_share_an_id() {
        let store: ResourceStore<UserProfile> = ResourceStore::new(IdStrategy::Sequential);
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..50)
                        .map(|i| {
                            store
                                .create(UserProfile {
                                    username: format!("u{}-{}", t, i),
                                    ..UserProfile::default()
                                })
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(ids.insert(id), "duplicate id");
            }
        }
        assert_eq!(ids.len(), 400);
        assert_eq!(store.len(), 400);
    }
}
