//! Entity store behavior: ordering, identifier uniqueness, persistence
//! coupling, and failure revert.

use std::collections::HashSet;
use std::sync::Arc;

use tally_core::errors::StoreError;
use tally_core::events::dispatcher::EventDispatcher;
use tally_core::events::handler::{StoreEvent, StoreMutation, TallyEventHandler};
use tally_core::traits::storage::test_helpers::MemoryBlobStorage;
use tally_core::types::identifiers::RecordId;
use tally_core::types::records::{Product, ProductDraft, User, UserDraft};
use tally_engine::EntityStore;

fn product_draft(name: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        description: "desc".to_string(),
        price: 9.99,
        category: "Accessories".to_string(),
        quantity: 10,
        rating: 4,
        ..ProductDraft::default()
    }
}

fn open_product_store(storage: &Arc<MemoryBlobStorage>) -> EntityStore<Product> {
    EntityStore::open(storage.clone(), Arc::new(EventDispatcher::new())).unwrap()
}

#[test]
fn created_ids_are_unique() {
    let storage = Arc::new(MemoryBlobStorage::new());
    let mut store = open_product_store(&storage);

    let mut seen = HashSet::new();
    for i in 0..100 {
        let record = store.create(product_draft(&format!("P{i}"))).unwrap();
        assert!(seen.insert(record.id.clone()), "duplicate id generated");
    }
    assert_eq!(store.len(), 100);
}

#[test]
fn validation_failure_leaves_store_untouched() {
    let storage = Arc::new(MemoryBlobStorage::new());
    let mut store = open_product_store(&storage);

    let err = store.create(product_draft("   ")).unwrap_err();
    assert!(matches!(err, StoreError::Validation { entity: "product", .. }));
    assert!(store.is_empty());
    assert_eq!(storage.save_count(), 0);
}

#[test]
fn list_preserves_insertion_order() {
    let storage = Arc::new(MemoryBlobStorage::new());
    let mut store = open_product_store(&storage);

    for name in ["first", "second", "third"] {
        store.create(product_draft(name)).unwrap();
    }
    let names: Vec<&str> = store.list().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn update_preserves_position_and_id() {
    let storage = Arc::new(MemoryBlobStorage::new());
    let mut store = open_product_store(&storage);

    store.create(product_draft("a")).unwrap();
    let target = store.create(product_draft("b")).unwrap();
    store.create(product_draft("c")).unwrap();

    let mut draft = target.to_draft();
    draft.name = "b2".to_string();
    let updated = store.update(&target.id, draft).unwrap();

    assert_eq!(updated.id, target.id);
    assert_eq!(store.list()[1].name, "b2");
    assert_eq!(store.len(), 3);
}

#[test]
fn update_unknown_id_is_not_found() {
    let storage = Arc::new(MemoryBlobStorage::new());
    let mut store = open_product_store(&storage);

    let err = store
        .update(&RecordId::new("missing99"), product_draft("x"))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "product", .. }));
    assert!(store.is_empty());
}

#[test]
fn remove_is_idempotent() {
    let storage = Arc::new(MemoryBlobStorage::new());
    let mut store = open_product_store(&storage);

    let record = store.create(product_draft("a")).unwrap();
    assert_eq!(storage.save_count(), 1);

    assert!(store.remove(&record.id).unwrap());
    assert_eq!(storage.save_count(), 2);

    // Second removal is a no-op and must not persist.
    assert!(!store.remove(&record.id).unwrap());
    assert_eq!(storage.save_count(), 2);
    assert!(store.is_empty());
}

#[test]
fn remove_many_persists_once() {
    let storage = Arc::new(MemoryBlobStorage::new());
    let mut store = open_product_store(&storage);

    let a = store.create(product_draft("a")).unwrap();
    let b = store.create(product_draft("b")).unwrap();
    store.create(product_draft("c")).unwrap();
    assert_eq!(storage.save_count(), 3);

    let ids: HashSet<RecordId> = [a.id, b.id].into_iter().collect();
    assert_eq!(store.remove_many(&ids).unwrap(), 2);
    assert_eq!(storage.save_count(), 4);
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].name, "c");
}

#[test]
fn remove_many_with_no_match_does_not_persist() {
    let storage = Arc::new(MemoryBlobStorage::new());
    let mut store = open_product_store(&storage);

    store.create(product_draft("a")).unwrap();
    let ids: HashSet<RecordId> = [RecordId::new("nope")].into_iter().collect();
    assert_eq!(store.remove_many(&ids).unwrap(), 0);
    assert_eq!(storage.save_count(), 1);
}

#[test]
fn failed_persist_reverts_create() {
    let storage = Arc::new(MemoryBlobStorage::new());
    let mut store = open_product_store(&storage);

    storage.set_fail_saves(true);
    assert!(store.create(product_draft("a")).is_err());
    assert!(store.is_empty());

    // The store stays usable once the backend recovers.
    storage.set_fail_saves(false);
    store.create(product_draft("a")).unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn failed_persist_reverts_update_and_remove() {
    let storage = Arc::new(MemoryBlobStorage::new());
    let mut store = open_product_store(&storage);
    let record = store.create(product_draft("a")).unwrap();

    storage.set_fail_saves(true);

    let mut draft = record.to_draft();
    draft.name = "changed".to_string();
    assert!(store.update(&record.id, draft).is_err());
    assert_eq!(store.list()[0].name, "a");

    assert!(store.remove(&record.id).is_err());
    assert_eq!(store.len(), 1);
}

#[test]
fn reopen_restores_persisted_state() {
    let storage = Arc::new(MemoryBlobStorage::new());
    {
        let mut users: EntityStore<User> =
            EntityStore::open(storage.clone(), Arc::new(EventDispatcher::new())).unwrap();
        users
            .create(UserDraft {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: "555-0100".to_string(),
            })
            .unwrap();
    }

    let users: EntityStore<User> =
        EntityStore::open(storage.clone(), Arc::new(EventDispatcher::new())).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users.list()[0].email, "ada@example.com");
}

// ─── Events ─────────────────────────────────────────────────────────

#[derive(Default)]
struct RecordingHandler {
    events: std::sync::Mutex<Vec<StoreEvent>>,
}

impl TallyEventHandler for RecordingHandler {
    fn on_store_mutation(&self, event: &StoreEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

#[test]
fn mutations_dispatch_events() {
    let storage = Arc::new(MemoryBlobStorage::new());
    let events = Arc::new(EventDispatcher::new());
    let handler = Arc::new(RecordingHandler::default());
    events.register(handler.clone());

    let mut store: EntityStore<Product> = EntityStore::open(storage, events).unwrap();
    let record = store.create(product_draft("a")).unwrap();
    store.update(&record.id, record.to_draft()).unwrap();
    store.remove(&record.id).unwrap();

    let seen = handler.events.lock().unwrap();
    let mutations: Vec<&StoreMutation> = seen.iter().map(|e| &e.mutation).collect();
    assert_eq!(
        mutations,
        vec![
            &StoreMutation::Created,
            &StoreMutation::Updated,
            &StoreMutation::Removed
        ]
    );
    assert!(seen.iter().all(|e| e.entity == "product"));
}

#[test]
fn failed_mutation_dispatches_no_event() {
    let storage = Arc::new(MemoryBlobStorage::new());
    let events = Arc::new(EventDispatcher::new());
    let handler = Arc::new(RecordingHandler::default());
    events.register(handler.clone());

    let mut store: EntityStore<Product> = EntityStore::open(storage.clone(), events).unwrap();
    storage.set_fail_saves(true);
    assert!(store.create(product_draft("a")).is_err());
    assert!(handler.events.lock().unwrap().is_empty());
}
