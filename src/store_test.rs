use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get_item("mode"), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set_item("mode", "true");
    assert_eq!(store.get_item("mode").as_deref(), Some("true"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_overwrites_existing_key() {
    let store = MemoryStore::with_items([("mode", "true")]);
    store.set_item("mode", "false");
    assert_eq!(store.get_item("mode").as_deref(), Some("false"));
    assert_eq!(store.len(), 1);
}

#[test]
fn rc_store_delegates_to_inner() {
    let inner = Rc::new(MemoryStore::new());
    let shared: Rc<MemoryStore> = Rc::clone(&inner);
    shared.set_item("mode", "false");
    assert_eq!(inner.get_item("mode").as_deref(), Some("false"));
}
