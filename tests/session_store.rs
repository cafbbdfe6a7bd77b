use gameshell::store::SessionStore;

#[test]
fn name_starts_empty() {
    let store = SessionStore::new();
    assert_eq!(store.name(), "");
    assert_eq!(store.version(), 0);
}

#[test]
fn set_name_returns_the_assigned_value() {
    let store = SessionStore::new();
    assert_eq!(store.set_name("Ada"), "Ada");
    assert_eq!(store.name(), "Ada");
}

#[test]
fn last_write_wins() {
    let store = SessionStore::new();
    store.set_name("Ada");
    store.set_name("Grace");
    assert_eq!(store.name(), "Grace");
}

#[test]
fn setting_back_to_empty_is_valid() {
    let store = SessionStore::new();
    store.set_name("Ada");
    store.set_name("");
    assert_eq!(store.name(), "");
}

#[test]
fn version_bumps_once_per_change() {
    let store = SessionStore::new();
    store.set_name("Ada");
    assert_eq!(store.version(), 1);
    store.set_name("Grace");
    assert_eq!(store.version(), 2);
}

#[test]
fn rewriting_the_same_value_is_observable_as_a_noop() {
    let store = SessionStore::new();
    store.set_name("Ada");
    let before = store.version();
    assert_eq!(store.set_name("Ada"), "Ada");
    assert_eq!(store.version(), before);
    assert_eq!(store.name(), "Ada");
}

#[test]
fn clones_share_the_same_state() {
    let store = SessionStore::new();
    let reader = store.clone();
    store.set_name("Ada");
    assert_eq!(reader.name(), "Ada");
    assert_eq!(reader.version(), 1);
}

#[test]
fn no_trimming_or_validation_is_applied() {
    let store = SessionStore::new();
    store.set_name("  Ada Lovelace  ");
    assert_eq!(store.name(), "  Ada Lovelace  ");
}
