use super::*;
use crate::catalog::fake_backend::{FakeBackend, app};

fn backend() -> FakeBackend {
    FakeBackend::with_apps(vec![
        app(1, "Nightly export", "ops,data", "2025-01-01 00:00:00"),
        app(2, "Cleanup", "ops", "2025-01-03 00:00:00"),
        app(3, "Report", "finance", "2025-01-02 00:00:00"),
    ])
}

fn names(catalog: &Catalog) -> Vec<&str> {
    catalog.apps().iter().map(|a| a.name.as_str()).collect()
}

#[test]
fn reload_rebuilds_facet() {
    let backend = backend();
    let mut catalog = Catalog::new();
    catalog.reload(&backend).unwrap();
    let tags: Vec<&str> = catalog.facet().tags().collect();
    assert_eq!(tags, ["ops", "finance", "data"]);
}

#[test]
fn successful_reorder_keeps_local_order() {
    let backend = backend();
    let mut catalog = Catalog::new();
    catalog.reload(&backend).unwrap();

    assert!(catalog.move_and_persist(2, 0, &backend).unwrap());
    assert_eq!(names(&catalog), ["Report", "Nightly export", "Cleanup"]);
    assert_eq!(backend.calls(), ["list", "reorder [3, 1, 2]"]);
}

#[test]
fn failed_reorder_reloads_server_order() {
    let backend = backend();
    backend.state.borrow_mut().reject_reorder = true;
    let mut catalog = Catalog::new();
    catalog.reload(&backend).unwrap();

    let err = catalog.move_and_persist(0, 2, &backend).unwrap_err();
    assert!(format!("{:#}", err).contains("list reloaded from server"));
    assert_eq!(names(&catalog), ["Nightly export", "Cleanup", "Report"]);
    assert_eq!(backend.calls(), ["list", "reorder [2, 3, 1]", "list"]);
}

#[test]
fn out_of_range_move_is_ignored() {
    let backend = backend();
    let mut catalog = Catalog::new();
    catalog.reload(&backend).unwrap();
    assert!(!catalog.move_and_persist(0, 9, &backend).unwrap());
    assert!(!catalog.move_and_persist(1, 1, &backend).unwrap());
    assert_eq!(backend.calls(), ["list"]);
}

#[test]
fn visible_follows_keyword_and_facet() {
    let backend = backend();
    let mut catalog = Catalog::new();
    catalog.reload(&backend).unwrap();

    catalog.set_keyword("e");
    assert!(catalog.facet_mut().select(Some("ops")));
    let visible: Vec<&str> = catalog.visible().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(visible, ["Nightly export", "Cleanup"]);
    assert!(catalog.filter().is_active());
}

#[test]
fn arrange_puts_named_ids_first() {
    let backend = backend();
    let mut catalog = Catalog::new();
    catalog.reload(&backend).unwrap();

    catalog.arrange(&[3]).unwrap();
    assert_eq!(catalog.card_order(), [3, 1, 2]);

    assert!(catalog.arrange(&[2, 42]).is_err());
    assert_eq!(catalog.card_order().len(), 3);
}
