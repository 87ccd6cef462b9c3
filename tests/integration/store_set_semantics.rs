//! Integration tests for idempotent add and set-like remove on store nodes

use dummy_store::attributes::Attributes;
use dummy_store::error::StoreError;
use dummy_store::store::StoreNode;
use std::fs;

use crate::integration::{fresh_store, DEFAULT_STORE_NAME};

fn names(nodes: &[StoreNode]) -> Vec<String> {
    nodes.iter().map(|n| n.name().to_string()).collect()
}

#[test]
fn test_category_twice_does_not_duplicate() {
    let (_temp_dir, _store, root) = fresh_store();

    let first = root.category("Dairy").unwrap();
    let second = root.category("Dairy").unwrap();

    assert_eq!(first.path(), second.path());
    assert_eq!(names(&root.categories().unwrap()), vec!["Dairy"]);
}

#[test]
fn test_item_twice_does_not_duplicate() {
    let (_temp_dir, _store, root) = fresh_store();

    root.item("Milk").unwrap();
    root.item("Milk").unwrap();

    assert_eq!(names(&root.items().unwrap()), vec!["Milk"]);
}

#[test]
fn test_categories_and_items_are_separate_lists() {
    let (_temp_dir, _store, root) = fresh_store();

    root.category("Bakery").unwrap();
    root.item("Bread").unwrap();

    assert_eq!(names(&root.categories().unwrap()), vec!["Bakery"]);
    assert_eq!(names(&root.items().unwrap()), vec!["Bread"]);
}

#[test]
fn test_existing_attributes_are_not_rewritten() {
    let (_temp_dir, _store, root) = fresh_store();
    let milk = root.item("Milk").unwrap();
    milk.add_attributes(&Attributes::from([("price", "1.20"), ("brand", "Moo")]))
        .unwrap();

    // The encoder never emits comments, so any rewrite would drop this line.
    let marked = format!("{}\n<!-- untouched -->", fs::read_to_string(milk.path()).unwrap());
    fs::write(milk.path(), &marked).unwrap();

    milk.add_attributes(&Attributes::from([("price", "1.20")]))
        .unwrap();

    assert_eq!(fs::read_to_string(milk.path()).unwrap(), marked);
    assert_eq!(
        milk.attributes().unwrap(),
        Attributes::from([("price", "1.20"), ("brand", "Moo")])
    );
}

#[test]
fn test_changed_attribute_value_is_rewritten() {
    let (_temp_dir, _store, root) = fresh_store();
    let milk = root.item("Milk").unwrap();
    milk.add_attributes(&Attributes::from([("price", "1.20")]))
        .unwrap();

    milk.add_attributes(&Attributes::from([("price", "0.99")]))
        .unwrap();

    assert_eq!(milk.attributes().unwrap(), Attributes::from([("price", "0.99")]));
}

#[test]
fn test_remove_category_reclaims_subtree() {
    let (_temp_dir, store, root) = fresh_store();
    let dairy = root.category("Dairy").unwrap();
    root.category("Bakery").unwrap();
    let cheese = dairy.category("Cheese").unwrap();
    cheese.item("Brie").unwrap();
    cheese
        .add_attributes(&Attributes::from([("aisle", "4")]))
        .unwrap();
    assert_eq!(store.documents(DEFAULT_STORE_NAME).unwrap().len(), 5);

    root.remove_category("Dairy").unwrap();

    assert_eq!(names(&root.categories().unwrap()), vec!["Bakery"]);
    assert_eq!(store.documents(DEFAULT_STORE_NAME).unwrap().len(), 2);

    // Reopening the old location starts from an empty document.
    let reopened = StoreNode::open(dairy.path(), "Dairy").unwrap();
    assert!(reopened.categories().unwrap().is_empty());
    assert!(reopened.items().unwrap().is_empty());
    assert!(reopened.attributes().unwrap().is_empty());
}

#[test]
fn test_remove_missing_children_is_harmless() {
    let (_temp_dir, _store, root) = fresh_store();
    root.item("Milk").unwrap();

    root.remove_category("Nothing here").unwrap();
    root.remove_item("Nothing here").unwrap();

    assert_eq!(names(&root.items().unwrap()), vec!["Milk"]);
}

#[test]
fn test_remove_item_reclaims_document() {
    let (_temp_dir, _store, root) = fresh_store();
    let milk = root.item("Milk").unwrap();

    root.remove_item("Milk").unwrap();

    assert!(root.items().unwrap().is_empty());
    assert!(!milk.path().exists());
}

#[test]
fn test_remove_attributes() {
    let (_temp_dir, _store, root) = fresh_store();
    root.add_attributes(&Attributes::from([("a", "1"), ("b", "2"), ("c", "3")]))
        .unwrap();

    root.remove_attributes(&["a", "c"]).unwrap();

    assert_eq!(root.attributes().unwrap(), Attributes::from([("b", "2")]));
}

#[test]
fn test_children_are_reread_not_cached() {
    let (_temp_dir, store, root) = fresh_store();
    let other_handle = store.open(DEFAULT_STORE_NAME).unwrap();

    other_handle.category("Frozen").unwrap();

    assert_eq!(names(&root.categories().unwrap()), vec!["Frozen"]);
}

#[test]
fn test_externally_deleted_document_is_not_found() {
    let (_temp_dir, _store, root) = fresh_store();
    let bakery = root.category("Bakery").unwrap();
    fs::remove_file(bakery.path()).unwrap();

    assert!(matches!(bakery.categories(), Err(StoreError::NotFound(_))));
    assert!(matches!(
        bakery.item("Bread"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_listed_child_without_document_is_recreated() {
    let (_temp_dir, _store, root) = fresh_store();
    let bakery = root.category("Bakery").unwrap();
    fs::remove_file(bakery.path()).unwrap();

    let listed = root.categories().unwrap();

    assert_eq!(names(&listed), vec!["Bakery"]);
    assert!(bakery.path().is_file());
    assert_eq!(listed[0].title().unwrap(), "Bakery");
}
