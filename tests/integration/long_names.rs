//! Integration tests for display names longer than the path segment bound

use dummy_store::store::{short_name, SHORT_NAME_LEN};
use dummy_store::fixtures::SequenceFixtures;

use crate::integration::fresh_store;

#[test]
fn test_long_names_are_not_truncated() {
    let (_temp_dir, _store, root) = fresh_store();
    let cat_name = "extra long category name";
    let sub_cat_name = "extra long sub category name";
    let item_name = "super extra long item name";
    let mut fixtures = SequenceFixtures::new();

    root.category(cat_name)
        .unwrap()
        .category(sub_cat_name)
        .unwrap()
        .item(item_name)
        .unwrap()
        .generate(1, &mut fixtures)
        .attributes(&Default::default())
        .unwrap();

    let category = root
        .categories()
        .unwrap()
        .into_iter()
        .find(|cat| cat_name.starts_with(cat.name()))
        .unwrap();
    assert_eq!(category.title().unwrap(), cat_name);

    let sub_category = category
        .categories()
        .unwrap()
        .into_iter()
        .find(|sub_cat| sub_cat_name.starts_with(sub_cat.name()))
        .unwrap();
    assert_eq!(sub_category.title().unwrap(), sub_cat_name);

    let item = sub_category
        .items()
        .unwrap()
        .into_iter()
        .find(|it| item_name.starts_with(it.name()))
        .unwrap();
    assert_eq!(item.title().unwrap(), item_name);
    assert!(item.attributes().unwrap().contains_key("brand"));
    assert!(!item.attributes().unwrap().contains_key("name"));
}

#[test]
fn test_path_segment_is_truncated() {
    let (_temp_dir, _store, root) = fresh_store();
    let item = root.item("super extra long item name").unwrap();

    let file_name = item.path().file_name().unwrap().to_string_lossy().to_string();
    assert_eq!(file_name, format!("{}.html", short_name("super extra long item name")));
    assert_eq!(short_name("super extra long item name").chars().count(), SHORT_NAME_LEN);
}

#[test]
fn test_shared_prefix_names_collide() {
    let (_temp_dir, _store, root) = fresh_store();
    let first = root.category("extra long category name one").unwrap();
    let second = root.category("extra long category name two").unwrap();

    assert_eq!(first.path(), second.path());
    assert_eq!(root.categories().unwrap().len(), 1);
    // The first creation wrote the document; the second found it in place.
    assert_eq!(second.title().unwrap(), "extra long category name one");
}
