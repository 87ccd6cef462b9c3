//! Integration tests for generator fan-out cardinality and ordering

use dummy_store::fixtures::{RandomFixtures, SequenceFixtures};
use dummy_store::generator::Generator;
use dummy_store::store::DummyStore;
use std::path::{Path, PathBuf};

use crate::integration::{fresh_store, DEFAULT_STORE_NAME};

fn node_dir(path: &Path) -> &Path {
    path.parent().unwrap()
}

#[test]
fn test_single_level_fan_out() {
    let (_temp_dir, _store, root) = fresh_store();
    let mut fixtures = SequenceFixtures::new();

    let generator = root.generate(1, &mut fixtures).and(3).categories().unwrap();

    assert_eq!(generator.pages().len(), 3);
    for page in generator.pages() {
        let category_dir = node_dir(page.path());
        assert_eq!(category_dir.parent().unwrap(), node_dir(root.path()));
    }
    assert_eq!(root.categories().unwrap().len(), 3);
}

#[test]
fn test_two_level_fan_out_is_page_major() {
    let (_temp_dir, _store, root) = fresh_store();
    let mut fixtures = SequenceFixtures::new();

    let level1 = root.generate(1, &mut fixtures).and(3).categories().unwrap();
    let parents = level1.pages().to_vec();
    let level2 = level1.and(2).categories().unwrap();

    assert_eq!(level2.pages().len(), 6);
    for (i, page) in level2.pages().iter().enumerate() {
        let parent = &parents[i / 2];
        assert_eq!(node_dir(node_dir(page.path())), node_dir(parent.path()));
        assert_eq!(
            node_dir(node_dir(node_dir(page.path()))),
            node_dir(root.path())
        );
    }
}

#[test]
fn test_count_resets_after_dispatch() {
    let (_temp_dir, _store, root) = fresh_store();
    let mut fixtures = SequenceFixtures::new();

    let level2 = root
        .generate(2, &mut fixtures)
        .categories()
        .unwrap()
        .categories()
        .unwrap();

    assert_eq!(level2.pages().len(), 2);
}

#[test]
fn test_full_store_generation() {
    let (_temp_dir, store, root) = fresh_store();
    let mut fixtures = SequenceFixtures::new();

    let attributes = root
        .generate(3, &mut fixtures)
        .categories()
        .unwrap()
        .and(3)
        .categories()
        .unwrap()
        .and(4)
        .items()
        .unwrap();

    assert_eq!(attributes.len(), 36);
    assert!(attributes.iter().all(|a| a.contains_key("price")));
    // root + 3 + 9 categories + 36 items
    assert_eq!(store.documents(DEFAULT_STORE_NAME).unwrap().len(), 49);

    let category = &root.categories().unwrap()[0];
    let sub_category = &category.categories().unwrap()[0];
    let items = sub_category.items().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0].attributes().unwrap(), attributes[0]);
}

#[test]
fn test_generation_is_positionally_stable() {
    fn generate_paths(seed: u64) -> Vec<PathBuf> {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let store = DummyStore::with_root(temp_dir.path()).unwrap();
        let root = store.open(DEFAULT_STORE_NAME).unwrap();
        let mut fixtures = RandomFixtures::new(seed);
        root.generate(2, &mut fixtures)
            .categories()
            .unwrap()
            .and(2)
            .items()
            .unwrap();
        store
            .documents(DEFAULT_STORE_NAME)
            .unwrap()
            .into_iter()
            .map(|p| p.strip_prefix(store.root_dir()).unwrap().to_path_buf())
            .collect()
    }

    assert_eq!(generate_paths(11), generate_paths(11));
}

#[test]
fn test_generator_over_several_pages() {
    let (_temp_dir, _store, root) = fresh_store();
    let dairy = root.category("Dairy").unwrap();
    let bakery = root.category("Bakery").unwrap();
    let mut fixtures = SequenceFixtures::new();

    let results = Generator::new(vec![dairy.clone(), bakery.clone()], 2, &mut fixtures)
        .items()
        .unwrap();

    assert_eq!(results.len(), 4);
    assert_eq!(dairy.items().unwrap().len(), 2);
    assert_eq!(bakery.items().unwrap().len(), 2);
    assert_eq!(bakery.items().unwrap()[0].title().unwrap(), "Item #3");
}
