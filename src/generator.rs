//! Tree Generator
//!
//! Fans generated children out across a set of pages:
//!
//! ```no_run
//! # use dummy_store::fixtures::SequenceFixtures;
//! # use dummy_store::store::DummyStore;
//! # fn main() -> Result<(), dummy_store::error::StoreError> {
//! let store = DummyStore::with_root("/tmp/dummy-stores")?;
//! let mut fixtures = SequenceFixtures::new();
//! store
//!     .open("www.spec-store.com")?
//!     .generate(3, &mut fixtures)
//!     .categories()?
//!     .and(3)
//!     .categories()?
//!     .and(5)
//!     .items()?;
//! # Ok(())
//! # }
//! ```
//!
//! Every dispatch creates `count` children under each page, in page-major,
//! repetition-minor order, and the next generator holds exactly those children.

use crate::attributes::Attributes;
use crate::error::StoreError;
use crate::fixtures::{AttributeSource, Fixtures, NameSource};
use crate::store::StoreNode;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildKind {
    Category,
    Item,
}

/// Combinator building store trees level by level.
pub struct Generator<'f> {
    pages: Vec<StoreNode>,
    count: usize,
    fixtures: &'f mut dyn Fixtures,
}

impl<'f> Generator<'f> {
    pub fn new(pages: Vec<StoreNode>, count: usize, fixtures: &'f mut dyn Fixtures) -> Self {
        Self {
            pages,
            count,
            fixtures,
        }
    }

    /// Set how many children the next dispatch creates per page.
    pub fn and(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn pages(&self) -> &[StoreNode] {
        &self.pages
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn into_pages(self) -> Vec<StoreNode> {
        self.pages
    }

    /// Create `count` generated categories under every page.
    ///
    /// The returned generator fans out from the new categories with a count of 1.
    pub fn categories(self) -> Result<Generator<'f>, StoreError> {
        self.dispatch(ChildKind::Category)
    }

    /// Create `count` generated items under every page and give each an
    /// attribute set. Items are leaves, so this ends the chain.
    pub fn items(self) -> Result<Vec<Attributes>, StoreError> {
        let mut items = self.dispatch(ChildKind::Item)?;
        items.attributes(&Attributes::new())
    }

    /// Merge a generated attribute set onto every page.
    ///
    /// Each set is generated with `options` and the page name as overrides;
    /// the `name` key is dropped before merging since the page document already
    /// records its name. Returns the merged set of each page.
    pub fn attributes(&mut self, options: &Attributes) -> Result<Vec<Attributes>, StoreError> {
        let mut results = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let overrides = options.merge(&Attributes::from([("name", page.name())]));
            let attributes = self
                .fixtures
                .item_attributes(&overrides)
                .without(&["name"]);
            page.add_attributes(&attributes)?;
            results.push(attributes);
        }
        Ok(results)
    }

    fn dispatch(self, kind: ChildKind) -> Result<Generator<'f>, StoreError> {
        let Generator {
            pages,
            count,
            fixtures,
        } = self;

        let mut sub_pages = Vec::with_capacity(pages.len() * count);
        for page in &pages {
            for _ in 0..count {
                let child = match kind {
                    ChildKind::Category => page.category(&fixtures.category_name())?,
                    ChildKind::Item => page.item(&fixtures.item_name())?,
                };
                sub_pages.push(child);
            }
        }

        info!(
            kind = ?kind,
            pages = pages.len(),
            count,
            created = sub_pages.len(),
            "Generated store nodes"
        );
        Ok(Generator::new(sub_pages, 1, fixtures))
    }
}
