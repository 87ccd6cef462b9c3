//! Store Node
//!
//! A node addresses one backing document. It holds no children: every
//! traversal re-reads the document and derives fresh child nodes, and every
//! mutation is a full read, merge, write cycle on that one document. Nothing
//! is cached between calls and concurrent writers to the same document can
//! lose updates.

use crate::attributes::Attributes;
use crate::error::StoreError;
use crate::fixtures::Fixtures;
use crate::generator::Generator;
use crate::markup::{self, Content, DOC_EXTENSION, INDEX_DOCUMENT};
use crate::sets;
use crate::store::{remove_tree, short_name};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use url::Url;

/// `file://` URI of an absolute path.
pub(crate) fn file_uri(path: &Path) -> Result<String, StoreError> {
    Url::from_file_path(path)
        .map(|url| url.to_string())
        .map_err(|_| StoreError::InvalidPath(format!("Not an absolute path: {:?}", path)))
}

/// One root, category, or item of a dummy store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreNode {
    path: PathBuf,
    name: String,
}

impl StoreNode {
    /// Address the document at `path`, writing an empty document named `name`
    /// if none exists yet.
    pub fn open<P: Into<PathBuf>>(path: P, name: impl Into<String>) -> Result<Self, StoreError> {
        let node = Self {
            path: path.into(),
            name: name.into(),
        };
        if !node.path.exists() {
            node.write(&Content::empty(node.name.clone()))?;
        }
        Ok(node)
    }

    /// Display name this node was addressed with.
    ///
    /// Children listed by [`categories`](Self::categories) or [`items`](Self::items)
    /// only know their short name; [`title`](Self::title) reads the full one.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn uri(&self) -> Result<String, StoreError> {
        file_uri(&self.path)
    }

    /// Name recorded in the node's own document.
    pub fn title(&self) -> Result<String, StoreError> {
        Ok(self.read()?.name)
    }

    pub fn categories(&self) -> Result<Vec<StoreNode>, StoreError> {
        let content = self.read()?;
        content
            .categories
            .into_iter()
            .map(|category| StoreNode::open(self.category_path(&category), category))
            .collect()
    }

    /// Add a child category (no-op if already listed) and address it.
    pub fn category(&self, display_name: &str) -> Result<StoreNode, StoreError> {
        let short = short_name(display_name);
        self.add(std::slice::from_ref(&short), &[], &Attributes::new())?;
        StoreNode::open(self.category_path(&short), display_name)
    }

    /// Unlist a child category and delete its whole subtree.
    pub fn remove_category(&self, display_name: &str) -> Result<(), StoreError> {
        let short = short_name(display_name);
        self.remove(std::slice::from_ref(&short), &[], &[] as &[&str])?;
        remove_tree(&self.dir().join(&short))
    }

    pub fn items(&self) -> Result<Vec<StoreNode>, StoreError> {
        let content = self.read()?;
        content
            .items
            .into_iter()
            .map(|item| StoreNode::open(self.item_path(&item), item))
            .collect()
    }

    /// Add a child item (no-op if already listed) and address it.
    pub fn item(&self, display_name: &str) -> Result<StoreNode, StoreError> {
        let short = short_name(display_name);
        self.add(&[], std::slice::from_ref(&short), &Attributes::new())?;
        StoreNode::open(self.item_path(&short), display_name)
    }

    /// Unlist a child item and delete its document.
    pub fn remove_item(&self, display_name: &str) -> Result<(), StoreError> {
        let short = short_name(display_name);
        self.remove(&[], std::slice::from_ref(&short), &[] as &[&str])?;
        remove_tree(&self.item_path(&short))
    }

    pub fn attributes(&self) -> Result<Attributes, StoreError> {
        Ok(self.read()?.attributes)
    }

    /// Merge `values` into the node's attributes, `values` winning on collisions.
    ///
    /// Nothing is written when every pair is already present.
    pub fn add_attributes(&self, values: &Attributes) -> Result<(), StoreError> {
        self.add(&[], &[], values)
    }

    pub fn remove_attributes<S: AsRef<str>>(&self, names: &[S]) -> Result<(), StoreError> {
        self.remove(&[], &[], names)
    }

    /// Start a tree generator fanning out from this node.
    pub fn generate<'f>(&self, count: usize, fixtures: &'f mut dyn Fixtures) -> Generator<'f> {
        Generator::new(vec![self.clone()], count, fixtures)
    }

    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    fn category_path(&self, short_name: &str) -> PathBuf {
        self.dir().join(short_name).join(INDEX_DOCUMENT)
    }

    fn item_path(&self, short_name: &str) -> PathBuf {
        self.dir().join(format!("{}.{}", short_name, DOC_EXTENSION))
    }

    fn add(
        &self,
        categories: &[String],
        items: &[String],
        attributes: &Attributes,
    ) -> Result<(), StoreError> {
        let current = self.read()?;
        if sets::contains_all(&current.categories, categories)
            && sets::contains_all(&current.items, items)
            && current.attributes.contains_all(attributes)
        {
            trace!(path = %self.path.display(), "Already present, skipping write");
            return Ok(());
        }

        self.write(&Content {
            categories: sets::union(&current.categories, categories),
            items: sets::union(&current.items, items),
            attributes: current.attributes.merge(attributes),
            name: current.name,
        })
    }

    fn remove<S: AsRef<str>>(
        &self,
        categories: &[String],
        items: &[String],
        attribute_names: &[S],
    ) -> Result<(), StoreError> {
        let current = self.read()?;
        self.write(&Content {
            categories: sets::without(&current.categories, categories),
            items: sets::without(&current.items, items),
            attributes: current.attributes.without(attribute_names),
            name: current.name,
        })
    }

    fn read(&self) -> Result<Content, StoreError> {
        let text =
            fs::read_to_string(&self.path).map_err(|e| StoreError::from_read(&self.path, e))?;
        trace!(path = %self.path.display(), bytes = text.len(), "Read store document");
        Ok(markup::decode(text.lines()))
    }

    fn write(&self, content: &Content) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, markup::encode(content).join("\n"))?;
        debug!(
            path = %self.path.display(),
            categories = content.categories.len(),
            items = content.items.len(),
            attributes = content.attributes.len(),
            "Wrote store document"
        );
        Ok(())
    }
}
