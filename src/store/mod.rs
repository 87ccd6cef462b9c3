//! Dummy Store
//!
//! A synthetic store is a tree of categories and items laid out on disk as
//! static HTML pages under a configured root directory:
//!
//! ```text
//! <root>/<store name>/index.html            root node
//! <dir>/<category short name>/index.html    category node
//! <dir>/<item short name>.html              item node
//! ```
//!
//! [`DummyStore`] resolves store names against the root and performs the
//! administrative wipes; [`StoreNode`] reads and mutates a single node.

pub mod node;

pub use node::StoreNode;

use crate::config::DummyStoreConfig;
use crate::error::StoreError;
use crate::markup::{DOC_EXTENSION, INDEX_DOCUMENT};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Number of characters of a display name kept in its path segment.
pub const SHORT_NAME_LEN: usize = 21;

/// Derive the path segment of a child from its display name.
///
/// Only truncates. Two display names sharing their first [`SHORT_NAME_LEN`]
/// characters map to the same child and overwrite each other.
pub fn short_name(display_name: &str) -> String {
    display_name.chars().take(SHORT_NAME_LEN).collect()
}

/// Factory for the stores living under one root directory.
#[derive(Debug, Clone)]
pub struct DummyStore {
    root_dir: PathBuf,
}

impl DummyStore {
    /// Build a factory from configuration.
    ///
    /// Fails with [`StoreError::NotConfigured`] when no root directory is set.
    pub fn new(config: &DummyStoreConfig) -> Result<Self, StoreError> {
        let root_dir = config.root_dir.as_ref().ok_or(StoreError::NotConfigured)?;
        Self::with_root(root_dir)
    }

    /// Build a factory for an explicit root directory, creating it if needed.
    pub fn with_root<P: AsRef<Path>>(root_dir: P) -> Result<Self, StoreError> {
        let root_dir = root_dir.as_ref();
        fs::create_dir_all(root_dir)?;
        let root_dir = dunce::canonicalize(root_dir).map_err(|e| {
            StoreError::InvalidPath(format!(
                "Failed to canonicalize root directory {:?}: {}",
                root_dir, e
            ))
        })?;
        debug!(root_dir = %root_dir.display(), "Dummy store root resolved");
        Ok(Self { root_dir })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Directory holding everything of one store.
    pub fn store_dir(&self, store_name: &str) -> PathBuf {
        self.root_dir.join(store_name)
    }

    /// Backing document of a store's root node.
    pub fn root_path(&self, store_name: &str) -> PathBuf {
        self.store_dir(store_name).join(INDEX_DOCUMENT)
    }

    /// Open a store's root node, creating its document if absent.
    pub fn open(&self, store_name: &str) -> Result<StoreNode, StoreError> {
        StoreNode::open(self.root_path(store_name), store_name)
    }

    /// `file://` URI of a store's root node. Does not create anything.
    pub fn uri(&self, store_name: &str) -> Result<String, StoreError> {
        node::file_uri(&self.root_path(store_name))
    }

    /// Delete every store under the root.
    pub fn wipe_out(&self) -> Result<(), StoreError> {
        info!(root_dir = %self.root_dir.display(), "Wiping out dummy store root");
        remove_tree(&self.root_dir)
    }

    /// Delete one store and all of its nodes.
    pub fn wipe_out_store(&self, store_name: &str) -> Result<(), StoreError> {
        let store_dir = self.store_dir(store_name);
        info!(store = store_name, path = %store_dir.display(), "Wiping out dummy store");
        remove_tree(&store_dir)
    }

    /// Every backing document of a store, sorted by path.
    pub fn documents(&self, store_name: &str) -> Result<Vec<PathBuf>, StoreError> {
        let store_dir = self.store_dir(store_name);
        if !store_dir.exists() {
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();
        for entry in WalkDir::new(&store_dir).follow_links(false) {
            let entry = entry.map_err(|e| {
                StoreError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Failed to walk store directory: {}", e),
                ))
            })?;
            let is_document = entry.file_type().is_file()
                && entry.path().extension().and_then(|ext| ext.to_str()) == Some(DOC_EXTENSION);
            if is_document {
                documents.push(entry.into_path());
            }
        }
        documents.sort();
        Ok(documents)
    }
}

/// `rm -rf`: delete a file or directory tree; a missing path is not an error.
pub(crate) fn remove_tree(path: &Path) -> Result<(), StoreError> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };
    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match result {
        Ok(()) => {
            debug!(path = %path.display(), "Removed");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
