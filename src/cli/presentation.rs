//! CLI presentation: render a walked store as text or JSON.

use crate::attributes::Attributes;
use crate::error::StoreError;
use crate::store::StoreNode;
use serde::Serialize;
use std::fmt::Write;

/// Snapshot of a store subtree, read node by node.
#[derive(Debug, Clone, Serialize)]
pub struct StoreTree {
    pub title: String,
    pub attributes: Attributes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<StoreTree>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<StoreTree>,
}

impl StoreTree {
    pub fn load(node: &StoreNode) -> Result<Self, StoreError> {
        Ok(Self {
            title: node.title()?,
            attributes: node.attributes()?,
            categories: node
                .categories()?
                .iter()
                .map(StoreTree::load)
                .collect::<Result<_, _>>()?,
            items: node
                .items()?
                .iter()
                .map(StoreTree::load)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Indented outline, one node per line, attributes inline.
pub fn format_tree_text(tree: &StoreTree) -> String {
    let mut out = String::new();
    write_text(&mut out, tree, 0, "");
    out
}

fn write_text(out: &mut String, tree: &StoreTree, depth: usize, marker: &str) {
    let _ = write!(out, "{}{}{}", "  ".repeat(depth), marker, tree.title);
    if !tree.attributes.is_empty() {
        let pairs: Vec<String> = tree
            .attributes
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        let _ = write!(out, " [{}]", pairs.join(", "));
    }
    out.push('\n');
    for category in &tree.categories {
        write_text(out, category, depth + 1, "+ ");
    }
    for item in &tree.items {
        write_text(out, item, depth + 1, "- ");
    }
}

pub fn format_tree_json(tree: &StoreTree) -> Result<String, StoreError> {
    serde_json::to_string_pretty(tree)
        .map_err(|e| StoreError::Config(format!("Failed to serialize store tree: {}", e)))
}
