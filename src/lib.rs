//! Dummy Store: synthetic file-backed store trees
//!
//! Builds trees of categories and items as static HTML pages on disk, addressable
//! by `file://` URIs, to exercise store-browsing clients under test. Nodes are
//! read and rewritten on every access; the generator fans nodes out
//! combinatorially for load and correctness testing.

pub mod attributes;
pub mod cli;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod generator;
pub mod logging;
pub mod markup;
pub mod sets;
pub mod store;
