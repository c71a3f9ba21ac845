//! Outline source abstraction layer.
//!
//! Provides a trait-based interface for walking a document outline,
//! isolating the concrete document library (lopdf) from the tree
//! construction logic.

mod memory;
mod pdf;

pub use memory::{MemoryNodeId, MemoryOutline};
pub use pdf::{LopdfSource, OutlineNodeId};

use std::hash::Hash;

use crate::error::Result;
use crate::model::Destination;

/// Navigation capability over a document's outline (bookmark) entries.
///
/// Outline entries form a sibling-linked tree: every node knows its first
/// and last child and its next sibling. Nodes and pages are opaque handles
/// owned by the implementation.
pub trait OutlineSource {
    /// Handle of an outline node.
    type Node: Clone + Eq + Hash + std::fmt::Debug;

    /// Handle of a document page.
    type Page: Clone + Eq + Hash;

    /// Total number of pages in the document.
    fn page_count(&self) -> u32;

    /// Entry point of the outline, `None` when the document has no bookmarks.
    fn outline_root(&self) -> Result<Option<Self::Node>>;

    /// First nested entry of `node`.
    fn first_child(&self, node: &Self::Node) -> Result<Option<Self::Node>>;

    /// Last nested entry of `node`.
    fn last_child(&self, node: &Self::Node) -> Result<Option<Self::Node>>;

    /// Entry following `node` at the same level.
    fn next_sibling(&self, node: &Self::Node) -> Result<Option<Self::Node>>;

    /// Display title of `node`.
    fn title(&self, node: &Self::Node) -> Result<String>;

    /// Destination record of `node`, if it has one.
    fn destination(&self, node: &Self::Node) -> Result<Option<Destination>>;

    /// Page that `node` points to, `None` if it cannot be resolved.
    fn resolve_page(&self, node: &Self::Node) -> Result<Option<Self::Page>>;

    /// All pages of the document in order.
    fn pages(&self) -> Result<Vec<Self::Page>>;
}

/// Decode a PDF text string (UTF-16BE with BOM, UTF-8, or Latin-1).
pub fn decode_text_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|c| {
                if c.len() == 2 {
                    Some(u16::from_be_bytes([c[0], c[1]]))
                } else {
                    None
                }
            })
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    bytes.iter().map(|&b| b as char).collect()
}
