//! In-memory outline source.

use crate::error::{Error, Result};
use crate::model::Destination;

use super::OutlineSource;

/// Handle of an entry in a [`MemoryOutline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryNodeId(usize);

#[derive(Debug, Clone)]
struct MemoryEntry {
    title: String,
    page: Option<u32>,
    destination: Option<Destination>,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// An outline assembled in memory.
///
/// Useful when the bookmarks come from somewhere other than a PDF file, or
/// to describe a document outline directly in tests. Pages are identified
/// by their 1-based number; an entry pointing outside `1..=page_count`
/// behaves like a destination on a page the document does not contain.
///
/// # Example
///
/// ```
/// use pdfoutline::MemoryOutline;
///
/// let mut outline = MemoryOutline::new(10);
/// let chapter = outline.add_entry(None, "Chapter 1", Some(3));
/// outline.add_entry(Some(chapter), "Section 1.1", Some(4));
///
/// let tree = pdfoutline::build(&outline).unwrap();
/// assert_eq!(tree.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryOutline {
    page_count: u32,
    has_outline: bool,
    // Index 0 is the outline root; it has no title or destination.
    entries: Vec<MemoryEntry>,
}

impl MemoryOutline {
    /// Create an empty outline for a document with `page_count` pages.
    pub fn new(page_count: u32) -> Self {
        Self {
            page_count,
            has_outline: true,
            entries: vec![MemoryEntry {
                title: String::new(),
                page: None,
                destination: None,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Create a source for a document that has no outline at all.
    pub fn without_outline(page_count: u32) -> Self {
        Self {
            has_outline: false,
            ..Self::new(page_count)
        }
    }

    /// Append an entry as the last child of `parent` (top level when `None`).
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this outline.
    pub fn add_entry(
        &mut self,
        parent: Option<MemoryNodeId>,
        title: impl Into<String>,
        page: Option<u32>,
    ) -> MemoryNodeId {
        let destination = page.map(|_| Destination::Fit);
        self.push(parent, title.into(), page, destination)
    }

    /// Append an entry with an explicit destination record.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this outline.
    pub fn add_entry_with_destination(
        &mut self,
        parent: Option<MemoryNodeId>,
        title: impl Into<String>,
        page: Option<u32>,
        destination: Destination,
    ) -> MemoryNodeId {
        self.push(parent, title.into(), page, Some(destination))
    }

    /// Number of entries, excluding the outline root.
    pub fn len(&self) -> usize {
        self.entries.len() - 1
    }

    /// Check if the outline has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(
        &mut self,
        parent: Option<MemoryNodeId>,
        title: String,
        page: Option<u32>,
        destination: Option<Destination>,
    ) -> MemoryNodeId {
        let parent = parent.map_or(0, |p| p.0);
        assert!(parent < self.entries.len(), "unknown parent entry");

        let id = self.entries.len();
        self.entries.push(MemoryEntry {
            title,
            page,
            destination,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.entries[parent].children.push(id);
        MemoryNodeId(id)
    }

    fn entry(&self, node: &MemoryNodeId) -> Result<&MemoryEntry> {
        self.entries
            .get(node.0)
            .ok_or_else(|| Error::MissingObject(format!("outline entry {}", node.0)))
    }
}

impl OutlineSource for MemoryOutline {
    type Node = MemoryNodeId;
    type Page = u32;

    fn page_count(&self) -> u32 {
        self.page_count
    }

    fn outline_root(&self) -> Result<Option<MemoryNodeId>> {
        Ok(self.has_outline.then_some(MemoryNodeId(0)))
    }

    fn first_child(&self, node: &MemoryNodeId) -> Result<Option<MemoryNodeId>> {
        Ok(self.entry(node)?.children.first().copied().map(MemoryNodeId))
    }

    fn last_child(&self, node: &MemoryNodeId) -> Result<Option<MemoryNodeId>> {
        Ok(self.entry(node)?.children.last().copied().map(MemoryNodeId))
    }

    fn next_sibling(&self, node: &MemoryNodeId) -> Result<Option<MemoryNodeId>> {
        let Some(parent) = self.entry(node)?.parent else {
            return Ok(None);
        };
        let siblings = &self.entries[parent].children;
        let next = siblings
            .iter()
            .position(|&id| id == node.0)
            .and_then(|i| siblings.get(i + 1))
            .copied()
            .map(MemoryNodeId);
        Ok(next)
    }

    fn title(&self, node: &MemoryNodeId) -> Result<String> {
        Ok(self.entry(node)?.title.clone())
    }

    fn destination(&self, node: &MemoryNodeId) -> Result<Option<Destination>> {
        Ok(self.entry(node)?.destination)
    }

    fn resolve_page(&self, node: &MemoryNodeId) -> Result<Option<u32>> {
        Ok(self.entry(node)?.page)
    }

    fn pages(&self) -> Result<Vec<u32>> {
        Ok((1..=self.page_count).collect())
    }
}
