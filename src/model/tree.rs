//! Arena-backed paragraph tree.

use super::{Paragraph, ParagraphId};

/// Immutable tree of paragraphs rooted at a synthetic `root` entry.
///
/// Paragraphs live in a flat arena and refer to each other through
/// [`ParagraphId`] handles. The tree is frozen once built, so it can be
/// shared between threads for read-only traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphTree {
    paragraphs: Box<[Paragraph]>,
}

impl ParagraphTree {
    /// The synthetic root paragraph.
    pub fn root(&self) -> &Paragraph {
        &self.paragraphs[ParagraphId::ROOT.0]
    }

    /// Look up a paragraph by handle.
    pub fn get(&self, id: ParagraphId) -> Option<&Paragraph> {
        self.paragraphs.get(id.0)
    }

    /// Total number of paragraphs, root included.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.len() <= 1
    }

    /// Number of pages the root spans.
    pub fn page_count(&self) -> i32 {
        self.root().end_page_number()
    }

    /// Children of `paragraph` in outline order.
    pub fn children<'a>(
        &'a self,
        paragraph: &'a Paragraph,
    ) -> impl Iterator<Item = &'a Paragraph> + 'a {
        paragraph
            .children()
            .iter()
            .filter_map(move |id| self.get(*id))
    }

    /// First child of `paragraph`, if any.
    pub fn first_child(&self, paragraph: &Paragraph) -> Option<&Paragraph> {
        paragraph.children().first().and_then(|id| self.get(*id))
    }

    /// Parent of `paragraph`, `None` for the root.
    pub fn parent(&self, paragraph: &Paragraph) -> Option<&Paragraph> {
        paragraph.parent().and_then(|id| self.get(id))
    }

    /// Ancestors of `paragraph`, nearest first, ending with the root.
    pub fn ancestors<'a>(&'a self, paragraph: &'a Paragraph) -> Ancestors<'a> {
        Ancestors {
            tree: self,
            next: self.parent(paragraph),
        }
    }

    /// Deepest level present in the tree (-1 when there is no outline).
    pub fn max_level(&self) -> i32 {
        self.paragraphs
            .iter()
            .map(Paragraph::level)
            .max()
            .unwrap_or(-1)
    }

    /// Number of non-root paragraphs whose span has an unresolved page.
    pub fn unresolved_count(&self) -> usize {
        self.paragraphs
            .iter()
            .skip(1)
            .filter(|p| !p.has_resolved_pages())
            .count()
    }
}

/// Iterator over the ancestors of a paragraph.
pub struct Ancestors<'a> {
    tree: &'a ParagraphTree,
    next: Option<&'a Paragraph>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Paragraph;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Mutable accumulator used while the outline is walked.
#[derive(Debug)]
pub(crate) struct TreeBuilder {
    paragraphs: Vec<Paragraph>,
}

impl TreeBuilder {
    /// Start a tree with the synthetic root spanning the whole document.
    pub(crate) fn new(root_title: &str, page_count: i32) -> Self {
        Self {
            paragraphs: vec![Paragraph::new(None, root_title, -1, 1, page_count, 0)],
        }
    }

    /// Append a paragraph under `parent` and return its handle.
    pub(crate) fn push_child(
        &mut self,
        parent: ParagraphId,
        title: impl Into<String>,
        level: i32,
        start_page_number: i32,
        end_page_number: i32,
        position: i32,
    ) -> ParagraphId {
        let id = ParagraphId(self.paragraphs.len());
        self.paragraphs.push(Paragraph::new(
            Some(parent),
            title,
            level,
            start_page_number,
            end_page_number,
            position,
        ));
        self.paragraphs[parent.0].push_child(id);
        id
    }

    pub(crate) fn freeze(self) -> ParagraphTree {
        ParagraphTree {
            paragraphs: self.paragraphs.into_boxed_slice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParagraphTree {
        let mut builder = TreeBuilder::new("root", 10);
        let chapter = builder.push_child(ParagraphId::ROOT, "Chapter 1", 0, 1, 5, 0);
        builder.push_child(chapter, "Section 1.1", 1, 2, 10, 0);
        builder.push_child(ParagraphId::ROOT, "Chapter 2", 0, 5, 10, 0);
        builder.freeze()
    }

    #[test]
    fn test_root_spans_document() {
        let tree = sample();
        let root = tree.root();
        assert_eq!(root.title(), "root");
        assert_eq!(root.level(), -1);
        assert_eq!(root.start_page_number(), 1);
        assert_eq!(tree.page_count(), 10);
        assert_eq!(tree.len(), 4);
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_children_in_insertion_order() {
        let tree = sample();
        let titles: Vec<_> = tree.children(tree.root()).map(|p| p.title()).collect();
        assert_eq!(titles, vec!["Chapter 1", "Chapter 2"]);
    }

    #[test]
    fn test_ancestors() {
        let tree = sample();
        let chapter = tree.first_child(tree.root()).unwrap();
        let section = tree.first_child(chapter).unwrap();
        let titles: Vec<_> = tree.ancestors(section).map(|p| p.title()).collect();
        assert_eq!(titles, vec!["Chapter 1", "root"]);
        assert_eq!(tree.parent(section).map(|p| p.title()), Some("Chapter 1"));
        assert!(tree.parent(tree.root()).is_none());
    }

    #[test]
    fn test_max_level_and_empty() {
        assert_eq!(sample().max_level(), 1);

        let empty = TreeBuilder::new("root", 3).freeze();
        assert!(empty.is_empty());
        assert_eq!(empty.max_level(), -1);
        assert_eq!(empty.unresolved_count(), 0);
    }
}
