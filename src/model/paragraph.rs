//! Paragraph nodes of the outline tree.

use serde::Serialize;
use std::fmt;

/// Handle of a paragraph inside its [`ParagraphTree`](super::ParagraphTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ParagraphId(pub(crate) usize);

impl ParagraphId {
    /// Handle of the synthetic root paragraph.
    pub const ROOT: ParagraphId = ParagraphId(0);
}

/// One outline entry together with its inferred page span.
///
/// Page numbers are 1-based; `-1` means the page could not be resolved.
/// The end page is the start page of whatever bounds this entry in the
/// outline (next sibling, else first child), so it is an exclusive
/// boundary in most cases.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    parent: Option<ParagraphId>,
    title: String,
    level: i32,
    start_page_number: i32,
    end_page_number: i32,
    position: i32,
    children: Vec<ParagraphId>,
}

impl Paragraph {
    /// Create a paragraph without children.
    pub(crate) fn new(
        parent: Option<ParagraphId>,
        title: impl Into<String>,
        level: i32,
        start_page_number: i32,
        end_page_number: i32,
        position: i32,
    ) -> Self {
        Self {
            parent,
            title: title.into(),
            level,
            start_page_number,
            end_page_number,
            position,
            children: Vec::new(),
        }
    }

    pub(crate) fn push_child(&mut self, child: ParagraphId) {
        self.children.push(child);
    }

    /// Parent handle, `None` for the root.
    pub fn parent(&self) -> Option<ParagraphId> {
        self.parent
    }

    /// Title as it appears in the document outline.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Nesting level: -1 for the root, 0 for top-level entries.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Page where this paragraph begins (1-based, `-1` if unresolved).
    pub fn start_page_number(&self) -> i32 {
        self.start_page_number
    }

    /// Page where this paragraph ends (1-based, `-1` if unresolved).
    pub fn end_page_number(&self) -> i32 {
        self.end_page_number
    }

    /// Vertical offset of the entry on its start page, 0 when unknown.
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Child handles in outline order.
    pub fn children(&self) -> &[ParagraphId] {
        &self.children
    }

    /// Check if this paragraph has sub-paragraphs.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check if this is the synthetic root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Check if both ends of the page span were resolved.
    pub fn has_resolved_pages(&self) -> bool {
        self.start_page_number > 0 && self.end_page_number > 0
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = if self.level < 0 {
            String::new()
        } else {
            " ".repeat(self.level as usize * 2)
        };

        write!(
            f,
            "{} {}) {} [{},{}], children = {}, pos = {}",
            indent,
            self.level,
            self.title,
            self.start_page_number,
            self.end_page_number,
            self.children.len(),
            self.position
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_root() {
        let root = Paragraph::new(None, "root", -1, 1, 10, 0);
        assert_eq!(root.to_string(), " -1) root [1,10], children = 0, pos = 0");
        assert!(root.is_root());
    }

    #[test]
    fn test_display_indents_by_level() {
        let mut p = Paragraph::new(Some(ParagraphId::ROOT), "Section 1.1", 1, 4, 10, 700);
        p.push_child(ParagraphId(5));
        assert_eq!(
            p.to_string(),
            "   1) Section 1.1 [4,10], children = 1, pos = 700"
        );
        assert!(p.has_children());
    }

    #[test]
    fn test_unresolved_pages() {
        let p = Paragraph::new(Some(ParagraphId::ROOT), "Lost", 0, -1, 3, 0);
        assert!(!p.has_resolved_pages());
    }

    #[test]
    fn test_serialize() {
        let mut p = Paragraph::new(Some(ParagraphId::ROOT), "Chapter 1", 0, 3, 9, 612);
        p.push_child(ParagraphId(2));
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["parent"], 0);
        assert_eq!(value["title"], "Chapter 1");
        assert_eq!(value["end_page_number"], 9);
        assert_eq!(value["children"], serde_json::json!([2]));
    }
}
