//! Traversals over a built paragraph tree.
//!
//! Both queries walk the tree depth-first in outline order and never
//! modify it, so they can run concurrently on a shared tree and always
//! return the same sequence for the same arguments.

use std::borrow::Cow;

use crate::model::{Paragraph, ParagraphTree};

/// All paragraphs below the root in depth-first pre-order.
///
/// The root itself is not included.
pub fn flatten(tree: &ParagraphTree) -> Vec<&Paragraph> {
    let mut paragraphs = Vec::with_capacity(tree.len().saturating_sub(1));
    for child in tree.children(tree.root()) {
        flatten_into(tree, child, &mut paragraphs);
    }
    paragraphs
}

fn flatten_into<'a>(
    tree: &'a ParagraphTree,
    current: &'a Paragraph,
    out: &mut Vec<&'a Paragraph>,
) {
    out.push(current);
    for child in tree.children(current) {
        flatten_into(tree, child, out);
    }
}

/// Paragraphs at `level` found under `paragraph`, in outline order.
///
/// A paragraph shallower than `level` contributes its descendants. When
/// `inter_level_text` is set it also contributes, ahead of them, a
/// synthetic copy of itself spanning from its own start page to its first
/// child's start page, which covers the text that precedes the first
/// sub-entry. Synthetic entries are returned as [`Cow::Owned`] and have
/// no children; paragraphs from the tree are [`Cow::Borrowed`].
///
/// A paragraph already deeper than `level`, or a childless one above it,
/// contributes nothing.
pub fn paragraphs_by_level<'a>(
    tree: &'a ParagraphTree,
    paragraph: &'a Paragraph,
    level: i32,
    inter_level_text: bool,
) -> Vec<Cow<'a, Paragraph>> {
    let mut result = Vec::new();
    collect_by_level(tree, paragraph, level, inter_level_text, &mut result);
    result
}

fn collect_by_level<'a>(
    tree: &'a ParagraphTree,
    paragraph: &'a Paragraph,
    level: i32,
    inter_level_text: bool,
    out: &mut Vec<Cow<'a, Paragraph>>,
) {
    if paragraph.level() < level {
        let Some(first_child) = tree.first_child(paragraph) else {
            return;
        };

        if inter_level_text {
            out.push(Cow::Owned(Paragraph::new(
                paragraph.parent(),
                paragraph.title(),
                paragraph.level(),
                paragraph.start_page_number(),
                first_child.start_page_number(),
                paragraph.position(),
            )));
        }

        for child in tree.children(paragraph) {
            collect_by_level(tree, child, level, inter_level_text, out);
        }
    } else if paragraph.level() == level {
        out.push(Cow::Borrowed(paragraph));
    }
}

impl ParagraphTree {
    /// All non-root paragraphs in depth-first pre-order. See [`flatten`].
    pub fn flatten(&self) -> Vec<&Paragraph> {
        flatten(self)
    }

    /// Paragraphs at `level` under the root. See [`paragraphs_by_level`].
    pub fn paragraphs_by_level(
        &self,
        level: i32,
        inter_level_text: bool,
    ) -> Vec<Cow<'_, Paragraph>> {
        paragraphs_by_level(self, self.root(), level, inter_level_text)
    }
}
