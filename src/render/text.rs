//! Plain text rendering for paragraph trees.

use crate::model::{Paragraph, ParagraphTree};

/// Render the tree as an indented listing, one paragraph per line.
///
/// The root comes first, followed by every paragraph in depth-first
/// order. Each line uses the [`Display`](std::fmt::Display) form of
/// [`Paragraph`].
pub fn to_text(tree: &ParagraphTree) -> String {
    let mut lines = vec![tree.root().to_string()];
    lines.extend(tree.flatten().into_iter().map(Paragraph::to_string));
    lines.join("\n")
}
