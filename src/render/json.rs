//! JSON rendering for paragraph trees.

use std::borrow::Borrow;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Paragraph, ParagraphTree};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialized form of a paragraph; `children` is omitted for flat lists.
#[derive(Serialize)]
struct ParagraphJson<'a> {
    title: &'a str,
    level: i32,
    start_page_number: i32,
    end_page_number: i32,
    position: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<ParagraphJson<'a>>>,
}

impl<'a> ParagraphJson<'a> {
    fn flat(paragraph: &'a Paragraph) -> Self {
        Self {
            title: paragraph.title(),
            level: paragraph.level(),
            start_page_number: paragraph.start_page_number(),
            end_page_number: paragraph.end_page_number(),
            position: paragraph.position(),
            children: None,
        }
    }

    fn nested(tree: &'a ParagraphTree, paragraph: &'a Paragraph) -> Self {
        let children = tree
            .children(paragraph)
            .map(|child| Self::nested(tree, child))
            .collect();
        Self {
            children: Some(children),
            ..Self::flat(paragraph)
        }
    }
}

fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Convert a whole tree to nested JSON, starting at the root.
pub fn to_json(tree: &ParagraphTree, format: JsonFormat) -> Result<String> {
    serialize(&ParagraphJson::nested(tree, tree.root()), format)
}

/// Convert a query result (flattened or level-projected) to a JSON array.
pub fn paragraphs_to_json<P: Borrow<Paragraph>>(
    paragraphs: &[P],
    format: JsonFormat,
) -> Result<String> {
    let items: Vec<_> = paragraphs
        .iter()
        .map(|p| ParagraphJson::flat(p.borrow()))
        .collect();
    serialize(&items, format)
}
