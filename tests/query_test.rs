//! Integration tests for tree queries and rendering.

use std::borrow::Cow;

use pdfoutline::render::{paragraphs_to_json, to_json};
use pdfoutline::{
    flatten, paragraphs_by_level, JsonFormat, MemoryOutline, Paragraph, ParagraphTree,
};

fn build(outline: &MemoryOutline) -> ParagraphTree {
    pdfoutline::build(outline).unwrap()
}

fn pages(paragraphs: &[Cow<'_, Paragraph>]) -> Vec<(String, i32, i32)> {
    paragraphs
        .iter()
        .map(|p| {
            (
                p.title().to_string(),
                p.start_page_number(),
                p.end_page_number(),
            )
        })
        .collect()
}

#[test]
fn test_two_top_level_entries() {
    let mut outline = MemoryOutline::new(10);
    outline.add_entry(None, "Intro", Some(1));
    outline.add_entry(None, "Chapter 1", Some(3));
    let tree = build(&outline);

    assert_eq!(tree.root().children().len(), 2);
    let all = flatten(&tree);
    assert_eq!(all[0].end_page_number(), 3);
    assert_eq!(all[1].end_page_number(), 10);
}

#[test]
fn test_single_chapter_with_section() {
    let mut outline = MemoryOutline::new(10);
    let chapter = outline.add_entry(None, "Chapter 1", Some(3));
    outline.add_entry(Some(chapter), "Section 1.1", Some(4));
    let tree = build(&outline);

    let all = tree.flatten();
    assert_eq!(all[0].end_page_number(), 4);
    assert_eq!(all[1].end_page_number(), 10);
    assert_eq!(all[1].level(), 1);
    assert_eq!(tree.parent(all[1]).map(|p| p.title()), Some("Chapter 1"));
}

#[test]
fn test_inter_level_text_gap_entries() {
    let mut outline = MemoryOutline::new(10);
    let chapter = outline.add_entry(None, "Chapter", Some(3));
    outline.add_entry(Some(chapter), "Section A", Some(5));
    outline.add_entry(Some(chapter), "Section B", Some(7));
    let tree = build(&outline);

    assert_eq!(
        pages(&tree.paragraphs_by_level(0, true)),
        vec![("root".to_string(), 1, 3), ("Chapter".to_string(), 3, 5)]
    );

    let sections = tree.paragraphs_by_level(1, true);
    assert_eq!(
        pages(&sections),
        vec![
            ("root".to_string(), 1, 3),
            ("Chapter".to_string(), 3, 5),
            ("Section A".to_string(), 5, 7),
            ("Section B".to_string(), 7, 10),
        ]
    );
    assert!(matches!(sections[1], Cow::Owned(_)));
    assert!(matches!(sections[2], Cow::Borrowed(_)));
}

#[test]
fn test_by_level_from_inner_paragraph() {
    let mut outline = MemoryOutline::new(20);
    let part = outline.add_entry(None, "Part", Some(1));
    let chapter = outline.add_entry(Some(part), "Chapter", Some(2));
    outline.add_entry(Some(chapter), "Section", Some(4));
    outline.add_entry(None, "Other Part", Some(10));
    let tree = build(&outline);

    let part = tree.first_child(tree.root()).unwrap();
    let sections = paragraphs_by_level(&tree, part, 2, false);
    assert_eq!(pages(&sections), vec![("Section".to_string(), 4, 20)]);
}

#[test]
fn test_unresolved_destination() {
    let mut outline = MemoryOutline::new(6);
    outline.add_entry(None, "Nowhere", Some(42));
    outline.add_entry(None, "Somewhere", Some(2));
    let tree = build(&outline);

    let all = tree.flatten();
    assert_eq!(all[0].start_page_number(), -1);
    assert_eq!(all[0].end_page_number(), 2);
    assert!(!all[0].has_resolved_pages());
    assert_eq!(tree.unresolved_count(), 1);
}

#[test]
fn test_tree_json() {
    let mut outline = MemoryOutline::new(4);
    let chapter = outline.add_entry(None, "Chapter", Some(1));
    outline.add_entry(Some(chapter), "Section", Some(2));
    let tree = build(&outline);

    let json = to_json(&tree, JsonFormat::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["title"], "root");
    assert_eq!(value["children"][0]["title"], "Chapter");
    assert_eq!(value["children"][0]["end_page_number"], 2);
    assert_eq!(value["children"][0]["children"][0]["title"], "Section");
    assert_eq!(value["children"][0]["children"][0]["end_page_number"], 4);
}

#[test]
fn test_level_json_is_flat() {
    let mut outline = MemoryOutline::new(4);
    let chapter = outline.add_entry(None, "Chapter", Some(1));
    outline.add_entry(Some(chapter), "Section", Some(2));
    let tree = build(&outline);

    let json = paragraphs_to_json(&tree.paragraphs_by_level(1, true), JsonFormat::Pretty).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|item| item.get("children").is_none()));
    assert_eq!(items[2]["title"], "Section");
}
