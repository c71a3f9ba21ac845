//! Benchmarks for outline tree construction and queries.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic outlines: `chapters` top-level entries,
//! each with `sections` children, spread evenly over the document.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lopdf::{dictionary, Document, Object, ObjectId};
use pdfoutline::{JsonFormat, MemoryOutline, ParagraphTree};

const SECTIONS: usize = 8;

/// In-memory outline with `chapters * SECTIONS` sections, one page each.
fn create_memory_outline(chapters: usize) -> MemoryOutline {
    let page_count = (chapters * (SECTIONS + 1)) as u32;
    let mut outline = MemoryOutline::new(page_count);
    let mut page = 1;
    for c in 0..chapters {
        let chapter = outline.add_entry(None, format!("Chapter {}", c + 1), Some(page));
        page += 1;
        for s in 0..SECTIONS {
            outline.add_entry(Some(chapter), format!("Section {}.{}", c + 1, s + 1), Some(page));
            page += 1;
        }
    }
    outline
}

/// Serialized PDF with the same outline shape as [`create_memory_outline`].
fn create_test_pdf(chapters: usize) -> Vec<u8> {
    let page_count = chapters * (SECTIONS + 1);
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let pages: Vec<ObjectId> = (0..page_count)
        .map(|_| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
            })
        })
        .collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => pages.iter().map(|id| Object::Reference(*id)).collect::<Vec<_>>(),
            "Count" => page_count as i64,
        }),
    );

    let outlines_id = doc.new_object_id();
    let chapter_ids: Vec<ObjectId> = (0..chapters).map(|_| doc.new_object_id()).collect();
    let mut page = 0;
    for (c, chapter_id) in chapter_ids.iter().enumerate() {
        let mut chapter = dictionary! {
            "Title" => Object::string_literal(format!("Chapter {}", c + 1)),
            "Parent" => outlines_id,
            "Dest" => vec![Object::Reference(pages[page]), "Fit".into()],
        };
        page += 1;
        if let Some(next) = chapter_ids.get(c + 1) {
            chapter.set("Next", *next);
        }

        let section_ids: Vec<ObjectId> = (0..SECTIONS).map(|_| doc.new_object_id()).collect();
        for (s, section_id) in section_ids.iter().enumerate() {
            let mut section = dictionary! {
                "Title" => Object::string_literal(format!("Section {}.{}", c + 1, s + 1)),
                "Parent" => *chapter_id,
                "Dest" => vec![
                    Object::Reference(pages[page]),
                    "XYZ".into(),
                    Object::Integer(0),
                    Object::Integer(720),
                    Object::Null,
                ],
            };
            page += 1;
            if let Some(next) = section_ids.get(s + 1) {
                section.set("Next", *next);
            }
            doc.objects.insert(*section_id, Object::Dictionary(section));
        }
        chapter.set("First", section_ids[0]);
        chapter.set("Last", section_ids[SECTIONS - 1]);
        doc.objects.insert(*chapter_id, Object::Dictionary(chapter));
    }
    doc.objects.insert(
        outlines_id,
        Object::Dictionary(dictionary! {
            "Type" => "Outlines",
            "First" => chapter_ids[0],
            "Last" => chapter_ids[chapters - 1],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
        "Outlines" => outlines_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Benchmark tree construction from an in-memory outline.
fn bench_memory_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_build");

    for chapters in [10, 100, 1000].iter() {
        let outline = create_memory_outline(*chapters);

        group.bench_function(format!("{}_chapters", chapters), |b| {
            b.iter(|| pdfoutline::build(black_box(&outline)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark loading a PDF and building its tree.
fn bench_pdf_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdf_build");

    for chapters in [10, 100].iter() {
        let data = create_test_pdf(*chapters);

        group.bench_function(format!("{}_chapters", chapters), |b| {
            b.iter(|| pdfoutline::build_bytes(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark queries and rendering on a built tree.
fn bench_queries(c: &mut Criterion) {
    let tree: ParagraphTree = pdfoutline::build(&create_memory_outline(1000)).unwrap();

    c.bench_function("flatten", |b| {
        b.iter(|| black_box(&tree).flatten().len());
    });

    c.bench_function("paragraphs_by_level", |b| {
        b.iter(|| black_box(&tree).paragraphs_by_level(1, true).len());
    });

    c.bench_function("to_json", |b| {
        b.iter(|| pdfoutline::render::to_json(black_box(&tree), JsonFormat::Compact).unwrap());
    });
}

criterion_group!(benches, bench_memory_build, bench_pdf_build, bench_queries);
criterion_main!(benches);
