//! # pdfoutline
//!
//! Turn PDF bookmarks into a tree of paragraphs with inferred page spans.
//!
//! A PDF outline only records where each entry *starts*. This library
//! walks the outline and infers where each entry *ends* from the entries
//! around it, producing a [`ParagraphTree`] that can be flattened or
//! projected onto a single nesting level, e.g. to split a document into
//! chapter-sized pieces.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> pdfoutline::Result<()> {
//!     let tree = pdfoutline::build_file("document.pdf")?;
//!
//!     for paragraph in tree.flatten() {
//!         println!(
//!             "{} [{}..{}]",
//!             paragraph.title(),
//!             paragraph.start_page_number(),
//!             paragraph.end_page_number()
//!         );
//!     }
//!
//!     // Top-level chapters, plus the text preceding them
//!     let chapters = tree.paragraphs_by_level(0, true);
//!     println!("{} chapters", chapters.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Page spans
//!
//! - Start page: the entry's destination page.
//! - End page: the next sibling's start page, else the first child's.
//! - An entry with neither runs to the last page of the document.
//! - Pages that cannot be resolved are reported as `-1`.

pub mod builder;
pub mod error;
pub mod model;
pub mod query;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use builder::{BuildOptions, ErrorMode, OutlineTreeBuilder};
pub use error::{Error, Result};
pub use model::{Destination, Paragraph, ParagraphId, ParagraphTree};
pub use query::{flatten, paragraphs_by_level};
pub use render::JsonFormat;
pub use source::{LopdfSource, MemoryOutline, OutlineSource};

use std::io::Read;
use std::path::Path;

/// Build the paragraph tree of any outline source.
///
/// # Example
///
/// ```
/// use pdfoutline::MemoryOutline;
///
/// let mut outline = MemoryOutline::new(10);
/// outline.add_entry(None, "Intro", Some(1));
/// outline.add_entry(None, "Chapter 1", Some(3));
///
/// let tree = pdfoutline::build(&outline).unwrap();
/// assert_eq!(tree.root().children().len(), 2);
/// ```
pub fn build<S: OutlineSource>(source: &S) -> Result<ParagraphTree> {
    OutlineTreeBuilder::new(source).build()
}

/// Build the paragraph tree of any outline source with custom options.
pub fn build_with_options<S: OutlineSource>(
    source: &S,
    options: BuildOptions,
) -> Result<ParagraphTree> {
    OutlineTreeBuilder::new(source).with_options(options).build()
}

/// Build the paragraph tree of a PDF file.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::build_file;
///
/// let tree = build_file("document.pdf").unwrap();
/// println!("Bookmarks: {}", tree.flatten().len());
/// ```
pub fn build_file<P: AsRef<Path>>(path: P) -> Result<ParagraphTree> {
    build_file_with_options(path, BuildOptions::default())
}

/// Build the paragraph tree of a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::{build_file_with_options, BuildOptions};
///
/// let options = BuildOptions::new().lenient().with_max_depth(16);
/// let tree = build_file_with_options("document.pdf", options).unwrap();
/// ```
pub fn build_file_with_options<P: AsRef<Path>>(
    path: P,
    options: BuildOptions,
) -> Result<ParagraphTree> {
    let source = LopdfSource::open(path)?;
    build_with_options(&source, options)
}

/// Build the paragraph tree of a PDF held in memory.
pub fn build_bytes(data: &[u8]) -> Result<ParagraphTree> {
    build_bytes_with_options(data, BuildOptions::default())
}

/// Build the paragraph tree of a PDF held in memory with custom options.
pub fn build_bytes_with_options(data: &[u8], options: BuildOptions) -> Result<ParagraphTree> {
    let source = LopdfSource::from_bytes(data)?;
    build_with_options(&source, options)
}

/// Build the paragraph tree of a PDF read from `reader`.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::build_reader;
/// use std::fs::File;
///
/// let file = File::open("document.pdf").unwrap();
/// let tree = build_reader(file).unwrap();
/// ```
pub fn build_reader<R: Read>(reader: R) -> Result<ParagraphTree> {
    let source = LopdfSource::from_reader(reader)?;
    build(&source)
}
