//! Outline tree model.
//!
//! A [`ParagraphTree`] holds one [`Paragraph`] per outline entry plus a
//! synthetic root spanning the whole document. Each paragraph records the
//! page span inferred for its entry.

mod destination;
mod paragraph;
mod tree;

pub use destination::Destination;
pub use paragraph::{Paragraph, ParagraphId};
pub use tree::{Ancestors, ParagraphTree};

pub(crate) use tree::TreeBuilder;
