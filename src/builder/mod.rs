//! Paragraph tree construction.
//!
//! Walks an [`OutlineSource`] depth-first and turns every outline entry
//! into a [`Paragraph`](crate::model::Paragraph) whose page span is
//! inferred from the entries around it:
//!
//! - the start page is the entry's own destination page;
//! - the end page is the start page of the next sibling, or of the
//!   entry's first child when it has no resolvable sibling;
//! - an entry with neither neighbour runs to the end of the document.
//!
//! Pages that cannot be found in the document are recorded as `-1`.

mod options;
mod pages;

pub use options::{BuildOptions, ErrorMode, DEFAULT_MAX_DEPTH};

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::model::{ParagraphId, ParagraphTree, TreeBuilder};
use crate::source::OutlineSource;

use pages::PageIndex;

/// Builds a [`ParagraphTree`] from an outline source.
///
/// # Example
///
/// ```
/// use pdfoutline::{BuildOptions, MemoryOutline, OutlineTreeBuilder};
///
/// let mut outline = MemoryOutline::new(10);
/// outline.add_entry(None, "Intro", Some(1));
/// outline.add_entry(None, "Chapter 1", Some(3));
///
/// let tree = OutlineTreeBuilder::new(&outline)
///     .with_options(BuildOptions::new().lenient())
///     .build()
///     .unwrap();
///
/// let intro = tree.first_child(tree.root()).unwrap();
/// assert_eq!(intro.end_page_number(), 3);
/// ```
pub struct OutlineTreeBuilder<'a, S: OutlineSource> {
    source: &'a S,
    options: BuildOptions,
}

impl<'a, S: OutlineSource> OutlineTreeBuilder<'a, S> {
    /// Create a builder over `source` with default options.
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            options: BuildOptions::default(),
        }
    }

    /// Set build options.
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Walk the outline and return the frozen tree.
    ///
    /// Any failure reported by the source aborts the build; no partial
    /// tree is returned.
    pub fn build(&self) -> Result<ParagraphTree> {
        let page_count = self.source.page_count() as i32;
        let mut tree = TreeBuilder::new(&self.options.root_title, page_count);

        match self.source.outline_root()? {
            Some(outline) => {
                let mut pass = BuildPass {
                    source: self.source,
                    options: &self.options,
                    pages: PageIndex::new(self.source.pages()?),
                    visited: HashSet::new(),
                    page_count,
                };
                pass.build_outline(&mut tree, ParagraphId::ROOT, &outline, 0)?;
            }
            None => log::debug!("Document has no outline"),
        }

        let tree = tree.freeze();
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("{}", tree.root());
            for paragraph in tree.flatten() {
                log::debug!("{}", paragraph);
            }
        }
        Ok(tree)
    }
}

/// State of a single construction pass.
struct BuildPass<'a, S: OutlineSource> {
    source: &'a S,
    options: &'a BuildOptions,
    pages: PageIndex<S::Page>,
    visited: HashSet<S::Node>,
    page_count: i32,
}

impl<S: OutlineSource> BuildPass<'_, S> {
    /// Append one paragraph per sibling entry under `scope`, recursing into
    /// each entry before moving on to the next one.
    fn build_outline(
        &mut self,
        tree: &mut TreeBuilder,
        parent: ParagraphId,
        scope: &S::Node,
        level: i32,
    ) -> Result<()> {
        let mut current = self.link(self.source.first_child(scope))?;
        if current.is_some() && level as usize >= self.options.max_depth {
            self.corrupted(format!(
                "outline nesting exceeds {} levels",
                self.options.max_depth
            ))?;
            return Ok(());
        }

        let mut previous = None;
        while let Some(entry) = current {
            if !self.visited.insert(entry.clone()) {
                self.corrupted(format!("outline entry {:?} is linked more than once", entry))?;
                break;
            }

            let start = self.page_number(Some(&entry))?;
            let next = self.link(self.source.next_sibling(&entry))?;
            let end = self.end_page_number(&entry, next.as_ref())?;
            let position = self
                .source
                .destination(&entry)?
                .and_then(|dest| dest.vertical_offset())
                .map_or(0, |top| top as i32);
            let title = self.source.title(&entry)?;

            let id = tree.push_child(parent, title, level, start, end, position);
            self.build_outline(tree, id, &entry, level + 1)?;

            previous = Some(entry);
            current = next;
        }

        if let (Some(previous), Some(last)) = (previous, self.link(self.source.last_child(scope))?) {
            if previous != last {
                log::warn!(
                    "Sibling chain under {:?} ends at {:?} but the outline declares {:?} as last",
                    scope,
                    previous,
                    last
                );
            }
        }

        Ok(())
    }

    /// End boundary: next sibling's page, else first child's page.
    fn end_page_number(&self, entry: &S::Node, next: Option<&S::Node>) -> Result<i32> {
        let end = self.page_number(next)?;
        if end >= 0 {
            return Ok(end);
        }

        let first_child = self.link(self.source.first_child(entry))?;
        let end = self.page_number(first_child.as_ref())?;
        if end >= 0 {
            return Ok(end);
        }

        if next.is_none() && first_child.is_none() {
            Ok(self.page_count)
        } else {
            Ok(-1)
        }
    }

    /// 1-based page number of `node`'s destination, `-1` if unknown.
    fn page_number(&self, node: Option<&S::Node>) -> Result<i32> {
        let Some(node) = node else {
            return Ok(-1);
        };

        let number = self
            .source
            .resolve_page(node)?
            .and_then(|page| self.pages.number_of(&page));

        match number {
            Some(number) => Ok(number as i32),
            None => {
                log::trace!("No document page matches outline entry {:?}", node);
                Ok(-1)
            }
        }
    }

    /// Treat a broken outline link like a missing one, unless the build is strict.
    fn link(&self, linked: Result<Option<S::Node>>) -> Result<Option<S::Node>> {
        match linked {
            Err(Error::Corrupted(message)) => {
                self.corrupted(message)?;
                Ok(None)
            }
            other => other,
        }
    }

    fn corrupted(&self, message: String) -> Result<()> {
        match self.options.error_mode {
            ErrorMode::Strict => Err(Error::Corrupted(message)),
            ErrorMode::Lenient => {
                log::warn!("Skipping outline branch: {}", message);
                Ok(())
            }
        }
    }
}
