//! Page-number lookup.

use std::collections::HashMap;
use std::hash::Hash;

/// Maps page handles to their 1-based position in the document.
///
/// Equivalent to scanning the ordered page list for the first equal
/// handle, computed once per build pass.
#[derive(Debug)]
pub(crate) struct PageIndex<P> {
    numbers: HashMap<P, usize>,
}

impl<P: Eq + Hash> PageIndex<P> {
    pub(crate) fn new(pages: Vec<P>) -> Self {
        let mut numbers = HashMap::with_capacity(pages.len());
        for (index, page) in pages.into_iter().enumerate() {
            numbers.entry(page).or_insert(index + 1);
        }
        Self { numbers }
    }

    /// 1-based page number of `page`, `None` if it is not part of the document.
    pub(crate) fn number_of(&self, page: &P) -> Option<usize> {
        self.numbers.get(page).copied()
    }
}
