//! The materialized access trace.
//!
//! A [`Trace`] is built once by the loader and then only read. The engine
//! walks it in order; the OPT policy additionally looks ahead from the
//! current position, which is why it is backed by a slice rather than an
//! iterator.

use std::ops::Index;

use super::types::{Access, PageNumber};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    accesses: Vec<Access>,
}

impl Trace {
    pub fn new(accesses: Vec<Access>) -> Self {
        Self { accesses }
    }

    /// Builds an all-read trace from a list of page numbers.
    pub fn from_pages(pages: &[PageNumber]) -> Self {
        pages.iter().copied().map(Access::read).collect()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.accesses.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.accesses.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&Access> {
        self.accesses.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Access> {
        self.accesses.iter()
    }

    pub fn as_slice(&self) -> &[Access] {
        &self.accesses
    }

    /// Highest page number referenced, or `None` for an empty trace.
    pub fn max_page(&self) -> Option<PageNumber> {
        self.accesses.iter().map(|a| a.page).max()
    }

    /// Index of the first access to `page` strictly after `after`.
    ///
    /// Linear in the remaining trace length.
    pub fn next_use(&self, page: PageNumber, after: usize) -> Option<usize> {
        let start = after.checked_add(1)?;
        self.accesses
            .get(start..)?
            .iter()
            .position(|a| a.page == page)
            .map(|offset| start + offset)
    }
}

impl Index<usize> for Trace {
    type Output = Access;

    fn index(&self, index: usize) -> &Access {
        &self.accesses[index]
    }
}

impl From<Vec<Access>> for Trace {
    fn from(accesses: Vec<Access>) -> Self {
        Self::new(accesses)
    }
}

impl FromIterator<Access> for Trace {
    fn from_iter<I: IntoIterator<Item = Access>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Access;
    type IntoIter = std::slice::Iter<'a, Access>;

    fn into_iter(self) -> Self::IntoIter {
        self.accesses.iter()
    }
}
