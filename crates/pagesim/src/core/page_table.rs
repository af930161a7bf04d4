//! Flat page table: page number -> frame slot.

use crate::error::{Result, SimError};

use super::types::{FrameId, PageNumber};

/// One entry per page of the address space; `None` means unmapped.
#[derive(Clone, Debug)]
pub struct PageTable {
    entries: Vec<Option<FrameId>>,
}

impl PageTable {
    /// Allocates `page_count` unmapped entries.
    ///
    /// # Errors
    /// [`SimError::OutOfMemory`] if the table cannot be allocated.
    pub fn new(page_count: usize) -> Result<Self> {
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(page_count)
            .map_err(|source| SimError::OutOfMemory {
                table: "page table",
                source,
            })?;
        entries.resize(page_count, None);
        Ok(Self { entries })
    }

    /// Number of pages in the address space.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline(always)]
    pub fn lookup(&self, page: PageNumber) -> Option<FrameId> {
        self.entries[page as usize]
    }

    #[inline(always)]
    pub fn map(&mut self, page: PageNumber, frame: FrameId) {
        self.entries[page as usize] = Some(frame);
    }

    #[inline(always)]
    pub fn unmap(&mut self, page: PageNumber) {
        self.entries[page as usize] = None;
    }

    /// All mapped pages with their frames, in page order.
    pub fn mappings(&self) -> impl Iterator<Item = (PageNumber, FrameId)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(page, entry)| entry.map(|frame| (page as PageNumber, frame)))
    }
}
