//! Physical frame descriptors.

use crate::error::{Result, SimError};

use super::types::{FrameId, PageNumber};

/// State of an occupied frame.
///
/// Free slots are `None` in the [`FrameTable`], so a policy can never read
/// the bits of a frame that holds nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Page currently resident in this frame.
    pub page: PageNumber,
    /// R bit: set on every access, cleared by NRU's periodic reset.
    pub referenced: bool,
    /// M bit: set on write, cleared only when the frame is reloaded.
    pub modified: bool,
    /// Logical time of the most recent access.
    pub last_use: u64,
}

impl Frame {
    /// A freshly loaded frame: referenced, dirty only if loaded by a write.
    pub fn load(page: PageNumber, is_write: bool, now: u64) -> Self {
        Self {
            page,
            referenced: true,
            modified: is_write,
            last_use: now,
        }
    }

    /// Records a hit on this frame.
    #[inline(always)]
    pub fn touch(&mut self, is_write: bool, now: u64) {
        self.referenced = true;
        if is_write {
            self.modified = true;
        }
        self.last_use = now;
    }

    /// NRU class: `2 * R + M`, 0 is the best victim, 3 the worst.
    #[inline(always)]
    pub fn class(&self) -> u8 {
        2 * u8::from(self.referenced) + u8::from(self.modified)
    }
}

/// Fixed-size pool of frame slots, indexed by [`FrameId`].
#[derive(Clone, Debug)]
pub struct FrameTable {
    slots: Vec<Option<Frame>>,
}

impl FrameTable {
    /// Allocates `count` empty slots.
    ///
    /// # Errors
    /// [`SimError::OutOfMemory`] if the table cannot be allocated.
    pub fn new(count: usize) -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(count)
            .map_err(|source| SimError::OutOfMemory {
                table: "frame table",
                source,
            })?;
        slots.resize(count, None);
        Ok(Self { slots })
    }

    /// Total number of slots, free or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: FrameId) -> Option<&Frame> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: FrameId) -> Option<&mut Frame> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Lowest-indexed free slot.
    pub fn first_free(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId)
    }

    /// Occupied frames in slot order.
    pub fn occupied(&self) -> impl Iterator<Item = (FrameId, &Frame)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|frame| (FrameId(i), frame)))
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Puts `frame` in slot `id`, returning whatever was there before.
    pub fn replace(&mut self, id: FrameId, frame: Frame) -> Option<Frame> {
        self.slots[id.index()].replace(frame)
    }

    /// Clears the R bit of every occupied frame.
    pub fn clear_referenced(&mut self) {
        for frame in self.slots.iter_mut().flatten() {
            frame.referenced = false;
        }
    }
}
