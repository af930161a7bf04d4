//! The fault-handling engine.
//!
//! [`Simulator`] owns the frame table, the page table and the counters of a
//! single run, and replays the trace one access at a time. The loop is the
//! same for every policy:
//!
//! 1. Advance the logical clock and let the policy run its per-access hook.
//! 2. On a hit, set R (and M for a write) and stamp `last_use`.
//! 3. On a miss, count a fault and take the first free frame; only when
//!    none is left ask the policy for a victim, counting a write-back if it
//!    is dirty.
//! 4. Load the page into the chosen frame and map it.

use crate::config::PolicyKind;
use crate::error::{Result, SimError};
use crate::stats::Metrics;

use super::frame::{Frame, FrameTable};
use super::page_table::PageTable;
use super::policies::{self, ReplacementPolicy};
use super::trace::Trace;
use super::types::{Access, FrameId, PageNumber};

/// A page pushed out of memory to make room for another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Eviction {
    pub frame: FrameId,
    pub page: PageNumber,
    /// Whether the page had to be written back.
    pub dirty: bool,
}

/// What happened to a single access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    Hit {
        frame: FrameId,
    },
    Fault {
        frame: FrameId,
        /// `None` when the page went into a free frame.
        evicted: Option<Eviction>,
    },
}

impl AccessOutcome {
    pub fn is_fault(&self) -> bool {
        matches!(self, AccessOutcome::Fault { .. })
    }

    /// Frame holding the accessed page after the access.
    pub fn frame(&self) -> FrameId {
        match *self {
            AccessOutcome::Hit { frame } | AccessOutcome::Fault { frame, .. } => frame,
        }
    }
}

pub struct Simulator<'t> {
    trace: &'t Trace,
    frames: FrameTable,
    page_table: PageTable,
    policy: Box<dyn ReplacementPolicy>,
    /// Logical time; the n-th access runs at `clock == n`.
    clock: u64,
    /// Index of the next access to replay.
    position: usize,
    metrics: Metrics,
}

impl<'t> Simulator<'t> {
    /// Sets up a run of `trace` over `frame_count` frames and an address
    /// space of `page_count` pages, evicting with the policy `kind`.
    ///
    /// # Errors
    /// - [`SimError::NoFrames`] if `frame_count` is zero.
    /// - [`SimError::PageOutOfRange`] if the trace touches a page outside
    ///   the address space.
    /// - [`SimError::OutOfMemory`] if either table cannot be allocated.
    pub fn new(
        trace: &'t Trace,
        frame_count: usize,
        page_count: usize,
        kind: PolicyKind,
    ) -> Result<Self> {
        Self::with_policy(trace, frame_count, page_count, policies::build(kind))
    }

    /// Like [`Simulator::new`], with a caller-supplied policy.
    pub fn with_policy(
        trace: &'t Trace,
        frame_count: usize,
        page_count: usize,
        policy: Box<dyn ReplacementPolicy>,
    ) -> Result<Self> {
        if frame_count == 0 {
            return Err(SimError::NoFrames);
        }
        if let Some(page) = trace.max_page() {
            if page as usize >= page_count {
                return Err(SimError::PageOutOfRange { page, page_count });
            }
        }

        let frames = FrameTable::new(frame_count)?;
        let page_table = PageTable::new(page_count)?;

        log::info!(
            "{}: {} accesses, {} frames, {} pages",
            policy.name(),
            trace.len(),
            frame_count,
            page_count
        );

        Ok(Self {
            trace,
            frames,
            page_table,
            policy,
            clock: 0,
            position: 0,
            metrics: Metrics::default(),
        })
    }

    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Number of accesses replayed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.trace.len()
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Replays the next access, or returns `None` once the trace is done.
    pub fn step(&mut self) -> Option<AccessOutcome> {
        let access = self.advance()?;
        Some(self.service(access))
    }

    /// Replays the rest of the trace and returns the final counters.
    pub fn run(mut self) -> Metrics {
        while self.step().is_some() {}

        log::info!(
            "{}: {} page faults, {} write-backs",
            self.policy.name(),
            self.metrics.page_faults,
            self.metrics.write_backs
        );
        self.metrics
    }

    /// Checks that the page table and the frame table describe the same
    /// mapping in both directions.
    pub fn is_consistent(&self) -> bool {
        let frames_agree = self
            .frames
            .occupied()
            .all(|(id, frame)| self.page_table.lookup(frame.page) == Some(id));
        let pages_agree = self
            .page_table
            .mappings()
            .all(|(page, id)| self.frames.get(id).map(|f| f.page) == Some(page));
        frames_agree && pages_agree
    }

    /// Moves the clock to the next access and runs the policy hook.
    fn advance(&mut self) -> Option<Access> {
        let access = *self.trace.get(self.position)?;
        self.clock += 1;
        self.policy.tick(self.clock, &mut self.frames);
        Some(access)
    }

    /// Applies `access`, the one at `self.position`, at the current time.
    fn service(&mut self, access: Access) -> AccessOutcome {
        let now = self.clock;
        let position = self.position;
        self.position += 1;

        log::trace!("t={} {:?} page {:#x}", now, access.kind, access.page);

        if let Some(id) = self.page_table.lookup(access.page) {
            if let Some(frame) = self.frames.get_mut(id) {
                frame.touch(access.is_write(), now);
                return AccessOutcome::Hit { frame: id };
            }
        }

        self.metrics.record_fault();

        let target = match self.frames.first_free() {
            Some(free) => free,
            None => self.policy.get_victim(&self.frames, self.trace, position),
        };

        let evicted = self
            .frames
            .replace(target, Frame::load(access.page, access.is_write(), now))
            .map(|old| {
                if old.modified {
                    self.metrics.record_write_back();
                }
                self.page_table.unmap(old.page);
                log::debug!(
                    "{}: evict page {:#x} from frame {}{}",
                    self.policy.name(),
                    old.page,
                    target,
                    if old.modified { " (dirty)" } else { "" }
                );
                Eviction {
                    frame: target,
                    page: old.page,
                    dirty: old.modified,
                }
            });
        self.page_table.map(access.page, target);

        AccessOutcome::Fault {
            frame: target,
            evicted,
        }
    }
}
