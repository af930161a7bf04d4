//! Victim-selection policies.
//!
//! Every policy plugs into the same fault-handling loop in
//! [`Simulator`](super::Simulator); they differ only in which occupied frame
//! they give up when no free frame is left.

use crate::config::PolicyKind;

use super::frame::FrameTable;
use super::trace::Trace;
use super::types::FrameId;

pub use self::lru::LruPolicy;
pub use self::nru::{NRU_RESET_INTERVAL, NruPolicy};
pub use self::opt::OptPolicy;

mod lru;
mod nru;
mod opt;

pub trait ReplacementPolicy {
    fn name(&self) -> &'static str;

    /// Runs once per access, after the clock advances to `now` and before
    /// the access is looked up.
    fn tick(&mut self, _now: u64, _frames: &mut FrameTable) {}

    /// Picks the frame to evict for the access at `position` in `trace`.
    ///
    /// Only called when every frame is occupied.
    fn get_victim(&mut self, frames: &FrameTable, trace: &Trace, position: usize) -> FrameId;
}

/// Instantiates the policy selected by `kind`.
pub fn build(kind: PolicyKind) -> Box<dyn ReplacementPolicy> {
    match kind {
        PolicyKind::Lru => Box::new(LruPolicy::new()),
        PolicyKind::Nru => Box::new(NruPolicy::new()),
        PolicyKind::Opt => Box::new(OptPolicy::new()),
    }
}
