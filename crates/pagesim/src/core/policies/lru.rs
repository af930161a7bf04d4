use super::ReplacementPolicy;
use crate::core::frame::FrameTable;
use crate::core::trace::Trace;
use crate::core::types::FrameId;

/// Evicts the frame with the oldest `last_use`.
///
/// Recency comes from the timestamp the engine stamps on every access, so
/// the policy itself keeps no state.
#[derive(Debug, Default)]
pub struct LruPolicy;

impl LruPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for LruPolicy {
    fn name(&self) -> &'static str {
        "LRU"
    }

    fn get_victim(&mut self, frames: &FrameTable, _trace: &Trace, _position: usize) -> FrameId {
        // min_by_key keeps the first of equal keys: ties go to the lowest slot.
        frames
            .occupied()
            .min_by_key(|(_, frame)| frame.last_use)
            .map(|(id, _)| id)
            .unwrap_or(FrameId(0))
    }
}
