use super::ReplacementPolicy;
use crate::core::frame::FrameTable;
use crate::core::trace::Trace;
use crate::core::types::FrameId;

/// Belady's optimal replacement.
///
/// Evicts the page whose next reference lies farthest in the future, or
/// any page that is never referenced again. Needs the whole trace up front,
/// so it is only meaningful offline, as a lower bound for the other
/// policies.
///
/// # Performance
///
/// - `get_victim()`: O(F × N) where F is the frame count and N the number
///   of accesses left in the trace.
#[derive(Debug, Default)]
pub struct OptPolicy;

impl OptPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for OptPolicy {
    fn name(&self) -> &'static str {
        "OPT"
    }

    fn get_victim(&mut self, frames: &FrameTable, trace: &Trace, position: usize) -> FrameId {
        let mut victim = FrameId(0);
        let mut farthest = position;

        for (id, frame) in frames.occupied() {
            match trace.next_use(frame.page, position) {
                // Never used again: no other choice can do better.
                None => return id,
                // Strictly greater keeps the lowest slot on ties.
                Some(next) if next > farthest => {
                    farthest = next;
                    victim = id;
                }
                Some(_) => {}
            }
        }

        victim
    }
}
