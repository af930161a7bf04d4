use super::ReplacementPolicy;
use crate::core::frame::FrameTable;
use crate::core::trace::Trace;
use crate::core::types::FrameId;

/// Logical time units between two clears of every R bit.
pub const NRU_RESET_INTERVAL: u64 = 1000;

/// Not Recently Used.
///
/// Frames are ranked by class `2 * R + M`:
///
/// | class | R | M |
/// |-------|---|---|
/// | 0     | 0 | 0 |
/// | 1     | 0 | 1 |
/// | 2     | 1 | 0 |
/// | 3     | 1 | 1 |
///
/// The lowest-indexed frame of the lowest class is evicted. R bits are
/// cleared on a fixed cadence of the global access clock, so pages that
/// stop being touched drift down to class 0 or 1.
#[derive(Debug)]
pub struct NruPolicy {
    reset_interval: u64,
}

impl NruPolicy {
    pub fn new() -> Self {
        Self {
            reset_interval: NRU_RESET_INTERVAL,
        }
    }
}

impl Default for NruPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplacementPolicy for NruPolicy {
    fn name(&self) -> &'static str {
        "NRU"
    }

    fn tick(&mut self, now: u64, frames: &mut FrameTable) {
        if now % self.reset_interval == 0 {
            log::trace!("NRU: clearing reference bits at t={}", now);
            frames.clear_referenced();
        }
    }

    fn get_victim(&mut self, frames: &FrameTable, _trace: &Trace, _position: usize) -> FrameId {
        let mut best: Option<(FrameId, u8)> = None;

        for (id, frame) in frames.occupied() {
            let class = frame.class();
            if best.is_none_or(|(_, best_class)| class < best_class) {
                best = Some((id, class));
                // Nothing beats class 0.
                if class == 0 {
                    break;
                }
            }
        }

        best.map(|(id, _)| id).unwrap_or(FrameId(0))
    }
}
