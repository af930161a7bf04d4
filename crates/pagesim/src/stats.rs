use serde::{Deserialize, Serialize};

/// Counters produced by a simulation run.
///
/// Both only ever grow. Dirty frames still resident when the trace ends are
/// not written back and so are not counted in `write_backs`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub page_faults: u64,
    pub write_backs: u64,
}

impl Metrics {
    #[inline(always)]
    pub fn record_fault(&mut self) {
        self.page_faults += 1;
    }

    #[inline(always)]
    pub fn record_write_back(&mut self) {
        self.write_backs += 1;
    }
}
