//! Top-level simulation driver.

pub mod loader;

use crate::config::SimConfig;
use crate::core::{Simulator, Trace};
use crate::error::{Result, SimError};
use crate::stats::Metrics;

/// Runs `trace` to completion under `config`.
///
/// # Errors
/// [`SimError::EmptyTrace`] for an empty trace, plus every setup error of
/// [`Simulator::new`]. Nothing can fail once the replay has started.
pub fn simulate(config: &SimConfig, trace: &Trace) -> Result<Metrics> {
    if trace.is_empty() {
        return Err(SimError::EmptyTrace);
    }

    let sim = Simulator::new(
        trace,
        config.frame_count(),
        config.page_count(),
        config.policy,
    )?;
    Ok(sim.run())
}
