//! Virtual-memory page replacement simulator.
//!
//! Replays a trace of memory accesses against a fixed pool of physical
//! frames and reports how many page faults and dirty write-backs a given
//! replacement policy produces.
//!
//! The crate is organized as:
//! - [`core`]: frame table, page table, the fault-handling engine and the
//!   LRU / NRU / OPT victim-selection policies.
//! - [`config`]: page size, physical memory size and policy selection.
//! - [`sim`]: trace loading and the top-level [`sim::simulate`] driver.
//! - [`stats`]: the fault and write-back counters returned by a run.

pub mod config;
pub mod core;
pub mod error;
pub mod sim;
pub mod stats;

pub use crate::error::{Result, SimError};
