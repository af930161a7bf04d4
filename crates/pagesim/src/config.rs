//! Simulation configuration.
//!
//! Page size and physical memory size are restricted to the values the
//! simulator supports: 8/16/32 KiB pages and 1/2/4 MiB of physical memory.
//! Together they fix the address shift, the size of the page-number space
//! and the number of frames.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Width of the simulated virtual address space, in bits.
pub const ADDRESS_BITS: u32 = 32;

/// Size of a virtual page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    #[default]
    Kib8,
    Kib16,
    Kib32,
}

impl PageSize {
    /// Page size in KiB.
    pub fn kib(self) -> u32 {
        match self {
            PageSize::Kib8 => 8,
            PageSize::Kib16 => 16,
            PageSize::Kib32 => 32,
        }
    }

    pub fn bytes(self) -> usize {
        self.kib() as usize * 1024
    }

    /// Number of offset bits: `page = address >> shift`.
    pub fn shift(self) -> u32 {
        match self {
            PageSize::Kib8 => 13,
            PageSize::Kib16 => 14,
            PageSize::Kib32 => 15,
        }
    }

    /// Number of distinct page numbers in the 32-bit address space.
    pub fn page_count(self) -> usize {
        1usize << (ADDRESS_BITS - self.shift())
    }
}

impl TryFrom<u32> for PageSize {
    type Error = SimError;

    fn try_from(kib: u32) -> Result<Self, Self::Error> {
        match kib {
            8 => Ok(PageSize::Kib8),
            16 => Ok(PageSize::Kib16),
            32 => Ok(PageSize::Kib32),
            other => Err(SimError::InvalidPageSize(other.to_string())),
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> u32 {
        size.kib()
    }
}

impl FromStr for PageSize {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map_err(|_| SimError::InvalidPageSize(s.to_string()))
            .and_then(PageSize::try_from)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} KB", self.kib())
    }
}

/// Amount of physical memory available for frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum MemorySize {
    #[default]
    Mib1,
    Mib2,
    Mib4,
}

impl MemorySize {
    /// Memory size in MiB.
    pub fn mib(self) -> u32 {
        match self {
            MemorySize::Mib1 => 1,
            MemorySize::Mib2 => 2,
            MemorySize::Mib4 => 4,
        }
    }

    pub fn bytes(self) -> usize {
        self.mib() as usize * 1024 * 1024
    }
}

impl TryFrom<u32> for MemorySize {
    type Error = SimError;

    fn try_from(mib: u32) -> Result<Self, Self::Error> {
        match mib {
            1 => Ok(MemorySize::Mib1),
            2 => Ok(MemorySize::Mib2),
            4 => Ok(MemorySize::Mib4),
            other => Err(SimError::InvalidMemorySize(other.to_string())),
        }
    }
}

impl From<MemorySize> for u32 {
    fn from(size: MemorySize) -> u32 {
        size.mib()
    }
}

impl FromStr for MemorySize {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map_err(|_| SimError::InvalidMemorySize(s.to_string()))
            .and_then(MemorySize::try_from)
    }
}

impl fmt::Display for MemorySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} MB", self.mib())
    }
}

/// Page replacement algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum PolicyKind {
    /// Least recently used.
    #[default]
    Lru,
    /// Not recently used, by reference/modify class.
    Nru,
    /// Belady's optimal algorithm, using the rest of the trace.
    Opt,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Lru, PolicyKind::Nru, PolicyKind::Opt];

    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Lru => "LRU",
            PolicyKind::Nru => "NRU",
            PolicyKind::Opt => "OPT",
        }
    }
}

impl FromStr for PolicyKind {
    type Err = SimError;

    /// Case-insensitive; `otimo` and `ótimo` select OPT.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lru" => Ok(PolicyKind::Lru),
            "nru" => Ok(PolicyKind::Nru),
            "opt" | "otimo" | "ótimo" => Ok(PolicyKind::Opt),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }
}

impl TryFrom<String> for PolicyKind {
    type Error = SimError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of one simulation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    pub policy: PolicyKind,
    #[serde(rename = "page_size_kb")]
    pub page_size: PageSize,
    #[serde(rename = "memory_size_mb")]
    pub memory_size: MemorySize,
}

impl SimConfig {
    pub fn new(policy: PolicyKind, page_size: PageSize, memory_size: MemorySize) -> Self {
        Self {
            policy,
            page_size,
            memory_size,
        }
    }

    /// Number of physical frames: memory bytes / page bytes.
    pub fn frame_count(&self) -> usize {
        self.memory_size.bytes() / self.page_size.bytes()
    }

    pub fn page_count(&self) -> usize {
        self.page_size.page_count()
    }

    pub fn page_shift(&self) -> u32 {
        self.page_size.shift()
    }
}
