use std::fmt;

use serde::{Deserialize, Serialize};

/// A virtual page number, already stripped of its page offset.
pub type PageNumber = u32;

/// Index of a slot in the [`FrameTable`](super::FrameTable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(pub usize);

impl FrameId {
    #[inline(always)]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessKind {
    Read,
    Write,
}

/// One record of the access trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Access {
    pub page: PageNumber,
    pub kind: AccessKind,
}

impl Access {
    pub fn new(page: PageNumber, kind: AccessKind) -> Self {
        Self { page, kind }
    }

    pub fn read(page: PageNumber) -> Self {
        Self::new(page, AccessKind::Read)
    }

    pub fn write(page: PageNumber) -> Self {
        Self::new(page, AccessKind::Write)
    }

    #[inline(always)]
    pub fn is_write(&self) -> bool {
        self.kind == AccessKind::Write
    }
}
