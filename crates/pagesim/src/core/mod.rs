pub mod engine;
pub mod frame;
pub mod page_table;
pub mod policies;
pub mod trace;
pub mod types;

pub use self::engine::{AccessOutcome, Eviction, Simulator};
pub use self::frame::{Frame, FrameTable};
pub use self::page_table::PageTable;
pub use self::trace::Trace;
pub use self::types::{Access, AccessKind, FrameId, PageNumber};
