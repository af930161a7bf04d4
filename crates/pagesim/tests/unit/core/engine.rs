//! # Engine Tests
//!
//! Drives the shared fault-handling loop with an instrumented policy to
//! check when victim selection is (and is not) consulted.

use mockall::mock;
use pagesim::SimError;
use pagesim::config::PolicyKind;
use pagesim::core::policies::ReplacementPolicy;
use pagesim::core::{Access, AccessOutcome, Eviction, FrameId, FrameTable, Simulator, Trace};
use pretty_assertions::assert_eq;

mock! {
    pub Policy {}

    impl ReplacementPolicy for Policy {
        fn name(&self) -> &'static str;
        fn tick(&mut self, now: u64, frames: &mut FrameTable);
        fn get_victim(&mut self, frames: &FrameTable, trace: &Trace, position: usize) -> FrameId;
    }
}

fn quiet_policy() -> MockPolicy {
    let mut policy = MockPolicy::new();
    policy.expect_name().return_const("mock");
    policy.expect_tick().return_const(());
    policy
}

#[test]
fn test_free_frames_fill_before_eviction() {
    let mut policy = quiet_policy();
    policy.expect_get_victim().never();

    let trace = Trace::from_pages(&[4, 5, 4, 6, 5, 6]);
    let mut sim = Simulator::with_policy(&trace, 3, 8, Box::new(policy)).unwrap();

    let outcomes: Vec<AccessOutcome> = std::iter::from_fn(|| sim.step()).collect();
    assert_eq!(
        outcomes,
        vec![
            AccessOutcome::Fault { frame: FrameId(0), evicted: None },
            AccessOutcome::Fault { frame: FrameId(1), evicted: None },
            AccessOutcome::Hit { frame: FrameId(0) },
            AccessOutcome::Fault { frame: FrameId(2), evicted: None },
            AccessOutcome::Hit { frame: FrameId(1) },
            AccessOutcome::Hit { frame: FrameId(2) },
        ]
    );
    assert_eq!(sim.metrics().page_faults, 3);
}

#[test]
fn test_victim_receives_faulting_position() {
    let mut policy = quiet_policy();
    policy
        .expect_get_victim()
        .times(1)
        .returning(|frames, trace, position| {
            assert!(frames.is_full());
            assert_eq!(position, 2);
            assert_eq!(trace[position], Access::read(3));
            FrameId(1)
        });

    let trace = Trace::from_pages(&[1, 2, 3]);
    let mut sim = Simulator::with_policy(&trace, 2, 8, Box::new(policy)).unwrap();
    sim.step();
    sim.step();

    let outcome = sim.step().unwrap();
    assert_eq!(
        outcome,
        AccessOutcome::Fault {
            frame: FrameId(1),
            evicted: Some(Eviction { frame: FrameId(1), page: 2, dirty: false }),
        }
    );
    assert_eq!(sim.page_table().lookup(2), None);
    assert_eq!(sim.page_table().lookup(3), Some(FrameId(1)));
    assert!(sim.is_consistent());
    assert!(sim.step().is_none());
}

#[test]
fn test_tick_runs_once_per_access() {
    let mut policy = MockPolicy::new();
    policy.expect_name().return_const("mock");
    policy.expect_tick().times(5).return_const(());
    policy.expect_get_victim().returning(|_, _, _| FrameId(0));

    let trace = Trace::from_pages(&[1, 1, 2, 2, 1]);
    let sim = Simulator::with_policy(&trace, 1, 4, Box::new(policy)).unwrap();
    let metrics = sim.run();
    assert_eq!(metrics.page_faults, 3);
}

#[test]
fn test_hit_sets_bits_without_counting() {
    let trace = Trace::new(vec![Access::read(1), Access::write(1), Access::read(1)]);
    let mut sim = Simulator::new(&trace, 2, 4, PolicyKind::Lru).unwrap();

    sim.step();
    let frame = *sim.frames().get(FrameId(0)).unwrap();
    assert!(frame.referenced);
    assert!(!frame.modified);
    assert_eq!(frame.last_use, 1);

    assert_eq!(sim.step(), Some(AccessOutcome::Hit { frame: FrameId(0) }));
    let frame = *sim.frames().get(FrameId(0)).unwrap();
    assert!(frame.modified);
    assert_eq!(frame.last_use, 2);

    sim.step();
    assert_eq!(sim.frames().get(FrameId(0)).unwrap().last_use, 3);
    assert_eq!(sim.metrics().page_faults, 1);
    assert_eq!(sim.metrics().write_backs, 0);
    assert_eq!(sim.clock(), 3);
    assert_eq!(sim.position(), 3);
}

#[test]
fn test_dirty_eviction_counts_write_back() {
    let trace = Trace::new(vec![Access::write(1), Access::read(2)]);
    let mut sim = Simulator::new(&trace, 1, 4, PolicyKind::Opt).unwrap();

    sim.step();
    let outcome = sim.step().unwrap();
    assert_eq!(
        outcome,
        AccessOutcome::Fault {
            frame: FrameId(0),
            evicted: Some(Eviction { frame: FrameId(0), page: 1, dirty: true }),
        }
    );
    assert_eq!(sim.metrics().write_backs, 1);

    // The reloaded frame starts clean.
    assert!(!sim.frames().get(FrameId(0)).unwrap().modified);
}

#[test]
fn test_zero_frames_rejected() {
    let trace = Trace::from_pages(&[1]);
    let err = Simulator::new(&trace, 0, 4, PolicyKind::Lru).err().unwrap();
    assert!(matches!(err, SimError::NoFrames));
}

#[test]
fn test_page_outside_address_space_rejected() {
    let trace = Trace::from_pages(&[1, 4]);
    let err = Simulator::new(&trace, 2, 4, PolicyKind::Lru).err().unwrap();
    assert!(matches!(err, SimError::PageOutOfRange { page: 4, page_count: 4 }));
}

#[test]
fn test_oversized_page_table_is_out_of_memory() {
    let trace = Trace::from_pages(&[1]);
    let err = Simulator::new(&trace, 1, usize::MAX, PolicyKind::Lru).err().unwrap();
    assert!(matches!(err, SimError::OutOfMemory { table: "page table", .. }));
}

#[test]
fn test_oversized_frame_table_is_out_of_memory() {
    let trace = Trace::from_pages(&[1]);
    let err = Simulator::new(&trace, usize::MAX, 4, PolicyKind::Lru).err().unwrap();
    assert!(matches!(err, SimError::OutOfMemory { table: "frame table", .. }));
}

#[test]
fn test_empty_trace_runs_to_zero() {
    let trace = Trace::default();
    let sim = Simulator::new(&trace, 2, 4, PolicyKind::Nru).unwrap();
    assert!(sim.is_finished());
    assert_eq!(sim.run().page_faults, 0);
}
