//! Fuzz target for the timing engines
//!
//! Drives interval timers and stopwatches through arbitrary operation
//! sequences (LOW priority; proptest covers the common paths).
//!
//! # Strategy
//!
//! - Intervals: zero-length, short and very long durations
//! - Rounds: single, several and unlimited (0)
//! - Ticks: zero through hours, including sub-second remainders
//!
//! # Invariants
//!
//! - Interval index always within the interval list
//! - Round counter below the configured round count when bounded
//! - Unlimited rounds and stopwatches never reach Done
//! - Auto mode never shows overflow after a running tick

#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use workout_timer_core::{IntervalTimer, Mode, Program, ProgramState, Stopwatch};

#[derive(Debug, Clone, Arbitrary)]
enum Op {
    Tick { millis: u32 },
    Start,
    TogglePause,
    Next,
    Back,
    Add { secs: u16 },
    Subtract { secs: u16 },
}

#[derive(Debug, Clone, Arbitrary)]
struct Input {
    intervals: Vec<u16>,
    rounds: u8,
    manual: bool,
    ops: Vec<Op>,
}

fn apply(program: &mut dyn Program, op: &Op) {
    match *op {
        Op::Tick { millis } => program.tick(Duration::from_millis(u64::from(millis))),
        Op::Start => program.start(),
        Op::TogglePause => program.toggle_pause(),
        Op::Next => program.next(),
        Op::Back => program.back(),
        Op::Add { secs } => program.add_time(Duration::from_secs(u64::from(secs))),
        Op::Subtract { secs } => program.subtract_time(Duration::from_secs(u64::from(secs))),
    }
}

fuzz_target!(|input: Input| {
    let intervals: Vec<Duration> =
        input.intervals.iter().map(|s| Duration::from_secs(u64::from(*s))).collect();
    let mode = if input.manual { Mode::Manual } else { Mode::Auto };
    let rounds = u32::from(input.rounds % 8);

    let Ok(mut timer) = IntervalTimer::new(intervals.clone(), rounds, mode) else {
        assert!(intervals.is_empty());
        return;
    };

    for op in &input.ops {
        apply(&mut timer, op);

        assert!(timer.current_interval() < intervals.len());
        if rounds > 0 {
            assert!(timer.current_round() < rounds);
        } else {
            assert_ne!(timer.state(), ProgramState::Done);
        }
        if matches!(op, Op::Tick { .. })
            && mode == Mode::Auto
            && timer.state() == ProgramState::Running
        {
            assert!(!timer.is_overflow());
        }
    }

    let mut stopwatch = Stopwatch::new();
    for op in &input.ops {
        apply(&mut stopwatch, op);
        assert_ne!(stopwatch.state(), ProgramState::Done);
    }
});
