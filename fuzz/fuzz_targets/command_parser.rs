//! Fuzz target for the command grammar
//!
//! Feeds arbitrary text to `command::parse` and the `set` parser to find:
//! - Panics on odd token splits or multi-byte input
//! - Integer overflow in `M:SS` arithmetic
//!
//! # Invariants
//!
//! - Parsing never panics
//! - A parsed workout always has at least one interval
//! - Every `M:SS` component of an accepted duration is below 60

#![no_main]

use libfuzzer_sys::fuzz_target;
use workout_timer_core::{Command, command, parser};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(Some(Command::Set(workout))) = command::parse(input) {
        assert!(!workout.intervals.is_empty(), "workout without intervals: {input:?}");
    }

    if let Ok(workout) = parser::parse_set(input) {
        assert!(!workout.intervals.is_empty());
    }

    for token in input.split_whitespace() {
        if token.contains(':')
            && let Ok(duration) = parser::parse_duration(token)
        {
            assert!(duration.as_secs() < 60 * 60, "M:SS out of range: {token:?}");
        }
    }
});
