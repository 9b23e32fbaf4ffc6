//! Duration and workout parsing for the `set` command.
//!
//! # Grammar
//!
//! ```text
//! set <duration>... [x<rounds>] [auto|manual]
//!
//! duration := <seconds>              bare non-negative integer
//!           | <minutes>:<seconds>    both in 0..=59, any digit width
//! rounds   := non-negative integer, 0 loops forever (the default)
//! ```
//!
//! `set 90` and `set 1:30` both describe a single 90 second interval that
//! repeats until stopped; `set 90 x1` runs it once.
//! `set 0:40 0:20 x8` describes eight rounds of 40 s work and 20 s rest.

use std::time::Duration;

use crate::{
    error::{ParseError, TimerError},
    program::Mode,
    timer::IntervalTimer,
};

const MAX_COMPONENT: i64 = 59;
const SECONDS_PER_MINUTE: u64 = 60;
const ROUNDS_PREFIX: char = 'x';

/// A parsed `set` command, not yet bound to a mode default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    /// Interval durations, in order. Never empty.
    pub intervals: Vec<Duration>,
    /// Number of rounds, `0` for unlimited.
    pub rounds: u32,
    /// Explicit mode, `None` to use the configured default.
    pub mode: Option<Mode>,
}

impl Workout {
    /// Build a fresh timer, falling back to `default_mode` if the command
    /// did not name one.
    ///
    /// # Errors
    ///
    /// - `TimerError::NoIntervals` if `intervals` is empty
    pub fn into_timer(self, default_mode: Mode) -> Result<IntervalTimer, TimerError> {
        IntervalTimer::new(self.intervals, self.rounds, self.mode.unwrap_or(default_mode))
    }

    /// Total length of one round. `None` if it does not fit in a
    /// `Duration`.
    pub fn round_length(&self) -> Option<Duration> {
        self.intervals.iter().try_fold(Duration::ZERO, |total, d| total.checked_add(*d))
    }
}

/// Parse a full `set ...` command string.
///
/// # Errors
///
/// - `ParseError::Usage` if the verb is not `set` or no duration follows
/// - any token error from [`parse_duration`]
/// - `ParseError::InvalidRounds` for a malformed, repeated or misplaced
///   rounds token
pub fn parse_set(input: &str) -> Result<Workout, ParseError> {
    let mut fields = input.split_whitespace();
    if fields.next() != Some("set") {
        return Err(ParseError::Usage);
    }
    parse_workout(fields)
}

/// Parse the arguments that follow `set`.
///
/// # Errors
///
/// Same as [`parse_set`], minus the verb check.
pub fn parse_workout<'a>(args: impl IntoIterator<Item = &'a str>) -> Result<Workout, ParseError> {
    let mut intervals = Vec::new();
    let mut rounds = None;
    let mut mode = None;

    for token in args {
        if mode.is_some() {
            return Err(ParseError::Usage);
        }

        if let Some(parsed) = Mode::from_name(token) {
            mode = Some(parsed);
            continue;
        }

        if let Some(count) = token.strip_prefix(ROUNDS_PREFIX) {
            if rounds.is_some() {
                return Err(ParseError::InvalidRounds(token.to_string()));
            }
            let count =
                count.parse::<u32>().map_err(|_| ParseError::InvalidRounds(token.to_string()))?;
            rounds = Some(count);
            continue;
        }

        if let Some(r) = rounds {
            // Durations must all come before the rounds token.
            return Err(ParseError::InvalidRounds(format!("x{r} before {token}")));
        }
        intervals.push(parse_duration(token)?);
    }

    if intervals.is_empty() {
        return Err(ParseError::Usage);
    }

    Ok(Workout { intervals, rounds: rounds.unwrap_or(0), mode })
}

/// Parse a single duration token: bare seconds (`90`) or `M:SS` (`1:30`).
///
/// # Errors
///
/// - `ParseError::InvalidMinutes` / `ParseError::InvalidSeconds` for
///   non-numeric components
/// - `ParseError::MinutesOutOfRange` / `ParseError::SecondsOutOfRange` for
///   components outside `0..=59`
/// - `ParseError::InvalidDuration` for a bare value that is not a
///   non-negative integer
/// - `ParseError::Syntax` for more than one colon
pub fn parse_duration(token: &str) -> Result<Duration, ParseError> {
    let parts: Vec<&str> = token.split(':').collect();

    match parts.as_slice() {
        [seconds] => {
            let seconds = seconds
                .parse::<u64>()
                .map_err(|_| ParseError::InvalidDuration((*seconds).to_string()))?;
            Ok(Duration::from_secs(seconds))
        },
        [minutes, seconds] => {
            let minutes = component(
                minutes,
                ParseError::InvalidMinutes,
                ParseError::MinutesOutOfRange,
            )?;
            let seconds = component(
                seconds,
                ParseError::InvalidSeconds,
                ParseError::SecondsOutOfRange,
            )?;
            Ok(Duration::from_secs(minutes * SECONDS_PER_MINUTE + seconds))
        },
        _ => Err(ParseError::Syntax(token.to_string())),
    }
}

fn component(
    raw: &str,
    invalid: fn(String) -> ParseError,
    out_of_range: fn(String) -> ParseError,
) -> Result<u64, ParseError> {
    let value = raw.parse::<i64>().map_err(|_| invalid(raw.to_string()))?;
    if !(0..=MAX_COMPONENT).contains(&value) {
        return Err(out_of_range(raw.to_string()));
    }
    Ok(value as u64)
}
