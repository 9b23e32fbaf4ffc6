//! Multi-interval, multi-round countdown.
//!
//! An [`IntervalTimer`] counts down each interval in turn. A full pass over
//! all intervals is a round; after the configured number of rounds the timer
//! is [`ProgramState::Done`]. With `rounds == 0` it loops forever.
//!
//! In [`Mode::Auto`] a tick that takes the current interval to zero or below
//! advances exactly once, inside the same call. Any remainder of an oversized
//! tick is dropped rather than carried into the next interval.
//!
//! In [`Mode::Manual`] the countdown keeps going past zero. The overshoot is
//! reported through [`Program::is_overflow`] and shown as a positive
//! duration until the user calls [`Program::next`].

use std::time::Duration;

use crate::{
    error::TimerError,
    program::{Mode, Position, Program, ProgramState},
    time_left::TimeLeft,
};

/// Interval workout state machine.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    /// Target duration of each interval. Never empty.
    intervals: Vec<Duration>,
    /// Number of rounds, `0` for unlimited.
    rounds: u32,
    /// Expiry behavior.
    mode: Mode,
    /// Index into `intervals`.
    current_interval: usize,
    /// Zero-based round counter.
    current_round: u32,
    /// Signed time remaining in the current interval.
    time_left: TimeLeft,
    /// Lifecycle state.
    state: ProgramState,
}

impl IntervalTimer {
    /// Create a timer in [`ProgramState::Ready`] at the start of its first
    /// interval.
    ///
    /// # Errors
    ///
    /// - `TimerError::NoIntervals` if `intervals` is empty
    pub fn new(intervals: Vec<Duration>, rounds: u32, mode: Mode) -> Result<Self, TimerError> {
        let Some(&first) = intervals.first() else {
            return Err(TimerError::NoIntervals);
        };

        Ok(Self {
            intervals,
            rounds,
            mode,
            current_interval: 0,
            current_round: 0,
            time_left: TimeLeft::from_duration(first),
            state: ProgramState::Ready,
        })
    }

    /// Index of the current interval.
    pub fn current_interval(&self) -> usize {
        self.current_interval
    }

    /// Zero-based index of the current round.
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Configured rounds, `0` for unlimited.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Expiry behavior.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Target durations of all intervals.
    pub fn intervals(&self) -> &[Duration] {
        &self.intervals
    }

    /// Signed time remaining in the current interval.
    pub fn time_left(&self) -> TimeLeft {
        self.time_left
    }

    /// How far past zero the current interval is. Zero unless overflowed.
    pub fn overflow(&self) -> Duration {
        if self.time_left.is_negative() { self.time_left.magnitude() } else { Duration::ZERO }
    }

    fn reset_time_left(&mut self) {
        // INVARIANT: current_interval < intervals.len() and intervals is non-empty
        let duration = self.intervals.get(self.current_interval).copied().unwrap_or_default();
        self.time_left = TimeLeft::from_duration(duration);
    }

    fn last_round(&self) -> bool {
        self.rounds > 0 && self.current_round.saturating_add(1) >= self.rounds
    }
}

impl Program for IntervalTimer {
    fn tick(&mut self, elapsed: Duration) {
        if self.state != ProgramState::Running {
            return;
        }

        self.time_left = self.time_left.saturating_sub(elapsed);

        if self.mode == Mode::Auto && !self.time_left.is_positive() {
            self.next();
        }
    }

    fn start(&mut self) {
        if self.state == ProgramState::Ready {
            self.state = ProgramState::Running;
        }
    }

    fn toggle_pause(&mut self) {
        self.state = match self.state {
            ProgramState::Running => ProgramState::Paused,
            ProgramState::Paused | ProgramState::Done => ProgramState::Running,
            ProgramState::Ready => ProgramState::Ready,
        };
    }

    fn next(&mut self) {
        if self.state == ProgramState::Done {
            return;
        }

        self.current_interval = (self.current_interval + 1) % self.intervals.len();
        self.reset_time_left();

        if self.current_interval != 0 {
            return;
        }

        if self.last_round() {
            self.state = ProgramState::Done;
            self.current_round = 0;
        } else {
            self.current_round = self.current_round.saturating_add(1);
        }
    }

    fn state(&self) -> ProgramState {
        self.state
    }

    fn time_display(&self) -> Duration {
        self.time_left.magnitude()
    }

    fn is_overflow(&self) -> bool {
        self.time_left.is_negative()
    }

    fn is_low_time(&self, threshold: Duration) -> bool {
        self.time_left.is_below(threshold)
    }

    fn counts_up(&self) -> bool {
        self.is_overflow()
    }

    fn position(&self) -> Option<Position> {
        Some(Position {
            interval: self.current_interval,
            intervals: self.intervals.len(),
            round: self.current_round,
            rounds: self.rounds,
        })
    }

    fn add_time(&mut self, amount: Duration) {
        if self.state != ProgramState::Done {
            self.time_left = self.time_left.saturating_add(amount);
        }
    }

    fn subtract_time(&mut self, amount: Duration) {
        if self.state != ProgramState::Done {
            self.time_left = self.time_left.saturating_sub(amount);
        }
    }

    fn back(&mut self) {
        if self.state == ProgramState::Done {
            return;
        }

        if self.current_interval > 0 {
            self.current_interval -= 1;
        } else if self.current_round > 0 {
            self.current_round -= 1;
            self.current_interval = self.intervals.len() - 1;
        }
        self.reset_time_left();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    fn manual(intervals: &[u64], rounds: u32) -> IntervalTimer {
        let intervals = intervals.iter().copied().map(secs).collect();
        IntervalTimer::new(intervals, rounds, Mode::Manual).unwrap()
    }

    fn auto(intervals: &[u64], rounds: u32) -> IntervalTimer {
        let intervals = intervals.iter().copied().map(secs).collect();
        IntervalTimer::new(intervals, rounds, Mode::Auto).unwrap()
    }

    #[test]
    fn new_timer_is_ready_at_first_interval() {
        let timer = manual(&[10], 1);

        assert_eq!(timer.state(), ProgramState::Ready);
        assert_eq!(timer.time_display(), secs(10));
        assert_eq!(timer.current_interval(), 0);
        assert_eq!(timer.current_round(), 0);
    }

    #[test]
    fn empty_intervals_rejected() {
        let result = IntervalTimer::new(Vec::new(), 1, Mode::Auto);
        assert_eq!(result.unwrap_err(), TimerError::NoIntervals);
    }

    #[test]
    fn tick_only_advances_when_running() {
        let mut timer = manual(&[10], 1);
        timer.tick(secs(2));
        assert_eq!(timer.time_display(), secs(10));

        timer.start();
        timer.tick(secs(2));
        assert_eq!(timer.time_display(), secs(8));
    }

    #[test]
    fn tick_while_paused_is_ignored() {
        let mut timer = manual(&[10], 1);
        timer.start();
        timer.tick(secs(3));
        timer.toggle_pause();
        timer.tick(secs(3));

        assert_eq!(timer.state(), ProgramState::Paused);
        assert_eq!(timer.time_display(), secs(7));
    }

    #[test]
    fn start_twice_is_start_once() {
        let mut timer = manual(&[10], 1);
        timer.start();
        timer.start();
        assert_eq!(timer.state(), ProgramState::Running);

        timer.toggle_pause();
        timer.start();
        assert_eq!(timer.state(), ProgramState::Paused);
    }

    #[test]
    fn toggle_pause_pairs_cancel_out() {
        let mut timer = manual(&[10], 1);
        timer.start();

        for _ in 0..4 {
            timer.toggle_pause();
        }
        assert_eq!(timer.state(), ProgramState::Running);

        timer.toggle_pause();
        assert_eq!(timer.state(), ProgramState::Paused);
    }

    #[test]
    fn toggle_pause_does_not_start_ready_timer() {
        let mut timer = manual(&[10], 1);
        timer.toggle_pause();
        assert_eq!(timer.state(), ProgramState::Ready);
    }

    #[test]
    fn manual_mode_overflow() {
        let mut timer = manual(&[5], 1);
        timer.start();
        timer.tick(secs(7));

        assert!(timer.is_overflow());
        assert!(timer.counts_up());
        assert_eq!(timer.overflow(), secs(2));
        assert_eq!(timer.time_display(), secs(2));
        assert_eq!(timer.state(), ProgramState::Running);
    }

    #[test]
    fn manual_mode_exactly_zero_is_not_overflow() {
        let mut timer = manual(&[5], 1);
        timer.start();
        timer.tick(secs(5));

        assert!(!timer.is_overflow());
        assert_eq!(timer.time_display(), Duration::ZERO);
        assert_eq!(timer.current_interval(), 0);
    }

    #[test]
    fn next_single_interval_single_round() {
        let mut timer = manual(&[10], 1);
        timer.start();
        timer.next();
        assert_eq!(timer.state(), ProgramState::Done);
    }

    #[test]
    fn next_multiple_intervals() {
        let mut timer = manual(&[10, 20, 30], 1);
        timer.start();

        timer.next();
        assert_eq!(timer.current_interval(), 1);
        assert_eq!(timer.time_display(), secs(20));

        timer.next();
        assert_eq!(timer.current_interval(), 2);

        timer.next();
        assert_eq!(timer.state(), ProgramState::Done);
    }

    #[test]
    fn next_multiple_rounds() {
        let mut timer = manual(&[10], 3);
        timer.start();

        timer.next();
        assert_ne!(timer.state(), ProgramState::Done);
        assert_eq!(timer.current_round(), 1);

        timer.next();
        assert_ne!(timer.state(), ProgramState::Done);
        assert_eq!(timer.current_round(), 2);

        timer.next();
        assert_eq!(timer.state(), ProgramState::Done);
        assert_eq!(timer.current_round(), 0);
    }

    #[test]
    fn next_loops_forever_when_rounds_zero() {
        let mut timer = manual(&[10], 0);
        timer.start();

        for i in 0..10 {
            timer.next();
            assert_ne!(timer.state(), ProgramState::Done, "reached Done on iteration {i}");
        }
        assert_eq!(timer.current_round(), 10);
    }

    #[test]
    fn next_clears_overflow() {
        let mut timer = manual(&[5, 10], 1);
        timer.start();
        timer.tick(secs(8));
        assert!(timer.is_overflow());

        timer.next();
        assert!(!timer.is_overflow());
        assert_eq!(timer.time_display(), secs(10));
    }

    #[test]
    fn next_on_done_timer_is_ignored() {
        let mut timer = manual(&[10, 20], 1);
        timer.start();
        timer.next();
        timer.next();
        assert_eq!(timer.state(), ProgramState::Done);

        timer.next();
        assert_eq!(timer.state(), ProgramState::Done);
        assert_eq!(timer.current_interval(), 0);
    }

    #[test]
    fn auto_mode_advances_at_zero() {
        let mut timer = auto(&[5, 10], 1);
        timer.start();
        timer.tick(secs(6));

        assert_eq!(timer.current_interval(), 1);
        assert_eq!(timer.state(), ProgramState::Running);
        assert_eq!(timer.time_display(), secs(10));
    }

    #[test]
    fn auto_mode_advances_exactly_at_zero() {
        let mut timer = auto(&[5, 10], 1);
        timer.start();
        timer.tick(secs(5));
        assert_eq!(timer.current_interval(), 1);
    }

    #[test]
    fn auto_mode_oversized_tick_advances_once() {
        let mut timer = auto(&[5, 5, 5], 1);
        timer.start();
        timer.tick(secs(12));

        assert_eq!(timer.current_interval(), 1);
        assert_eq!(timer.time_display(), secs(5));
        assert!(!timer.is_overflow());
    }

    #[test]
    fn auto_mode_finishes_after_last_round() {
        let mut timer = auto(&[2, 1], 2);
        timer.start();

        for _ in 0..4 {
            timer.tick(secs(2));
        }
        assert_eq!(timer.state(), ProgramState::Done);
        assert_eq!(timer.current_interval(), 0);
        assert_eq!(timer.current_round(), 0);
    }

    #[test]
    fn done_timer_rearms_on_toggle_pause() {
        let mut timer = manual(&[10], 1);
        timer.start();
        timer.next();
        assert_eq!(timer.state(), ProgramState::Done);

        timer.toggle_pause();
        assert_eq!(timer.state(), ProgramState::Running);
        assert_eq!(timer.current_interval(), 0);
        assert_eq!(timer.time_display(), secs(10));
    }

    #[test]
    fn tick_on_done_timer_is_ignored() {
        let mut timer = manual(&[10], 1);
        timer.start();
        timer.next();
        timer.tick(secs(4));
        assert_eq!(timer.time_display(), secs(10));
    }

    #[test]
    fn low_time_window() {
        let threshold = secs(30);
        let mut timer = manual(&[40], 1);
        timer.start();
        assert!(!timer.is_low_time(threshold));

        timer.tick(secs(15));
        assert!(timer.is_low_time(threshold));

        timer.tick(secs(25));
        assert!(!timer.is_low_time(threshold), "exactly zero is not low time");

        timer.tick(secs(1));
        assert!(!timer.is_low_time(threshold), "overflow is not low time");
    }

    #[test]
    fn add_and_subtract_adjust_current_interval() {
        let mut timer = manual(&[60], 1);
        timer.add_time(secs(30));
        assert_eq!(timer.time_display(), secs(90));

        timer.subtract_time(secs(100));
        assert!(timer.is_overflow());
        assert_eq!(timer.time_display(), secs(10));
    }

    #[test]
    fn subtract_in_auto_mode_advances_on_next_tick() {
        let mut timer = auto(&[20, 10], 1);
        timer.start();
        timer.subtract_time(secs(30));
        assert_eq!(timer.current_interval(), 0);

        timer.tick(Duration::ZERO);
        assert_eq!(timer.current_interval(), 1);
    }

    #[test]
    fn back_steps_to_previous_interval_and_round() {
        let mut timer = manual(&[10, 20], 3);
        timer.start();
        timer.next();
        timer.next();
        assert_eq!((timer.current_interval(), timer.current_round()), (0, 1));

        timer.back();
        assert_eq!((timer.current_interval(), timer.current_round()), (1, 0));
        assert_eq!(timer.time_display(), secs(20));

        timer.back();
        assert_eq!((timer.current_interval(), timer.current_round()), (0, 0));

        timer.tick(secs(4));
        timer.back();
        assert_eq!((timer.current_interval(), timer.current_round()), (0, 0));
        assert_eq!(timer.time_display(), secs(10));
    }

    #[test]
    fn position_reports_counters() {
        let mut timer = manual(&[10, 20], 4);
        timer.next();

        assert_eq!(
            timer.position(),
            Some(Position { interval: 1, intervals: 2, round: 0, rounds: 4 })
        );
    }
}
