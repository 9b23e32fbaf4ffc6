//! Count-up stopwatch with laps.

use std::time::Duration;

use crate::program::{Program, ProgramState};

/// Count-up state machine. Never reaches [`ProgramState::Done`].
#[derive(Debug, Clone)]
pub struct Stopwatch {
    /// Time accumulated in the current lap.
    elapsed: Duration,
    /// Completed laps, oldest first.
    laps: Vec<Duration>,
    /// Lifecycle state. Only `Ready`, `Running` or `Paused`.
    state: ProgramState,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self { elapsed: Duration::ZERO, laps: Vec::new(), state: ProgramState::Ready }
    }
}

impl Stopwatch {
    /// Create a stopwatch in [`ProgramState::Ready`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current lap and start a new one from zero.
    pub fn lap(&mut self) {
        self.laps.push(self.elapsed);
        self.elapsed = Duration::ZERO;
    }

    /// Sum of all recorded laps plus the current one. Saturates at
    /// `Duration::MAX`.
    pub fn total(&self) -> Duration {
        self.laps.iter().fold(self.elapsed, |total, lap| total.saturating_add(*lap))
    }
}

impl Program for Stopwatch {
    fn tick(&mut self, elapsed: Duration) {
        if self.state == ProgramState::Running {
            self.elapsed = self.elapsed.saturating_add(elapsed);
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
            ProgramState::Paused => ProgramState::Running,
            other => other,
        };
    }

    fn next(&mut self) {
        self.lap();
    }

    fn state(&self) -> ProgramState {
        self.state
    }

    fn time_display(&self) -> Duration {
        self.elapsed
    }

    fn is_overflow(&self) -> bool {
        false
    }

    fn counts_up(&self) -> bool {
        true
    }

    fn laps(&self) -> &[Duration] {
        &self.laps
    }

    fn total_elapsed(&self) -> Option<Duration> {
        Some(self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_only_while_running() {
        let mut sw = Stopwatch::new();
        sw.tick(Duration::from_secs(1));
        assert_eq!(sw.time_display(), Duration::ZERO);

        sw.start();
        sw.tick(Duration::from_secs(2));
        sw.toggle_pause();
        sw.tick(Duration::from_secs(5));
        assert_eq!(sw.state(), ProgramState::Paused);
        assert_eq!(sw.time_display(), Duration::from_secs(2));

        sw.toggle_pause();
        sw.tick(Duration::from_secs(1));
        assert_eq!(sw.time_display(), Duration::from_secs(3));
    }

    #[test]
    fn toggle_pause_before_start_is_ignored() {
        let mut sw = Stopwatch::new();
        sw.toggle_pause();
        assert_eq!(sw.state(), ProgramState::Ready);
    }

    #[test]
    fn start_is_one_shot() {
        let mut sw = Stopwatch::new();
        sw.start();
        sw.toggle_pause();
        sw.start();
        assert_eq!(sw.state(), ProgramState::Paused);
    }

    #[test]
    fn next_records_lap_and_resets() {
        let mut sw = Stopwatch::new();
        sw.start();
        sw.tick(Duration::from_secs(30));
        sw.next();
        sw.tick(Duration::from_secs(45));
        sw.next();
        sw.tick(Duration::from_secs(5));

        assert_eq!(sw.laps(), &[Duration::from_secs(30), Duration::from_secs(45)]);
        assert_eq!(sw.time_display(), Duration::from_secs(5));
        assert_eq!(sw.total(), Duration::from_secs(80));
        assert_eq!(sw.total_elapsed(), Some(Duration::from_secs(80)));
    }

    #[test]
    fn total_saturates() {
        let mut sw = Stopwatch::new();
        sw.start();
        sw.tick(Duration::MAX);
        sw.next();
        sw.tick(Duration::from_secs(1));

        assert_eq!(sw.total(), Duration::MAX);
    }

    #[test]
    fn never_overflows_or_runs_low() {
        let mut sw = Stopwatch::new();
        sw.start();
        sw.tick(Duration::from_secs(3_600));

        assert!(!sw.is_overflow());
        assert!(!sw.is_low_time(Duration::from_secs(30)));
        assert!(sw.counts_up());
        assert!(sw.position().is_none());
    }
}
