//! Countdown clock for the debate phase.
//!
//! The clock owns time-based state only. Scheduling the 1 Hz `tick`
//! calls belongs to the presentation layer, which subscribes and
//! unsubscribes in lockstep with phase transitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClockState {
    #[default]
    Stopped,
    Running,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DebateClock {
    state: ClockState,
    remaining: u32,
    duration: u32,
}

impl DebateClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> ClockState {
        self.state
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Full duration of the current cycle.
    #[must_use]
    pub const fn duration(&self) -> u32 {
        self.duration
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, ClockState::Running)
    }

    /// Arm the clock with a fresh duration and start counting.
    pub const fn start(&mut self, duration_seconds: u32) {
        self.duration = duration_seconds;
        self.remaining = duration_seconds;
        self.state = ClockState::Running;
    }

    /// Halt the countdown, preserving the remaining time.
    pub const fn pause(&mut self) {
        if matches!(self.state, ClockState::Running) {
            self.state = ClockState::Stopped;
        }
    }

    /// Continue a paused countdown. No-op once the time is gone.
    pub const fn resume(&mut self) {
        if matches!(self.state, ClockState::Stopped) && self.remaining > 0 {
            self.state = ClockState::Running;
        }
    }

    /// Re-arm from any state; used by the manual reset control and on
    /// each new round's debate entry.
    pub const fn reset(&mut self, duration_seconds: u32) {
        self.start(duration_seconds);
    }

    /// Advance one second of real time. Returns `true` exactly once per
    /// `start`/`reset` cycle, on the tick that exhausts the countdown.
    /// Has no effect unless the clock is running.
    pub const fn tick(&mut self) -> bool {
        if !matches!(self.state, ClockState::Running) {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = ClockState::Expired;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_round_trips_the_duration() {
        let mut clock = DebateClock::new();
        clock.reset(120);
        assert_eq!(clock.remaining(), 120);
        assert_eq!(clock.duration(), 120);
        assert!(clock.is_running());
    }

    #[test]
    fn pause_preserves_remaining_and_resume_continues() {
        let mut clock = DebateClock::new();
        clock.start(10);
        assert!(!clock.tick());
        clock.pause();
        assert_eq!(clock.state(), ClockState::Stopped);
        assert_eq!(clock.remaining(), 9);
        assert!(!clock.tick());
        assert_eq!(clock.remaining(), 9);
        clock.resume();
        assert!(clock.is_running());
    }

    #[test]
    fn expiry_fires_exactly_once_and_never_underflows() {
        let mut clock = DebateClock::new();
        clock.start(3);
        assert!(!clock.tick());
        assert!(!clock.tick());
        assert!(clock.tick());
        assert_eq!(clock.state(), ClockState::Expired);
        assert_eq!(clock.remaining(), 0);
        assert!(!clock.tick());
        assert_eq!(clock.remaining(), 0);
    }

    #[test]
    fn resume_at_zero_is_a_no_op() {
        let mut clock = DebateClock::new();
        clock.start(1);
        assert!(clock.tick());
        clock.resume();
        assert_eq!(clock.state(), ClockState::Expired);
        clock.pause();
        clock.resume();
        assert!(!clock.is_running());
    }

    #[test]
    fn reset_after_expiry_starts_a_new_cycle() {
        let mut clock = DebateClock::new();
        clock.start(1);
        assert!(clock.tick());
        clock.reset(2);
        assert!(clock.is_running());
        assert!(!clock.tick());
        assert!(clock.tick());
    }
}
