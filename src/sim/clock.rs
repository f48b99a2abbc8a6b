//! Countdown clock
//!
//! Wall-clock driven: each `tick` subtracts the real time elapsed since the
//! previous tick. Timestamps are milliseconds from any monotonic origin.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    remaining_ms: u64,
    last_tick_ms: u64,
}

impl GameClock {
    /// A clock holding `initial_ms`, last ticked at `now`
    pub fn new(initial_ms: u64, now: u64) -> Self {
        Self {
            remaining_ms: initial_ms,
            last_tick_ms: now,
        }
    }

    /// Reset the countdown to `initial_ms` starting at `now`
    pub fn start(&mut self, initial_ms: u64, now: u64) {
        self.remaining_ms = initial_ms;
        self.last_tick_ms = now;
    }

    /// Advance to `now` and return the remaining time (floored at zero)
    pub fn tick(&mut self, now: u64) -> u64 {
        let elapsed = now.saturating_sub(self.last_tick_ms);
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed);
        self.last_tick_ms = now;
        self.remaining_ms
    }

    /// Add time to the countdown
    pub fn add_bonus(&mut self, amount_ms: u64) {
        self.remaining_ms = self.remaining_ms.saturating_add(amount_ms);
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn last_tick_ms(&self) -> u64 {
        self.last_tick_ms
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_ms == 0
    }
}

/// Format milliseconds as `MM:SS` (truncating partial seconds)
pub fn format_mmss(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_subtracts_elapsed() {
        let mut clock = GameClock::default();
        clock.start(90_000, 1_000);
        assert_eq!(clock.tick(6_000), 85_000);
        assert_eq!(clock.tick(6_500), 84_500);
        assert_eq!(clock.last_tick_ms(), 6_500);
    }

    #[test]
    fn test_tick_floors_at_zero() {
        let mut clock = GameClock::new(1_000, 0);
        assert_eq!(clock.tick(5_000), 0);
        assert!(clock.is_expired());
        assert_eq!(clock.tick(9_000), 0);
    }

    #[test]
    fn test_backwards_timestamp_is_no_time() {
        let mut clock = GameClock::new(1_000, 500);
        assert_eq!(clock.tick(100), 1_000);
        assert_eq!(clock.tick(300), 800);
    }

    #[test]
    fn test_add_bonus() {
        let mut clock = GameClock::new(20_000, 0);
        clock.add_bonus(10_000);
        assert_eq!(clock.remaining_ms(), 30_000);
        assert_eq!(clock.tick(1_000), 29_000);
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(90_000), "01:30");
        assert_eq!(format_mmss(20_000), "00:20");
        assert_eq!(format_mmss(59_999), "00:59");
        assert_eq!(format_mmss(0), "00:00");
    }
}
