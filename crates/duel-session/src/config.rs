//! Configuration for a Love Duel session.

use std::time::Duration;

use duel_games::rolling::DEFAULT_ROLL_TICKS;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible rolls and forfeit draws.
    pub seed: u64,
    /// Spinning frames shown before a duel roll settles.
    pub roll_ticks: u32,
    /// Time between spinning frames.
    pub roll_tick_interval: Duration,
    /// Time between forfeit countdown ticks.
    pub countdown_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            roll_ticks: DEFAULT_ROLL_TICKS,
            roll_tick_interval: Duration::from_millis(50),
            countdown_interval: Duration::from_secs(1),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of spinning frames (clamped to 0-100).
    pub fn with_roll_ticks(mut self, ticks: u32) -> Self {
        self.roll_ticks = ticks.min(100);
        self
    }

    /// Set the spinning frame interval.
    pub fn with_roll_tick_interval(mut self, interval: Duration) -> Self {
        self.roll_tick_interval = interval;
        self
    }

    /// Set the countdown tick interval.
    pub fn with_countdown_interval(mut self, interval: Duration) -> Self {
        self.countdown_interval = interval;
        self
    }

    /// Total wall-clock time of the rolling animation.
    pub fn roll_duration(&self) -> Duration {
        self.roll_tick_interval * self.roll_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.roll_ticks, 20);
        assert_eq!(cfg.roll_duration(), Duration::from_secs(1));
        assert_eq!(cfg.countdown_interval, Duration::from_secs(1));
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_seed(7)
            .with_roll_ticks(4)
            .with_roll_tick_interval(Duration::from_millis(25))
            .with_countdown_interval(Duration::from_millis(500));
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.roll_ticks, 4);
        assert_eq!(cfg.roll_duration(), Duration::from_millis(100));
        assert_eq!(cfg.countdown_interval, Duration::from_millis(500));
    }

    #[test]
    fn roll_ticks_clamped() {
        let cfg = SessionConfig::default().with_roll_ticks(10_000);
        assert_eq!(cfg.roll_ticks, 100);
    }
}
