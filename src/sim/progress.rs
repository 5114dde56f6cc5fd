//! Score accumulation toward the celebration threshold
//!
//! Holds no drawing state; the fill bar is a pure function of the ratio.

use serde::{Deserialize, Serialize};

/// Result of recording one collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collected {
    /// Fill ratio after this collection; 1.0 only at the crossing instant
    pub ratio: f32,
    /// True exactly once per threshold crossing; the score has already been
    /// reset to zero when this is returned
    pub threshold_reached: bool,
}

/// Score / threshold tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    score: u32,
    threshold: u32,
}

impl Progress {
    /// `threshold` must be positive; config validation enforces this before
    /// a session is constructed.
    pub fn new(threshold: u32) -> Self {
        Self {
            score: 0,
            threshold,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Current fill ratio in `[0, 1)`
    pub fn ratio(&self) -> f32 {
        self.score as f32 / self.threshold as f32
    }

    /// Fill-bar width for a bar of `bar_max` at the current ratio
    pub fn fill_width(&self, bar_max: f32) -> f32 {
        self.ratio() * bar_max
    }

    /// Record one collection. On reaching the threshold the score resets to
    /// zero in the same call; the returned ratio still reports the crossing
    /// instant (1.0) so the bar can render full for that frame.
    pub fn on_collected(&mut self) -> Collected {
        self.score += 1;
        let ratio = self.ratio();
        let threshold_reached = self.score >= self.threshold;
        if threshold_reached {
            self.score = 0;
        }
        Collected {
            ratio,
            threshold_reached,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_wraparound() {
        let mut progress = Progress::new(10);

        for expected in 1..=9u32 {
            let c = progress.on_collected();
            assert!(!c.threshold_reached);
            assert_eq!(progress.score(), expected);
            assert!((c.ratio - expected as f32 / 10.0).abs() < 1e-6);
        }

        let c = progress.on_collected();
        assert!(c.threshold_reached);
        assert!((c.ratio - 1.0).abs() < 1e-6);
        assert_eq!(progress.score(), 0);

        // The next collection starts a fresh cycle
        let c = progress.on_collected();
        assert!(!c.threshold_reached);
        assert_eq!(progress.score(), 1);
    }

    #[test]
    fn test_fill_width_tracks_ratio() {
        let mut progress = Progress::new(10);
        assert_eq!(progress.fill_width(300.0), 0.0);
        let _ = progress.on_collected();
        let _ = progress.on_collected();
        let _ = progress.on_collected();
        assert!((progress.fill_width(300.0) - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_threshold_one_fires_every_call() {
        let mut progress = Progress::new(1);
        for _ in 0..3 {
            let c = progress.on_collected();
            assert!(c.threshold_reached);
            assert_eq!(progress.score(), 0);
        }
    }
}
