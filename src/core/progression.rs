//! Leveling curve shared by the progression store and the UI.
//!
//! The curve maps a level to the cumulative experience needed to reach it:
//! level 1 is free, level 2 costs `base`, and every level after that costs
//! `multiplier` times the previous threshold.

use super::constants::{BASE_EXP_REQUIRED, EXP_MULTIPLIER, MAX_LEVEL};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelCurve {
    pub base: u64,
    pub multiplier: f64,
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self {
            base: BASE_EXP_REQUIRED,
            multiplier: EXP_MULTIPLIER,
        }
    }
}

impl LevelCurve {
    pub fn new(base: u64, multiplier: f64) -> Self {
        Self { base, multiplier }
    }

    /// Cumulative experience required to reach `level`.
    pub fn threshold(&self, level: u32) -> u64 {
        if level <= 1 {
            return 0;
        }
        let exponent = (level - 2) as i32;
        // `as` saturates, so very high levels pin at u64::MAX.
        (self.base as f64 * self.multiplier.powi(exponent)).round() as u64
    }

    /// Highest level whose threshold is covered by `experience`.
    pub fn level_for_experience(&self, experience: u64) -> u32 {
        let mut level = 1;
        while level < MAX_LEVEL && experience >= self.threshold(level + 1) {
            level += 1;
        }
        level
    }

    /// Experience accumulated past the threshold of `level`.
    pub fn progress_in_level(&self, level: u32, experience: u64) -> u64 {
        experience.saturating_sub(self.threshold(level))
    }

    /// Experience between `level` and the next one.
    pub fn level_span(&self, level: u32) -> u64 {
        self.threshold(level + 1)
            .saturating_sub(self.threshold(level))
    }
}
