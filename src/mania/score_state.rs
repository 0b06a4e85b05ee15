use serde::{Deserialize, Serialize};

use crate::model::score::Score;

/// Aggregation for a score's current state i.e. what are the current hitresults.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ManiaScoreState {
    /// Amount of current 320s.
    pub n320: u32,
    /// Amount of current 300s.
    pub n300: u32,
    /// Amount of current 200s.
    pub n200: u32,
    /// Amount of current 100s.
    pub n100: u32,
    /// Amount of current 50s.
    pub n50: u32,
    /// Amount of current misses.
    pub misses: u32,
}

impl ManiaScoreState {
    /// Create a new empty score state.
    pub const fn new() -> Self {
        Self {
            n320: 0,
            n300: 0,
            n200: 0,
            n100: 0,
            n50: 0,
            misses: 0,
        }
    }

    /// Return the total amount of hits by adding everything up.
    pub fn total_hits(&self) -> u64 {
        u64::from(self.n320)
            + u64::from(self.n300)
            + u64::from(self.n200)
            + u64::from(self.n100)
            + u64::from(self.n50)
            + u64::from(self.misses)
    }

    /// Calculate the accuracy between `0.0` and `1.0` for this state.
    ///
    /// 320s are weighted slightly higher than 300s.
    pub fn accuracy(&self) -> f64 {
        let total_hits = self.total_hits();

        if total_hits == 0 {
            return 0.0;
        }

        let numerator = 320 * u64::from(self.n320)
            + 300 * u64::from(self.n300)
            + 200 * u64::from(self.n200)
            + 100 * u64::from(self.n100)
            + 50 * u64::from(self.n50);

        let denominator = 320 * total_hits;

        numerator as f64 / denominator as f64
    }
}

impl From<&Score> for ManiaScoreState {
    fn from(score: &Score) -> Self {
        Self {
            n320: score.n_geki,
            n300: score.n300,
            n200: score.n_katu,
            n100: score.n100,
            n50: score.n50,
            misses: score.misses,
        }
    }
}
