use serde::{Deserialize, Serialize};

use crate::model::score::Score;

/// Aggregation for a score's current state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsuScoreState {
    /// Maximum combo that the score has had so far. **Not** the maximum
    /// possible combo of the map so far.
    pub max_combo: u32,
    /// Amount of current 300s.
    pub n300: u32,
    /// Amount of current 100s.
    pub n100: u32,
    /// Amount of current 50s.
    pub n50: u32,
    /// Amount of current misses.
    pub misses: u32,
}

impl OsuScoreState {
    /// Create a new empty score state.
    pub const fn new() -> Self {
        Self {
            max_combo: 0,
            n300: 0,
            n100: 0,
            n50: 0,
            misses: 0,
        }
    }

    /// Return the total amount of hits by adding everything up.
    pub fn total_hits(&self) -> u64 {
        u64::from(self.n300) + self.total_imperfect_hits()
    }

    /// Amount of hits that neither were a 300 nor a miss.
    pub(crate) fn total_imperfect_hits(&self) -> u64 {
        u64::from(self.n100) + u64::from(self.n50) + u64::from(self.misses)
    }

    /// Calculate the accuracy between `0.0` and `1.0` for this state.
    pub fn accuracy(&self) -> f64 {
        let total_hits = self.total_hits();

        if total_hits == 0 {
            return 0.0;
        }

        let numerator = 6 * u64::from(self.n300) + 2 * u64::from(self.n100) + u64::from(self.n50);
        let denominator = 6 * total_hits;

        numerator as f64 / denominator as f64
    }
}

impl From<&Score> for OsuScoreState {
    fn from(score: &Score) -> Self {
        Self {
            max_combo: score.max_combo,
            n300: score.n300,
            n100: score.n100,
            n50: score.n50,
            misses: score.misses,
        }
    }
}
