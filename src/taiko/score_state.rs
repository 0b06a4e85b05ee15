use serde::{Deserialize, Serialize};

use crate::model::score::Score;

/// Aggregation for a score's current state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaikoScoreState {
    /// Maximum combo that the score has had so far.
    /// **Not** the maximum possible combo of the map so far.
    pub max_combo: u32,
    /// Amount of current 300s.
    pub n300: u32,
    /// Amount of current 100s.
    pub n100: u32,
    /// Amount of current 50s.
    ///
    /// osu!taiko itself never awards them but legacy score data may carry
    /// some; they count as successful hits without adding to accuracy.
    pub n50: u32,
    /// Amount of current misses.
    pub misses: u32,
}

impl TaikoScoreState {
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
        self.total_successful_hits() + u64::from(self.misses)
    }

    /// Return the amount of hits that were not a miss.
    pub fn total_successful_hits(&self) -> u64 {
        u64::from(self.n300) + u64::from(self.n100) + u64::from(self.n50)
    }

    /// Calculate the accuracy between `0.0` and `1.0` for this state.
    pub fn accuracy(&self) -> f64 {
        let total_hits = self.total_hits();

        if total_hits == 0 {
            return 0.0;
        }

        let numerator = 2 * u64::from(self.n300) + u64::from(self.n100);
        let denominator = 2 * total_hits;

        numerator as f64 / denominator as f64
    }
}

impl From<&Score> for TaikoScoreState {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifties_count_as_hits_but_not_accuracy() {
        let state = TaikoScoreState {
            max_combo: 0,
            n300: 2,
            n100: 1,
            n50: 1,
            misses: 0,
        };

        assert_eq!(state.total_hits(), 4);
        assert_eq!(state.total_successful_hits(), 4);
        assert!((state.accuracy() - 5.0 / 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn huge_counts_do_not_overflow() {
        let state = TaikoScoreState {
            max_combo: 0,
            n300: 2_200_000_000,
            n100: 2_200_000_000,
            n50: 0,
            misses: 0,
        };

        assert_eq!(state.total_hits(), 4_400_000_000);
        assert!((state.accuracy() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn empty_accuracy() {
        assert!(TaikoScoreState::new().accuracy().abs() < f64::EPSILON);
    }
}
