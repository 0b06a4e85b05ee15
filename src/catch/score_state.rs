use serde::{Deserialize, Serialize};

use crate::model::score::Score;

/// Aggregation for a score's current state i.e. what was the
/// maximum combo so far and what are the current hitresults.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CatchScoreState {
    /// Maximum combo that the score has had so far.
    /// **Not** the maximum possible combo of the map so far.
    ///
    /// Note that only fruits and droplets are considered for osu!catch combo.
    pub max_combo: u32,
    /// Amount of current fruits (300s).
    pub n_fruits: u32,
    /// Amount of current droplets (100s).
    pub n_droplets: u32,
    /// Amount of current tiny droplets (50s).
    pub n_tiny_droplets: u32,
    /// Amount of current tiny droplet misses (katus).
    pub n_tiny_droplet_misses: u32,
    /// Amount of current misses (fruits and droplets).
    pub misses: u32,
}

impl CatchScoreState {
    /// Create a new empty score state.
    pub const fn new() -> Self {
        Self {
            max_combo: 0,
            n_fruits: 0,
            n_droplets: 0,
            n_tiny_droplets: 0,
            n_tiny_droplet_misses: 0,
            misses: 0,
        }
    }

    /// Return the total amount of hits by adding everything up.
    pub fn total_hits(&self) -> u64 {
        self.total_successful_hits()
            + u64::from(self.n_tiny_droplet_misses)
            + u64::from(self.misses)
    }

    /// Return the amount of caught fruits, droplets, and tiny droplets.
    pub fn total_successful_hits(&self) -> u64 {
        u64::from(self.n_fruits) + u64::from(self.n_droplets) + u64::from(self.n_tiny_droplets)
    }

    /// Return the amount of objects that affect combo.
    pub fn combo_hits(&self) -> u64 {
        u64::from(self.n_fruits) + u64::from(self.n_droplets) + u64::from(self.misses)
    }

    /// Calculate the accuracy between `0.0` and `1.0` for this state.
    pub fn accuracy(&self) -> f64 {
        let total_hits = self.total_hits();

        if total_hits == 0 {
            return 0.0;
        }

        let numerator = self.total_successful_hits();

        (numerator as f64 / total_hits as f64).clamp(0.0, 1.0)
    }
}

impl From<&Score> for CatchScoreState {
    fn from(score: &Score) -> Self {
        Self {
            max_combo: score.max_combo,
            n_fruits: score.n300,
            n_droplets: score.n100,
            n_tiny_droplets: score.n50,
            n_tiny_droplet_misses: score.n_katu,
            misses: score.misses,
        }
    }
}
