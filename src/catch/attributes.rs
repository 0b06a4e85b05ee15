use serde::{Deserialize, Serialize};

use crate::catch::performance::CatchPerformance;

/// The result of a difficulty calculation on an osu!catch map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatchDifficultyAttributes {
    /// The final star rating
    #[serde(alias = "star_rating")]
    pub stars: f64,
    /// The maximum combo i.e. the amount of fruits and droplets.
    pub max_combo: u32,
    /// The approach rate.
    #[serde(alias = "approach_rate")]
    pub ar: f64,
}

impl CatchDifficultyAttributes {
    /// Return the maximum combo.
    pub const fn max_combo(&self) -> u32 {
        self.max_combo
    }

    /// Returns a builder for performance calculation.
    pub fn performance(self) -> CatchPerformance {
        self.into()
    }
}

/// The result of a performance calculation on an osu!catch map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatchPerformanceAttributes {
    /// The difficulty attributes that were used for the performance calculation
    pub difficulty: CatchDifficultyAttributes,
    /// The final performance points.
    pub pp: f64,
}

impl CatchPerformanceAttributes {
    /// Return the star value.
    pub const fn stars(&self) -> f64 {
        self.difficulty.stars
    }

    /// Return the performance point value.
    pub const fn pp(&self) -> f64 {
        self.pp
    }

    /// Return the maximum combo of the map.
    pub const fn max_combo(&self) -> u32 {
        self.difficulty.max_combo
    }

    /// Returns a builder for performance calculation.
    pub fn performance(self) -> CatchPerformance {
        self.difficulty.into()
    }
}

impl From<CatchPerformanceAttributes> for CatchDifficultyAttributes {
    fn from(attributes: CatchPerformanceAttributes) -> Self {
        attributes.difficulty
    }
}
