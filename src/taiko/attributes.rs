use serde::{Deserialize, Serialize};

use crate::taiko::performance::TaikoPerformance;

/// The result of a difficulty calculation on an osu!taiko map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaikoDifficultyAttributes {
    /// The final star rating.
    #[serde(alias = "star_rating")]
    pub stars: f64,
    /// The maximum combo.
    pub max_combo: u32,
    /// The difficulty of the stamina skill.
    #[serde(alias = "stamina_difficulty")]
    pub stamina: f64,
    /// The difficulty of the rhythm skill.
    #[serde(alias = "rhythm_difficulty")]
    pub rhythm: f64,
    /// The difficulty of the color skill.
    #[serde(alias = "colour", alias = "colour_difficulty")]
    pub color: f64,
    /// The peak difficulty over all skills.
    #[serde(alias = "peak_difficulty")]
    pub peak: f64,
    /// The perceived hit window for an n300 inclusive of rate-adjusting mods (DT/HT/etc)
    pub great_hit_window: f64,
}

impl TaikoDifficultyAttributes {
    /// Return the maximum combo.
    pub const fn max_combo(&self) -> u32 {
        self.max_combo
    }

    /// Returns a builder for performance calculation.
    pub fn performance(self) -> TaikoPerformance {
        self.into()
    }
}

/// The result of a performance calculation on an osu!taiko map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaikoPerformanceAttributes {
    /// The difficulty attributes that were used for the performance calculation
    pub difficulty: TaikoDifficultyAttributes,
    /// The final performance points.
    pub pp: f64,
    /// The accuracy portion of the final pp.
    pub pp_acc: f64,
    /// The strain portion of the final pp.
    pub pp_difficulty: f64,
    /// Scaled miss count based on total hits.
    pub effective_miss_count: f64,
}

impl TaikoPerformanceAttributes {
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
    pub fn performance(self) -> TaikoPerformance {
        self.difficulty.into()
    }
}

impl From<TaikoPerformanceAttributes> for TaikoDifficultyAttributes {
    fn from(attributes: TaikoPerformanceAttributes) -> Self {
        attributes.difficulty
    }
}
