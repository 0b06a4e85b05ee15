use serde::{Deserialize, Serialize};

use crate::{error::PerformanceError, model::mode::GameMode, model::mods::GameMods};

/// The raw outcome of a play.
///
/// The judgement fields are shared between all modes but carry a different
/// meaning in each of them:
///
/// | Field | osu! | taiko | catch | mania |
/// | - | - | - | - | - |
/// | `n_geki` | - | - | - | 320s |
/// | `n300` | 300s | 300s | fruits | 300s |
/// | `n_katu` | - | - | tiny droplet misses | 200s |
/// | `n100` | 100s | 100s | droplets | 100s |
/// | `n50` | 50s | 50s | tiny droplets | 50s |
/// | `misses` | misses | misses | fruit & droplet misses | misses |
///
/// Each mode's score state (e.g. [`CatchScoreState`]) maps these fields
/// onto properly named counts.
///
/// [`CatchScoreState`]: crate::catch::CatchScoreState
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// The mode id: `0` for osu!, `1` for taiko, `2` for catch, `3` for mania.
    pub mode: u8,
    /// The total score.
    #[serde(default)]
    pub score: u64,
    /// Maximum combo of the play.
    pub max_combo: u32,
    /// The enabled mods.
    #[serde(default)]
    pub mods: GameMods,
    /// Accuracy either between `0.0` and `1.0` or between `0.0` and `100.0`.
    #[serde(default)]
    pub accuracy: f64,
    /// Amount of gekis.
    #[serde(default, alias = "num_gekis")]
    pub n_geki: u32,
    /// Amount of katus.
    #[serde(default, alias = "num_katus")]
    pub n_katu: u32,
    /// Amount of 300s.
    #[serde(default, alias = "num_300s")]
    pub n300: u32,
    /// Amount of 100s.
    #[serde(default, alias = "num_100s")]
    pub n100: u32,
    /// Amount of 50s.
    #[serde(default, alias = "num_50s")]
    pub n50: u32,
    /// Amount of misses.
    #[serde(default, alias = "num_misses")]
    pub misses: u32,
}

impl Score {
    /// The [`GameMode`] of the play.
    ///
    /// Fails with [`PerformanceError::UnsupportedMode`] if the mode id is
    /// unknown.
    pub fn game_mode(&self) -> Result<GameMode, PerformanceError> {
        GameMode::try_from(self.mode)
    }

    /// The accuracy between `0.0` and `1.0`.
    pub fn normalized_accuracy(&self) -> f64 {
        normalize_accuracy(self.accuracy)
    }
}

/// Values up to `1.0` are considered to be normalized already, anything above
/// is treated as a percentage.
pub(crate) fn normalize_accuracy(acc: f64) -> f64 {
    if acc <= 1.0 {
        acc
    } else {
        acc / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_normalization() {
        let mut score = Score {
            accuracy: 0.9919,
            ..Default::default()
        };

        assert!((score.normalized_accuracy() - 0.9919).abs() < 1e-12);

        score.accuracy = 99.19;
        assert!((score.normalized_accuracy() - 0.9919).abs() < 1e-12);

        score.accuracy = 1.0;
        assert!((score.normalized_accuracy() - 1.0).abs() < f64::EPSILON);

        score.accuracy = 100.0;
        assert!((score.normalized_accuracy() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unsupported_mode() {
        let score = Score {
            mode: 4,
            ..Default::default()
        };

        assert!(matches!(
            score.game_mode(),
            Err(PerformanceError::UnsupportedMode(4))
        ));
    }

    #[test]
    fn deserialize_from_json() {
        let json = r#"{
            "mode": 1,
            "max_combo": 3790,
            "mods": 64,
            "accuracy": 99.74,
            "n300": 3770,
            "n100": 20
        }"#;

        let score: Score = serde_json::from_str(json).unwrap();

        assert_eq!(score.game_mode().unwrap(), GameMode::Taiko);
        assert!(score.mods.dt());
        assert_eq!(score.n300, 3770);
        assert_eq!(score.misses, 0);
    }

    #[test]
    fn deserialize_num_prefixed_counts() {
        let json = r#"{
            "mode": 3,
            "max_combo": 1500,
            "num_gekis": 812,
            "num_katus": 95,
            "num_300s": 560,
            "num_100s": 14,
            "num_50s": 3,
            "num_misses": 7
        }"#;

        let score: Score = serde_json::from_str(json).unwrap();

        assert_eq!(score.n_geki, 812);
        assert_eq!(score.n_katu, 95);
        assert_eq!(score.n300, 560);
        assert_eq!(score.n100, 14);
        assert_eq!(score.n50, 3);
        assert_eq!(score.misses, 7);
    }
}
