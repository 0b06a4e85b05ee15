use crate::{
    model::{mods::GameMods, score::normalize_accuracy},
    osu::{OsuDifficultyAttributes, OsuPerformanceAttributes, OsuScoreState},
};

use self::calculator::OsuPerformanceCalculator;

mod calculator;

/// Performance calculator on osu!standard maps.
///
/// # Example
///
/// ```
/// use osu_perf::{osu::{OsuDifficultyAttributes, OsuPerformance}, GameMods};
///
/// let attrs = OsuDifficultyAttributes {
///     stars: 5.3,
///     max_combo: 1000,
///     aim: 2.7,
///     speed: 2.4,
///     speed_note_count: 250.0,
///     slider_factor: 0.98,
///     ar: 9.0,
///     od: 8.0,
///     n_circles: 400,
///     n_sliders: 300,
///     n_spinners: 1,
///     ..Default::default()
/// };
///
/// let perf_attrs = OsuPerformance::new(attrs)
///     .mods(GameMods::HD | GameMods::DT)
///     .combo(950)
///     .n100(12)
///     .misses(1)
///     .accuracy(98.5)
///     .calculate();
///
/// println!("PP: {} | Stars: {}", perf_attrs.pp(), perf_attrs.stars());
///
/// // Reusing the attributes for another calculation
/// let max_pp = perf_attrs.performance().calculate().pp();
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct OsuPerformance {
    attrs: OsuDifficultyAttributes,
    mods: GameMods,
    acc: Option<f64>,
    combo: Option<u32>,

    n300: Option<u32>,
    n100: Option<u32>,
    n50: Option<u32>,
    misses: Option<u32>,
}

impl OsuPerformance {
    /// Create a new performance calculator for osu!standard maps.
    pub const fn new(attrs: OsuDifficultyAttributes) -> Self {
        Self {
            attrs,
            mods: GameMods::NM,
            acc: None,
            combo: None,

            n300: None,
            n100: None,
            n50: None,
            misses: None,
        }
    }

    /// Specify mods.
    ///
    /// See <https://github.com/ppy/osu-api/wiki#mods>
    pub fn mods(mut self, mods: impl Into<GameMods>) -> Self {
        self.mods = mods.into();

        self
    }

    /// Specify the max combo of the play.
    pub const fn combo(mut self, combo: u32) -> Self {
        self.combo = Some(combo);

        self
    }

    /// Specify the amount of 300s of a play.
    pub const fn n300(mut self, n300: u32) -> Self {
        self.n300 = Some(n300);

        self
    }

    /// Specify the amount of 100s of a play.
    pub const fn n100(mut self, n100: u32) -> Self {
        self.n100 = Some(n100);

        self
    }

    /// Specify the amount of 50s of a play.
    pub const fn n50(mut self, n50: u32) -> Self {
        self.n50 = Some(n50);

        self
    }

    /// Specify the amount of misses of a play.
    pub const fn misses(mut self, misses: u32) -> Self {
        self.misses = Some(misses);

        self
    }

    /// Specify the accuracy of a play, either between `0.0` and `1.0` or
    /// between `0.0` and `100.0`.
    ///
    /// Unlike the other modes, osu!standard uses this value as-is instead of
    /// deriving it from the hitresults. If no accuracy is specified, it will
    /// be calculated from the hitresults.
    pub fn accuracy(mut self, acc: f64) -> Self {
        self.acc = Some(normalize_accuracy(acc));

        self
    }

    /// Provide parameters through an [`OsuScoreState`].
    pub const fn state(mut self, state: OsuScoreState) -> Self {
        let OsuScoreState {
            max_combo,
            n300,
            n100,
            n50,
            misses,
        } = state;

        self.combo = Some(max_combo);
        self.n300 = Some(n300);
        self.n100 = Some(n100);
        self.n50 = Some(n50);
        self.misses = Some(misses);

        self
    }

    /// Create the [`OsuScoreState`] that will be used for performance calculation.
    ///
    /// Unspecified 300s fill up the remaining objects of the map and an
    /// unspecified combo is assumed to be the maximum combo minus misses.
    pub fn generate_state(&self) -> OsuScoreState {
        let misses = self.misses.unwrap_or(0);
        let n100 = self.n100.unwrap_or(0);
        let n50 = self.n50.unwrap_or(0);

        let n300 = self.n300.unwrap_or_else(|| {
            self.attrs
                .n_objects()
                .saturating_sub(n100.saturating_add(n50).saturating_add(misses))
        });

        let max_combo = self
            .combo
            .unwrap_or_else(|| self.attrs.max_combo.saturating_sub(misses));

        OsuScoreState {
            max_combo,
            n300,
            n100,
            n50,
            misses,
        }
    }

    /// Calculate all performance related values, including pp and stars.
    pub fn calculate(self) -> OsuPerformanceAttributes {
        let state = self.generate_state();
        let acc = self.acc.unwrap_or_else(|| state.accuracy());
        let effective_miss_count = calculate_effective_misses(&self.attrs, &state);

        OsuPerformanceCalculator::new(self.attrs, self.mods, acc, state, effective_miss_count)
            .calculate()
    }
}

impl From<OsuDifficultyAttributes> for OsuPerformance {
    fn from(attrs: OsuDifficultyAttributes) -> Self {
        Self::new(attrs)
    }
}

impl From<OsuPerformanceAttributes> for OsuPerformance {
    fn from(attrs: OsuPerformanceAttributes) -> Self {
        attrs.difficulty.into()
    }
}

/// Misses plus an estimation of slider breaks based on the missing combo.
fn calculate_effective_misses(attrs: &OsuDifficultyAttributes, state: &OsuScoreState) -> f64 {
    let mut combo_based_miss_count = 0.0;

    if attrs.n_sliders > 0 {
        let full_combo_threshold = f64::from(attrs.max_combo) - 0.1 * f64::from(attrs.n_sliders);

        if f64::from(state.max_combo) < full_combo_threshold {
            combo_based_miss_count = full_combo_threshold / f64::from(state.max_combo).max(1.0);
        }
    }

    // Can't have more breaks than imperfect hits
    combo_based_miss_count = combo_based_miss_count.min(state.total_imperfect_hits() as f64);

    combo_based_miss_count.max(f64::from(state.misses))
}
