use crate::{
    model::mods::GameMods,
    taiko::{TaikoDifficultyAttributes, TaikoPerformanceAttributes, TaikoScoreState},
};

use self::calculator::TaikoPerformanceCalculator;

mod calculator;

/// Performance calculator on osu!taiko maps.
///
/// # Example
///
/// ```
/// use osu_perf::{taiko::{TaikoDifficultyAttributes, TaikoPerformance}, GameMods};
///
/// let attrs = TaikoDifficultyAttributes {
///     stars: 5.1,
///     max_combo: 1200,
///     great_hit_window: 30.0,
///     ..Default::default()
/// };
///
/// let pp_result = TaikoPerformance::new(attrs)
///     .mods(GameMods::HR)
///     .n100(15)
///     .misses(2)
///     .calculate();
///
/// println!("PP: {} | Stars: {}", pp_result.pp(), pp_result.stars());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct TaikoPerformance {
    attrs: TaikoDifficultyAttributes,
    mods: GameMods,
    combo: Option<u32>,

    n300: Option<u32>,
    n100: Option<u32>,
    n50: Option<u32>,
    misses: Option<u32>,
}

impl TaikoPerformance {
    /// Create a new performance calculator for osu!taiko maps.
    pub const fn new(attrs: TaikoDifficultyAttributes) -> Self {
        Self {
            attrs,
            mods: GameMods::NM,
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

    /// Specify the amount of misses of the play.
    pub const fn misses(mut self, n_misses: u32) -> Self {
        self.misses = Some(n_misses);

        self
    }

    /// Provide parameters through an [`TaikoScoreState`].
    pub const fn state(mut self, state: TaikoScoreState) -> Self {
        let TaikoScoreState {
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

    /// Create the [`TaikoScoreState`] that will be used for performance calculation.
    ///
    /// Unspecified 300s fill up the remaining notes, i.e. the map's maximum
    /// combo.
    pub fn generate_state(&self) -> TaikoScoreState {
        let misses = self.misses.unwrap_or(0);
        let n100 = self.n100.unwrap_or(0);
        let n50 = self.n50.unwrap_or(0);

        let n300 = self
            .n300
            .unwrap_or_else(|| self.attrs.max_combo.saturating_sub(n100.saturating_add(n50).saturating_add(misses)));

        let max_combo = self
            .combo
            .unwrap_or_else(|| self.attrs.max_combo.saturating_sub(misses));

        TaikoScoreState {
            max_combo,
            n300,
            n100,
            n50,
            misses,
        }
    }

    /// Calculate all performance related values, including pp and stars.
    pub fn calculate(self) -> TaikoPerformanceAttributes {
        let state = self.generate_state();

        TaikoPerformanceCalculator::new(self.attrs, self.mods, state).calculate()
    }
}

impl From<TaikoDifficultyAttributes> for TaikoPerformance {
    fn from(attrs: TaikoDifficultyAttributes) -> Self {
        Self::new(attrs)
    }
}

impl From<TaikoPerformanceAttributes> for TaikoPerformance {
    fn from(attrs: TaikoPerformanceAttributes) -> Self {
        attrs.difficulty.into()
    }
}
