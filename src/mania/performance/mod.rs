use crate::{
    mania::{ManiaDifficultyAttributes, ManiaPerformanceAttributes, ManiaScoreState},
    model::mods::GameMods,
};

use self::calculator::ManiaPerformanceCalculator;

mod calculator;

/// Performance calculator on osu!mania maps.
///
/// # Example
///
/// ```
/// use osu_perf::{mania::{ManiaDifficultyAttributes, ManiaPerformance}, GameMods};
///
/// let attrs = ManiaDifficultyAttributes {
///     stars: 4.8,
///     max_combo: 2400,
///     great_hit_window: 40.0,
/// };
///
/// let pp_result = ManiaPerformance::new(attrs)
///     .mods(GameMods::DT)
///     .n320(1100)
///     .n300(300)
///     .n200(20)
///     .misses(2)
///     .calculate();
///
/// println!("PP: {} | Stars: {}", pp_result.pp(), pp_result.stars());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct ManiaPerformance {
    attrs: ManiaDifficultyAttributes,
    mods: GameMods,
    n320: Option<u32>,
    n300: Option<u32>,
    n200: Option<u32>,
    n100: Option<u32>,
    n50: Option<u32>,
    misses: Option<u32>,
}

impl ManiaPerformance {
    /// Create a new performance calculator for osu!mania maps.
    pub const fn new(attrs: ManiaDifficultyAttributes) -> Self {
        Self {
            attrs,
            mods: GameMods::NM,
            n320: None,
            n300: None,
            n200: None,
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

    /// Specify the amount of 320s of a play.
    pub const fn n320(mut self, n320: u32) -> Self {
        self.n320 = Some(n320);

        self
    }

    /// Specify the amount of 300s of a play.
    pub const fn n300(mut self, n300: u32) -> Self {
        self.n300 = Some(n300);

        self
    }

    /// Specify the amount of 200s of a play.
    pub const fn n200(mut self, n200: u32) -> Self {
        self.n200 = Some(n200);

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
    pub const fn misses(mut self, n_misses: u32) -> Self {
        self.misses = Some(n_misses);

        self
    }

    /// Provide parameters through an [`ManiaScoreState`].
    pub const fn state(mut self, state: ManiaScoreState) -> Self {
        let ManiaScoreState {
            n320,
            n300,
            n200,
            n100,
            n50,
            misses,
        } = state;

        self.n320 = Some(n320);
        self.n300 = Some(n300);
        self.n200 = Some(n200);
        self.n100 = Some(n100);
        self.n50 = Some(n50);
        self.misses = Some(misses);

        self
    }

    /// Create the [`ManiaScoreState`] that will be used for performance calculation.
    ///
    /// Unspecified 320s fill up the remainder of the map's maximum combo.
    /// Since hold notes contribute more than one combo, this is only an
    /// approximation of the amount of notes.
    pub fn generate_state(&self) -> ManiaScoreState {
        let n300 = self.n300.unwrap_or(0);
        let n200 = self.n200.unwrap_or(0);
        let n100 = self.n100.unwrap_or(0);
        let n50 = self.n50.unwrap_or(0);
        let misses = self.misses.unwrap_or(0);

        let n320 = self.n320.unwrap_or_else(|| {
            self.attrs
                .max_combo
                .saturating_sub(
                    n300.saturating_add(n200)
                        .saturating_add(n100)
                        .saturating_add(n50)
                        .saturating_add(misses),
                )
        });

        ManiaScoreState {
            n320,
            n300,
            n200,
            n100,
            n50,
            misses,
        }
    }

    /// Calculate all performance related values, including pp and stars.
    pub fn calculate(self) -> ManiaPerformanceAttributes {
        let state = self.generate_state();

        ManiaPerformanceCalculator::new(self.attrs, self.mods, state).calculate()
    }
}

impl From<ManiaDifficultyAttributes> for ManiaPerformance {
    fn from(attrs: ManiaDifficultyAttributes) -> Self {
        Self::new(attrs)
    }
}

impl From<ManiaPerformanceAttributes> for ManiaPerformance {
    fn from(attrs: ManiaPerformanceAttributes) -> Self {
        attrs.difficulty.into()
    }
}
