use crate::{
    catch::{CatchDifficultyAttributes, CatchPerformanceAttributes, CatchScoreState},
    model::mods::GameMods,
};

use self::calculator::CatchPerformanceCalculator;

mod calculator;

/// Performance calculator on osu!catch maps.
///
/// # Example
///
/// ```
/// use osu_perf::{catch::{CatchDifficultyAttributes, CatchPerformance}, GameMods};
///
/// let attrs = CatchDifficultyAttributes {
///     stars: 6.2,
///     max_combo: 1500,
///     ar: 9.0,
/// };
///
/// let pp_result = CatchPerformance::new(attrs)
///     .mods(GameMods::HD | GameMods::HR)
///     .combo(1200)
///     .droplets(120)
///     .tiny_droplets(300)
///     .tiny_droplet_misses(4)
///     .misses(1)
///     .calculate();
///
/// println!("PP: {} | Stars: {}", pp_result.pp(), pp_result.stars());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct CatchPerformance {
    attrs: CatchDifficultyAttributes,
    mods: GameMods,
    combo: Option<u32>,

    fruits: Option<u32>,
    droplets: Option<u32>,
    tiny_droplets: Option<u32>,
    tiny_droplet_misses: Option<u32>,
    misses: Option<u32>,
}

impl CatchPerformance {
    /// Create a new performance calculator for osu!catch maps.
    pub const fn new(attrs: CatchDifficultyAttributes) -> Self {
        Self {
            attrs,
            mods: GameMods::NM,
            combo: None,
            fruits: None,
            droplets: None,
            tiny_droplets: None,
            tiny_droplet_misses: None,
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

    /// Specify the amount of fruits of a play i.e. n300.
    pub const fn fruits(mut self, n_fruits: u32) -> Self {
        self.fruits = Some(n_fruits);

        self
    }

    /// Specify the amount of droplets of a play i.e. n100.
    pub const fn droplets(mut self, n_droplets: u32) -> Self {
        self.droplets = Some(n_droplets);

        self
    }

    /// Specify the amount of tiny droplets of a play i.e. n50.
    pub const fn tiny_droplets(mut self, n_tiny_droplets: u32) -> Self {
        self.tiny_droplets = Some(n_tiny_droplets);

        self
    }

    /// Specify the amount of tiny droplet misses of a play i.e. `n_katu`.
    pub const fn tiny_droplet_misses(mut self, n_tiny_droplet_misses: u32) -> Self {
        self.tiny_droplet_misses = Some(n_tiny_droplet_misses);

        self
    }

    /// Specify the amount of fruit / droplet misses of the play.
    pub const fn misses(mut self, n_misses: u32) -> Self {
        self.misses = Some(n_misses);

        self
    }

    /// Provide parameters through an [`CatchScoreState`].
    pub const fn state(mut self, state: CatchScoreState) -> Self {
        let CatchScoreState {
            max_combo,
            n_fruits,
            n_droplets,
            n_tiny_droplets,
            n_tiny_droplet_misses,
            misses,
        } = state;

        self.combo = Some(max_combo);
        self.fruits = Some(n_fruits);
        self.droplets = Some(n_droplets);
        self.tiny_droplets = Some(n_tiny_droplets);
        self.tiny_droplet_misses = Some(n_tiny_droplet_misses);
        self.misses = Some(misses);

        self
    }

    /// Create the [`CatchScoreState`] that will be used for performance calculation.
    ///
    /// Unspecified fruits fill up the part of the maximum combo that is not
    /// covered by droplets and misses.
    pub fn generate_state(&self) -> CatchScoreState {
        let misses = self.misses.unwrap_or(0);
        let n_droplets = self.droplets.unwrap_or(0);
        let n_tiny_droplets = self.tiny_droplets.unwrap_or(0);
        let n_tiny_droplet_misses = self.tiny_droplet_misses.unwrap_or(0);

        let n_fruits = self
            .fruits
            .unwrap_or_else(|| self.attrs.max_combo.saturating_sub(n_droplets.saturating_add(misses)));

        let max_combo = self
            .combo
            .unwrap_or_else(|| self.attrs.max_combo.saturating_sub(misses));

        CatchScoreState {
            max_combo,
            n_fruits,
            n_droplets,
            n_tiny_droplets,
            n_tiny_droplet_misses,
            misses,
        }
    }

    /// Calculate all performance related values, including pp and stars.
    pub fn calculate(self) -> CatchPerformanceAttributes {
        let state = self.generate_state();

        CatchPerformanceCalculator::new(self.attrs, self.mods, state).calculate()
    }
}

impl From<CatchDifficultyAttributes> for CatchPerformance {
    fn from(attrs: CatchDifficultyAttributes) -> Self {
        Self::new(attrs)
    }
}

impl From<CatchPerformanceAttributes> for CatchPerformance {
    fn from(attrs: CatchPerformanceAttributes) -> Self {
        attrs.difficulty.into()
    }
}
