use crate::{
    catch::CatchPerformance,
    mania::ManiaPerformance,
    model::{mode::GameMode, mods::GameMods, score::Score},
    osu::OsuPerformance,
    taiko::TaikoPerformance,
};

use super::attributes::{AttributeProvider, DifficultyAttributes, PerformanceAttributes};

/// Performance calculator on maps of any mode.
///
/// Judgement setters follow the legacy hitresult naming, i.e. for osu!catch
/// [`n100`] sets droplets and for osu!mania [`n_geki`] sets 320s. See
/// [`Score`] for the full mapping.
///
/// [`n100`]: Performance::n100
/// [`n_geki`]: Performance::n_geki
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum Performance {
    Osu(OsuPerformance),
    Taiko(TaikoPerformance),
    Catch(CatchPerformance),
    Mania(ManiaPerformance),
}

impl Performance {
    /// Create a new performance calculator for any mode.
    ///
    /// The mode is determined by the variant of the given attributes.
    pub fn new(attributes: impl AttributeProvider) -> Self {
        match attributes.attributes() {
            DifficultyAttributes::Osu(attrs) => Self::Osu(attrs.into()),
            DifficultyAttributes::Taiko(attrs) => Self::Taiko(attrs.into()),
            DifficultyAttributes::Catch(attrs) => Self::Catch(attrs.into()),
            DifficultyAttributes::Mania(attrs) => Self::Mania(attrs.into()),
        }
    }

    /// The mode of the calculator.
    pub const fn mode(&self) -> GameMode {
        match self {
            Self::Osu(_) => GameMode::Osu,
            Self::Taiko(_) => GameMode::Taiko,
            Self::Catch(_) => GameMode::Catch,
            Self::Mania(_) => GameMode::Mania,
        }
    }

    /// Consume the performance calculator and calculate
    /// performance attributes for the given parameters.
    pub fn calculate(self) -> PerformanceAttributes {
        match self {
            Self::Osu(o) => PerformanceAttributes::Osu(o.calculate()),
            Self::Taiko(t) => PerformanceAttributes::Taiko(t.calculate()),
            Self::Catch(f) => PerformanceAttributes::Catch(f.calculate()),
            Self::Mania(m) => PerformanceAttributes::Mania(m.calculate()),
        }
    }

    /// Specify mods.
    ///
    /// See <https://github.com/ppy/osu-api/wiki#mods>
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        match self {
            Self::Osu(o) => Self::Osu(o.mods(mods)),
            Self::Taiko(t) => Self::Taiko(t.mods(mods)),
            Self::Catch(f) => Self::Catch(f.mods(mods)),
            Self::Mania(m) => Self::Mania(m.mods(mods)),
        }
    }

    /// Provide mods and all hitresults through a [`Score`].
    ///
    /// The score's mode is not checked; its fields are interpreted in terms
    /// of this calculator's mode.
    pub fn score(self, score: &Score) -> Self {
        match self {
            Self::Osu(o) => Self::Osu(
                o.mods(score.mods)
                    .accuracy(score.accuracy)
                    .state(score.into()),
            ),
            Self::Taiko(t) => Self::Taiko(t.mods(score.mods).state(score.into())),
            Self::Catch(f) => Self::Catch(f.mods(score.mods).state(score.into())),
            Self::Mania(m) => Self::Mania(m.mods(score.mods).state(score.into())),
        }
    }

    /// Set the accuracy between `0.0` and `1.0` or between `0.0` and `100.0`.
    ///
    /// Only relevant for osu!standard, the other modes derive their accuracy
    /// from the hitresults.
    pub fn accuracy(self, acc: f64) -> Self {
        match self {
            Self::Osu(o) => Self::Osu(o.accuracy(acc)),
            Self::Taiko(_) | Self::Catch(_) | Self::Mania(_) => self,
        }
    }

    /// Specify the max combo of the play.
    ///
    /// Irrelevant for osu!mania.
    pub fn combo(self, combo: u32) -> Self {
        match self {
            Self::Osu(o) => Self::Osu(o.combo(combo)),
            Self::Taiko(t) => Self::Taiko(t.combo(combo)),
            Self::Catch(f) => Self::Catch(f.combo(combo)),
            Self::Mania(_) => self,
        }
    }

    /// Specify the amount of gekis of a play.
    ///
    /// Only relevant for osu!mania for which it represents the amount of n320.
    pub fn n_geki(self, n_geki: u32) -> Self {
        match self {
            Self::Mania(m) => Self::Mania(m.n320(n_geki)),
            Self::Osu(_) | Self::Taiko(_) | Self::Catch(_) => self,
        }
    }

    /// Specify the amount of katus of a play.
    ///
    /// Only relevant for osu!catch for which it represents the amount of tiny
    /// droplet misses and osu!mania for which it represents the amount of n200.
    pub fn n_katu(self, n_katu: u32) -> Self {
        match self {
            Self::Catch(f) => Self::Catch(f.tiny_droplet_misses(n_katu)),
            Self::Mania(m) => Self::Mania(m.n200(n_katu)),
            Self::Osu(_) | Self::Taiko(_) => self,
        }
    }

    /// Specify the amount of 300s of a play.
    pub fn n300(self, n300: u32) -> Self {
        match self {
            Self::Osu(o) => Self::Osu(o.n300(n300)),
            Self::Taiko(t) => Self::Taiko(t.n300(n300)),
            Self::Catch(f) => Self::Catch(f.fruits(n300)),
            Self::Mania(m) => Self::Mania(m.n300(n300)),
        }
    }

    /// Specify the amount of 100s of a play.
    pub fn n100(self, n100: u32) -> Self {
        match self {
            Self::Osu(o) => Self::Osu(o.n100(n100)),
            Self::Taiko(t) => Self::Taiko(t.n100(n100)),
            Self::Catch(f) => Self::Catch(f.droplets(n100)),
            Self::Mania(m) => Self::Mania(m.n100(n100)),
        }
    }

    /// Specify the amount of 50s of a play.
    pub fn n50(self, n50: u32) -> Self {
        match self {
            Self::Osu(o) => Self::Osu(o.n50(n50)),
            Self::Taiko(t) => Self::Taiko(t.n50(n50)),
            Self::Catch(f) => Self::Catch(f.tiny_droplets(n50)),
            Self::Mania(m) => Self::Mania(m.n50(n50)),
        }
    }

    /// Specify the amount of misses of a play.
    pub fn misses(self, n_misses: u32) -> Self {
        match self {
            Self::Osu(o) => Self::Osu(o.misses(n_misses)),
            Self::Taiko(t) => Self::Taiko(t.misses(n_misses)),
            Self::Catch(f) => Self::Catch(f.misses(n_misses)),
            Self::Mania(m) => Self::Mania(m.misses(n_misses)),
        }
    }
}

impl From<OsuPerformance> for Performance {
    fn from(performance: OsuPerformance) -> Self {
        Self::Osu(performance)
    }
}

impl From<TaikoPerformance> for Performance {
    fn from(performance: TaikoPerformance) -> Self {
        Self::Taiko(performance)
    }
}

impl From<CatchPerformance> for Performance {
    fn from(performance: CatchPerformance) -> Self {
        Self::Catch(performance)
    }
}

impl From<ManiaPerformance> for Performance {
    fn from(performance: ManiaPerformance) -> Self {
        Self::Mania(performance)
    }
}
