use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::{
    any::{DifficultyAttributes, PerformanceAttributes},
    error::PerformanceError,
    model::score::Score,
};

/// The mode of a play.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GameMode {
    /// osu!standard
    #[default]
    Osu = 0,
    /// osu!taiko
    Taiko = 1,
    /// osu!catch
    Catch = 2,
    /// osu!mania
    Mania = 3,
}

impl GameMode {
    /// The name of the mode as used on the osu! website.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Osu => "osu",
            Self::Taiko => "taiko",
            Self::Catch => "fruits",
            Self::Mania => "mania",
        }
    }
}

impl TryFrom<u8> for GameMode {
    type Error = PerformanceError;

    fn try_from(mode: u8) -> Result<Self, Self::Error> {
        match mode {
            0 => Ok(Self::Osu),
            1 => Ok(Self::Taiko),
            2 => Ok(Self::Catch),
            3 => Ok(Self::Mania),
            _ => Err(PerformanceError::UnsupportedMode(mode)),
        }
    }
}

impl From<GameMode> for u8 {
    fn from(mode: GameMode) -> Self {
        mode as u8
    }
}

impl Display for GameMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// A way to specify a gamemode at compile-time.
///
/// Notably, this is implemented for the marker types [`Osu`], [`Taiko`],
/// [`Catch`], and [`Mania`]. Each of them ties a mode to exactly one kind of
/// difficulty attributes so that attributes of a different mode cannot be
/// passed to its calculation.
///
/// [`Osu`]: crate::osu::Osu
/// [`Taiko`]: crate::taiko::Taiko
/// [`Catch`]: crate::catch::Catch
/// [`Mania`]: crate::mania::Mania
pub trait IGameMode: Sized {
    /// The [`GameMode`] this marker stands for.
    const MODE: GameMode;

    /// The resulting type of a difficulty calculation.
    type DifficultyAttributes: Into<DifficultyAttributes>;

    /// The resulting type of a performance calculation.
    type PerformanceAttributes: Into<PerformanceAttributes>;

    /// The hitresults of a play in terms of this mode.
    type ScoreState: for<'a> From<&'a Score>;

    /// Calculate the performance of a [`Score`] on the given attributes.
    fn performance(
        attrs: Self::DifficultyAttributes,
        score: &Score,
    ) -> Self::PerformanceAttributes;
}
