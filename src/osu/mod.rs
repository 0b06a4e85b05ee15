use crate::model::{
    mode::{GameMode, IGameMode},
    score::Score,
};

pub use self::{
    attributes::{OsuDifficultyAttributes, OsuPerformanceAttributes},
    performance::OsuPerformance,
    score_state::OsuScoreState,
};

mod attributes;
mod performance;
mod score_state;

/// Marker type for [`GameMode::Osu`].
pub struct Osu;

impl IGameMode for Osu {
    const MODE: GameMode = GameMode::Osu;

    type DifficultyAttributes = OsuDifficultyAttributes;
    type PerformanceAttributes = OsuPerformanceAttributes;
    type ScoreState = OsuScoreState;

    fn performance(
        attrs: Self::DifficultyAttributes,
        score: &Score,
    ) -> Self::PerformanceAttributes {
        OsuPerformance::new(attrs)
            .mods(score.mods)
            .accuracy(score.accuracy)
            .state(score.into())
            .calculate()
    }
}
