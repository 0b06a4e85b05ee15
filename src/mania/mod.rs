use crate::model::{
    mode::{GameMode, IGameMode},
    score::Score,
};

pub use self::{
    attributes::{ManiaDifficultyAttributes, ManiaPerformanceAttributes},
    performance::ManiaPerformance,
    score_state::ManiaScoreState,
};

mod attributes;
mod performance;
mod score_state;

/// Marker type for [`GameMode::Mania`].
pub struct Mania;

impl IGameMode for Mania {
    const MODE: GameMode = GameMode::Mania;

    type DifficultyAttributes = ManiaDifficultyAttributes;
    type PerformanceAttributes = ManiaPerformanceAttributes;
    type ScoreState = ManiaScoreState;

    fn performance(
        attrs: Self::DifficultyAttributes,
        score: &Score,
    ) -> Self::PerformanceAttributes {
        ManiaPerformance::new(attrs)
            .mods(score.mods)
            .state(score.into())
            .calculate()
    }
}
