use crate::model::{
    mode::{GameMode, IGameMode},
    score::Score,
};

pub use self::{
    attributes::{CatchDifficultyAttributes, CatchPerformanceAttributes},
    performance::CatchPerformance,
    score_state::CatchScoreState,
};

mod attributes;
mod performance;
mod score_state;

/// Marker type for [`GameMode::Catch`].
pub struct Catch;

impl IGameMode for Catch {
    const MODE: GameMode = GameMode::Catch;

    type DifficultyAttributes = CatchDifficultyAttributes;
    type PerformanceAttributes = CatchPerformanceAttributes;
    type ScoreState = CatchScoreState;

    fn performance(
        attrs: Self::DifficultyAttributes,
        score: &Score,
    ) -> Self::PerformanceAttributes {
        CatchPerformance::new(attrs)
            .mods(score.mods)
            .state(score.into())
            .calculate()
    }
}
