use crate::model::{
    mode::{GameMode, IGameMode},
    score::Score,
};

pub use self::{
    attributes::{TaikoDifficultyAttributes, TaikoPerformanceAttributes},
    performance::TaikoPerformance,
    score_state::TaikoScoreState,
};

mod attributes;
mod performance;
mod score_state;

/// Marker type for [`GameMode::Taiko`].
pub struct Taiko;

impl IGameMode for Taiko {
    const MODE: GameMode = GameMode::Taiko;

    type DifficultyAttributes = TaikoDifficultyAttributes;
    type PerformanceAttributes = TaikoPerformanceAttributes;
    type ScoreState = TaikoScoreState;

    fn performance(
        attrs: Self::DifficultyAttributes,
        score: &Score,
    ) -> Self::PerformanceAttributes {
        TaikoPerformance::new(attrs)
            .mods(score.mods)
            .state(score.into())
            .calculate()
    }
}
