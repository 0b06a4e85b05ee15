use crate::{
    mania::{ManiaDifficultyAttributes, ManiaPerformanceAttributes, ManiaScoreState},
    model::mods::GameMods,
};

pub(super) struct ManiaPerformanceCalculator {
    attrs: ManiaDifficultyAttributes,
    mods: GameMods,
    state: ManiaScoreState,
}

impl ManiaPerformanceCalculator {
    pub const fn new(
        attrs: ManiaDifficultyAttributes,
        mods: GameMods,
        state: ManiaScoreState,
    ) -> Self {
        Self { attrs, mods, state }
    }
}

impl ManiaPerformanceCalculator {
    pub fn calculate(self) -> ManiaPerformanceAttributes {
        let mut multiplier = 8.0;

        if self.mods.nf() {
            multiplier *= 0.75;
        }

        if self.mods.ez() {
            multiplier *= 0.5;
        }

        let difficulty_value = self.compute_difficulty_value();
        let pp = difficulty_value * multiplier;

        ManiaPerformanceAttributes {
            difficulty: self.attrs,
            pp,
            pp_difficulty: difficulty_value,
        }
    }

    fn compute_difficulty_value(&self) -> f64 {
        // * Star rating to pp curve
        let curve = (self.attrs.stars - 0.15).max(0.05).powf(2.2);

        // * From 80% accuracy, 1/20th of total pp is awarded per additional 1% accuracy
        let acc_factor = (5.0 * self.state.accuracy() - 4.0).max(0.0);

        // * Length bonus, capped at 1500 notes
        let len_bonus = 1.0 + 0.1 * (self.state.total_hits() as f64 / 1500.0).min(1.0);

        curve * acc_factor * len_bonus
    }
}
