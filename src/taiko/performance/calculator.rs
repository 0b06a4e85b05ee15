use crate::{
    model::mods::GameMods,
    taiko::{TaikoDifficultyAttributes, TaikoPerformanceAttributes, TaikoScoreState},
};

pub(super) struct TaikoPerformanceCalculator {
    attrs: TaikoDifficultyAttributes,
    mods: GameMods,
    state: TaikoScoreState,
}

impl TaikoPerformanceCalculator {
    pub const fn new(
        attrs: TaikoDifficultyAttributes,
        mods: GameMods,
        state: TaikoScoreState,
    ) -> Self {
        Self { attrs, mods, state }
    }
}

impl TaikoPerformanceCalculator {
    pub fn calculate(self) -> TaikoPerformanceAttributes {
        if self.state.total_hits() == 0 {
            return TaikoPerformanceAttributes {
                difficulty: self.attrs,
                ..Default::default()
            };
        }

        // * The effectiveMissCount is calculated by gaining a ratio for totalSuccessfulHits
        // * and increasing the miss penalty for shorter object counts lower than 1000.
        let total_successful_hits = self.state.total_successful_hits();

        let effective_miss_count = if total_successful_hits > 0 {
            (1000.0 / total_successful_hits as f64).max(1.0) * f64::from(self.state.misses)
        } else {
            0.0
        };

        let mut multiplier = 1.13;

        if self.mods.hd() {
            multiplier *= 1.075;
        }

        if self.mods.ez() {
            multiplier *= 0.975;
        }

        let acc = self.state.accuracy();
        let diff_value = self.compute_difficulty_value(effective_miss_count, acc);
        let acc_value = self.compute_accuracy_value(acc);

        let pp = (diff_value.powf(1.1) + acc_value.powf(1.1)).powf(1.0 / 1.1) * multiplier;

        TaikoPerformanceAttributes {
            difficulty: self.attrs,
            pp,
            pp_acc: acc_value,
            pp_difficulty: diff_value,
            effective_miss_count,
        }
    }

    fn compute_difficulty_value(&self, effective_miss_count: f64, acc: f64) -> f64 {
        let mut diff_value =
            (5.0 * (self.attrs.stars / 0.115).max(1.0) - 4.0).powf(2.25) / 1150.0;

        let len_bonus = 1.0 + 0.1 * (self.total_hits() / 1500.0).min(1.0);
        diff_value *= len_bonus;

        diff_value *= 0.986_f64.powf(effective_miss_count);

        if self.mods.ez() {
            diff_value *= 0.985;
        }

        if self.mods.hd() {
            diff_value *= 1.025;
        }

        if self.mods.hr() {
            diff_value *= 1.05;
        }

        if self.mods.fl() {
            diff_value *= 1.05 * len_bonus;
        }

        diff_value * acc * acc
    }

    fn compute_accuracy_value(&self, acc: f64) -> f64 {
        if self.attrs.great_hit_window <= 0.0 {
            return 0.0;
        }

        let mut acc_value = (60.0 / self.attrs.great_hit_window).powf(1.1)
            * acc.powi(8)
            * self.attrs.stars.powf(0.4)
            * 27.0;

        let len_bonus = (self.total_hits() / 1500.0).powf(0.3).min(1.15);
        acc_value *= len_bonus;

        if self.mods.hd() && self.mods.fl() {
            acc_value *= (1.075 * len_bonus).max(1.05);
        }

        acc_value
    }

    fn total_hits(&self) -> f64 {
        self.state.total_hits() as f64
    }
}
