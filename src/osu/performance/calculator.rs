use crate::{
    model::mods::GameMods,
    osu::{OsuDifficultyAttributes, OsuPerformanceAttributes, OsuScoreState},
};

// * This is being adjusted to keep the final pp value scaled around what it used to be when changing things.
pub const PERFORMANCE_BASE_MULTIPLIER: f64 = 1.14;

pub(super) struct OsuPerformanceCalculator {
    attrs: OsuDifficultyAttributes,
    mods: GameMods,
    acc: f64,
    state: OsuScoreState,
    effective_miss_count: f64,
}

impl OsuPerformanceCalculator {
    pub const fn new(
        attrs: OsuDifficultyAttributes,
        mods: GameMods,
        acc: f64,
        state: OsuScoreState,
        effective_miss_count: f64,
    ) -> Self {
        Self {
            attrs,
            mods,
            acc,
            state,
            effective_miss_count,
        }
    }
}

impl OsuPerformanceCalculator {
    pub fn calculate(self) -> OsuPerformanceAttributes {
        let total_hits = self.state.total_hits();

        if total_hits == 0 {
            return OsuPerformanceAttributes {
                difficulty: self.attrs,
                ..Default::default()
            };
        }

        let total_hits = total_hits as f64;

        let mut multiplier = PERFORMANCE_BASE_MULTIPLIER;

        if self.mods.nf() {
            multiplier *= (1.0 - 0.02 * self.effective_miss_count).max(0.9);
        }

        if self.mods.so() {
            // Fewer hits than spinners would turn the factor negative
            multiplier *= (1.0 - (f64::from(self.attrs.n_spinners) / total_hits).powf(0.85)).max(0.0);
        }

        let aim_value = self.compute_aim_value();
        let speed_value = self.compute_speed_value();
        let acc_value = self.compute_accuracy_value();
        let flashlight_value = self.compute_flashlight_value();

        let pp = (aim_value.powf(1.1)
            + speed_value.powf(1.1)
            + acc_value.powf(1.1)
            + flashlight_value.powf(1.1))
        .powf(1.0 / 1.1)
            * multiplier;

        OsuPerformanceAttributes {
            difficulty: self.attrs,
            pp,
            pp_acc: acc_value,
            pp_aim: aim_value,
            pp_flashlight: flashlight_value,
            pp_speed: speed_value,
            effective_miss_count: self.effective_miss_count,
        }
    }

    fn compute_aim_value(&self) -> f64 {
        let mut aim_value = difficulty_to_performance(self.attrs.aim);

        let total_hits = self.total_hits();
        let len_bonus = length_bonus(total_hits);
        aim_value *= len_bonus;

        // * Penalize misses by assessing # of misses relative to the total # of objects.
        // * Default a 3% reduction for any # of misses.
        if self.effective_miss_count > 0.0 {
            aim_value *= 0.97
                * (1.0 - (self.effective_miss_count / total_hits).powf(0.775))
                    .powf(self.effective_miss_count);
        }

        aim_value *= self.get_combo_scaling_factor();

        let ar_factor = if self.attrs.ar > 10.33 {
            0.3 * (self.attrs.ar - 10.33)
        } else if self.attrs.ar < 8.0 {
            0.05 * (8.0 - self.attrs.ar)
        } else {
            0.0
        };

        // * Buff for longer maps with high AR.
        aim_value *= 1.0 + ar_factor * len_bonus;

        if self.mods.hd() {
            // * We want to give more reward for lower AR when it comes to aim and HD.
            // * This nerfs high AR and buffs lower AR.
            aim_value *= 1.0 + 0.04 * (12.0 - self.attrs.ar);
        }

        if self.attrs.n_sliders > 0 {
            // * We assume 15% of sliders in a map are difficult since there's no way to tell from the performance calculator.
            let estimate_diff_sliders = f64::from(self.attrs.n_sliders) * 0.15;

            let missing_combo = u64::from(self.attrs.max_combo.saturating_sub(self.state.max_combo));

            let estimate_slider_ends_dropped = (self.state.total_imperfect_hits().min(missing_combo)
                as f64)
                .clamp(0.0, estimate_diff_sliders);

            let slider_nerf_factor = (1.0 - self.attrs.slider_factor)
                * (1.0 - estimate_slider_ends_dropped / estimate_diff_sliders).powi(3)
                + self.attrs.slider_factor;

            aim_value *= slider_nerf_factor;
        }

        aim_value *= self.acc;
        // * It is important to consider accuracy difficulty when scaling with accuracy.
        aim_value *= 0.98 + self.attrs.od.powi(2) / 2500.0;

        aim_value
    }

    fn compute_speed_value(&self) -> f64 {
        let mut speed_value = difficulty_to_performance(self.attrs.speed);

        let total_hits = self.total_hits();
        let len_bonus = length_bonus(total_hits);
        speed_value *= len_bonus;

        // * Penalize misses by assessing # of misses relative to the total # of objects.
        // * Default a 3% reduction for any # of misses.
        if self.effective_miss_count > 0.0 {
            speed_value *= 0.97
                * (1.0 - (self.effective_miss_count / total_hits).powf(0.775))
                    .powf(self.effective_miss_count.powf(0.875));
        }

        speed_value *= self.get_combo_scaling_factor();

        let ar_factor = if self.attrs.ar > 10.33 {
            0.3 * (self.attrs.ar - 10.33)
        } else {
            0.0
        };

        // * Buff for longer maps with high AR.
        speed_value *= 1.0 + ar_factor * len_bonus;

        if self.mods.hd() {
            // * We want to give more reward for lower AR when it comes to aim and HD.
            // * This nerfs high AR and buffs lower AR.
            speed_value *= 1.0 + 0.04 * (12.0 - self.attrs.ar);
        }

        // * Calculate accuracy assuming the worst case scenario
        let relevant_total_diff = total_hits - self.attrs.speed_note_count;
        let n300 = f64::from(self.state.n300);
        let n100 = f64::from(self.state.n100);
        let n50 = f64::from(self.state.n50);

        let relevant_n300 = (n300 - relevant_total_diff).max(0.0);
        let relevant_n100 = (n100 - (relevant_total_diff - n300).max(0.0)).max(0.0);
        let relevant_n50 = (n50 - (relevant_total_diff - n300 - n100).max(0.0)).max(0.0);

        let relevant_acc = if self.attrs.speed_note_count > 0.0 {
            (relevant_n300 * 6.0 + relevant_n100 * 2.0 + relevant_n50)
                / (self.attrs.speed_note_count * 6.0)
        } else {
            0.0
        };

        // * Scale the speed value with accuracy and OD.
        speed_value *= (0.95 + self.attrs.od * self.attrs.od / 750.0)
            * ((self.acc + relevant_acc) / 2.0).powf((14.5 - self.attrs.od.max(8.0)) / 2.0);

        // * Scale the speed value with # of 50s to punish doubletapping.
        if n50 > total_hits / 500.0 {
            speed_value *= 0.99_f64.powf(n50 - total_hits / 500.0);
        }

        speed_value
    }

    fn compute_accuracy_value(&self) -> f64 {
        // * This percentage only considers HitCircles of any value - in this part
        // * of the calculation we focus on hitting the timing hit window.
        let amount_hit_objects_with_acc = f64::from(self.attrs.n_circles);

        let better_acc_percentage = if amount_hit_objects_with_acc > 0.0 {
            let n300 = f64::from(self.state.n300) - (self.total_hits() - amount_hit_objects_with_acc);

            // * It is possible to reach a negative accuracy with this formula. Cap it at zero - zero points.
            ((n300 * 6.0 + f64::from(self.state.n100) * 2.0 + f64::from(self.state.n50))
                / (amount_hit_objects_with_acc * 6.0))
                .max(0.0)
        } else {
            0.0
        };

        // * Lots of arbitrary values from testing.
        // * Considering to use derivation from perfect accuracy in a probabilistic manner - assume normal distribution.
        let mut acc_value =
            1.52163_f64.powf(self.attrs.od) * better_acc_percentage.powi(24) * 2.83;

        // * Bonus for many hitcircles - it's harder to keep good accuracy up for longer.
        acc_value *= (amount_hit_objects_with_acc / 1000.0).powf(0.3).min(1.15);

        // * Increasing the accuracy value by object count for Blinds isn't ideal, so the minimum buff is given.
        if self.mods.hd() {
            acc_value *= 1.08;
        }

        if self.mods.fl() {
            acc_value *= 1.02;
        }

        acc_value
    }

    fn compute_flashlight_value(&self) -> f64 {
        if !self.mods.fl() {
            return 0.0;
        }

        let mut flashlight_value = self.attrs.flashlight.powi(2) * 25.0;

        let total_hits = self.total_hits();

        // * Penalize misses by assessing # of misses relative to the total # of objects. Default a 3% reduction for any # of misses.
        if self.effective_miss_count > 0.0 {
            flashlight_value *= 0.97
                * (1.0 - (self.effective_miss_count / total_hits).powf(0.775))
                    .powf(self.effective_miss_count.powf(0.875));
        }

        flashlight_value *= self.get_combo_scaling_factor();

        // * Account for shorter maps having a higher ratio of 0 combo/100 combo flashlight radius.
        let mut len_factor = 0.7 + 0.1 * (total_hits / 200.0).min(1.0);

        if total_hits > 200.0 {
            len_factor += 0.2 * ((total_hits - 200.0) / 200.0).min(1.0);
        }

        flashlight_value *= len_factor;

        // * Scale the flashlight value with accuracy _slightly_.
        flashlight_value *= 0.5 + self.acc / 2.0;
        // * It is important to also consider accuracy difficulty when doing that.
        flashlight_value *= 0.98 + self.attrs.od.powi(2) / 2500.0;

        flashlight_value
    }

    fn get_combo_scaling_factor(&self) -> f64 {
        if self.attrs.max_combo == 0 {
            1.0
        } else {
            (f64::from(self.state.max_combo).powf(0.8) / f64::from(self.attrs.max_combo).powf(0.8))
                .min(1.0)
        }
    }

    fn total_hits(&self) -> f64 {
        self.state.total_hits() as f64
    }
}

fn difficulty_to_performance(difficulty: f64) -> f64 {
    (5.0 * (difficulty / 0.0675).max(1.0) - 4.0).powi(3) / 100_000.0
}

fn length_bonus(total_hits: f64) -> f64 {
    let mut len_bonus = 0.95 + 0.4 * (total_hits / 2000.0).min(1.0);

    if total_hits > 2000.0 {
        len_bonus += (total_hits / 2000.0).log10() * 0.5;
    }

    len_bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::osu::performance::calculate_effective_misses;

    fn justability() -> (OsuDifficultyAttributes, OsuScoreState) {
        let attrs = OsuDifficultyAttributes {
            stars: 8.968903153971592,
            max_combo: 2868,
            aim: 4.6878801020817535,
            speed: 3.788079493693188,
            speed_note_count: 903.8840205050329,
            flashlight: 6.4283445515991,
            slider_factor: 0.9992674688934443,
            ar: 10.666666666666668,
            od: 10.444444444444445,
            hp: 6.0,
            n_circles: 1113,
            n_sliders: 705,
            n_spinners: 3,
        };

        let state = OsuScoreState {
            max_combo: 2685,
            n300: 1800,
            n100: 17,
            n50: 3,
            misses: 1,
        };

        (attrs, state)
    }

    fn calculate(mods: GameMods) -> OsuPerformanceAttributes {
        let (attrs, state) = justability();
        let effective_miss_count = calculate_effective_misses(&attrs, &state);

        OsuPerformanceCalculator::new(attrs, mods, 0.9919, state, effective_miss_count).calculate()
    }

    #[test]
    fn breakdown() {
        let attrs = calculate(GameMods::HD | GameMods::DT);

        assert!((attrs.effective_miss_count - 1.041899441340782).abs() < 1e-9);
        assert!((attrs.pp_aim - 590.3636).abs() < 0.01, "{}", attrs.pp_aim);
        assert!((attrs.pp_speed - 325.1750).abs() < 0.01, "{}", attrs.pp_speed);
        assert!((attrs.pp_acc - 183.4129).abs() < 0.01, "{}", attrs.pp_acc);
        assert!(attrs.pp_flashlight.abs() < f64::EPSILON);
        assert!((attrs.pp - 1145.6769).abs() < 0.01, "{}", attrs.pp);
    }

    #[test]
    fn flashlight_only_with_mod() {
        let without = calculate(GameMods::HD);
        let with = calculate(GameMods::HD | GameMods::FL);

        assert!(without.pp_flashlight.abs() < f64::EPSILON);
        assert!(with.pp_flashlight > 0.0);
        assert!(with.pp_acc > without.pp_acc);
        assert!(with.pp > without.pp);
    }

    #[test]
    fn no_fail_and_spun_out_reduce_pp() {
        let nomod = calculate(GameMods::NM);
        let no_fail = calculate(GameMods::NF);
        let spun_out = calculate(GameMods::SO);

        // 1 - 0.02 * 1.04 is above the 0.9 floor
        let nf_mult = 1.0 - 0.02 * nomod.effective_miss_count;
        assert!((no_fail.pp - nomod.pp * nf_mult).abs() < 1e-9);

        let so_mult = 1.0 - (3.0_f64 / 1821.0).powf(0.85);
        assert!((spun_out.pp - nomod.pp * so_mult).abs() < 1e-9);
    }

    #[test]
    fn spun_out_with_fewer_hits_than_spinners() {
        let (attrs, _) = justability();

        let state = OsuScoreState {
            max_combo: 1,
            n300: 1,
            ..Default::default()
        };

        let effective_miss_count = calculate_effective_misses(&attrs, &state);
        let pp_attrs =
            OsuPerformanceCalculator::new(attrs, GameMods::SO, 1.0, state, effective_miss_count)
                .calculate();

        assert!(pp_attrs.pp_aim > 0.0);
        assert!(pp_attrs.pp.abs() < f64::EPSILON, "{}", pp_attrs.pp);
    }

    #[test]
    fn empty_state() {
        let (attrs, _) = justability();
        let pp_attrs =
            OsuPerformanceCalculator::new(attrs, GameMods::NM, 1.0, OsuScoreState::new(), 0.0)
                .calculate();

        assert!(pp_attrs.pp.abs() < f64::EPSILON);
        assert!(pp_attrs.pp_aim.abs() < f64::EPSILON);
        assert!((pp_attrs.stars() - 8.968903153971592).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_better_acc_is_capped() {
        let (attrs, _) = justability();

        // fewer 300s than sliders and spinners
        let state = OsuScoreState {
            max_combo: 100,
            n300: 100,
            n100: 1000,
            n50: 700,
            misses: 21,
        };

        let pp_attrs =
            OsuPerformanceCalculator::new(attrs, GameMods::NM, state.accuracy(), state, 21.0)
                .calculate();

        assert!(pp_attrs.pp_acc.abs() < f64::EPSILON);
        assert!(pp_attrs.pp.is_finite());
    }

    #[test]
    fn length_bonus_continuity() {
        assert!((length_bonus(2000.0) - 1.35).abs() < 1e-12);
        assert!(length_bonus(2001.0) > length_bonus(2000.0));
        assert!((length_bonus(0.0) - 0.95).abs() < f64::EPSILON);
    }
}
