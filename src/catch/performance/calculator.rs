use crate::{
    catch::{CatchDifficultyAttributes, CatchPerformanceAttributes, CatchScoreState},
    model::mods::GameMods,
};

pub(super) struct CatchPerformanceCalculator {
    attrs: CatchDifficultyAttributes,
    mods: GameMods,
    state: CatchScoreState,
}

impl CatchPerformanceCalculator {
    pub const fn new(
        attrs: CatchDifficultyAttributes,
        mods: GameMods,
        state: CatchScoreState,
    ) -> Self {
        Self { attrs, mods, state }
    }
}

impl CatchPerformanceCalculator {
    pub fn calculate(self) -> CatchPerformanceAttributes {
        let attributes = &self.attrs;
        let stars = attributes.stars;
        let max_combo = attributes.max_combo;

        // * We are heavily relying on aim in catch the beat
        let mut pp = (5.0 * (stars / 0.0049).max(1.0) - 4.0).powi(2) / 100_000.0;

        // * Longer maps are worth more. "Longer" means how many hits there are which can contribute to combo
        let combo_hits = self.state.combo_hits() as f64;

        let mut len_bonus = 0.95 + 0.3 * (combo_hits / 2500.0).min(1.0);

        if combo_hits > 2500.0 {
            len_bonus += (combo_hits / 2500.0).log10() * 0.475;
        }

        pp *= len_bonus;

        // * Penalize misses exponentially. This mainly fixes tag4 maps and the likes until a per-hitobject solution is available
        pp *= 0.97_f64.powf(f64::from(self.state.misses));

        // * Combo scaling
        if max_combo > 0 {
            pp *= (f64::from(self.state.max_combo).powf(0.8) / f64::from(max_combo).powf(0.8))
                .min(1.0);
        }

        // * AR scaling
        let ar = attributes.ar;
        let mut ar_factor = 1.0;

        if ar > 9.0 {
            ar_factor += 0.1 * (ar - 9.0);
        }

        if ar > 10.0 {
            ar_factor += 0.1 * (ar - 10.0);
        } else if ar < 8.0 {
            ar_factor += 0.025 * (8.0 - ar);
        }

        pp *= ar_factor;

        // * Hidden bonus
        if self.mods.hd() {
            if ar <= 10.0 {
                pp *= 1.05 + 0.075 * (10.0 - ar);
            } else {
                pp *= 1.01 + 0.04 * (11.0 - ar.min(11.0));
            }
        }

        // * Flashlight bonus
        if self.mods.fl() {
            pp *= 1.35 * len_bonus;
        }

        // * Scale the aim value with accuracy _slightly_
        pp *= self.state.accuracy().powf(5.5);

        // * Custom multipliers for NoFail. SpunOut is not applicable.
        if self.mods.nf() {
            pp *= 0.9;
        }

        CatchPerformanceAttributes {
            difficulty: self.attrs,
            pp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion() -> (CatchDifficultyAttributes, CatchScoreState) {
        let attrs = CatchDifficultyAttributes {
            stars: 9.486280736253358,
            max_combo: 3333,
            ar: 10.0,
        };

        let state = CatchScoreState {
            max_combo: 3333,
            n_fruits: 3293,
            n_droplets: 40,
            n_tiny_droplets: 191,
            n_tiny_droplet_misses: 0,
            misses: 0,
        };

        (attrs, state)
    }

    #[test]
    fn nomod_full_combo() {
        let (attrs, state) = motion();
        let pp_attrs = CatchPerformanceCalculator::new(attrs, GameMods::NM, state).calculate();

        assert!((pp_attrs.pp - 1348.4071).abs() < 0.01, "{}", pp_attrs.pp);
    }

    #[test]
    fn no_fail_multiplier() {
        let (attrs, state) = motion();
        let nomod = CatchPerformanceCalculator::new(attrs.clone(), GameMods::NM, state).calculate();
        let no_fail = CatchPerformanceCalculator::new(attrs, GameMods::NF, state).calculate();

        assert!((no_fail.pp - nomod.pp * 0.9).abs() < 1e-9);
    }

    #[test]
    fn hidden_bonus_depends_on_ar() {
        let (attrs, state) = motion();

        let hd_ar10 =
            CatchPerformanceCalculator::new(attrs.clone(), GameMods::HD, state).calculate();
        let nm_ar10 =
            CatchPerformanceCalculator::new(attrs.clone(), GameMods::NM, state).calculate();

        assert!((hd_ar10.pp / nm_ar10.pp - 1.05).abs() < 1e-9);

        let high_ar = CatchDifficultyAttributes { ar: 10.5, ..attrs };
        let hd_ar105 =
            CatchPerformanceCalculator::new(high_ar.clone(), GameMods::HD, state).calculate();
        let nm_ar105 = CatchPerformanceCalculator::new(high_ar, GameMods::NM, state).calculate();

        assert!((hd_ar105.pp / nm_ar105.pp - 1.03).abs() < 1e-9);
    }

    #[test]
    fn empty_state() {
        let (attrs, _) = motion();
        let pp_attrs =
            CatchPerformanceCalculator::new(attrs, GameMods::NM, CatchScoreState::new())
                .calculate();

        assert!(pp_attrs.pp.abs() < f64::EPSILON);
    }
}
