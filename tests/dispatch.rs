use std::{
    cell::Cell,
    path::{Path, PathBuf},
    rc::Rc,
};

use osu_perf::{
    evaluate,
    legacy::{LegacyBackend, LegacyConfig, LegacyContext, LegacyError, LegacyHandle, LegacyParams},
    mania::ManiaDifficultyAttributes,
    osu::OsuDifficultyAttributes,
    DifficultyAttributes, GameMode, GameMods, PerformanceError, Score,
};

use self::common::*;

mod common;

#[derive(Default)]
struct Counters {
    acquired: Cell<u32>,
    released: Cell<u32>,
    params: Cell<Option<LegacyParams>>,
}

struct FixedBackend {
    stars: f64,
    pp: f64,
    counters: Rc<Counters>,
}

impl FixedBackend {
    fn new(stars: f64, pp: f64) -> Self {
        Self {
            stars,
            pp,
            counters: Rc::default(),
        }
    }
}

struct FixedHandle {
    stars: f64,
    pp: f64,
    counters: Rc<Counters>,
}

impl LegacyBackend for FixedBackend {
    fn acquire(&self, _: &Path) -> Result<Box<dyn LegacyHandle>, LegacyError> {
        self.counters.acquired.set(self.counters.acquired.get() + 1);

        Ok(Box::new(FixedHandle {
            stars: self.stars,
            pp: self.pp,
            counters: Rc::clone(&self.counters),
        }))
    }
}

impl LegacyHandle for FixedHandle {
    fn configure(&mut self, params: &LegacyParams) {
        self.counters.params.set(Some(*params));
    }

    fn calculate(&mut self, _: &Path) -> Result<(), LegacyError> {
        Ok(())
    }

    fn total_value(&self) -> f64 {
        self.pp
    }

    fn star_rating(&self) -> f64 {
        self.stars
    }

    fn release(&mut self) {
        self.counters.released.set(self.counters.released.get() + 1);
    }
}

fn existing_paths() -> LegacyConfig {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    LegacyConfig::new(manifest.join("Cargo.toml"), manifest.join("src").join("lib.rs"))
}

fn osu_score(mods: u32) -> Score {
    Score {
        mode: 0,
        max_combo: 1200,
        mods: GameMods::from(mods),
        accuracy: 98.25,
        n300: 900,
        n100: 30,
        misses: 4,
        ..Default::default()
    }
}

fn osu_attrs() -> OsuDifficultyAttributes {
    OsuDifficultyAttributes {
        stars: 6.0,
        max_combo: 1300,
        aim: 3.0,
        speed: 2.8,
        speed_note_count: 300.0,
        slider_factor: 0.95,
        ar: 9.5,
        od: 9.0,
        n_circles: 700,
        n_sliders: 230,
        n_spinners: 4,
        ..Default::default()
    }
}

#[test]
fn relax_goes_through_legacy_tool() {
    let backend = FixedBackend::new(7.25, 321.5);
    let config = existing_paths();
    let ctx = LegacyContext::new(&backend, &config);

    let evaluation = evaluate(&osu_score(RX | HD), None, Some(ctx)).unwrap();

    assert_eq!(evaluation.into_tuple(), (7.25, 321.5));
    assert_eq!(backend.counters.acquired.get(), 1);
    assert_eq!(backend.counters.released.get(), 1);

    let params = backend.counters.params.get().unwrap();
    assert_eq!(params.mode, 0);
    assert_eq!(params.max_combo, 1200);
    assert_eq!(params.n_misses, 4);
    assert_close(params.accuracy, 98.25, 1e-9);
}

#[test]
fn autopilot_ignores_attributes() {
    let backend = FixedBackend::new(5.0, 100.0);
    let config = existing_paths();
    let ctx = LegacyContext::new(&backend, &config);

    let mania = DifficultyAttributes::Mania(ManiaDifficultyAttributes::default());
    let evaluation = evaluate(&osu_score(AP), Some(mania), Some(ctx)).unwrap();

    assert_eq!(evaluation.into_tuple(), (5.0, 100.0));
    assert_eq!(backend.counters.released.get(), 1);
}

#[test]
fn non_finite_legacy_values() {
    let backend = FixedBackend::new(f64::NAN, 250.0);
    let config = existing_paths();
    let ctx = LegacyContext::new(&backend, &config);

    let evaluation = evaluate(&osu_score(RX), None, Some(ctx)).unwrap();

    assert!(evaluation.attributes.is_none());
    assert_eq!(evaluation.into_tuple(), (0.0, 0.0));
    assert_eq!(backend.counters.released.get(), 1);
}

#[test]
fn missing_tool_path() {
    let backend = FixedBackend::new(5.0, 100.0);

    let config = LegacyConfig {
        tool_path: PathBuf::from("/no/such/legacy/tool"),
        ..existing_paths()
    };

    let ctx = LegacyContext::new(&backend, &config);
    let err = evaluate(&osu_score(RX), None, Some(ctx)).unwrap_err();

    assert!(matches!(err, PerformanceError::ResourceNotFound { path } if path == config.tool_path));
    assert_eq!(backend.counters.acquired.get(), 0);
}

#[test]
fn relax_requires_legacy_context() {
    let err = evaluate(&osu_score(RX), Some(osu_attrs().into()), None).unwrap_err();

    assert!(matches!(err, PerformanceError::MissingLegacyConfig));
}

#[test]
fn native_osu_without_relax() {
    let backend = FixedBackend::new(5.0, 100.0);
    let config = existing_paths();
    let ctx = LegacyContext::new(&backend, &config);

    let evaluation = evaluate(&osu_score(HD), Some(osu_attrs().into()), Some(ctx)).unwrap();

    assert_close(evaluation.stars, 6.0, f64::EPSILON);
    assert!(evaluation.pp > 0.0);
    assert!(evaluation.attributes.is_some());
    assert_eq!(backend.counters.acquired.get(), 0);
}

#[test]
fn mismatched_attributes() {
    let score = Score {
        mode: 3,
        n300: 100,
        ..Default::default()
    };

    let err = evaluate(&score, Some(osu_attrs().into()), None).unwrap_err();

    assert!(matches!(
        err,
        PerformanceError::MismatchedAttributes {
            expected: GameMode::Mania,
            found: GameMode::Osu,
        }
    ));
}

#[test]
fn missing_attributes() {
    let score = Score {
        mode: 2,
        ..Default::default()
    };

    let err = evaluate(&score, None, None).unwrap_err();

    assert!(matches!(
        err,
        PerformanceError::MissingAttributes {
            mode: GameMode::Catch
        }
    ));
}

#[test]
fn unsupported_mode() {
    let score = Score {
        mode: 4,
        ..Default::default()
    };

    let err = evaluate(&score, Some(osu_attrs().into()), None).unwrap_err();

    assert!(matches!(err, PerformanceError::UnsupportedMode(4)));
    assert_eq!(err.to_string(), "no performance calculator found for mode 4");
}

#[test]
fn score_from_json() {
    let json = r#"{
        "mode": 0,
        "max_combo": 1200,
        "mods": 8,
        "accuracy": 0.9825,
        "n300": 900,
        "n100": 30,
        "misses": 4
    }"#;

    let score: Score = serde_json::from_str(json).unwrap();
    let evaluation = evaluate(&score, Some(osu_attrs().into()), None).unwrap();
    let expected = evaluate(&osu_score(HD), Some(osu_attrs().into()), None).unwrap();

    assert_close(evaluation.pp, expected.pp, 1e-9);
}
