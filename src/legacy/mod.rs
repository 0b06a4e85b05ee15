//! Relax and autopilot plays on osu!standard are not supported by the native
//! calculator. Instead, they are evaluated by an external legacy tool which
//! calculates both the star rating and the performance points on its own.
//!
//! The tool is modeled as a [`LegacyBackend`] that hands out a
//! [`LegacyHandle`] per calculation. Handles are always wrapped in a
//! [`LegacyGuard`] so that they are released no matter how the calculation
//! ends.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    io,
    ops::{Deref, DerefMut},
    path::{Path, PathBuf},
    process::ExitStatus,
};

use serde::{Deserialize, Serialize};

use crate::{
    error::PerformanceError,
    model::{mods::GameMods, score::Score},
};

pub use self::oppai::OppaiCli;

mod oppai;

/// Failures of the legacy tool itself.
#[derive(Debug, thiserror::Error)]
pub enum LegacyError {
    #[error("failed to run `{}`", .tool.display())]
    Spawn {
        tool: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("legacy tool exited with {status}: {stderr}")]
    ExitStatus { status: ExitStatus, stderr: String },
    #[error("failed to parse legacy tool output")]
    Output(#[from] serde_json::Error),
    #[error("legacy handle was not configured")]
    NotConfigured,
}

/// Where to find the legacy tool and the beatmap it should calculate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyConfig {
    /// Path to the tool's executable or library.
    pub tool_path: PathBuf,
    /// Path to the `.osu` file of the beatmap.
    pub beatmap_path: PathBuf,
}

impl LegacyConfig {
    /// Create a new [`LegacyConfig`] from the tool's path and the beatmap's path.
    pub fn new(tool_path: impl Into<PathBuf>, beatmap_path: impl Into<PathBuf>) -> Self {
        Self {
            tool_path: tool_path.into(),
            beatmap_path: beatmap_path.into(),
        }
    }
}

/// Everything needed to run the legacy tool during [`evaluate`].
///
/// [`evaluate`]: crate::any::evaluate
#[derive(Copy, Clone)]
pub struct LegacyContext<'a> {
    /// Hands out a handle for each calculation.
    pub backend: &'a dyn LegacyBackend,
    /// Paths of the tool and the beatmap.
    pub config: &'a LegacyConfig,
}

impl<'a> LegacyContext<'a> {
    /// Bundle a backend with the paths it should use.
    pub fn new(backend: &'a dyn LegacyBackend, config: &'a LegacyConfig) -> Self {
        Self { backend, config }
    }
}

impl Debug for LegacyContext<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LegacyContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// The score parameters passed on to the legacy tool.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegacyParams {
    /// The mode id.
    pub mode: u8,
    /// Accuracy between `0.0` and `100.0`.
    pub accuracy: f64,
    /// The enabled mods, including relax or autopilot.
    pub mods: GameMods,
    /// Maximum combo of the play.
    pub max_combo: u32,
    /// Amount of misses.
    pub n_misses: u32,
}

impl From<&Score> for LegacyParams {
    fn from(score: &Score) -> Self {
        Self {
            mode: score.mode,
            accuracy: score.normalized_accuracy() * 100.0,
            mods: score.mods,
            max_combo: score.max_combo,
            n_misses: score.misses,
        }
    }
}

/// Provides handles to the legacy tool.
pub trait LegacyBackend {
    /// Acquire a fresh handle for the tool at the given path.
    fn acquire(&self, tool_path: &Path) -> Result<Box<dyn LegacyHandle>, LegacyError>;
}

/// A single calculation context of the legacy tool.
pub trait LegacyHandle {
    /// Set the score parameters for the next calculation.
    fn configure(&mut self, params: &LegacyParams);

    /// Calculate the beatmap at the given path with the configured parameters.
    fn calculate(&mut self, beatmap_path: &Path) -> Result<(), LegacyError>;

    /// The performance points of the last calculation.
    fn total_value(&self) -> f64;

    /// The star rating of the last calculation.
    fn star_rating(&self) -> f64;

    /// Free all resources of the handle.
    fn release(&mut self);
}

/// Releases the wrapped [`LegacyHandle`] when dropped.
pub struct LegacyGuard {
    handle: Box<dyn LegacyHandle>,
}

impl LegacyGuard {
    /// Take ownership of a handle and release it on drop.
    pub fn new(handle: Box<dyn LegacyHandle>) -> Self {
        Self { handle }
    }
}

impl Deref for LegacyGuard {
    type Target = dyn LegacyHandle;

    fn deref(&self) -> &Self::Target {
        &*self.handle
    }
}

impl DerefMut for LegacyGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.handle
    }
}

impl Drop for LegacyGuard {
    fn drop(&mut self) {
        self.handle.release();
    }
}

/// Calculate star rating and performance points of a [`Score`] through the
/// legacy tool.
///
/// Both paths of the [`LegacyConfig`] must exist. If the tool produces a
/// value that is NaN or infinite, `(0.0, 0.0)` is returned instead.
pub fn run_legacy(
    backend: &dyn LegacyBackend,
    config: &LegacyConfig,
    score: &Score,
) -> Result<(f64, f64), PerformanceError> {
    for path in [&config.tool_path, &config.beatmap_path] {
        if !path.exists() {
            return Err(PerformanceError::ResourceNotFound { path: path.clone() });
        }
    }

    let params = LegacyParams::from(score);

    let handle = backend.acquire(&config.tool_path).map_err(log_failure)?;
    let mut handle = LegacyGuard::new(handle);

    handle.configure(&params);
    handle
        .calculate(&config.beatmap_path)
        .map_err(log_failure)?;

    let stars = handle.star_rating();
    let pp = handle.total_value();

    if !(stars.is_finite() && pp.is_finite()) {
        log!(warn, stars, pp, map = %config.beatmap_path.display(), "non-finite legacy result");

        return Ok((0.0, 0.0));
    }

    Ok((stars, pp))
}

fn log_failure(err: LegacyError) -> LegacyError {
    log!(error, error = %err, "legacy tool failed");

    err
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    struct MockBackend {
        stars: f64,
        pp: f64,
        fail: bool,
        released: Rc<Cell<u32>>,
        params: Rc<Cell<Option<LegacyParams>>>,
    }

    impl MockBackend {
        fn new(stars: f64, pp: f64) -> Self {
            Self {
                stars,
                pp,
                fail: false,
                released: Rc::default(),
                params: Rc::default(),
            }
        }
    }

    struct MockHandle {
        stars: f64,
        pp: f64,
        fail: bool,
        released: Rc<Cell<u32>>,
        params: Rc<Cell<Option<LegacyParams>>>,
    }

    impl LegacyBackend for MockBackend {
        fn acquire(&self, _: &Path) -> Result<Box<dyn LegacyHandle>, LegacyError> {
            Ok(Box::new(MockHandle {
                stars: self.stars,
                pp: self.pp,
                fail: self.fail,
                released: Rc::clone(&self.released),
                params: Rc::clone(&self.params),
            }))
        }
    }

    impl LegacyHandle for MockHandle {
        fn configure(&mut self, params: &LegacyParams) {
            self.params.set(Some(*params));
        }

        fn calculate(&mut self, _: &Path) -> Result<(), LegacyError> {
            if self.fail {
                Err(LegacyError::NotConfigured)
            } else {
                Ok(())
            }
        }

        fn total_value(&self) -> f64 {
            self.pp
        }

        fn star_rating(&self) -> f64 {
            self.stars
        }

        fn release(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn config() -> LegacyConfig {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));

        LegacyConfig::new(manifest, manifest.join("Cargo.toml"))
    }

    fn relax_score() -> Score {
        Score {
            mode: 0,
            max_combo: 500,
            mods: GameMods::RX | GameMods::HD,
            accuracy: 0.975,
            misses: 2,
            ..Default::default()
        }
    }

    #[test]
    fn values_and_release() {
        let backend = MockBackend::new(6.5, 420.0);
        let res = run_legacy(&backend, &config(), &relax_score()).unwrap();

        assert_eq!(res, (6.5, 420.0));
        assert_eq!(backend.released.get(), 1);

        let params = backend.params.get().unwrap();
        assert!((params.accuracy - 97.5).abs() < 1e-9);
        assert_eq!(params.max_combo, 500);
        assert_eq!(params.n_misses, 2);
        assert_eq!(params.mods, GameMods::RX | GameMods::HD);
    }

    #[test]
    fn non_finite_is_normalized() {
        for (stars, pp) in [(f64::NAN, 100.0), (5.0, f64::INFINITY)] {
            let backend = MockBackend::new(stars, pp);
            let res = run_legacy(&backend, &config(), &relax_score()).unwrap();

            assert_eq!(res, (0.0, 0.0));
            assert_eq!(backend.released.get(), 1);
        }
    }

    #[test]
    fn released_on_failure() {
        let backend = MockBackend {
            fail: true,
            ..MockBackend::new(1.0, 1.0)
        };

        let err = run_legacy(&backend, &config(), &relax_score()).unwrap_err();

        assert!(matches!(
            err,
            PerformanceError::Legacy(LegacyError::NotConfigured)
        ));
        assert_eq!(backend.released.get(), 1);
    }

    #[test]
    fn missing_beatmap() {
        let backend = MockBackend::new(1.0, 1.0);

        let config = LegacyConfig {
            beatmap_path: PathBuf::from("definitely/not/a/beatmap.osu"),
            ..config()
        };

        let err = run_legacy(&backend, &config, &relax_score()).unwrap_err();

        assert!(matches!(err, PerformanceError::ResourceNotFound { .. }));
        assert_eq!(backend.released.get(), 0);
        assert!(backend.params.get().is_none());
    }

    #[test]
    fn context_and_params_from_score() {
        let backend = MockBackend::new(1.0, 1.0);
        let config = LegacyConfig::new("oppai", "maps/1016701.osu");
        let ctx = LegacyContext::new(&backend, &config);

        assert_eq!(ctx.config.tool_path, Path::new("oppai"));
        assert_eq!(ctx.config.beatmap_path, Path::new("maps/1016701.osu"));

        let score = relax_score();
        let params = LegacyParams::from(&score);

        assert_eq!(params.mode, 0);
        assert_eq!(params.mods, score.mods);
        assert_eq!(params.max_combo, score.max_combo);
        assert_eq!(params.n_misses, score.misses);
    }
}
