use serde::{Deserialize, Serialize};

use crate::{
    catch::Catch,
    error::PerformanceError,
    legacy::{self, LegacyContext},
    mania::Mania,
    model::{
        mode::{GameMode, IGameMode},
        score::Score,
    },
    osu::Osu,
    taiko::Taiko,
};

use super::attributes::{DifficultyAttributes, ModeAttributeProvider, PerformanceAttributes};

/// The outcome of [`evaluate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The star rating of the map.
    pub stars: f64,
    /// The performance points of the play.
    pub pp: f64,
    /// The full breakdown of the calculation.
    ///
    /// `None` if the play was evaluated by the legacy tool.
    pub attributes: Option<PerformanceAttributes>,
}

impl Evaluation {
    /// Star rating and performance points as a pair.
    pub const fn into_tuple(self) -> (f64, f64) {
        (self.stars, self.pp)
    }
}

impl From<PerformanceAttributes> for Evaluation {
    fn from(attributes: PerformanceAttributes) -> Self {
        Self {
            stars: attributes.stars(),
            pp: attributes.pp(),
            attributes: Some(attributes),
        }
    }
}

/// Evaluate a [`Score`] with the calculator of its mode.
///
/// `attributes` must be of the score's mode. The only exception are
/// osu!standard plays with relax or autopilot: those are passed on to the
/// legacy tool of the given [`LegacyContext`] and the attributes are ignored.
/// The star rating of such an evaluation is the one that the tool calculated
/// itself.
///
/// # Errors
///
/// - [`PerformanceError::UnsupportedMode`] if the score's mode is unknown
/// - [`PerformanceError::MissingAttributes`] if attributes are required but
///   `None`
/// - [`PerformanceError::MismatchedAttributes`] if the attributes belong to
///   a different mode
/// - [`PerformanceError::MissingLegacyConfig`] if the legacy tool is required
///   but no context was given
/// - any error of [`legacy::run_legacy`]
pub fn evaluate(
    score: &Score,
    attributes: Option<DifficultyAttributes>,
    legacy: Option<LegacyContext<'_>>,
) -> Result<Evaluation, PerformanceError> {
    let mode = score.game_mode()?;

    if mode == GameMode::Osu && score.mods.legacy_only() {
        log!(debug, mods = %score.mods, "evaluating through legacy tool");

        let ctx = legacy.ok_or(PerformanceError::MissingLegacyConfig)?;
        let (stars, pp) = legacy::run_legacy(ctx.backend, ctx.config, score)?;

        return Ok(Evaluation {
            stars,
            pp,
            attributes: None,
        });
    }

    let attributes = attributes.ok_or(PerformanceError::MissingAttributes { mode })?;

    log!(debug, %mode, found = %attributes.mode(), "evaluating natively");

    let attributes = match mode {
        GameMode::Osu => evaluate_mode::<Osu>(attributes, score),
        GameMode::Taiko => evaluate_mode::<Taiko>(attributes, score),
        GameMode::Catch => evaluate_mode::<Catch>(attributes, score),
        GameMode::Mania => evaluate_mode::<Mania>(attributes, score),
    }?;

    Ok(Evaluation::from(attributes))
}

fn evaluate_mode<M>(
    attributes: DifficultyAttributes,
    score: &Score,
) -> Result<PerformanceAttributes, PerformanceError>
where
    M: IGameMode,
    DifficultyAttributes: ModeAttributeProvider<M>,
{
    let found = attributes.mode();

    let attrs = <DifficultyAttributes as ModeAttributeProvider<M>>::attributes(attributes).ok_or(
        PerformanceError::MismatchedAttributes {
            expected: M::MODE,
            found,
        },
    )?;

    Ok(M::performance(attrs, score).into())
}
