use std::path::PathBuf;

use crate::{legacy::LegacyError, model::mode::GameMode};

/// All the ways that evaluating a play can fail.
#[derive(Debug, thiserror::Error)]
pub enum PerformanceError {
    #[error("no performance calculator found for mode {0}")]
    UnsupportedMode(u8),
    #[error("missing difficulty attributes for mode {mode}")]
    MissingAttributes { mode: GameMode },
    #[error("expected difficulty attributes for mode {expected}, got {found}")]
    MismatchedAttributes { expected: GameMode, found: GameMode },
    #[error("relax and autopilot plays require a legacy tool configuration")]
    MissingLegacyConfig,
    #[error("path `{}` does not exist", .path.display())]
    ResourceNotFound { path: PathBuf },
    #[error("legacy tool failed")]
    Legacy(#[from] LegacyError),
}
