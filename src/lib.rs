//! Library to calculate performance attributes for all [osu!] gamemodes
//! from precomputed difficulty attributes.
//!
//! ## Description
//!
//! `osu-perf` turns a finished play (hitresults, combo, mods) together with a
//! beatmap's difficulty attributes into a performance value and a per-skill
//! breakdown. Difficulty attributes are expected to come from an upstream
//! difficulty calculation; no beatmap parsing happens in this crate.
//!
//! Plays on osu!standard with relax or autopilot are handed to an external
//! legacy tool instead, see the [`legacy`] module.
//!
//! ## Usage
//!
//! ```
//! use osu_perf::{
//!     any::{evaluate, DifficultyAttributes},
//!     mania::ManiaDifficultyAttributes,
//!     model::{mods::GameMods, score::Score},
//! };
//!
//! let attrs = ManiaDifficultyAttributes {
//!     stars: 10.71588862238911,
//!     max_combo: 13_516,
//!     great_hit_window: 42.0,
//! };
//!
//! let score = Score {
//!     mode: 3,
//!     max_combo: 4357,
//!     mods: GameMods::DT | GameMods::NC,
//!     n_geki: 4288,
//!     n300: 1180,
//!     n_katu: 57,
//!     n100: 2,
//!     misses: 6,
//!     ..Default::default()
//! };
//!
//! let evaluation = evaluate(&score, Some(DifficultyAttributes::Mania(attrs)), None).unwrap();
//! let (stars, pp) = evaluation.into_tuple();
//!
//! println!("Stars: {stars} | PP: {pp}");
//! ```
//!
//! Each mode can also be calculated directly through its builder:
//!
//! ```
//! use osu_perf::{taiko::{TaikoDifficultyAttributes, TaikoPerformance}, model::mods::GameMods};
//!
//! let attrs = TaikoDifficultyAttributes {
//!     stars: 9.74012768474711,
//!     great_hit_window: 18.93333371480306,
//!     max_combo: 3790,
//!     ..Default::default()
//! };
//!
//! let perf_attrs = TaikoPerformance::new(attrs)
//!     .mods(GameMods::DT)
//!     .combo(3790)
//!     .n300(3770)
//!     .n100(20)
//!     .misses(0)
//!     .calculate();
//!
//! println!("PP: {}", perf_attrs.pp());
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | Dispatch decisions and failures of the legacy tool are logged through `tracing`. If this feature is not enabled, nothing is logged. | [`tracing`]
//!
//! [osu!]: https://osu.ppy.sh/home
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::match_same_arms,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::similar_names
)]

#[doc(inline)]
pub use self::{
    any::{evaluate, DifficultyAttributes, Evaluation, Performance, PerformanceAttributes},
    error::PerformanceError,
    model::{mode::GameMode, mods::GameMods, score::Score},
};

#[macro_use]
mod util;

/// Types for calculations of any mode.
pub mod any;

/// Types for osu!standard calculations.
pub mod osu;

/// Types for osu!taiko calculations.
pub mod taiko;

/// Types for osu!catch calculations.
pub mod catch;

/// Types for osu!mania calculations.
pub mod mania;

/// Fallback to an external tool for relax and autopilot plays.
pub mod legacy;

/// Types used in and around this crate.
pub mod model;

mod error;
