/// Gamemode related types.
pub mod mode;

/// Gamemods related types.
pub mod mods;

/// The raw outcome of a play.
pub mod score;
