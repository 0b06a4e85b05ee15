use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{BitAnd, BitOr, BitOrAssign},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Collection of game mods.
///
/// Backed by the legacy bit values, see
/// <https://github.com/ppy/osu-api/wiki#mods>. Bits that don't belong to a
/// known mod are kept as-is and simply never queried.
///
/// # Example
///
/// ```
/// use osu_perf::GameMods;
///
/// let mods = GameMods::HD | GameMods::DT;
///
/// assert!(mods.hd());
/// assert!(!mods.fl());
/// assert_eq!(mods, "HDDT".parse().unwrap());
/// assert_eq!(mods.bits(), 72);
/// ```
#[derive(Copy, Clone, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameMods(u32);

macro_rules! impl_mods {
    ( $( $const_name:ident = $bits:expr => $fn_name:ident, $acronym:literal; )* ) => {
        impl GameMods {
            $(
                #[doc = concat!("`", $acronym, "`")]
                pub const $const_name: Self = Self($bits);
            )*

            $(
                #[doc = concat!("Check whether `", $acronym, "` is enabled.")]
                pub const fn $fn_name(self) -> bool {
                    self.0 & $bits != 0
                }
            )*

            const ACRONYMS: &'static [(&'static str, Self)] = &[
                $( ($acronym, Self::$const_name), )*
            ];
        }
    };
}

impl_mods! {
    NF = 1 << 0 => nf, "NF";
    EZ = 1 << 1 => ez, "EZ";
    TD = 1 << 2 => td, "TD";
    HD = 1 << 3 => hd, "HD";
    HR = 1 << 4 => hr, "HR";
    SD = 1 << 5 => sd, "SD";
    DT = 1 << 6 => dt, "DT";
    RX = 1 << 7 => rx, "RX";
    HT = 1 << 8 => ht, "HT";
    NC = 1 << 9 => nc, "NC";
    FL = 1 << 10 => fl, "FL";
    AT = 1 << 11 => at, "AT";
    SO = 1 << 12 => so, "SO";
    AP = 1 << 13 => ap, "AP";
    PF = 1 << 14 => pf, "PF";
}

impl GameMods {
    /// No mods.
    pub const NM: Self = Self(0);

    /// Create mods from their bit values.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The bit values of the mods.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check whether no bit is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether all mods of `other` are enabled.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check whether any mod of `other` is enabled.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns the mods' clock rate i.e. 1.5 for DT and NC, 0.75 for HT,
    /// and 1.0 otherwise.
    pub const fn clock_rate(self) -> f64 {
        if self.dt() || self.nc() {
            1.5
        } else if self.ht() {
            0.75
        } else {
            1.0
        }
    }

    /// Whether the play has to be handled by the legacy fallback in
    /// osu!standard.
    pub const fn legacy_only(self) -> bool {
        self.rx() || self.ap()
    }
}

impl From<u32> for GameMods {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<GameMods> for u32 {
    fn from(mods: GameMods) -> Self {
        mods.0
    }
}

impl BitOr for GameMods {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for GameMods {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for GameMods {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl std::fmt::Debug for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "GameMods({self} = {})", self.0)
    }
}

impl Display for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut any = false;

        for (acronym, gamemod) in Self::ACRONYMS {
            if self.contains(*gamemod) {
                f.write_str(acronym)?;
                any = true;
            }
        }

        if !any {
            f.write_str("NM")?;
        }

        Ok(())
    }
}

/// Failed to parse [`GameMods`] from a string of acronyms.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseGameModsError {
    #[error("mod acronyms must consist of pairs of ascii letters, got `{0}`")]
    InvalidFormat(String),
    #[error("unknown mod acronym `{0}`")]
    UnknownAcronym(String),
}

impl FromStr for GameMods {
    type Err = ParseGameModsError;

    /// Parse concatenated acronyms such as `"HDDT"` or `"+hdhr"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('+');

        if s.len() % 2 != 0 || !s.is_ascii() {
            return Err(ParseGameModsError::InvalidFormat(s.to_owned()));
        }

        let mut mods = Self::NM;

        for i in (0..s.len()).step_by(2) {
            let acronym = s[i..i + 2].to_ascii_uppercase();

            if acronym == "NM" {
                continue;
            }

            let gamemod = Self::ACRONYMS
                .iter()
                .find_map(|(name, gamemod)| (*name == acronym).then_some(*gamemod))
                .ok_or(ParseGameModsError::UnknownAcronym(acronym))?;

            mods |= gamemod;
        }

        Ok(mods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_independent() {
        let mods = GameMods::HD | GameMods::FL | GameMods::SO;

        assert!(mods.hd());
        assert!(mods.fl());
        assert!(mods.so());
        assert!(!mods.hr());
        assert!(!mods.nf());
        assert_eq!(mods.bits(), 8 + 1024 + 4096);
    }

    #[test]
    fn unknown_bits_are_ignored() {
        let mods = GameMods::from(GameMods::HR.bits() | (1 << 30));

        assert!(mods.hr());
        assert!(!mods.legacy_only());
        assert_eq!(mods.to_string(), "HR");
    }

    #[test]
    fn parse_acronyms() {
        assert_eq!("HDDT".parse::<GameMods>(), Ok(GameMods::HD | GameMods::DT));
        assert_eq!("+hdhr".parse::<GameMods>(), Ok(GameMods::HD | GameMods::HR));
        assert_eq!("NM".parse::<GameMods>(), Ok(GameMods::NM));
        assert_eq!("".parse::<GameMods>(), Ok(GameMods::NM));
        assert_eq!(
            "HDX".parse::<GameMods>(),
            Err(ParseGameModsError::InvalidFormat("HDX".to_owned()))
        );
        assert_eq!(
            "HDXY".parse::<GameMods>(),
            Err(ParseGameModsError::UnknownAcronym("XY".to_owned()))
        );
    }

    #[test]
    fn display_round_trips_known_mods() {
        let mods = GameMods::NF | GameMods::EZ | GameMods::RX;

        assert_eq!(mods.to_string(), "NFEZRX");
        assert_eq!(GameMods::NM.to_string(), "NM");
    }

    #[test]
    fn clock_rate() {
        assert!((GameMods::DT.clock_rate() - 1.5).abs() < f64::EPSILON);
        assert!((GameMods::NC.clock_rate() - 1.5).abs() < f64::EPSILON);
        assert!((GameMods::HT.clock_rate() - 0.75).abs() < f64::EPSILON);
        assert!((GameMods::HR.clock_rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn legacy_only() {
        assert!(GameMods::RX.legacy_only());
        assert!((GameMods::AP | GameMods::HD).legacy_only());
        assert!(!(GameMods::HD | GameMods::DT).legacy_only());
    }
}
