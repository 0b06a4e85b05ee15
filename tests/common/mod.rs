// False positive
#[allow(unused)]
pub use self::mods::*;

/// Bit values for mods
mod mods {
    #![allow(unused)]

    pub const NM: u32 = 0;
    pub const NF: u32 = 1 << 0;
    pub const EZ: u32 = 1 << 1;
    pub const HD: u32 = 1 << 3;
    pub const HR: u32 = 1 << 4;
    pub const DT: u32 = 1 << 6;
    pub const RX: u32 = 1 << 7;
    pub const NC: u32 = 1 << 9;
    pub const FL: u32 = 1 << 10;
    pub const SO: u32 = 1 << 12;
    pub const AP: u32 = 1 << 13;
}

/// Panics if `actual` is further away from `expected` than `tolerance`.
#[allow(unused)]
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{actual} != {expected} (tolerance {tolerance})"
    );
}

/// Rounds to two decimals, the precision of values displayed on the website.
#[allow(unused)]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
