// rule.rs - 32-bit transition rule and the 5-bit neighborhood index
//
// Bit `i` of a rule is the next state of a cell whose neighborhood index is
// `i`. The index packs the von Neumann neighborhood as:
//
//   bit   4        3       2        1       0
//         Center   West    South    East    North

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::RuleParseError;

pub const NORTH_BIT: u32 = 0;
pub const EAST_BIT: u32 = 1;
pub const SOUTH_BIT: u32 = 2;
pub const WEST_BIT: u32 = 3;
pub const CENTER_BIT: u32 = 4;

/// Number of distinct neighborhood indices (and bits in a rule).
pub const INDEX_COUNT: usize = 32;

/// The five cells a transition depends on.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Neighborhood {
    pub center: bool,
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Neighborhood {
    /// Packs the neighborhood into its rule index, in `0..32`.
    pub fn index(self) -> u8 {
        ((self.north as u8) << NORTH_BIT)
            | ((self.east as u8) << EAST_BIT)
            | ((self.south as u8) << SOUTH_BIT)
            | ((self.west as u8) << WEST_BIT)
            | ((self.center as u8) << CENTER_BIT)
    }

    /// Inverse of [`Neighborhood::index`]. Bits above the fifth are ignored.
    pub fn from_index(index: u8) -> Self {
        let bit = |b: u32| (index >> b) & 1 == 1;
        Self {
            center: bit(CENTER_BIT),
            north: bit(NORTH_BIT),
            east: bit(EAST_BIT),
            south: bit(SOUTH_BIT),
            west: bit(WEST_BIT),
        }
    }
}

/// A transition rule. Every `u32` is a legal rule.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rule(u32);

impl Rule {
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Draws a rule uniformly from all 2^32 values.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random::<u32>())
    }

    /// Next state of a cell whose neighborhood packs to `index`.
    pub fn next_state(self, index: u8) -> bool {
        debug_assert!((index as usize) < INDEX_COUNT);
        (self.0 >> (index & 0x1f)) & 1 == 1
    }

    /// Next state for an unpacked neighborhood.
    pub fn apply(self, hood: Neighborhood) -> bool {
        self.next_state(hood.index())
    }
}

impl From<u32> for Rule {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl FromStr for Rule {
    type Err = RuleParseError;

    /// Parses a hexadecimal rule, case-insensitively, with an optional `0x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() {
            return Err(RuleParseError::Empty);
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(RuleParseError::InvalidDigit(bad));
        }
        u32::from_str_radix(digits, 16)
            .map(Rule)
            .map_err(|_| RuleParseError::Overflow(s.to_string()))
    }
}

impl fmt::LowerHex for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
