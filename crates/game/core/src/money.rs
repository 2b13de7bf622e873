//! Currency and score value types.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

/// Amount of in-game currency. Negative values represent debits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// Inclusive bounds of a `percent` spread around this amount.
    ///
    /// The spread is truncated toward zero, so both bounds always stay inside
    /// the exact `[value * (1 - p), value * (1 + p)]` interval. Bounds past the
    /// `i64` range saturate.
    pub const fn percent_bounds(self, percent: u8) -> (Money, Money) {
        let value = self.0 as i128;
        let delta = value.abs() * percent as i128 / 100;
        (Money(saturate(value - delta)), Money(saturate(value + delta)))
    }
}

const fn saturate(value: i128) -> i64 {
    if value > i64::MAX as i128 {
        i64::MAX
    } else if value < i64::MIN as i128 {
        i64::MIN
    } else {
        value as i64
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty-adjustment signal produced by a completed raid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RaidPoints(pub u64);

impl RaidPoints {
    /// A win is worth double the raid level, anything else is worth the level itself.
    ///
    /// Points are wider than levels so doubling never overflows.
    pub const fn for_outcome(raid_level: u32, won: bool) -> Self {
        let level = raid_level as u64;
        if won { Self(2 * level) } else { Self(level) }
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RaidPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
