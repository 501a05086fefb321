//! Exact fixed-point length and area units.
//!
//! Quantities feed currency math downstream, so lengths are stored as an
//! integer count of ten-thousandths of an inch rather than as binary
//! floats. All arithmetic that could lose precision (proportional
//! division, area) widens to `i128` and rounds half away from zero, so
//! identical inputs always produce identical results.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Fixed-point scale: raw units per inch.
const SCALE: i64 = 10_000;

/// A length in inches, stored as ten-thousandths of an inch.
///
/// The raw integer is the serialized form (`serde(transparent)`), so a
/// persisted layout round-trips bit-exactly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Inches(i64);

impl Inches {
    /// Zero length.
    pub const ZERO: Self = Self(0);

    /// Create from raw ten-thousandths of an inch.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from a whole number of inches.
    #[inline]
    pub const fn from_whole(inches: i64) -> Self {
        Self(inches * SCALE)
    }

    /// Convert a float (form input) to fixed point, rounding half away
    /// from zero. This is the only place float error can enter; every
    /// derivation after it is exact.
    pub fn from_f64(inches: f64) -> Self {
        Self((inches * SCALE as f64).round() as i64)
    }

    /// Raw ten-thousandths of an inch.
    #[must_use]
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Approximate float value, for display or preview scaling only.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// Whether the length is strictly positive.
    #[must_use]
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Whether the length is strictly negative.
    #[must_use]
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Multiply by an integer count.
    #[must_use]
    pub const fn scale(self, count: i64) -> Self {
        Self(self.0 * count)
    }

    /// Exact proportional division: `self * num / den`, widened to
    /// `i128` and rounded half away from zero.
    ///
    /// Boundary offsets derived with this telescope exactly: the
    /// difference sequence of `mul_div(i, n)` for `i = 0..=n` sums to
    /// `self` with no residue.
    #[must_use]
    pub fn mul_div(self, num: u32, den: u32) -> Self {
        debug_assert!(den > 0);
        let n = i128::from(self.0) * i128::from(num);
        Self(div_round_half_away(n, i128::from(den)) as i64)
    }

    /// Area of a `self` by `other` rectangle.
    #[must_use]
    pub fn area_with(self, other: Inches) -> SquareInches {
        let n = i128::from(self.0) * i128::from(other.0);
        SquareInches(div_round_half_away(n, i128::from(SCALE)) as i64)
    }
}

impl Add for Inches {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Inches {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Inches {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Inches {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Inches {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Inches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fixed(f, self.0, "in")
    }
}

/// An area in square inches, stored as ten-thousandths of a square inch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SquareInches(i64);

impl SquareInches {
    /// Zero area.
    pub const ZERO: Self = Self(0);

    /// Create from raw ten-thousandths of a square inch.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw ten-thousandths of a square inch.
    #[must_use]
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Approximate float value, for display only.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }
}

impl Add for SquareInches {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for SquareInches {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for SquareInches {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for SquareInches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fixed(f, self.0, "sq in")
    }
}

/// Divide rounding half away from zero.
fn div_round_half_away(n: i128, den: i128) -> i128 {
    debug_assert!(den > 0);
    if n >= 0 {
        (n + den / 2) / den
    } else {
        (n - den / 2) / den
    }
}

/// Render a scaled integer as a minimal decimal with a unit suffix.
fn write_fixed(f: &mut fmt::Formatter<'_>, raw: i64, unit: &str) -> fmt::Result {
    let sign = if raw < 0 { "-" } else { "" };
    let abs = raw.unsigned_abs();
    let whole = abs / SCALE as u64;
    let frac = abs % SCALE as u64;
    if frac == 0 {
        write!(f, "{sign}{whole} {unit}")
    } else {
        let digits = format!("{frac:04}");
        write!(f, "{sign}{whole}.{} {unit}", digits.trim_end_matches('0'))
    }
}
