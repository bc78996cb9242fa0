//! StatVector - Fixed-size accumulator of stat values

use crate::types::Stat;
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// One value per [`Stat`], zero by default
///
/// Values are stored as `f64` so that whole-number stats (strength, resistances)
/// and fractional ones (regeneration, leech) share one representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatVector {
    values: [f64; Stat::COUNT],
}

impl Default for StatVector {
    fn default() -> Self {
        StatVector::zero()
    }
}

impl StatVector {
    /// The all-zero vector
    pub const fn zero() -> Self {
        StatVector {
            values: [0.0; Stat::COUNT],
        }
    }

    /// Build a vector from `(stat, value)` pairs, summing duplicates
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Stat, f64)>) -> Self {
        let mut vector = StatVector::zero();
        for (stat, value) in pairs {
            vector.add_to(stat, value);
        }
        vector
    }

    pub fn get(&self, stat: Stat) -> f64 {
        self.values[stat.index()]
    }

    /// Add `value` to a single stat
    pub fn add_to(&mut self, stat: Stat, value: f64) {
        self.values[stat.index()] += value;
    }

    /// Iterate every stat in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        Stat::ALL.iter().map(move |&stat| (stat, self.get(stat)))
    }

    /// Iterate only the stats with a non-zero value
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        self.iter().filter(|(_, value)| *value != 0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.iter_nonzero().next().is_none()
    }
}

impl Add for StatVector {
    type Output = StatVector;

    fn add(mut self, rhs: StatVector) -> StatVector {
        self += rhs;
        self
    }
}

impl<'a> Add<&'a StatVector> for StatVector {
    type Output = StatVector;

    fn add(mut self, rhs: &'a StatVector) -> StatVector {
        self += rhs;
        self
    }
}

impl AddAssign for StatVector {
    fn add_assign(&mut self, rhs: StatVector) {
        *self += &rhs;
    }
}

impl<'a> AddAssign<&'a StatVector> for StatVector {
    fn add_assign(&mut self, rhs: &'a StatVector) {
        for (lhs, rhs) in self.values.iter_mut().zip(rhs.values.iter()) {
            *lhs += rhs;
        }
    }
}

impl Sum for StatVector {
    fn sum<I: Iterator<Item = StatVector>>(iter: I) -> StatVector {
        iter.fold(StatVector::zero(), |acc, vector| acc + vector)
    }
}

impl<'a> Sum<&'a StatVector> for StatVector {
    fn sum<I: Iterator<Item = &'a StatVector>>(iter: I) -> StatVector {
        iter.fold(StatVector::zero(), |acc, vector| acc + vector)
    }
}

/// Format a stat value: whole numbers without a fractional part
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

impl fmt::Display for StatVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (stat, value) in self.iter_nonzero() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}: {}", stat, format_value(value))?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for StatVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter_nonzero().map(|(stat, value)| (stat.key(), value)))
    }
}
