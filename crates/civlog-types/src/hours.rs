use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Flight duration in whole tenths of an hour.
///
/// Logbook hours are always recorded with one decimal place, so keeping the
/// value as an integer count of tenths makes every sum exact. Serialized as a
/// decimal number (`1.5`), displayed with one decimal place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hours(u64);

impl Hours {
    pub const ZERO: Hours = Hours(0);

    pub const fn from_tenths(tenths: u64) -> Self {
        Self(tenths)
    }

    /// Build from a whole-hour part and a tenth digit (0..=9 expected, larger
    /// values carry into the hour).
    pub const fn from_parts(hours: u64, tenth: u64) -> Self {
        Self(hours * 10 + tenth)
    }

    /// Like [`Hours::from_parts`], but `None` when the tenth count overflows
    pub const fn checked_from_parts(hours: u64, tenth: u64) -> Option<Self> {
        match hours.checked_mul(10) {
            Some(whole) => match whole.checked_add(tenth) {
                Some(tenths) => Some(Self(tenths)),
                None => None,
            },
            None => None,
        }
    }

    pub const fn tenths(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 10.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Add for Hours {
    type Output = Hours;

    fn add(self, rhs: Hours) -> Hours {
        Hours(self.0 + rhs.0)
    }
}

impl AddAssign for Hours {
    fn add_assign(&mut self, rhs: Hours) {
        self.0 += rhs.0;
    }
}

impl Sum for Hours {
    fn sum<I: Iterator<Item = Hours>>(iter: I) -> Hours {
        iter.fold(Hours::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Hours> for Hours {
    fn sum<I: Iterator<Item = &'a Hours>>(iter: I) -> Hours {
        iter.copied().sum()
    }
}

impl Serialize for Hours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Hours {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() || value < 0.0 {
            return Err(serde::de::Error::custom(format!(
                "hours must be a non-negative number, got {}",
                value
            )));
        }
        Ok(Hours((value * 10.0).round() as u64))
    }
}
