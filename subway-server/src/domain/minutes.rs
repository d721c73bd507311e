//! Non-negative durations measured in minutes.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Error returned when a duration is negative, too large or not a finite number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid duration {value}: {reason}")]
pub struct InvalidMinutes {
    value: f64,
    reason: &'static str,
}

/// A duration in minutes.
///
/// Always finite and non-negative, which makes the ordering total. Fractional
/// values are allowed since average wait times are often given in half minutes.
///
/// Constructed values are at most [`Minutes::MAX`], so summing the times of
/// any realistic route stays exact. Addition saturates at `f64::MAX` and can
/// never produce infinity.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Minutes;
///
/// let travel = Minutes::new(3.0).unwrap();
/// let wait = Minutes::new(2.5).unwrap();
/// assert_eq!((travel + wait).as_f64(), 5.5);
///
/// assert!(Minutes::new(-1.0).is_err());
/// assert!(Minutes::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Minutes(f64);

impl Minutes {
    /// No time at all.
    pub const ZERO: Minutes = Minutes(0.0);

    /// Largest duration accepted by [`Minutes::new`], about two million years.
    pub const MAX: Minutes = Minutes(1.0e12);

    /// Create a duration, rejecting negative, non-finite and oversized values.
    pub fn new(value: f64) -> Result<Self, InvalidMinutes> {
        if !value.is_finite() {
            return Err(InvalidMinutes {
                value,
                reason: "must be a finite number",
            });
        }
        if value < 0.0 {
            return Err(InvalidMinutes {
                value,
                reason: "must not be negative",
            });
        }
        if value > Self::MAX.0 {
            return Err(InvalidMinutes {
                value,
                reason: "must not exceed 1e12 minutes",
            });
        }
        // Normalise -0.0 so equal values compare and hash identically.
        Ok(Minutes(value + 0.0))
    }

    /// Create a duration from a whole number of minutes.
    pub fn whole(value: u32) -> Self {
        Minutes(f64::from(value))
    }

    /// Returns the duration as a float.
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Returns true if the duration is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Eq for Minutes {}

impl PartialOrd for Minutes {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Minutes {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Minutes {
    type Output = Minutes;

    fn add(self, rhs: Self) -> Self::Output {
        Minutes((self.0 + rhs.0).min(f64::MAX))
    }
}

impl AddAssign for Minutes {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Minutes {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Minutes::ZERO, Add::add)
    }
}

impl fmt::Debug for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Minutes({})", self.0)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_fractions() {
        assert_eq!(Minutes::new(0.0).unwrap(), Minutes::ZERO);
        assert_eq!(Minutes::new(2.5).unwrap().as_f64(), 2.5);
    }

    #[test]
    fn negative_zero_is_zero() {
        let m = Minutes::new(-0.0).unwrap();
        assert!(m.is_zero());
        assert!(m.as_f64().is_sign_positive());
    }

    #[test]
    fn rejects_invalid() {
        assert!(Minutes::new(-0.5).is_err());
        assert!(Minutes::new(f64::INFINITY).is_err());
        assert!(Minutes::new(f64::NAN).is_err());
        assert!(Minutes::new(1.7e308).is_err());
    }

    #[test]
    fn accepts_up_to_max() {
        assert_eq!(Minutes::new(1.0e12).unwrap(), Minutes::MAX);
        assert!(Minutes::new(1.0e12 + 1.0e6).is_err());
        assert!(Minutes::whole(u32::MAX) < Minutes::MAX);
    }

    #[test]
    fn addition_saturates() {
        let huge = Minutes(f64::MAX);

        let sum = huge + huge;
        assert!(sum.as_f64().is_finite());
        assert_eq!(sum, huge);

        let mut total = huge;
        total += Minutes::MAX;
        assert!(total.as_f64().is_finite());

        let summed: Minutes = [huge, huge, huge].into_iter().sum();
        assert!(summed.as_f64().is_finite());
    }

    #[test]
    fn error_display() {
        let err = Minutes::new(-2.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid duration -2: must not be negative");
    }

    #[test]
    fn arithmetic() {
        let mut total = Minutes::whole(3);
        total += Minutes::whole(6);
        assert_eq!(total, Minutes::whole(9));

        let sum: Minutes = [1.5, 2.0, 0.5]
            .into_iter()
            .map(|m| Minutes::new(m).unwrap())
            .sum();
        assert_eq!(sum, Minutes::whole(4));
    }

    #[test]
    fn ordering() {
        let mut values = vec![Minutes::whole(5), Minutes::ZERO, Minutes::new(2.5).unwrap()];
        values.sort();
        assert_eq!(
            values,
            vec![Minutes::ZERO, Minutes::new(2.5).unwrap(), Minutes::whole(5)]
        );
    }

    #[test]
    fn display() {
        assert_eq!(Minutes::new(2.5).unwrap().to_string(), "2.5 min");
        assert_eq!(Minutes::whole(9).to_string(), "9 min");
    }
}
