//! Brightness arithmetic.

use std::str::FromStr;

use crate::error::Error;

/// How a requested value relates to the current brightness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Adjustment {
    /// Set to this many raw units.
    Absolute(f64),
    /// Add this many raw units to the current value.
    Relative(f64),
    /// Set to this percentage of the maximum.
    AbsolutePercent(f64),
    /// Add this percentage of the maximum to the current value.
    RelativePercent(f64),
}

impl Adjustment {
    pub fn new(value: f64, relative: bool, percentage: bool) -> Self {
        match (relative, percentage) {
            (false, false) => Adjustment::Absolute(value),
            (true, false) => Adjustment::Relative(value),
            (false, true) => Adjustment::AbsolutePercent(value),
            (true, true) => Adjustment::RelativePercent(value),
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        match *self {
            Adjustment::Absolute(v)
            | Adjustment::Relative(v)
            | Adjustment::AbsolutePercent(v)
            | Adjustment::RelativePercent(v) => v,
        }
    }

    #[inline]
    pub fn is_relative(&self) -> bool {
        matches!(self, Adjustment::Relative(_) | Adjustment::RelativePercent(_))
    }

    #[inline]
    pub fn is_percentage(&self) -> bool {
        matches!(self, Adjustment::AbsolutePercent(_) | Adjustment::RelativePercent(_))
    }
}

/// Parses `[+|-]<number>[%]`. A sign makes the adjustment relative, a
/// trailing `%` makes it a percentage of the maximum.
impl FromStr for Adjustment {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| Error::InvalidAdjustment {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let relative = spec.starts_with('+') || spec.starts_with('-');
        let (number, percentage) = match spec.strip_suffix('%') {
            Some(number) => (number, true),
            None => (spec, false),
        };

        let value: f64 = number.parse().map_err(|_| invalid("not a number"))?;
        if !value.is_finite() {
            return Err(invalid("value must be finite"));
        }

        Ok(Adjustment::new(value, relative, percentage))
    }
}

/// New brightness for a control currently at `current` out of `max`.
///
/// The raw result is clamped first: anything negative or truncating below
/// `min` gives `min`, anything above `max` gives `max`. Only values inside
/// the range are rounded, half away from zero. With `min` above `max` the
/// result depends on the value: one truncating below `min` gives `min`, one
/// above `max` gives `max`.
pub fn compute(max: u64, min: u64, current: u64, adjustment: Adjustment) -> u64 {
    let max_f = max as f64;
    let current_f = current as f64;

    let bl = match adjustment {
        Adjustment::RelativePercent(v) => current_f + max_f * v / 100.0,
        Adjustment::Relative(v) => current_f + v,
        Adjustment::AbsolutePercent(v) => v / 100.0 * max_f,
        Adjustment::Absolute(v) => v,
    };

    if bl < 0.0 || (bl as u64) < min {
        min
    } else if bl > max_f {
        max
    } else {
        bl.round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_modes() {
        assert_eq!("50".parse::<Adjustment>().unwrap(), Adjustment::Absolute(50.0));
        assert_eq!("-20".parse::<Adjustment>().unwrap(), Adjustment::Relative(-20.0));
        assert_eq!("+5".parse::<Adjustment>().unwrap(), Adjustment::Relative(5.0));
        assert_eq!("75%".parse::<Adjustment>().unwrap(), Adjustment::AbsolutePercent(75.0));
        assert_eq!("+60%".parse::<Adjustment>().unwrap(), Adjustment::RelativePercent(60.0));
        assert_eq!("-2.5%".parse::<Adjustment>().unwrap(), Adjustment::RelativePercent(-2.5));
    }

    #[test]
    fn parse_rejects_garbage() {
        for spec in ["", "%", "+", "abc", "10%%", "nan", "inf", "-inf%"] {
            assert!(
                matches!(spec.parse::<Adjustment>(), Err(Error::InvalidAdjustment { .. })),
                "{:?} should not parse",
                spec
            );
        }
    }

    #[test]
    fn bool_constructor_matches_variants() {
        let adj = Adjustment::new(3.0, true, false);
        assert_eq!(adj, Adjustment::Relative(3.0));
        assert!(adj.is_relative());
        assert!(!adj.is_percentage());
        assert_eq!(adj.value(), 3.0);
        assert!(Adjustment::new(1.0, false, true).is_percentage());
    }

    #[test]
    fn setting_current_is_a_noop() {
        for max in [1u64, 7, 100, 255, 1000] {
            for min in 0..=max.min(20) {
                for current in min..=max {
                    assert_eq!(compute(max, min, current, Adjustment::Absolute(current as f64)), current);
                    assert_eq!(compute(max, min, current, Adjustment::Relative(0.0)), current);
                    assert_eq!(compute(max, min, current, Adjustment::AbsolutePercent(100.0)), max);
                }
            }
        }
    }

    #[test]
    fn result_always_within_bounds() {
        let values = [-1e9, -150.0, -100.0, -33.3, -0.5, 0.0, 0.49, 12.5, 99.9, 100.0, 250.0, 1e12];
        for (max, min, current) in [(100, 10, 50), (255, 0, 0), (1, 1, 1), (1000, 3, 999)] {
            for &v in &values {
                for relative in [false, true] {
                    for percentage in [false, true] {
                        let got = compute(max, min, current, Adjustment::new(v, relative, percentage));
                        assert!(got >= min && got <= max, "{} out of [{}, {}] for {}", got, min, max, v);
                    }
                }
            }
        }
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!((2.5f64).round(), 3.0);
        assert_eq!((-2.5f64).round(), -3.0);
        assert_eq!(compute(100, 0, 0, Adjustment::Absolute(2.5)), 3);
        assert_eq!(compute(100, 0, 0, Adjustment::Absolute(2.49)), 2);
        assert_eq!(compute(100, 0, 0, Adjustment::Absolute(10.5)), 11);
        assert_eq!(compute(100, 0, 0, Adjustment::Absolute(10.4)), 10);
        // 33% of 255 is 84.15
        assert_eq!(compute(255, 0, 0, Adjustment::AbsolutePercent(33.0)), 84);
    }

    #[test]
    fn clamps_before_rounding() {
        // truncates to 9, below the floor
        assert_eq!(compute(100, 10, 50, Adjustment::Absolute(9.7)), 10);
        assert_eq!(compute(100, 10, 50, Adjustment::Absolute(100.4)), 100);
        assert_eq!(compute(100, 0, 0, Adjustment::Absolute(-0.2)), 0);
    }

    #[test]
    fn min_above_max_gives_mixed_results() {
        assert_eq!(compute(100, 200, 50, Adjustment::Absolute(500.0)), 100);
        assert_eq!(compute(100, 200, 50, Adjustment::Absolute(50.0)), 200);
    }

    #[test]
    fn in_range_values_past_i64_are_kept() {
        assert_eq!(compute(u64::MAX, 0, 0, Adjustment::AbsolutePercent(100.0)), u64::MAX);
    }

    #[test]
    fn example_adjustments() {
        assert_eq!(compute(100, 10, 50, "-20".parse().unwrap()), 30);
        assert_eq!(compute(100, 10, 50, "+60%".parse().unwrap()), 100);
        assert_eq!(compute(100, 10, 50, "5".parse().unwrap()), 10);
        assert_eq!(compute(1000, 0, 500, "-10%".parse().unwrap()), 400);
    }
}
