use std::fmt;

use serde::Serialize;

use crate::error::CalcError;

/// An accumulated duration, held in normalized form: seconds and
/// minutes stay within `0..=59`, overflow carries upward, and hours are
/// unbounded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimePeriod {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimePeriod {
    pub fn from_seconds(total: u64) -> Self {
        let mut period = Self {
            seconds: total,
            ..Self::default()
        };
        period.normalize();
        period
    }

    /// Add `other` into `self`, restoring normalized form.
    ///
    /// Accumulating a set of periods yields the same total in any order.
    pub fn accumulate(&mut self, other: &TimePeriod) {
        self.hours += other.hours;
        self.minutes += other.minutes;
        self.seconds += other.seconds;
        self.normalize();
    }

    /// Parse a compact duration literal like `2h30m` or `45s`.
    ///
    /// Units are `h`, `m`, and `s`; repeated units add; values are not
    /// bounded, so `90m` parses and normalizes to 1h 30m.
    pub fn parse(token: &str) -> Result<Self, CalcError> {
        if token.is_empty() {
            return Err(unparseable(token));
        }

        let mut period = Self::default();
        let mut digits = String::new();

        for ch in token.chars() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                continue;
            }
            // Unit with no digits in front, like "h" or "3hm"
            let value: u64 = digits.parse().map_err(|_| unparseable(token))?;
            match ch {
                'h' => period.hours += value,
                'm' => period.minutes += value,
                's' => period.seconds += value,
                _ => return Err(unparseable(token)),
            }
            digits.clear();
        }

        if !digits.is_empty() {
            // Trailing digits with no unit, like "3h5"
            return Err(unparseable(token));
        }

        period.normalize();
        Ok(period)
    }

    fn normalize(&mut self) {
        self.minutes += self.seconds / 60;
        self.seconds %= 60;
        self.hours += self.minutes / 60;
        self.minutes %= 60;
    }
}

impl fmt::Display for TimePeriod {
    /// Pluralized summary, omitting hours and seconds when zero. The
    /// minutes figure always appears, so a zero total reads "0 minutes".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = unit(self.hours, "hour");
        let minutes = unit(self.minutes, "minute");
        let seconds = unit(self.seconds, "second");

        if self.hours > 0 && self.seconds > 0 {
            write!(f, "{}, {}, {}", hours, minutes, seconds)
        } else if self.hours > 0 {
            write!(f, "{}, {}", hours, minutes)
        } else if self.seconds > 0 {
            write!(f, "{}, {}", minutes, seconds)
        } else {
            write!(f, "{}", minutes)
        }
    }
}

// Singular only for exactly 1; zero is plural ("0 minutes").
fn unit(value: u64, label: &str) -> String {
    if value == 1 {
        format!("{} {}", value, label)
    } else {
        format!("{} {}s", value, label)
    }
}

fn unparseable(token: &str) -> CalcError {
    CalcError::UnparseablePeriodToken {
        token: token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seconds_normalizes() {
        assert_eq!(
            TimePeriod::from_seconds(23_100),
            TimePeriod {
                hours: 6,
                minutes: 25,
                seconds: 0,
            }
        );
    }

    #[test]
    fn test_accumulate_carries_upward() {
        let mut total = TimePeriod::default();
        total.accumulate(&TimePeriod {
            hours: 0,
            minutes: 90,
            seconds: 90,
        });
        assert_eq!(
            total,
            TimePeriod {
                hours: 1,
                minutes: 31,
                seconds: 30,
            }
        );
    }

    #[test]
    fn test_accumulate_zero_is_identity() {
        // Re-normalizing an already normalized period changes nothing
        let mut period = TimePeriod::from_seconds(23_100);
        period.accumulate(&TimePeriod::default());
        assert_eq!(period, TimePeriod::from_seconds(23_100));
    }

    #[test]
    fn test_accumulate_order_independent() {
        let parts = [
            TimePeriod::from_seconds(2_400),
            TimePeriod::from_seconds(2_100),
            TimePeriod::from_seconds(50),
        ];

        let mut forward = TimePeriod::default();
        for part in &parts {
            forward.accumulate(part);
        }

        let mut backward = TimePeriod::default();
        for part in parts.iter().rev() {
            backward.accumulate(part);
        }

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_display_hours_and_minutes() {
        assert_eq!(
            TimePeriod::from_seconds(23_100).to_string(),
            "6 hours, 25 minutes"
        );
    }

    #[test]
    fn test_display_all_three_units() {
        assert_eq!(
            TimePeriod::from_seconds(2 * 3600 + 30).to_string(),
            "2 hours, 0 minutes, 30 seconds"
        );
    }

    #[test]
    fn test_display_minutes_and_seconds() {
        assert_eq!(TimePeriod::from_seconds(90).to_string(), "1 minute, 30 seconds");
    }

    #[test]
    fn test_display_zero_is_plural_minutes() {
        assert_eq!(TimePeriod::default().to_string(), "0 minutes");
    }

    #[test]
    fn test_display_singular_units() {
        assert_eq!(
            TimePeriod::from_seconds(3_661).to_string(),
            "1 hour, 1 minute, 1 second"
        );
    }

    #[test]
    fn test_parse_compact_literal() {
        assert_eq!(
            TimePeriod::parse("2h30m").unwrap(),
            TimePeriod {
                hours: 2,
                minutes: 30,
                seconds: 0,
            }
        );
    }

    #[test]
    fn test_parse_normalizes_oversized_values() {
        assert_eq!(
            TimePeriod::parse("90m").unwrap(),
            TimePeriod {
                hours: 1,
                minutes: 30,
                seconds: 0,
            }
        );
    }

    #[test]
    fn test_parse_repeated_units_add() {
        assert_eq!(
            TimePeriod::parse("1h1h").unwrap(),
            TimePeriod {
                hours: 2,
                minutes: 0,
                seconds: 0,
            }
        );
    }

    #[test]
    fn test_parse_zero_is_legal() {
        assert_eq!(TimePeriod::parse("0h").unwrap(), TimePeriod::default());
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for bad in ["", "h", "3x", "3h5", "3hm", "1.5h"] {
            let err = TimePeriod::parse(bad).unwrap_err();
            assert_eq!(
                err,
                CalcError::UnparseablePeriodToken {
                    token: bad.to_string()
                },
                "expected rejection of {:?}",
                bad
            );
        }
    }
}
