use chrono::{NaiveTime, Timelike};

use crate::error::CalcError;

/// A moment on the 24-hour clock, with no date or zone attached.
///
/// Parsing validates shape, not clock validity: every field must be a
/// plain numeral, but values are unbounded, so `99:99` is a valid
/// point. The tool totals numeric offsets, it does not validate clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePoint {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimePoint {
    /// Parse a clock token: `HH:MM`, `HH:MM:SS`, or the literal `now`.
    ///
    /// `now` resolves against the supplied clock reading with its
    /// seconds dropped, so `now-now` is always a zero-length range.
    pub fn parse(token: &str, now: NaiveTime) -> Result<Self, CalcError> {
        let fields: Vec<&str> = token.split(':').collect();

        match fields.len() {
            1 => {
                if token == "now" {
                    Ok(Self {
                        hours: now.hour(),
                        minutes: now.minute(),
                        seconds: 0,
                    })
                } else {
                    Err(unparseable(token))
                }
            }
            2 => Ok(Self {
                hours: parse_field(fields[0], token)?,
                minutes: parse_field(fields[1], token)?,
                seconds: 0,
            }),
            3 => Ok(Self {
                hours: parse_field(fields[0], token)?,
                minutes: parse_field(fields[1], token)?,
                seconds: parse_field(fields[2], token)?,
            }),
            _ => Err(unparseable(token)),
        }
    }

    /// Offset from 00:00:00 in seconds, widened so oversized field
    /// values cannot overflow.
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

fn parse_field(field: &str, token: &str) -> Result<u32, CalcError> {
    // str::parse alone would accept a leading '+', which is not a clock digit
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unparseable(token));
    }
    field.parse().map_err(|_| unparseable(token))
}

fn unparseable(token: &str) -> CalcError {
    CalcError::UnparseableTimeToken {
        token: token.to_string(),
    }
}
