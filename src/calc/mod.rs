pub mod period;
pub mod point;
pub mod split;

use chrono::NaiveTime;

use crate::config::BehaviorConfig;
use crate::error::CalcError;
use self::period::TimePeriod;
use self::point::TimePoint;
use self::split::split_tokens;

/// One full turn of the clock, for ranges that cross midnight.
const SECONDS_PER_DAY: i64 = 86_400;

/// Total a full expression and render the summary line.
///
/// `now` anchors any `now` tokens; the same instant backs every
/// occurrence in the expression.
pub fn calculate(
    input: &str,
    now: NaiveTime,
    behavior: &BehaviorConfig,
) -> Result<String, CalcError> {
    let total = compute_total(input, now, behavior)?;
    Ok(format_summary(&total))
}

/// Total an expression into a normalized period.
///
/// An expression is either comma-separated clock ranges
/// (`08:25-12:00,12:45-17:10`) or `+`-joined duration literals
/// (`2h30m+45m`); the presence of `+` selects the latter. Any bad
/// token fails the whole computation, never a partial total.
pub fn compute_total(
    input: &str,
    now: NaiveTime,
    behavior: &BehaviorConfig,
) -> Result<TimePeriod, CalcError> {
    if input.contains('+') {
        return sum_periods(input);
    }

    let ranges = split_tokens(input, ',');
    if ranges.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    let mut total = TimePeriod::default();
    for range in ranges {
        total.accumulate(&range_duration(range, now, behavior)?);
    }
    Ok(total)
}

/// Elapsed time across one `START-END` range.
pub fn range_duration(
    range: &str,
    now: NaiveTime,
    behavior: &BehaviorConfig,
) -> Result<TimePeriod, CalcError> {
    let endpoints = split_tokens(range, '-');
    if endpoints.len() != 2 {
        return Err(CalcError::MalformedRange {
            range: range.to_string(),
        });
    }

    let start = TimePoint::parse(endpoints[0], now)?;
    let end = TimePoint::parse(endpoints[1], now)?;

    let mut delta = end.total_seconds() as i64 - start.total_seconds() as i64;
    if delta < 0 && behavior.midnight_wrap {
        // One wrap at most; oversized start values can leave it negative
        delta += SECONDS_PER_DAY;
    }
    if delta < 0 {
        return Err(CalcError::EndBeforeStart {
            range: range.to_string(),
        });
    }

    Ok(TimePeriod::from_seconds(delta as u64))
}

/// Sum `+`-joined duration literals (`2h30m+45m+90s`).
pub fn sum_periods(input: &str) -> Result<TimePeriod, CalcError> {
    let tokens = split_tokens(input, '+');
    if tokens.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    let mut total = TimePeriod::default();
    for token in tokens {
        total.accumulate(&TimePeriod::parse(token)?);
    }
    Ok(total)
}

/// Render the `Total time:` summary line for a computed total.
pub fn format_summary(total: &TimePeriod) -> String {
    format!("Total time: {}.", total)
}
