use thiserror::Error;

/// Failures raised while evaluating a time expression.
///
/// Every variant that rejects input carries the offending substring, so
/// the caller can report exactly which part of the expression was bad.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Empty expression: expected at least one time range")]
    EmptyInput,

    /// The token did not split into exactly a start and an end.
    #[error("Invalid range '{range}': expected START-END")]
    MalformedRange { range: String },

    #[error("Invalid time '{token}': expected HH:MM, HH:MM:SS, or 'now'")]
    UnparseableTimeToken { token: String },

    #[error("Invalid duration '{token}': expected digit/unit pairs like 2h30m")]
    UnparseablePeriodToken { token: String },

    /// Only raised when midnight wrapping is off or cannot rescue the range.
    #[error("Range '{range}' ends before it starts")]
    EndBeforeStart { range: String },
}
