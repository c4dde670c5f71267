use thiserror::Error;

/// Why a piece of length text was rejected.
///
/// Setters that receive one of these leave the previous value in place; the
/// layout pass never sees a half-parsed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthError {
    /// The text has no leading digits after an optional `-`, e.g. `"px"` or
    /// `"-px"`.
    #[error("missing numeric magnitude in {text:?}")]
    MissingMagnitude {
        /// The rejected text.
        text: String,
    },
    /// The numeric run could not be read as a number, e.g. `"1.2.3px"`.
    #[error("invalid magnitude {magnitude:?} in {text:?}")]
    InvalidMagnitude {
        /// The rejected text.
        text: String,
        /// The numeric run that failed to parse.
        magnitude: String,
    },
    /// The unit suffix is not one of `px`, `%`, `vw`, `vh`.
    #[error("unknown unit {unit:?} in {text:?}")]
    UnknownUnit {
        /// The rejected text.
        text: String,
        /// The unrecognized suffix.
        unit: String,
    },
    /// A margin/padding shorthand did not contain 1 to 4 values.
    #[error("expected 1 to 4 values in {text:?}, found {count}")]
    ShorthandArity {
        /// The rejected text.
        text: String,
        /// Number of space-separated values found.
        count: usize,
    },
}
