//! Units and length pairs.
//!
//! A [`LengthPair`] is the value behind every string-settable geometry field
//! (width, height, position, margin and padding sides). The text grammar is
//! deliberately small:
//!
//! ```text
//! length   = magnitude unit
//! magnitude = ["-"] (digit | ".")+
//! unit     = "px" | "%" | "vw" | "vh" | ""
//! ```
//!
//! Whitespace anywhere in the text is ignored. There is no exponent or
//! thousands separator. An empty unit is [`Unit::NotSet`], which is how an
//! unset pair is written back out, so every serialized pair parses again.
//!
//! Percentages are converted between their text form and their fractional
//! storage by moving the decimal point in the text, never by multiplying by
//! 100, so `"3.5%"` is exactly `0.035` and serializes back to `"3.5%"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::error::LengthError;

/// The unit a [`LengthPair`] magnitude is expressed in.
///
/// The `Display`/`FromStr` forms are the text suffixes; [`Unit::NotSet`] has
/// the empty suffix.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// No unit. Resolves to `0` in every target unit.
    #[default]
    #[strum(serialize = "")]
    NotSet,
    /// Device pixels, written `px`.
    #[strum(serialize = "px")]
    Pixel,
    /// Fraction of the parent's size on the same axis, written `%`.
    ///
    /// Stored as a fraction: `50%` is `0.5`.
    #[strum(serialize = "%")]
    Percentage,
    /// Hundredths of the viewport width, written `vw`.
    #[strum(serialize = "vw")]
    ViewportWidth,
    /// Hundredths of the viewport height, written `vh`.
    #[strum(serialize = "vh")]
    ViewportHeight,
}

impl Unit {
    /// Every unit that carries a value.
    pub const SET: [Self; 4] = [
        Self::Pixel,
        Self::Percentage,
        Self::ViewportWidth,
        Self::ViewportHeight,
    ];

    /// The text suffix of this unit (`""` for [`Unit::NotSet`]).
    #[must_use]
    pub fn suffix(self) -> &'static str {
        self.into()
    }

    /// Map a text suffix to its unit; anything unrecognized is [`Unit::NotSet`].
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Self {
        suffix.parse().unwrap_or(Self::NotSet)
    }
}

/// A magnitude together with the unit it is expressed in.
///
/// Serializes to and from its text form (`"12.5px"`, `"50%"`), so it can sit
/// directly in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LengthPair {
    /// Unit of `length`.
    pub unit: Unit,
    /// The magnitude. Percentages are fractions (`0.5` for `50%`).
    pub length: f64,
}

impl LengthPair {
    /// A pair without a unit; resolves to `0` everywhere.
    pub const NOT_SET: Self = Self::new(Unit::NotSet, 0.0);

    /// Create a pair from a unit and a magnitude in that unit's storage form.
    #[must_use]
    pub const fn new(unit: Unit, length: f64) -> Self {
        Self { unit, length }
    }

    /// A pixel length.
    #[must_use]
    pub const fn px(length: f64) -> Self {
        Self::new(Unit::Pixel, length)
    }

    /// A percentage given as a fraction (`percent(0.5)` is `50%`).
    #[must_use]
    pub const fn percent(fraction: f64) -> Self {
        Self::new(Unit::Percentage, fraction)
    }

    /// A viewport-width length (`vw(50.0)` is `50vw`).
    #[must_use]
    pub const fn vw(length: f64) -> Self {
        Self::new(Unit::ViewportWidth, length)
    }

    /// A viewport-height length (`vh(50.0)` is `50vh`).
    #[must_use]
    pub const fn vh(length: f64) -> Self {
        Self::new(Unit::ViewportHeight, length)
    }

    /// Whether this pair carries a unit.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        !matches!(self.unit, Unit::NotSet)
    }

    /// Parse length text, mapping an unrecognized unit suffix to
    /// [`Unit::NotSet`].
    ///
    /// Scanning is left to right: an optional `-` and the run of digits and
    /// `.` after it are the magnitude, everything after that is the unit
    /// suffix. A `%` magnitude is read with its decimal point moved two places
    /// left.
    ///
    /// Use [`str::parse`] for the strict grammar that rejects unknown units.
    ///
    /// # Errors
    ///
    /// Returns [`LengthError::MissingMagnitude`] when the text does not start
    /// with a digit or `.`, optionally after a `-`, and
    /// [`LengthError::InvalidMagnitude`] when the numeric run is not a number
    /// (`"1.2.3px"`).
    pub fn parse(text: &str) -> Result<Self, LengthError> {
        let (magnitude, suffix) = split_magnitude(text)?;
        let unit = Unit::from_suffix(&suffix);
        Self::from_magnitude(text, unit, &magnitude)
    }

    /// Text form of this pair; the exact inverse of [`LengthPair::parse`].
    ///
    /// Percentages are written back in hundredths and [`Unit::NotSet`] is
    /// written as the bare magnitude. The magnitude is the shortest decimal
    /// that parses back to the same value.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Magnitude as written in text (percentages in hundredths).
    ///
    /// For percentages this is a float product and may carry rounding noise
    /// that the text form does not.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        match self.unit {
            Unit::Percentage => self.length * 100.0,
            _ => self.length,
        }
    }

    /// Build a pair from the numeric run of `text`, keeping percentages in
    /// fractional storage.
    fn from_magnitude(text: &str, unit: Unit, magnitude: &str) -> Result<Self, LengthError> {
        let digits = match unit {
            Unit::Percentage => shift_point_left(magnitude),
            _ => magnitude.to_string(),
        };
        let length = digits
            .parse::<f64>()
            .map_err(|_| LengthError::InvalidMagnitude {
                text: text.to_string(),
                magnitude: magnitude.to_string(),
            })?;
        Ok(Self::new(unit, length))
    }

    /// The magnitude text written by `Display`.
    fn magnitude_text(&self) -> String {
        match self.unit {
            Unit::Percentage if self.length.is_finite() => {
                let digits = shift_point_right(&self.length.abs().to_string());
                if self.length.is_sign_negative() {
                    format!("-{digits}")
                } else {
                    digits
                }
            }
            _ => self.magnitude().to_string(),
        }
    }
}

/// Strip whitespace and split text into its numeric run (sign included) and
/// unit suffix.
///
/// The run is checked here so that `"1.2.3px"` fails the same way for every
/// unit.
fn split_magnitude(text: &str) -> Result<(String, String), LengthError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let unsigned = compact.strip_prefix('-').unwrap_or(compact.as_str());
    let sign_len = compact.len() - unsigned.len();
    let split = unsigned
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(unsigned.len());

    if split == 0 {
        return Err(LengthError::MissingMagnitude {
            text: text.to_string(),
        });
    }
    let (digits, suffix) = compact.split_at(sign_len + split);
    if digits.parse::<f64>().is_err() {
        return Err(LengthError::InvalidMagnitude {
            text: text.to_string(),
            magnitude: digits.to_string(),
        });
    }
    Ok((digits.to_string(), suffix.to_string()))
}

/// Divide a decimal by 100 in text: `"3.5"` becomes `"0.035"`.
fn shift_point_left(digits: &str) -> String {
    let (sign, unsigned) = digits
        .strip_prefix('-')
        .map_or(("", digits), |rest| ("-", rest));
    let (int, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if int.len() > 2 {
        let (head, tail) = int.split_at(int.len() - 2);
        format!("{sign}{head}.{tail}{frac}")
    } else {
        format!("{sign}0.{}{int}{frac}", "0".repeat(2 - int.len()))
    }
}

/// Multiply an unsigned decimal by 100 in text: `"0.035"` becomes `"3.5"`.
fn shift_point_right(digits: &str) -> String {
    let (int, frac) = digits.split_once('.').unwrap_or((digits, ""));
    let moved = if frac.len() >= 2 {
        let (head, tail) = frac.split_at(2);
        if tail.is_empty() {
            format!("{int}{head}")
        } else {
            format!("{int}{head}.{tail}")
        }
    } else {
        format!("{int}{frac}{}", "0".repeat(2 - frac.len()))
    };
    let trimmed = moved.trim_start_matches('0');
    if trimmed.is_empty() || trimmed.starts_with('.') {
        format!("0{trimmed}")
    } else {
        trimmed.to_string()
    }
}

impl FromStr for LengthPair {
    type Err = LengthError;

    /// Strict form of [`LengthPair::parse`]: the unit suffix must be one of
    /// `px`, `%`, `vw`, `vh`, or absent for an unset pair.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (magnitude, suffix) = split_magnitude(text)?;
        match Unit::from_suffix(&suffix) {
            Unit::NotSet if !suffix.is_empty() => Err(LengthError::UnknownUnit {
                text: text.to_string(),
                unit: suffix,
            }),
            unit => Self::from_magnitude(text, unit, &magnitude),
        }
    }
}

impl fmt::Display for LengthPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude_text(), self.unit.suffix())
    }
}

impl TryFrom<String> for LengthPair {
    type Error = LengthError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<LengthPair> for String {
    fn from(pair: LengthPair) -> Self {
        pair.serialize()
    }
}
