//! Four-sided length lists.
//!
//! Margins and paddings are set either side by side or with a CSS-style
//! shorthand of one to four space-separated lengths:
//!
//! ```text
//! "a"        up = right = down = left = a
//! "a b"      up = down = a, right = left = b
//! "a b c"    up = a, right = left = b, down = c
//! "a b c d"  up = a, right = b, down = c, left = d
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::LengthError;
use crate::resolve::Axis;
use crate::unit::LengthPair;

/// One side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// The top side.
    Up,
    /// The right side.
    Right,
    /// The bottom side.
    Down,
    /// The left side.
    Left,
}

impl Side {
    /// All sides in shorthand order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// The axis a length on this side is measured along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Right | Self::Left => Axis::Horizontal,
        }
    }
}

/// A value per side, in `up, right, down, left` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Edges<T> {
    /// Top side.
    pub up: T,
    /// Right side.
    pub right: T,
    /// Bottom side.
    pub down: T,
    /// Left side.
    pub left: T,
}

impl<T: Copy> Edges<T> {
    /// Create edges from the four sides in shorthand order.
    #[must_use]
    pub const fn new(up: T, right: T, down: T, left: T) -> Self {
        Self {
            up,
            right,
            down,
            left,
        }
    }

    /// The same value on every side.
    #[must_use]
    pub fn all(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// `vertical` on up/down, `horizontal` on left/right.
    #[must_use]
    pub fn symmetric(vertical: T, horizontal: T) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// The value on `side`.
    #[must_use]
    pub const fn get(&self, side: Side) -> T {
        match side {
            Side::Up => self.up,
            Side::Right => self.right,
            Side::Down => self.down,
            Side::Left => self.left,
        }
    }

    /// Replace the value on `side`.
    pub fn set(&mut self, side: Side, value: T) {
        match side {
            Side::Up => self.up = value,
            Side::Right => self.right = value,
            Side::Down => self.down = value,
            Side::Left => self.left = value,
        }
    }

    /// The four values in `up, right, down, left` order.
    #[must_use]
    pub const fn to_array(&self) -> [T; 4] {
        [self.up, self.right, self.down, self.left]
    }

    /// Apply `f` to every side.
    #[must_use]
    pub fn map<U: Copy>(&self, mut f: impl FnMut(Side, T) -> U) -> Edges<U> {
        Edges::new(
            f(Side::Up, self.up),
            f(Side::Right, self.right),
            f(Side::Down, self.down),
            f(Side::Left, self.left),
        )
    }
}

/// Margin or padding lengths, one [`LengthPair`] per side.
pub type EdgeLengths = Edges<LengthPair>;

impl EdgeLengths {
    /// Parse a 1–4 value shorthand list.
    ///
    /// Values are separated by single spaces; empty tokens from repeated
    /// spaces are dropped. Each value uses the strict length grammar.
    ///
    /// # Errors
    ///
    /// Returns [`LengthError::ShorthandArity`] for zero or more than four
    /// values, or the error of the first value that fails to parse.
    pub fn parse_shorthand(text: &str) -> Result<Self, LengthError> {
        let tokens: Vec<&str> = text.split(' ').filter(|t| !t.is_empty()).collect();
        if !(1..=4).contains(&tokens.len()) {
            return Err(LengthError::ShorthandArity {
                text: text.to_string(),
                count: tokens.len(),
            });
        }

        let values = tokens
            .iter()
            .map(|token| token.parse::<LengthPair>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(match *values.as_slice() {
            [all] => Self::all(all),
            [vertical, horizontal] => Self::symmetric(vertical, horizontal),
            [up, horizontal, down] => Self::new(up, horizontal, down, horizontal),
            [up, right, down, left, ..] => Self::new(up, right, down, left),
            [] => Self::default(),
        })
    }

    /// The shortest shorthand that parses back to these four sides.
    #[must_use]
    pub fn to_shorthand(&self) -> String {
        let Self {
            up,
            right,
            down,
            left,
        } = self;
        if right != left {
            format!("{up} {right} {down} {left}")
        } else if up != down {
            format!("{up} {right} {down}")
        } else if up != right {
            format!("{up} {right}")
        } else {
            up.to_string()
        }
    }
}

impl FromStr for EdgeLengths {
    type Err = LengthError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse_shorthand(text)
    }
}

impl fmt::Display for EdgeLengths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shorthand())
    }
}
