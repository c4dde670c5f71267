//! Positioning modes and visibility.
//!
//! ```text
//! static    stacked by the parent's vertical cursor; pos_x/pos_y ignored
//! absolute  placed at (pos_x + margin_left, pos_y + margin_up) from the
//!           parent's content origin; does not move the cursor
//! relative  placed like static, then shifted by (pos_x, pos_y); moves the
//!           cursor like static
//! ```

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// How a container is placed inside its parent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PositionMode {
    /// Cursor-driven vertical stacking.
    #[default]
    Static,
    /// Placed by `pos_x`/`pos_y`, outside the flow.
    Absolute,
    /// Cursor-driven, then offset by `pos_x`/`pos_y`.
    Relative,
}

impl PositionMode {
    /// Whether a node in this mode advances its parent's cursor.
    #[must_use]
    pub const fn in_flow(self) -> bool {
        !matches!(self, Self::Absolute)
    }
}

/// Whether a node takes part in layout and whether it is drawn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    /// Laid out and drawn.
    #[default]
    Visible,
    /// Removed from layout entirely: no space, no overflow contribution.
    Hidden,
    /// Laid out but not drawn.
    Transparent,
}

impl Visibility {
    /// Whether the node reserves space and counts towards overflow.
    #[must_use]
    pub const fn occupies_space(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Whether the host should draw the node.
    #[must_use]
    pub const fn is_drawn(self) -> bool {
        matches!(self, Self::Visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_absolute_leaves_the_flow() {
        assert!(PositionMode::Static.in_flow());
        assert!(PositionMode::Relative.in_flow());
        assert!(!PositionMode::Absolute.in_flow());
    }

    #[test]
    fn test_transparent_takes_space_but_is_not_drawn() {
        assert!(Visibility::Visible.occupies_space());
        assert!(Visibility::Visible.is_drawn());
        assert!(Visibility::Transparent.occupies_space());
        assert!(!Visibility::Transparent.is_drawn());
        assert!(!Visibility::Hidden.occupies_space());
        assert!(!Visibility::Hidden.is_drawn());
    }
}
