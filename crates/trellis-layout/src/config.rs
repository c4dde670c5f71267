//! Engine-wide layout settings.

use serde::{Deserialize, Serialize};
use trellis_units::LengthPair;

use crate::error::ConfigError;

/// Settings shared by every container in a tree.
///
/// Every field has a default, so a configuration document only needs to name
/// what it changes:
///
/// ```json
/// { "update_interval": 0.5, "scroll_step_y": "5%" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Time units between timer-driven layout passes.
    pub update_interval: f64,
    /// Default horizontal wheel step, resolved against the container width.
    pub scroll_step_x: LengthPair,
    /// Default vertical wheel step, resolved against the container height.
    pub scroll_step_y: LengthPair,
    /// Height of the band above the horizontal scrollbar that still counts
    /// as hovering it, as a fraction of the container height.
    pub scroll_x_checking_size: f64,
    /// Thickness of the default horizontal scrollbar hit strip, in pixels.
    pub scrollbar_thickness: f64,
    /// Trace resolved geometry of every container at debug level.
    pub debug_outputs: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            update_interval: 1.0,
            scroll_step_x: LengthPair::px(10.0),
            scroll_step_y: LengthPair::px(10.0),
            scroll_x_checking_size: 0.2,
            scrollbar_thickness: 10.0,
            debug_outputs: false,
        }
    }
}

impl LayoutConfig {
    /// Load a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON or an invalid scroll
    /// step string, and [`ConfigError::InvalidInterval`] /
    /// [`ConfigError::InvalidScrollbarThickness`] for out-of-range numbers.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the numeric fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidInterval`] when `update_interval` is not
    /// positive and finite, and [`ConfigError::InvalidScrollbarThickness`]
    /// when `scrollbar_thickness` is negative or not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.update_interval.is_finite() && self.update_interval > 0.0) {
            return Err(ConfigError::InvalidInterval(self.update_interval));
        }
        if !(self.scrollbar_thickness.is_finite() && self.scrollbar_thickness >= 0.0) {
            return Err(ConfigError::InvalidScrollbarThickness(
                self.scrollbar_thickness,
            ));
        }
        Ok(())
    }

    /// Replace the default horizontal scroll step from length text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScrollStep`] when `text` is not a valid
    /// length; the previous step is kept.
    pub fn set_scroll_step_x(&mut self, text: &str) -> Result<(), ConfigError> {
        self.scroll_step_x = text.parse()?;
        Ok(())
    }

    /// Replace the default vertical scroll step from length text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScrollStep`] when `text` is not a valid
    /// length; the previous step is kept.
    pub fn set_scroll_step_y(&mut self, text: &str) -> Result<(), ConfigError> {
        self.scroll_step_y = text.parse()?;
        Ok(())
    }
}
