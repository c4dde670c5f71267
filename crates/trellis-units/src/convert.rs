//! Pairwise unit conversions.
//!
//! Every conversion is scoped by two references supplied by the caller:
//! `base`, the size a percentage is taken of (usually the parent's size on
//! the same axis), and the viewport extents used by `vw`/`vh`.
//!
//! ```text
//! px  -> %   px / base
//! px  -> vw  px / viewport_width * 100
//! %   -> px  base * fraction
//! vw  -> px  vw / 100 * viewport_width
//! vw  -> vh  (vw / 100 * viewport_width) / viewport_height * 100
//! %  <-> vw/vh  through pixels, via base
//! ```
//!
//! Viewport results are in viewport units (`50.0` means `50vw`), percentage
//! results are fractions (`0.5` means `50%`).
//!
//! A zero `base` or viewport extent never produces a non-finite value: the
//! conversion resolves to `0.0`.

use crate::geometry::Size;
use crate::unit::Unit;

/// `numerator / denominator`, or `0.0` when the divisor is zero or the
/// quotient is not finite.
#[must_use]
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let quotient = numerator / denominator;
    if quotient.is_finite() { quotient } else { 0.0 }
}

/// Pixels to a percentage fraction of `base`.
#[must_use]
pub fn px_to_percentage(px: f64, base: f64) -> f64 {
    ratio(px, base)
}

/// Pixels to viewport-width units.
#[must_use]
pub fn px_to_vw(px: f64, viewport_width: f64) -> f64 {
    ratio(px, viewport_width) * 100.0
}

/// Pixels to viewport-height units.
#[must_use]
pub fn px_to_vh(px: f64, viewport_height: f64) -> f64 {
    ratio(px, viewport_height) * 100.0
}

/// A percentage fraction of `base` to pixels.
#[must_use]
pub fn percentage_to_px(percentage: f64, base: f64) -> f64 {
    base * percentage
}

/// A percentage fraction of `base` to viewport-width units.
#[must_use]
pub fn percentage_to_vw(percentage: f64, viewport_width: f64, base: f64) -> f64 {
    px_to_vw(percentage_to_px(percentage, base), viewport_width)
}

/// A percentage fraction of `base` to viewport-height units.
#[must_use]
pub fn percentage_to_vh(percentage: f64, viewport_height: f64, base: f64) -> f64 {
    px_to_vh(percentage_to_px(percentage, base), viewport_height)
}

/// Viewport-width units to pixels.
#[must_use]
pub fn vw_to_px(vw: f64, viewport_width: f64) -> f64 {
    vw / 100.0 * viewport_width
}

/// Viewport-width units to a percentage fraction of `base`.
#[must_use]
pub fn vw_to_percentage(vw: f64, viewport_width: f64, base: f64) -> f64 {
    px_to_percentage(vw_to_px(vw, viewport_width), base)
}

/// Viewport-width units to viewport-height units.
#[must_use]
pub fn vw_to_vh(vw: f64, viewport_width: f64, viewport_height: f64) -> f64 {
    px_to_vh(vw_to_px(vw, viewport_width), viewport_height)
}

/// Viewport-height units to pixels.
#[must_use]
pub fn vh_to_px(vh: f64, viewport_height: f64) -> f64 {
    vh / 100.0 * viewport_height
}

/// Viewport-height units to a percentage fraction of `base`.
#[must_use]
pub fn vh_to_percentage(vh: f64, viewport_height: f64, base: f64) -> f64 {
    px_to_percentage(vh_to_px(vh, viewport_height), base)
}

/// Viewport-height units to viewport-width units.
#[must_use]
pub fn vh_to_vw(vh: f64, viewport_width: f64, viewport_height: f64) -> f64 {
    px_to_vw(vh_to_px(vh, viewport_height), viewport_width)
}

/// Convert `value` from one unit to another.
///
/// Identity conversions pass the value through; anything involving
/// [`Unit::NotSet`] resolves to `0.0`.
#[must_use]
pub fn convert(value: f64, from: Unit, to: Unit, base: f64, viewport: Size) -> f64 {
    let Size { width, height } = viewport;
    match (from, to) {
        (Unit::NotSet, _) | (_, Unit::NotSet) => 0.0,

        (Unit::Pixel, Unit::Pixel)
        | (Unit::Percentage, Unit::Percentage)
        | (Unit::ViewportWidth, Unit::ViewportWidth)
        | (Unit::ViewportHeight, Unit::ViewportHeight) => value,

        (Unit::Pixel, Unit::Percentage) => px_to_percentage(value, base),
        (Unit::Pixel, Unit::ViewportWidth) => px_to_vw(value, width),
        (Unit::Pixel, Unit::ViewportHeight) => px_to_vh(value, height),

        (Unit::Percentage, Unit::Pixel) => percentage_to_px(value, base),
        (Unit::Percentage, Unit::ViewportWidth) => percentage_to_vw(value, width, base),
        (Unit::Percentage, Unit::ViewportHeight) => percentage_to_vh(value, height, base),

        (Unit::ViewportWidth, Unit::Pixel) => vw_to_px(value, width),
        (Unit::ViewportWidth, Unit::Percentage) => vw_to_percentage(value, width, base),
        (Unit::ViewportWidth, Unit::ViewportHeight) => vw_to_vh(value, width, height),

        (Unit::ViewportHeight, Unit::Pixel) => vh_to_px(value, height),
        (Unit::ViewportHeight, Unit::Percentage) => vh_to_percentage(value, height, base),
        (Unit::ViewportHeight, Unit::ViewportWidth) => vh_to_vw(value, width, height),
    }
}
