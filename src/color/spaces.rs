//! Color space value types and range validation
//!
//! Defines the three supported representations as plain value structs:
//! - [`Rgb`]: additive color, components in [0, 1]
//! - [`Hsv`]: hue in degrees, saturation and value in [0, 1]
//! - [`Cmy`]: subtractive complement of RGB, components in [0, 1]
//!
//! Validation rejects out-of-range input instead of clamping it; the
//! conversion routines assume validated values and never re-check.

use std::fmt;
use std::str::FromStr;

use log::debug;
use palette::{Hsv as PaletteHsv, Srgb};
use serde::{Deserialize, Serialize};

use crate::constants::{hue, range};
use crate::error::{ComponentViolation, ParseColorSpaceError, RangeError, Result};

/// Tag identifying one of the supported color representations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    Rgb,
    Hsv,
    Cmy,
}

impl ColorSpace {
    /// Component names in declaration order, as used in violation reports
    pub fn component_names(&self) -> [&'static str; 3] {
        match self {
            ColorSpace::Rgb => ["red", "green", "blue"],
            ColorSpace::Hsv => ["hue", "saturation", "value"],
            ColorSpace::Cmy => ["cyan", "magenta", "yellow"],
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorSpace::Rgb => "RGB",
            ColorSpace::Hsv => "HSV",
            ColorSpace::Cmy => "CMY",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ColorSpace {
    type Err = ParseColorSpaceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorSpace::Rgb),
            "hsv" => Ok(ColorSpace::Hsv),
            "cmy" => Ok(ColorSpace::Cmy),
            other => Err(ParseColorSpaceError(other.to_string())),
        }
    }
}

/// Additive RGB color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Check that every component lies in [0, 1]
    ///
    /// # Errors
    ///
    /// Returns `RangeError` listing each component outside [0, 1].
    /// Non-finite values are out of range.
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        check_unit("red", self.r, &mut violations);
        check_unit("green", self.g, &mut violations);
        check_unit("blue", self.b, &mut violations);
        reject_if_any(ColorSpace::Rgb, violations)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({:.4}, {:.4}, {:.4})", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Srgb {
    fn from(rgb: Rgb) -> Self {
        Srgb::new(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Srgb> for Rgb {
    fn from(srgb: Srgb) -> Self {
        Rgb::new(srgb.red, srgb.green, srgb.blue)
    }
}

/// HSV color: hue in degrees, saturation and value in [0, 1]
///
/// Conversions always return hue normalized into [0, 360); validation
/// additionally admits an input of exactly 360, which converts as 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Wrap a full-turn hue back to the start of the circle
    ///
    /// Validation admits a hue of exactly 360 degrees; every conversion
    /// returns it as 0 so that computed hues always lie in [0, 360).
    pub fn wrap_hue(self) -> Self {
        if self.h >= hue::FULL_TURN_DEGREES {
            Self::new(self.h - hue::FULL_TURN_DEGREES, self.s, self.v)
        } else {
            self
        }
    }

    /// Check that hue lies in [0, 360] and saturation/value in [0, 1]
    ///
    /// # Errors
    ///
    /// Returns `RangeError` listing each component outside its interval.
    /// Non-finite values are out of range.
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        if !(range::HUE_MIN_DEGREES..=range::HUE_MAX_DEGREES).contains(&self.h) {
            violations.push(ComponentViolation {
                component: "hue",
                value: self.h,
                min: range::HUE_MIN_DEGREES,
                max: range::HUE_MAX_DEGREES,
            });
        }
        check_unit("saturation", self.s, &mut violations);
        check_unit("value", self.v, &mut violations);
        reject_if_any(ColorSpace::Hsv, violations)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({:.4}, {:.4}, {:.4})", self.h, self.s, self.v)
    }
}

impl From<Hsv> for PaletteHsv {
    fn from(hsv: Hsv) -> Self {
        PaletteHsv::new(hsv.h, hsv.s, hsv.v)
    }
}

impl From<PaletteHsv> for Hsv {
    fn from(hsv: PaletteHsv) -> Self {
        Hsv::new(hsv.hue.into_positive_degrees(), hsv.saturation, hsv.value)
    }
}

/// Subtractive CMY color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmy {
    pub c: f32,
    pub m: f32,
    pub y: f32,
}

impl Cmy {
    pub fn new(c: f32, m: f32, y: f32) -> Self {
        Self { c, m, y }
    }

    /// Check that every component lies in [0, 1]
    ///
    /// # Errors
    ///
    /// Returns `RangeError` listing each component outside [0, 1].
    /// Non-finite values are out of range.
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        check_unit("cyan", self.c, &mut violations);
        check_unit("magenta", self.m, &mut violations);
        check_unit("yellow", self.y, &mut violations);
        reject_if_any(ColorSpace::Cmy, violations)
    }
}

impl fmt::Display for Cmy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmy({:.4}, {:.4}, {:.4})", self.c, self.m, self.y)
    }
}

/// Validate raw components as a color in `space`
///
/// Dispatches to the matching value type's `validate`. Conversions
/// assume this has been called on caller-supplied input.
///
/// # Errors
///
/// Returns `RangeError` listing every component outside its interval.
pub fn validate(space: ColorSpace, components: [f32; 3]) -> Result<()> {
    let [a, b, c] = components;
    match space {
        ColorSpace::Rgb => Rgb::new(a, b, c).validate(),
        ColorSpace::Hsv => Hsv::new(a, b, c).validate(),
        ColorSpace::Cmy => Cmy::new(a, b, c).validate(),
    }
}

fn check_unit(component: &'static str, value: f32, violations: &mut Vec<ComponentViolation>) {
    // NaN fails the contains check and is reported like any other
    // out-of-range value
    if !(range::COMPONENT_MIN..=range::COMPONENT_MAX).contains(&value) {
        violations.push(ComponentViolation {
            component,
            value,
            min: range::COMPONENT_MIN,
            max: range::COMPONENT_MAX,
        });
    }
}

fn reject_if_any(space: ColorSpace, violations: Vec<ComponentViolation>) -> Result<()> {
    if violations.is_empty() {
        return Ok(());
    }
    debug!(
        "rejecting {space} input: {} component(s) out of range",
        violations.len()
    );
    Err(RangeError::new(violations))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_accepts_closed_interval() {
        assert!(Rgb::new(0.0, 0.0, 0.0).validate().is_ok());
        assert!(Rgb::new(1.0, 1.0, 1.0).validate().is_ok());
        assert!(Rgb::new(0.5, 0.25, 0.75).validate().is_ok());
    }

    #[test]
    fn test_rgb_rejects_just_outside_bounds() {
        let err = Rgb::new(-0.0001, 0.5, 1.0001).validate().unwrap_err();
        assert_eq!(err.component_names(), vec!["red", "blue"]);
    }

    #[test]
    fn test_hsv_hue_bounds_are_inclusive() {
        assert!(Hsv::new(0.0, 0.0, 0.0).validate().is_ok());
        assert!(Hsv::new(360.0, 1.0, 1.0).validate().is_ok());

        let err = Hsv::new(360.0001, 0.5, 0.5).validate().unwrap_err();
        assert_eq!(err.component_names(), vec!["hue"]);

        let err = Hsv::new(-0.0001, 0.5, 0.5).validate().unwrap_err();
        assert_eq!(err.component_names(), vec!["hue"]);
    }

    #[test]
    fn test_cmy_reports_all_violations_at_once() {
        let err = Cmy::new(-1.0, 2.0, 3.0).validate().unwrap_err();
        assert_eq!(err.component_names(), vec!["cyan", "magenta", "yellow"]);
    }

    #[test]
    fn test_non_finite_components_are_rejected() {
        assert!(Rgb::new(f32::NAN, 0.5, 0.5).validate().is_err());
        assert!(Rgb::new(0.5, f32::INFINITY, 0.5).validate().is_err());
        assert!(Hsv::new(f32::NAN, 0.5, 0.5).validate().is_err());
    }

    #[test]
    fn test_validate_dispatches_by_space() {
        assert!(validate(ColorSpace::Rgb, [0.2, 0.4, 0.6]).is_ok());
        assert!(validate(ColorSpace::Hsv, [210.0, 0.5, 0.5]).is_ok());
        assert!(validate(ColorSpace::Cmy, [0.8, 0.6, 0.4]).is_ok());

        // 210 is a valid hue but not a valid RGB component
        assert!(validate(ColorSpace::Rgb, [210.0, 0.5, 0.5]).is_err());
    }

    #[test]
    fn test_wrap_hue_only_touches_a_full_turn() {
        let wrapped = Hsv::new(360.0, 0.5, 0.75).wrap_hue();
        assert_eq!(wrapped, Hsv::new(0.0, 0.5, 0.75));

        let untouched = Hsv::new(359.5, 0.5, 0.75).wrap_hue();
        assert_eq!(untouched, Hsv::new(359.5, 0.5, 0.75));
    }

    #[test]
    fn test_color_space_parsing() {
        assert_eq!("rgb".parse::<ColorSpace>().unwrap(), ColorSpace::Rgb);
        assert_eq!("HSV".parse::<ColorSpace>().unwrap(), ColorSpace::Hsv);
        assert_eq!(" cmy ".parse::<ColorSpace>().unwrap(), ColorSpace::Cmy);
        assert!("lab".parse::<ColorSpace>().is_err());
    }

    #[test]
    fn test_palette_interop_round_trip() {
        let rgb = Rgb::new(0.2, 0.4, 0.6);
        let srgb: Srgb = rgb.into();
        assert_eq!(Rgb::from(srgb), rgb);

        let hsv = Hsv::new(210.0, 0.5, 0.75);
        let palette_hsv: PaletteHsv = hsv.into();
        let back = Hsv::from(palette_hsv);
        assert!((back.h - hsv.h).abs() < 1e-4);
        assert_eq!(back.s, hsv.s);
        assert_eq!(back.v, hsv.v);
    }
}
