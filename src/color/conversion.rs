//! RGB/HSV/CMY conversion routines
//!
//! Provides the pairwise conversions between the supported spaces:
//! - RGB ↔ CMY via the subtractive complement
//! - RGB ↔ HSV via the hexcone model
//! - HSV ↔ CMY as pure compositions through RGB
//!
//! Every routine is a pure function of its arguments; there is no
//! shared intermediate state between calls. Input is assumed to be
//! range-validated (see [`crate::color::validate`]), which removes all
//! failure modes: the achromatic branches below handle the only
//! divisions whose denominator could reach zero.

use crate::color::spaces::{Cmy, Hsv, Rgb};
use crate::constants::hue;

/// Stateless converter between the RGB, HSV and CMY color spaces
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter
    pub fn new() -> Self {
        Self
    }

    /// Convert RGB to its subtractive complement
    pub fn rgb_to_cmy(&self, rgb: Rgb) -> Cmy {
        Cmy::new(1.0 - rgb.r, 1.0 - rgb.g, 1.0 - rgb.b)
    }

    /// Convert CMY back to RGB; exact inverse of [`Self::rgb_to_cmy`]
    pub fn cmy_to_rgb(&self, cmy: Cmy) -> Rgb {
        Rgb::new(1.0 - cmy.c, 1.0 - cmy.m, 1.0 - cmy.y)
    }

    /// Convert RGB to HSV using the hexcone model
    ///
    /// The hue branch is selected by which channel attains the maximum,
    /// with red taking priority over green over blue on exact ties.
    ///
    /// # Arguments
    ///
    /// * `rgb` - Validated RGB color with components in [0, 1]
    ///
    /// # Returns
    ///
    /// HSV color with hue in [0, 360) degrees and saturation/value in
    /// [0, 1]. Equal channels produce the achromatic result (hue 0,
    /// saturation 0).
    pub fn rgb_to_hsv(&self, rgb: Rgb) -> Hsv {
        let Rgb { r, g, b } = rgb;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        let mut h = if delta == 0.0 {
            0.0
        } else if r == max {
            hue::SECTOR_DEGREES * ((g - b) / delta)
        } else if g == max {
            hue::SECTOR_DEGREES * (hue::GREEN_OFFSET + (b - r) / delta)
        } else {
            hue::SECTOR_DEGREES * (hue::BLUE_OFFSET + (r - g) / delta)
        };
        if h < 0.0 {
            h += hue::FULL_TURN_DEGREES;
        }
        // A tiny negative hue can round up to a full turn when wrapped
        if h >= hue::FULL_TURN_DEGREES {
            h -= hue::FULL_TURN_DEGREES;
        }

        Hsv::new(h, saturation, max)
    }

    /// Convert HSV to RGB using the hexcone sector table
    ///
    /// # Arguments
    ///
    /// * `hsv` - Validated HSV color; hue in [0, 360] degrees (an input
    ///   of exactly 360 wraps to the first sector), saturation and
    ///   value in [0, 1]
    ///
    /// # Returns
    ///
    /// RGB color with components in [0, 1], including the lightness
    /// offset `v - chroma` on every channel.
    pub fn hsv_to_rgb(&self, hsv: Hsv) -> Rgb {
        let Hsv { h, s, v } = hsv.wrap_hue();

        let sector = h / hue::SECTOR_DEGREES;
        let chroma = v * s;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let m = v - chroma;

        let (r, g, b) = if h < 60.0 {
            (chroma, x, 0.0)
        } else if h < 120.0 {
            (x, chroma, 0.0)
        } else if h < 180.0 {
            (0.0, chroma, x)
        } else if h < 240.0 {
            (0.0, x, chroma)
        } else if h < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };

        Rgb::new(r + m, g + m, b + m)
    }

    /// Convert HSV to CMY by composing the HSV→RGB and RGB→CMY steps
    pub fn hsv_to_cmy(&self, hsv: Hsv) -> Cmy {
        self.rgb_to_cmy(self.hsv_to_rgb(hsv))
    }

    /// Convert CMY to HSV by composing the CMY→RGB and RGB→HSV steps
    pub fn cmy_to_hsv(&self, cmy: Cmy) -> Hsv {
        self.rgb_to_hsv(self.cmy_to_rgb(cmy))
    }
}
