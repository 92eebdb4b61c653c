//! # chroma_convert
//!
//! A Rust crate for converting colors between the RGB, HSV and CMY
//! representations with strict range validation.
//!
//! The library provides:
//! - Plain value types for the three representations
//! - Range validation that rejects (never clamps) out-of-range input
//! - Pure, stateless conversion routines between all three spaces
//! - An aggregate [`convert`] entry point deriving the two alternate
//!   representations of a single input color
//!
//! ## Example
//!
//! ```rust
//! use chroma_convert::{convert, ColorSpace};
//!
//! let result = convert(ColorSpace::Rgb, [1.0, 0.0, 0.0])?;
//! assert_eq!(result.hsv.h, 0.0);
//! assert_eq!(result.cmy.c, 0.0);
//! # Ok::<(), chroma_convert::RangeError>(())
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

pub mod color;
pub mod constants;
pub mod error;

pub use color::{validate, Cmy, ColorConverter, ColorSpace, Hsv, Rgb};
pub use error::{ComponentViolation, ParseColorSpaceError, RangeError, Result};

/// All three representations of one color value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Additive representation
    pub rgb: Rgb,
    /// Cylindrical representation, hue in [0, 360) degrees
    pub hsv: Hsv,
    /// Subtractive representation
    pub cmy: Cmy,
}

/// Validate components as a `space` color and derive the other two
/// representations
///
/// This is the main entry point for callers that hold raw component
/// values, such as the command-line front end.
///
/// # Arguments
///
/// * `space` - The representation the components are given in
/// * `components` - The three components, in the order the space lists
///   them (r/g/b, h/s/v or c/m/y)
///
/// # Returns
///
/// A `ConversionResult` holding the input color alongside its two
/// derived representations. An input hue of exactly 360 degrees is
/// returned wrapped to 0.
///
/// # Errors
///
/// Returns `RangeError` if any component lies outside its valid
/// interval; no conversion is attempted on invalid input.
pub fn convert(space: ColorSpace, components: [f32; 3]) -> Result<ConversionResult> {
    validate(space, components)?;
    debug!("expanding validated {space} input {components:?}");

    let converter = ColorConverter::new();
    let [a, b, c] = components;
    let result = match space {
        ColorSpace::Rgb => {
            let rgb = Rgb::new(a, b, c);
            ConversionResult {
                rgb,
                hsv: converter.rgb_to_hsv(rgb),
                cmy: converter.rgb_to_cmy(rgb),
            }
        }
        ColorSpace::Hsv => {
            // A validated hue of exactly 360 is returned wrapped, so
            // the result hue always lies in [0, 360)
            let hsv = Hsv::new(a, b, c).wrap_hue();
            let rgb = converter.hsv_to_rgb(hsv);
            ConversionResult {
                rgb,
                hsv,
                cmy: converter.rgb_to_cmy(rgb),
            }
        }
        ColorSpace::Cmy => {
            let cmy = Cmy::new(a, b, c);
            let rgb = converter.cmy_to_rgb(cmy);
            ConversionResult {
                rgb,
                hsv: converter.rgb_to_hsv(rgb),
                cmy,
            }
        }
    };
    Ok(result)
}
