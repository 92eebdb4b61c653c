//! Color space types, validation and conversion
//!
//! This module defines the supported color representations and the
//! stateless converter that maps between them.

pub mod conversion;
pub mod spaces;

pub use conversion::ColorConverter;
pub use spaces::{validate, Cmy, ColorSpace, Hsv, Rgb};
