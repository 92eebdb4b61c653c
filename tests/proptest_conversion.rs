//! Property-based tests for color conversions
//!
//! Tests the round-trip and range invariants over the whole input
//! domain rather than hand-picked vectors.

use chroma_convert::constants::tolerance::ROUND_TRIP_EPSILON;
use chroma_convert::{convert, validate, ColorConverter, ColorSpace, Hsv, Rgb};
use proptest::prelude::*;

// Strategy for normalized component values
fn color_component() -> impl Strategy<Value = f32> {
    0.0..=1.0f32
}

// Strategy for hue input in degrees (360 inclusive, wraps to 0)
fn hue_degrees() -> impl Strategy<Value = f32> {
    0.0..=360.0f32
}

// Strategy for valid input in a random space
prop_compose! {
    fn valid_input()(
        space_index in 0..3usize,
        h in hue_degrees(),
        a in color_component(),
        b in color_component(),
        c in color_component(),
    ) -> (ColorSpace, [f32; 3]) {
        match space_index {
            0 => (ColorSpace::Rgb, [a, b, c]),
            1 => (ColorSpace::Hsv, [h, b, c]),
            _ => (ColorSpace::Cmy, [a, b, c]),
        }
    }
}

proptest! {
    #[test]
    fn rgb_cmy_round_trip_reproduces_input(
        r in color_component(),
        g in color_component(),
        b in color_component(),
    ) {
        let converter = ColorConverter::new();
        let back = converter.cmy_to_rgb(converter.rgb_to_cmy(Rgb::new(r, g, b)));

        // The transform is its own algebraic inverse; the only error
        // left is the rounding of the two complements
        prop_assert!((back.r - r).abs() < 1e-6);
        prop_assert!((back.g - g).abs() < 1e-6);
        prop_assert!((back.b - b).abs() < 1e-6);
    }

    #[test]
    fn rgb_hsv_round_trip_reproduces_input(
        r in color_component(),
        g in color_component(),
        b in color_component(),
    ) {
        let converter = ColorConverter::new();
        let back = converter.hsv_to_rgb(converter.rgb_to_hsv(Rgb::new(r, g, b)));

        prop_assert!((back.r - r).abs() < ROUND_TRIP_EPSILON);
        prop_assert!((back.g - g).abs() < ROUND_TRIP_EPSILON);
        prop_assert!((back.b - b).abs() < ROUND_TRIP_EPSILON);
    }

    #[test]
    fn computed_hue_is_always_normalized(
        r in color_component(),
        g in color_component(),
        b in color_component(),
    ) {
        let hsv = ColorConverter::new().rgb_to_hsv(Rgb::new(r, g, b));
        prop_assert!(hsv.h >= 0.0 && hsv.h < 360.0);
    }

    #[test]
    fn convert_outputs_stay_in_range((space, components) in valid_input()) {
        let result = convert(space, components);
        prop_assert!(result.is_ok());
        let result = result.unwrap();

        prop_assert!(result.rgb.validate().is_ok());
        prop_assert!(result.hsv.validate().is_ok());
        prop_assert!(result.cmy.validate().is_ok());
        prop_assert!(result.hsv.h >= 0.0 && result.hsv.h < 360.0);
    }

    #[test]
    fn validate_accepts_every_valid_input((space, components) in valid_input()) {
        prop_assert!(validate(space, components).is_ok());
    }

    #[test]
    fn validate_rejects_components_above_range(
        excess in 0.001..100.0f32,
        g in color_component(),
        b in color_component(),
    ) {
        prop_assert!(validate(ColorSpace::Rgb, [1.0 + excess, g, b]).is_err());
        prop_assert!(validate(ColorSpace::Cmy, [g, 1.0 + excess, b]).is_err());
        prop_assert!(validate(ColorSpace::Hsv, [360.0 + excess, g, b]).is_err());
    }

    #[test]
    fn validate_rejects_negative_components(
        deficit in 0.001..100.0f32,
        g in color_component(),
        b in color_component(),
    ) {
        prop_assert!(validate(ColorSpace::Rgb, [-deficit, g, b]).is_err());
        prop_assert!(validate(ColorSpace::Hsv, [-deficit, g, b]).is_err());
        prop_assert!(validate(ColorSpace::Cmy, [g, b, -deficit]).is_err());
    }

    #[test]
    fn full_turn_hue_matches_zero_hue(
        s in color_component(),
        v in color_component(),
    ) {
        let converter = ColorConverter::new();
        let wrapped = converter.hsv_to_rgb(Hsv::new(360.0, s, v));
        let zero = converter.hsv_to_rgb(Hsv::new(0.0, s, v));
        prop_assert_eq!(wrapped, zero);
    }
}
