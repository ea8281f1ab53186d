//! RGB and HSV conversions for 8-bit colors.
//!
//! Hue is in degrees, saturation and value are fractions in [0, 1].

use palette::{encoding, FromColor, Hsv, RgbHue, Srgb};

// absorbs the rounding error of the [0, 1] round trip before truncation
const CHANNEL_EPSILON: f64 = 1e-6;

/// Converts an 8-bit RGB triple to `(hue, saturation, value)`.
///
/// Achromatic colors (including black) have hue 0 and saturation 0.
pub fn rgb_to_hsv(red: u8, green: u8, blue: u8) -> (f64, f64, f64) {
    let raw = Srgb::from_components((red, green, blue));
    let raw_float: Srgb<f64> = raw.into_format();
    let hsv: Hsv<encoding::Srgb, f64> = Hsv::from_color(raw_float);
    let (hue, saturation, value) = hsv.into_components();

    (hue.into_positive_degrees(), saturation, value)
}

/// Converts `(hue, saturation, value)` back to RGB fractions in [0, 1].
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (f64, f64, f64) {
    let hsv: Hsv<encoding::Srgb, f64> = Hsv::new(RgbHue::from_degrees(hue), saturation, value);
    Srgb::<f64>::from_color(hsv).into_components()
}

/// Fades `alpha` by the fourth root of the color's brightness, so near-black pixels drop out
/// quickly while bright pixels keep their opacity. The result is truncated to 8 bits.
pub fn fade_alpha(red: u8, green: u8, blue: u8, alpha: u8) -> u8 {
    let brightness = (red as f64 + green as f64 + blue as f64) / (255.0 * 3.0);
    (brightness.powf(0.25) * alpha as f64).clamp(0.0, 255.0) as u8
}

/// Scales a fraction in [0, 1] to an 8-bit channel, truncating toward zero.
pub fn to_channel(fraction: f64) -> u8 {
    (fraction * 255.0 + CHANNEL_EPSILON).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(lhs: (f64, f64, f64), rhs: (f64, f64, f64)) -> bool {
        (lhs.0 - rhs.0).abs() < 1e-9 && (lhs.1 - rhs.1).abs() < 1e-9 && (lhs.2 - rhs.2).abs() < 1e-9
    }

    fn channels((red, green, blue): (f64, f64, f64)) -> (u8, u8, u8) {
        (to_channel(red), to_channel(green), to_channel(blue))
    }

    #[test]
    fn primaries_have_expected_hues() {
        assert!(close(rgb_to_hsv(255, 0, 0), (0.0, 1.0, 1.0)));
        assert!(close(rgb_to_hsv(0, 255, 0), (120.0, 1.0, 1.0)));
        assert!(close(rgb_to_hsv(0, 0, 255), (240.0, 1.0, 1.0)));
        assert!(close(rgb_to_hsv(255, 0, 255), (300.0, 1.0, 1.0)));
    }

    #[test]
    fn grays_are_unsaturated() {
        assert_eq!(rgb_to_hsv(0, 0, 0), (0.0, 0.0, 0.0));

        let (_, saturation, value) = rgb_to_hsv(128, 128, 128);
        assert_eq!(saturation, 0.0);
        assert_eq!(to_channel(value), 128);
    }

    #[test]
    fn mixed_color() {
        assert!(close(rgb_to_hsv(100, 150, 200), (210.0, 0.5, 200.0 / 255.0)));
    }

    #[test]
    fn converts_back_at_sector_boundaries() {
        let value = 200.0 / 255.0;

        assert_eq!(channels(hsv_to_rgb(0.0, 0.5, value)), (200, 100, 100));
        assert_eq!(channels(hsv_to_rgb(120.0, 0.5, value)), (100, 200, 100));
        assert_eq!(channels(hsv_to_rgb(240.0, 0.5, value)), (100, 100, 200));
        assert_eq!(channels(hsv_to_rgb(360.0, 0.5, value)), (200, 100, 100));
    }

    #[test]
    fn round_trips_every_gray_and_mixed_colors() {
        for level in 0..=255u8 {
            let (h, s, v) = rgb_to_hsv(level, level, level);
            assert_eq!(channels(hsv_to_rgb(h, s, v)), (level, level, level));
        }

        for (red, green, blue) in [(12, 200, 77), (255, 1, 128), (3, 4, 5), (99, 0, 250)] {
            let (h, s, v) = rgb_to_hsv(red, green, blue);
            assert_eq!(channels(hsv_to_rgb(h, s, v)), (red, green, blue));
        }
    }

    #[test]
    fn fade_is_zero_for_black_and_full_for_white() {
        assert_eq!(fade_alpha(0, 0, 0, 255), 0);
        assert_eq!(fade_alpha(255, 255, 255, 200), 200);
        assert_eq!(fade_alpha(100, 150, 200, 255), 223);
    }

    #[test]
    fn to_channel_truncates_and_clamps() {
        assert_eq!(to_channel(223.9 / 255.0), 223);
        assert_eq!(to_channel(-0.1), 0);
        assert_eq!(to_channel(1.5), 255);
    }
}
