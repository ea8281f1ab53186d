use crate::{
    color::Color,
    error::{check_unit_interval, FilterError},
    filter::{Filter, PixelTransform},
    hsv::{fade_alpha, hsv_to_rgb, rgb_to_hsv, to_channel},
    DEFAULT_BRIGHTNESS_FILL, DEFAULT_HUE, DEFAULT_SATURATION_FILL,
};

/// Recolors an image to a single hue, fading dark pixels out.
///
/// Every pixel keeps its saturation and brightness, pulled toward full by `saturation_fill` and
/// `brightness_fill`, while its hue is replaced outright by the configured hue. Alpha is scaled by
/// the fourth root of the pixel's brightness, so black becomes fully transparent.
///
/// Dyeing an already dyed image keeps the hue, but saturation and brightness keep drifting toward
/// full on every pass and alpha fades again, so repeated application is not idempotent. Hues off
/// the 60 degree sector boundaries are only approximated once channels are truncated to 8 bits:
/// the hue read back from the output may be off by a degree or so, more for low-chroma pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DyeImage {
    hue: f64,
    saturation_fill: f64,
    brightness_fill: f64,
}

impl DyeImage {
    /// Create a dye with a hue in degrees (wrapped into [0, 360)) and fill factors in [0, 1].
    pub fn new(hue: f64, saturation_fill: f64, brightness_fill: f64) -> Result<Self, FilterError> {
        let filter = Self {
            hue,
            saturation_fill,
            brightness_fill,
        };
        filter.validated()
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation_fill(&self) -> f64 {
        self.saturation_fill
    }

    pub fn brightness_fill(&self) -> f64 {
        self.brightness_fill
    }

    fn validated(self) -> Result<Self, FilterError> {
        if !self.hue.is_finite() {
            return Err(FilterError::invalid("hue", self.hue, "a finite angle in degrees"));
        }

        Ok(Self {
            hue: self.hue.rem_euclid(360.0),
            saturation_fill: check_unit_interval("saturation_fill", self.saturation_fill)?,
            brightness_fill: check_unit_interval("brightness_fill", self.brightness_fill)?,
        })
    }
}

impl Default for DyeImage {
    fn default() -> Self {
        Self {
            hue: DEFAULT_HUE,
            saturation_fill: DEFAULT_SATURATION_FILL,
            brightness_fill: DEFAULT_BRIGHTNESS_FILL,
        }
    }
}

impl Filter for DyeImage {
    const NAME: &'static str = "dyeimage";

    type Transform = DyeImage;

    fn analyze(&self, _: &[Color]) -> Result<DyeImage, FilterError> {
        self.validated()
    }
}

impl PixelTransform for DyeImage {
    fn filter_pixel(&self, color: Color) -> Color {
        let Color {
            red,
            green,
            blue,
            alpha,
        } = color;

        let (_, saturation, value) = rgb_to_hsv(red, green, blue);
        let saturation = saturation + (1.0 - saturation) * self.saturation_fill;
        let value = value + (1.0 - value) * self.brightness_fill;

        let (r, g, b) = hsv_to_rgb(self.hue, saturation, value);
        Color::new(
            to_channel(r),
            to_channel(g),
            to_channel(b),
            fade_alpha(red, green, blue, alpha),
        )
    }
}
