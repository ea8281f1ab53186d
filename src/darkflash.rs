use crate::{
    color::{Color, ColorPopulation},
    error::FilterError,
    filter::{Filter, PixelTransform},
    histogram::ColorHistogram,
    DEFAULT_LIGHT_RATIO,
};
use std::collections::HashSet;

/// Pixels with an alpha at or below this value are treated as invisible.
pub const VISIBLE_ALPHA_MIN: u8 = 10;

const WHITE: (u8, u8, u8) = (255, 255, 255);
const BLACK: (u8, u8, u8) = (0, 0, 0);

/// Binarizes an image into a white-on-black flash silhouette.
///
/// Visible colors are ranked from darkest to brightest by the sum of their channels. Starting from
/// the darkest, colors are designated to be rendered white until they cover at least
/// `light_ratio` of the visible pixels; every other visible color becomes black. Invisible pixels
/// become fully transparent black. Alpha of visible pixels is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DarkFlash {
    light_ratio: f64,
}

impl DarkFlash {
    /// Create a filter rendering `light_ratio` of the visible pixel mass white. The ratio must be
    /// in (0, 1].
    pub fn new(light_ratio: f64) -> Result<Self, FilterError> {
        let filter = Self { light_ratio };
        filter.validate()?;
        Ok(filter)
    }

    pub fn light_ratio(&self) -> f64 {
        self.light_ratio
    }

    fn validate(&self) -> Result<(), FilterError> {
        if self.light_ratio > 0.0 && self.light_ratio <= 1.0 {
            Ok(())
        } else {
            Err(FilterError::invalid("light_ratio", self.light_ratio, "a value in (0, 1]"))
        }
    }
}

impl Default for DarkFlash {
    fn default() -> Self {
        Self {
            light_ratio: DEFAULT_LIGHT_RATIO,
        }
    }
}

impl Filter for DarkFlash {
    const NAME: &'static str = "darkflash";

    type Transform = DarkFlashAnalysis;

    fn analyze(&self, pixels: &[Color]) -> Result<DarkFlashAnalysis, FilterError> {
        self.validate()?;

        let mut ranked = ColorHistogram::from_pixels(pixels)
            .into_entries()
            .into_iter()
            .filter(|entry| is_visible(entry.color()))
            .collect::<Vec<_>>();

        // stable, so equal luminances keep their first-appearance order
        ranked.sort_by_key(|entry| entry.color().luminance());

        let visible_pixels: u64 = ranked.iter().map(|entry| entry.population()).sum();
        if visible_pixels == 0 {
            return Err(FilterError::EmptyInput);
        }

        let (lighten, lightened_pixels) = select_lightened(&ranked, visible_pixels, self.light_ratio)
            .ok_or_else(|| FilterError::invalid("light_ratio", self.light_ratio, "a value in (0, 1]"))?;

        tracing::debug!(
            distinct = ranked.len(),
            visible_pixels,
            lightened_colors = lighten.len(),
            lightened_pixels,
            "darkflash analysis complete"
        );

        Ok(DarkFlashAnalysis {
            ranked,
            lighten,
            visible_pixels,
            lightened_pixels,
        })
    }
}

/// Walk the ranked colors accumulating their populations, selecting every color visited until the
/// running total first covers `light_ratio` of `visible_pixels`. Returns `None` if the colors run
/// out first.
fn select_lightened(
    ranked: &[ColorPopulation],
    visible_pixels: u64,
    light_ratio: f64,
) -> Option<(HashSet<Color>, u64)> {
    let mut lighten = HashSet::new();
    let mut total = 0u64;
    let mut colors = ranked.iter();

    // compare the covered share, not total against light_ratio * visible_pixels: the product can
    // round above an exactly reached quantile
    while (total as f64) / (visible_pixels as f64) < light_ratio {
        let entry = colors.next()?;
        lighten.insert(entry.color());
        total += entry.population();
    }

    Some((lighten, total))
}

fn is_visible(color: Color) -> bool {
    color.alpha > VISIBLE_ALPHA_MIN
}

/// Result of the darkflash analysis pass, and the per-pixel transform it fixes.
#[derive(Debug, Clone)]
pub struct DarkFlashAnalysis {
    ranked: Vec<ColorPopulation>,
    lighten: HashSet<Color>,
    visible_pixels: u64,
    lightened_pixels: u64,
}

impl DarkFlashAnalysis {
    /// Visible colors with their populations, darkest first.
    pub fn ranked(&self) -> &[ColorPopulation] {
        &self.ranked
    }

    pub fn is_lightened(&self, color: Color) -> bool {
        self.lighten.contains(&color)
    }

    pub fn lightened_colors(&self) -> &HashSet<Color> {
        &self.lighten
    }

    pub fn visible_pixel_count(&self) -> u64 {
        self.visible_pixels
    }

    /// Number of visible pixels whose color is rendered white.
    pub fn lightened_pixel_count(&self) -> u64 {
        self.lightened_pixels
    }
}

impl PixelTransform for DarkFlashAnalysis {
    fn filter_pixel(&self, color: Color) -> Color {
        if !is_visible(color) {
            return Color::TRANSPARENT;
        }

        let (red, green, blue) = if self.is_lightened(color) { WHITE } else { BLACK };
        Color::new(red, green, blue, color.alpha)
    }
}
