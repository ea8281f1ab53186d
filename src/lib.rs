// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library of per-color image filters.
//!
//! Every filter maps each distinct pixel color to an output color. Filters run in two phases: an
//! analysis pass over the whole color population of the image, then a pure per-pixel transform
//! that the [`FilterEngine`] memoizes per distinct color and applies across the image, optionally
//! in parallel.
//!
//! Two filters are provided:
//!
//! - [`DarkFlash`] binarizes an image into a white-on-black silhouette, lightening the darkest
//!   colors until they cover a given share of the visible pixels.
//! - [`DyeImage`] recolors an image to a single hue, pulling saturation and brightness toward full
//!   and fading dark pixels out.
//!
//! ```
//! use tintflash::image::{Rgba, RgbaImage};
//!
//! let image = RgbaImage::from_pixel(4, 4, Rgba([40, 40, 40, 255]));
//! let flash = tintflash::apply_darkflash(&image, tintflash::DEFAULT_LIGHT_RATIO).unwrap();
//!
//! assert_eq!(flash.dimensions(), (4, 4));
//! assert_eq!(flash.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
//! ```

mod cache;
mod color;
mod darkflash;
mod dye;
mod error;
mod filter;
mod histogram;
pub mod hsv;

pub const DEFAULT_LIGHT_RATIO: f64 = 0.15;
pub const DEFAULT_HUE: f64 = 329.0;
pub const DEFAULT_SATURATION_FILL: f64 = 0.5;
pub const DEFAULT_BRIGHTNESS_FILL: f64 = 0.5;

pub use crate::{
    cache::ColorCache,
    color::{Color, ColorPopulation},
    darkflash::{DarkFlash, DarkFlashAnalysis, VISIBLE_ALPHA_MIN},
    dye::DyeImage,
    error::FilterError,
    filter::{Filter, PixelTransform},
    histogram::ColorHistogram,
};
pub use image;
pub use palette;

use image::{GenericImageView, Pixel, RgbaImage};
use rayon::prelude::*;

const CHANNELS: usize = 4;

/// Runs filters over images.
///
/// The engine holds only execution options; every call to [`FilterEngine::apply`] builds its own
/// color cache and analysis state and drops them when it returns.
#[derive(Debug, Clone, Copy)]
pub struct FilterEngine {
    parallel: bool,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self { parallel: true }
    }

    /// Whether the per-pixel transform is spread across the rayon thread pool. The output is
    /// identical either way.
    pub fn parallel(self, parallel: bool) -> Self {
        Self { parallel }
    }

    /// Filter `image` into a new RGBA image of the same dimensions.
    ///
    /// Pixels are normalized to RGBA first, so images without an alpha channel are treated as
    /// fully opaque. The filter's analysis pass runs once over all pixels; any error it reports is
    /// returned before the output image is allocated.
    pub fn apply<I, F>(&self, image: &I, filter: &F) -> Result<RgbaImage, FilterError>
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>,
        F: Filter,
    {
        let (width, height) = image.dimensions();
        let pixels: Vec<Color> = image.pixels().map(|(_, _, p)| Color::from(p.to_rgba())).collect();

        let transform = filter.analyze(&pixels)?;
        let cache = ColorCache::new();
        let filter_cached = |color: Color| cache.get_or_insert_with(color, || transform.filter_pixel(color));

        let mut output = RgbaImage::new(width, height);
        let buffer: &mut [u8] = &mut output;

        if self.parallel {
            buffer
                .par_chunks_exact_mut(CHANNELS)
                .zip(pixels.par_iter())
                .for_each(|(out, &color)| out.copy_from_slice(&filter_cached(color).to_array()));
        } else {
            for (out, &color) in buffer.chunks_exact_mut(CHANNELS).zip(pixels.iter()) {
                out.copy_from_slice(&filter_cached(color).to_array());
            }
        }

        tracing::debug!(
            filter = F::NAME,
            width,
            height,
            distinct_colors = cache.len(),
            parallel = self.parallel,
            "filtered image"
        );

        Ok(output)
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Binarize `image` with [`DarkFlash`], rendering `light_ratio` of the visible pixel mass white.
pub fn apply_darkflash<I>(image: &I, light_ratio: f64) -> Result<RgbaImage, FilterError>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let filter = DarkFlash::new(light_ratio)?;
    apply_logged(image, &filter)
}

/// Recolor `image` with [`DyeImage`] using the given hue in degrees and fill factors.
pub fn apply_dye<I>(image: &I, hue: f64, saturation_fill: f64, brightness_fill: f64) -> Result<RgbaImage, FilterError>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let filter = DyeImage::new(hue, saturation_fill, brightness_fill)?;
    apply_logged(image, &filter)
}

fn apply_logged<I, F>(image: &I, filter: &F) -> Result<RgbaImage, FilterError>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
    F: Filter,
{
    let (width, height) = image.dimensions();

    tracing::info!("Creating {} for {}x{} image", F::NAME, width, height);
    let filtered = FilterEngine::new().apply(image, filter)?;
    tracing::info!("Finished creating {} for {}x{} image", F::NAME, width, height);

    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};
    use pretty_assertions::assert_eq;

    #[test]
    fn rgb_input_is_treated_as_opaque() {
        let image = RgbImage::from_pixel(3, 2, Rgb([255, 255, 255]));
        let dyed = FilterEngine::new().apply(&image, &DyeImage::default()).unwrap();

        assert_eq!(dyed.dimensions(), (3, 2));
        assert!(dyed.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn does_not_allocate_on_error() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        let result = FilterEngine::new().apply(&image, &DarkFlash::default());

        assert_eq!(result.unwrap_err(), FilterError::EmptyInput);
    }

    #[test]
    fn zero_area_dye_is_empty() {
        let image = RgbaImage::new(0, 5);
        let dyed = FilterEngine::new().apply(&image, &DyeImage::default()).unwrap();

        assert_eq!(dyed.dimensions(), (0, 5));
    }

    #[test]
    fn invalid_parameters_surface_from_entry_points() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 255]));

        assert!(matches!(
            apply_darkflash(&image, 0.0),
            Err(FilterError::InvalidParameter { name: "light_ratio", .. })
        ));
        assert!(matches!(
            apply_dye(&image, DEFAULT_HUE, 2.0, 0.5),
            Err(FilterError::InvalidParameter {
                name: "saturation_fill",
                ..
            })
        ));
    }
}
