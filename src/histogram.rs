use crate::color::{Color, ColorPopulation};
use std::collections::HashMap;

/// Distinct colors of an image with their pixel counts.
///
/// Entries are kept in the order each color first appears in the pixel stream, so anything built
/// on top of the histogram (such as a stable sort) is deterministic for a given image.
#[derive(Debug, Clone, Default)]
pub struct ColorHistogram {
    entries: Vec<ColorPopulation>,
}

impl ColorHistogram {
    pub fn from_pixels(pixels: &[Color]) -> Self {
        let mut index = HashMap::new();
        let mut counts: Vec<(Color, u64)> = Vec::new();

        for &color in pixels {
            let slot = *index.entry(color).or_insert_with(|| {
                counts.push((color, 0));
                counts.len() - 1
            });
            counts[slot].1 += 1;
        }

        Self {
            entries: counts
                .into_iter()
                .map(|(color, count)| ColorPopulation::new(color, count))
                .collect(),
        }
    }

    pub fn into_entries(self) -> Vec<ColorPopulation> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_in_first_appearance_order() {
        let red = Color::new(255, 0, 0, 255);
        let blue = Color::new(0, 0, 255, 255);
        let clear = Color::TRANSPARENT;

        let entries = ColorHistogram::from_pixels(&[blue, red, blue, clear, red, blue]).into_entries();

        assert_eq!(
            entries,
            vec![
                ColorPopulation::new(blue, 3),
                ColorPopulation::new(red, 2),
                ColorPopulation::new(clear, 1),
            ]
        );
    }

    #[test]
    fn alpha_distinguishes_colors() {
        let opaque = Color::new(9, 9, 9, 255);
        let faded = Color::new(9, 9, 9, 128);

        let entries = ColorHistogram::from_pixels(&[opaque, faded]).into_entries();

        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn empty_pixels_give_empty_histogram() {
        assert!(ColorHistogram::from_pixels(&[]).into_entries().is_empty());
    }
}
