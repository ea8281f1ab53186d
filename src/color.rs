use image::Rgba;

/// An 8-bit RGBA color. Equality is exact per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Color {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// Sum of the raw red, green and blue channels, in [0, 765].
    pub fn luminance(self) -> u32 {
        self.red as u32 + self.green as u32 + self.blue as u32
    }

    /// Packs the channels into a single integer, red most significant.
    pub fn packed(self) -> u32 {
        u32::from_be_bytes(self.to_array())
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl From<Rgba<u8>> for Color {
    fn from(Rgba([red, green, blue, alpha]): Rgba<u8>) -> Self {
        Color::new(red, green, blue, alpha)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba(color.to_array())
    }
}

/// A distinct color together with the number of pixels that carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPopulation {
    color: Color,
    population: u64,
}

impl ColorPopulation {
    pub fn new(color: Color, population: u64) -> ColorPopulation {
        Self { color, population }
    }

    pub fn color(self) -> Color {
        self.color
    }

    pub fn population(self) -> u64 {
        self.population
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_orders_red_first() {
        assert_eq!(Color::new(0x12, 0x34, 0x56, 0x78).packed(), 0x1234_5678);
    }

    #[test]
    fn luminance_does_not_overflow() {
        assert_eq!(Color::new(255, 255, 255, 0).luminance(), 765);
    }

    #[test]
    fn population_holds_more_than_u32_pixels() {
        let population = u32::MAX as u64 * 2;
        assert_eq!(ColorPopulation::new(Color::TRANSPARENT, population).population(), population);
    }

    #[test]
    fn converts_to_and_from_rgba() {
        let color = Color::new(1, 2, 3, 4);
        let rgba: Rgba<u8> = color.into();
        assert_eq!(rgba, Rgba([1, 2, 3, 4]));
        assert_eq!(Color::from(rgba), color);
    }
}
