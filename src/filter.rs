use crate::{color::Color, error::FilterError};

/// A pure per-pixel color mapping.
///
/// Implementations must return the same output for the same input every time they are called,
/// since [`crate::FilterEngine`] memoizes results per distinct color and may call
/// `filter_pixel` from several threads at once.
pub trait PixelTransform: Sync {
    fn filter_pixel(&self, color: Color) -> Color;
}

/// A trait used to implement filters for the filtering engine.
///
/// A filter is configured with its parameters, then analyzed once over every pixel of the input
/// image. The analysis validates the parameters and fixes whatever state the per-pixel transform
/// needs, so all failures surface before any output is produced. Filters that need no global
/// information simply return a copy of themselves as the transform.
///
/// See [`crate::FilterEngine::apply`] on how filters are run.
pub trait Filter {
    /// Short name used in log records.
    const NAME: &'static str;

    type Transform: PixelTransform;

    /// Run the analysis pass over the RGBA-normalized pixels of the image, in row-major order.
    fn analyze(&self, pixels: &[Color]) -> Result<Self::Transform, FilterError>;
}
