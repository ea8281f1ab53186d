use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("Invalid parameter {name}: {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("Image has no visible pixels to analyze")]
    EmptyInput,
}

impl FilterError {
    pub(crate) fn invalid(name: &'static str, value: f64, expected: &'static str) -> Self {
        FilterError::InvalidParameter { name, value, expected }
    }
}

/// Checks that a fill factor is a finite value in [0, 1].
pub(crate) fn check_unit_interval(name: &'static str, value: f64) -> Result<f64, FilterError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(FilterError::invalid(name, value, "a value in [0, 1]"))
    }
}
