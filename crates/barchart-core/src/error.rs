// File: crates/barchart-core/src/error.rs
// Summary: Error taxonomy for chart construction. Every variant is raised before
// the mount target is touched.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("at least one data point is required")]
    InsufficientData,

    #[error("invalid value: {0}")]
    InvalidValue(ValueProblem),

    #[error("invalid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimension { width: f64, height: f64 },

    #[error("invalid {name} ratio {value}%")]
    InvalidRatio { name: &'static str, value: f64 },

    #[error("mount target '{0}' not found")]
    MountTargetNotFound(String),

    #[error("failed to create drawing surface: {0}")]
    Surface(String),
}

/// Why a value cannot be scaled.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ValueProblem {
    #[error("value {value} at index {index} is negative")]
    Negative { index: usize, value: f64 },

    #[error("value at index {index} is not finite")]
    NotFinite { index: usize },

    #[error("all values are zero, bar heights cannot be scaled")]
    AllZero,

    /// A bar value outside any data sequence, so there is no index to report.
    #[error("value {value} is negative or not finite")]
    Unscalable { value: f64 },
}

impl ValueProblem {
    /// Attach the position of the offending data point.
    pub fn at_index(self, index: usize) -> Self {
        match self {
            ValueProblem::Unscalable { value } if value.is_finite() => ValueProblem::Negative { index, value },
            ValueProblem::Unscalable { .. } => ValueProblem::NotFinite { index },
            ValueProblem::Negative { value, .. } => ValueProblem::Negative { index, value },
            ValueProblem::NotFinite { .. } => ValueProblem::NotFinite { index },
            ValueProblem::AllZero => ValueProblem::AllZero,
        }
    }
}

impl From<ValueProblem> for ChartError {
    fn from(p: ValueProblem) -> Self {
        ChartError::InvalidValue(p)
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
