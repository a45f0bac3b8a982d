// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels and fixed ranges.

use crate::error::ChartError;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 1.0)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Finite bounds with `max > min`.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.min.is_finite() && self.max.is_finite() && self.max > self.min {
            Ok(())
        } else {
            Err(ChartError::InvalidAxisRange { label: self.label.clone(), min: self.min, max: self.max })
        }
    }
}
