use crate::error::{GeometryError, Result};
use crate::operations::descent::DEFAULT_DESCENT_SAMPLES;
use crate::operations::query::{DEFAULT_BANKING_SCALE, DEFAULT_CURVATURE_SCALE, DEFAULT_DELTA};

/// Parameters controlling path construction and the derived queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathConfig {
    /// Parameter steps taken over the raw curve when enforcing descent.
    pub descent_samples: usize,
    /// Raw-parameter steps in the arc-length table of the final curve.
    pub arc_length_divisions: usize,
    /// Finite-difference half-window for slope, banking and curvature.
    pub delta: f64,
    /// Factor applied to lateral displacement in the banking proxy.
    pub banking_scale: f64,
    /// Factor applied to the tangent turn angle in the curvature proxy.
    pub curvature_scale: f64,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            descent_samples: DEFAULT_DESCENT_SAMPLES,
            arc_length_divisions: 4000,
            delta: DEFAULT_DELTA,
            banking_scale: DEFAULT_BANKING_SCALE,
            curvature_scale: DEFAULT_CURVATURE_SCALE,
        }
    }
}

impl PathConfig {
    /// Checks that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameters`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| -> Result<()> {
            Err(GeometryError::InvalidParameters(msg.into()).into())
        };
        if self.descent_samples == 0 {
            return invalid("descent_samples must be at least 1");
        }
        if self.arc_length_divisions == 0 {
            return invalid("arc_length_divisions must be at least 1");
        }
        if !(self.delta.is_finite() && self.delta > 0.0) {
            return invalid("delta must be positive and finite");
        }
        if !self.banking_scale.is_finite() || !self.curvature_scale.is_finite() {
            return invalid("query scales must be finite");
        }
        Ok(())
    }
}
