use eqqp_types::{EqQpError, Result};
use serde::{Deserialize, Serialize};

/// Numerical settings for the equality-constrained QP solver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Pivots / singular values below this fraction of the largest are treated
    /// as zero. `None` uses `f64::EPSILON * max(rows, cols)` of the factored matrix.
    pub rank_tolerance: Option<f64>,

    /// Residual norm above which a solve is logged as suspect
    pub residual_tolerance: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            rank_tolerance: None,
            residual_tolerance: 1e-6,
        }
    }
}

impl SolverSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: SolverSettings = serde_json::from_str(json)
            .map_err(|e| EqQpError::ConfigError(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Relative cutoff for a factored matrix of the given shape
    pub fn rank_threshold(&self, rows: usize, cols: usize) -> f64 {
        self.rank_tolerance
            .unwrap_or_else(|| f64::EPSILON * rows.max(cols) as f64)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(tol) = self.rank_tolerance {
            if !(tol.is_finite() && tol >= 0.0) {
                return Err(EqQpError::ConfigError(format!(
                    "rank_tolerance must be finite and non-negative, got {}",
                    tol
                )));
            }
        }
        if !(self.residual_tolerance.is_finite() && self.residual_tolerance > 0.0) {
            return Err(EqQpError::ConfigError(format!(
                "residual_tolerance must be finite and positive, got {}",
                self.residual_tolerance
            )));
        }
        Ok(())
    }
}
