//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON for comparisons across runs
//! - reloaded later without dragging solver internals along

use serde::{Deserialize, Serialize};

use crate::error::FitError;

/// An immutable set of samples to fit against.
///
/// Each sample pairs a `dim`-length independent-variable vector with one
/// scalar dependent value. Order is significant: residual entries and
/// Jacobian rows follow the sample order exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSet {
    ivals: Vec<Vec<f64>>,
    dvals: Vec<f64>,
    dim: usize,
}

impl SampleSet {
    /// Validate and capture a sample set.
    ///
    /// Fails fast on an empty set, a zero dimension, mismatched parallel
    /// lengths, or any independent vector whose length differs from `dim`.
    pub fn new(ivals: Vec<Vec<f64>>, dvals: Vec<f64>, dim: usize) -> Result<Self, FitError> {
        if dim == 0 {
            return Err(FitError::new(2, "Dimension must be at least 1."));
        }
        if dvals.is_empty() {
            return Err(FitError::new(3, "No sample points to fit."));
        }
        if ivals.len() != dvals.len() {
            return Err(FitError::new(
                2,
                format!(
                    "Independent/dependent sample counts differ: {} vs {}.",
                    ivals.len(),
                    dvals.len()
                ),
            ));
        }
        if let Some(bad) = ivals.iter().position(|iv| iv.len() != dim) {
            return Err(FitError::new(
                2,
                format!(
                    "Sample {bad} has {} independent values, expected {dim}.",
                    ivals[bad].len()
                ),
            ));
        }
        Ok(Self { ivals, dvals, dim })
    }

    pub fn ivals(&self) -> &[Vec<f64>] {
        &self.ivals
    }

    pub fn dvals(&self) -> &[f64] {
        &self.dvals
    }

    /// Independent-variable dimension D.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of fit parameters: one intercept plus one slope per axis.
    pub fn npars(&self) -> usize {
        self.dim + 1
    }

    pub fn npts(&self) -> usize {
        self.dvals.len()
    }

    /// Degrees of freedom: points minus parameters. Signed, because an
    /// underdetermined set (ndf <= 0) is allowed here and only disables the
    /// standard-error estimate, not the fit itself.
    pub fn ndf(&self) -> i64 {
        self.npts() as i64 - self.npars() as i64
    }
}

/// Standard error of one fitted parameter.
///
/// `Undefined` means "no uncertainty estimate available" (too few degrees of
/// freedom, or a singular covariance proxy). It is deliberately distinct from
/// a numeric zero, which means "the estimate exists and is zero".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamError {
    Estimate(f64),
    Undefined,
}

impl ParamError {
    pub fn value(&self) -> Option<f64> {
        match self {
            ParamError::Estimate(v) => Some(*v),
            ParamError::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, ParamError::Undefined)
    }
}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::Estimate(v) => write!(f, "{v:.6e}"),
            ParamError::Undefined => write!(f, "undefined"),
        }
    }
}
