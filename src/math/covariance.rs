//! Covariance proxy and parameter standard errors.
//!
//! After the least-squares solve we estimate parameter uncertainties from the
//! curvature of the objective near the solution:
//!
//! ```text
//! proxy = (Jᵀ J)⁻¹            (unscaled covariance shape)
//! cov   = proxy * resd_var    (resd_var = Σ r² / ndf)
//! err_i = sqrt(cov[i][i])
//! ```
//!
//! Implementation choices:
//! - `Jᵀ J` inversion returns an `Option`: a singular matrix means flat
//!   curvature in some direction (collinear axes, or fewer points than
//!   parameters), which is a signaled condition here, never a panic.
//! - Parameter dimension is tiny (D+1 for a D-dimensional plane), so a dense
//!   LU inverse is plenty.

use nalgebra::{DMatrix, DVector};

/// Unscaled covariance proxy `(Jᵀ J)⁻¹` for a residual Jacobian.
///
/// Returns `None` when `Jᵀ J` is singular.
pub fn covariance_proxy(jac: &DMatrix<f64>) -> Option<DMatrix<f64>> {
    let jtj = jac.transpose() * jac;
    jtj.try_inverse()
}

/// Residual variance `Σ r² / ndf`.
///
/// Only meaningful for `ndf > 0`; callers gate on that before scaling the
/// covariance proxy.
pub fn residual_variance(residuals: &DVector<f64>, ndf: i64) -> f64 {
    residuals.iter().map(|r| r * r).sum::<f64>() / ndf as f64
}

/// Per-parameter standard errors: square roots of the covariance diagonal.
pub fn standard_errors(covariance: &DMatrix<f64>) -> Vec<f64> {
    covariance.diagonal().iter().map(|v| v.sqrt()).collect()
}
