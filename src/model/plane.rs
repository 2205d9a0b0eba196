//! Affine hyperplane evaluation, residuals, and Jacobian.
//!
//! The fitter relies on three primitive operations:
//! - pad a coordinate vector with a leading 1.0 (for the intercept term)
//! - predict f(x) given parameters (for residuals)
//! - build the residual Jacobian (for the least-squares solver)
//!
//! The model is linear in its parameters, so the Jacobian does not depend on
//! the parameter vector at all: row i is `-pad(x_i)`, with the sign coming
//! from differentiating `r_i = d_i - f(x_i)` with respect to each parameter.

use nalgebra::{DMatrix, DVector};

use crate::domain::SampleSet;

/// The model `f(x) = c0 + c1*x1 + ... + cd*xd` for a fixed dimension.
///
/// Parameter convention (used everywhere in this crate): index 0 is the
/// intercept `c0`, indices 1..=dim are the per-axis slopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneModel {
    dim: usize,
}

impl PlaneModel {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Parameter count: intercept plus one slope per axis.
    pub fn npars(&self) -> usize {
        self.dim + 1
    }

    /// Padded coordinate vector: `[1.0, x0, x1, ..., x_{dim-1}]`.
    ///
    /// The leading 1.0 lines up with the intercept parameter, so both model
    /// evaluation (dot with the parameters) and the Jacobian rows (negated)
    /// come from this one vector.
    ///
    /// # Panics
    /// Panics if `x` does not have length `dim`.
    pub fn pad(&self, x: &[f64]) -> DVector<f64> {
        assert_eq!(x.len(), self.dim, "coordinate length must equal dim");
        let mut z = DVector::zeros(self.npars());
        z[0] = 1.0;
        for (i, &xi) in x.iter().enumerate() {
            z[i + 1] = xi;
        }
        z
    }

    /// Evaluate the plane at `x` for the given parameters.
    ///
    /// # Panics
    /// Panics if `x` does not have length `dim` or `params` does not have
    /// length `dim + 1`.
    pub fn evaluate(&self, x: &[f64], params: &DVector<f64>) -> f64 {
        assert_eq!(params.len(), self.npars(), "parameter length must equal dim + 1");
        self.pad(x).dot(params)
    }

    /// Residual vector `r_i = d_i - f(x_i)`, in sample order.
    pub fn residuals(&self, params: &DVector<f64>, samples: &SampleSet) -> DVector<f64> {
        DVector::from_iterator(
            samples.npts(),
            samples
                .dvals()
                .iter()
                .zip(samples.ivals().iter())
                .map(|(&dv, iv)| dv - self.evaluate(iv, params)),
        )
    }

    /// Residual Jacobian: an `npts x npars` matrix with row i = `-pad(x_i)`.
    ///
    /// The parameter argument is part of the solver contract but unused:
    /// the model is linear in its parameters, so the Jacobian is constant.
    pub fn jacobian(&self, params: &DVector<f64>, samples: &SampleSet) -> DMatrix<f64> {
        let _ = params;
        let mut jac = DMatrix::zeros(samples.npts(), self.npars());
        for (i, iv) in samples.ivals().iter().enumerate() {
            let z = self.pad(iv);
            for j in 0..self.npars() {
                jac[(i, j)] = -z[j];
            }
        }
        jac
    }
}
