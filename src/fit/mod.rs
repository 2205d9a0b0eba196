//! Plane fitting orchestration.
//!
//! Responsibilities:
//!
//! - build an initial parameter guess from the samples (unless supplied)
//! - run the Levenberg-Marquardt solve over the model's residual/Jacobian
//! - turn the covariance proxy into per-parameter standard errors

pub mod fitter;
pub mod guess;
pub mod solver;

pub use fitter::*;
pub use guess::*;
pub use solver::*;
