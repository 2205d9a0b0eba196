//! `plane-fit` library crate.
//!
//! Fits an n-dimensional affine hyperplane
//!
//! ```text
//! f(x) = c0 + c1*x1 + ... + cd*xd
//! ```
//!
//! to a scatter of sample points via nonlinear least squares, and estimates
//! the standard error of each fitted coefficient from the solver's
//! covariance proxy.
//!
//! Module map:
//!
//! - `domain`: shared types (sample set, fit result, value-or-undefined errors)
//! - `model`: plane evaluation, residuals, and the (constant) Jacobian
//! - `fit`: initial guess, solver bridge, and the `Fitter` orchestration
//! - `math`: covariance proxy and standard-error utilities
//! - `data`: synthetic sample generation for tests and experiments
//! - `report`: formatted terminal output for verbose fits

pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod math;
pub mod model;
pub mod report;
