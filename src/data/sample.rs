//! Synthetic plane samples for tests and experiments.
//!
//! Two generators:
//!
//! - `generate_plane_samples`: uniform random points with seeded Gaussian
//!   noise on the dependent value (deterministic per seed)
//! - `grid_plane_samples`: an exact Cartesian grid, useful when a fit should
//!   recover the generating coefficients to solver tolerance

use nalgebra::DVector;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::SampleSet;
use crate::error::FitError;
use crate::model::PlaneModel;

fn validate_coeffs(coeffs: &[f64]) -> Result<(), FitError> {
    if coeffs.len() < 2 {
        return Err(FitError::new(
            2,
            "Need at least an intercept and one slope coefficient.",
        ));
    }
    if coeffs.iter().any(|c| !c.is_finite()) {
        return Err(FitError::new(2, "Plane coefficients must be finite."));
    }
    Ok(())
}

fn validate_range(range: (f64, f64)) -> Result<(), FitError> {
    if !(range.0.is_finite() && range.1.is_finite() && range.1 > range.0) {
        return Err(FitError::new(2, "Invalid coordinate range for sample generation."));
    }
    Ok(())
}

/// Generate `count` random samples of the plane described by `coeffs`
/// (`[c0, c1, ..., cd]`), with coordinates drawn uniformly from `range` per
/// axis and `noise_sigma`-scaled Gaussian noise added to each dependent
/// value. Deterministic for a given seed.
pub fn generate_plane_samples(
    coeffs: &[f64],
    count: usize,
    range: (f64, f64),
    noise_sigma: f64,
    seed: u64,
) -> Result<SampleSet, FitError> {
    validate_coeffs(coeffs)?;
    validate_range(range)?;
    if count == 0 {
        return Err(FitError::new(2, "Sample count must be > 0."));
    }
    if !(noise_sigma.is_finite() && noise_sigma >= 0.0) {
        return Err(FitError::new(2, "Noise sigma must be finite and non-negative."));
    }

    let dim = coeffs.len() - 1;
    let model = PlaneModel::new(dim);
    let params = DVector::from_row_slice(coeffs);

    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| FitError::new(4, format!("Noise distribution error: {e}")))?;

    let mut ivals = Vec::with_capacity(count);
    let mut dvals = Vec::with_capacity(count);
    for _ in 0..count {
        let x: Vec<f64> = (0..dim).map(|_| rng.gen_range(range.0..=range.1)).collect();
        let mut dv = model.evaluate(&x, &params);
        if noise_sigma > 0.0 {
            dv += noise_sigma * normal.sample(&mut rng);
        }
        ivals.push(x);
        dvals.push(dv);
    }

    SampleSet::new(ivals, dvals, dim)
}

/// Generate an exact Cartesian grid of plane samples: `per_axis` evenly
/// spaced values over `range` on every axis, `per_axis^dim` points total,
/// no noise.
pub fn grid_plane_samples(
    coeffs: &[f64],
    per_axis: usize,
    range: (f64, f64),
) -> Result<SampleSet, FitError> {
    validate_coeffs(coeffs)?;
    validate_range(range)?;
    if per_axis < 2 {
        return Err(FitError::new(2, "Grid needs at least 2 points per axis."));
    }

    let dim = coeffs.len() - 1;
    let total = per_axis
        .checked_pow(dim as u32)
        .ok_or_else(|| FitError::new(2, "Grid size overflows for this dimension."))?;
    let step = (range.1 - range.0) / (per_axis - 1) as f64;

    let model = PlaneModel::new(dim);
    let params = DVector::from_row_slice(coeffs);

    let mut ivals = Vec::with_capacity(total);
    let mut dvals = Vec::with_capacity(total);
    for idx in 0..total {
        // Decode the flat index into one grid coordinate per axis.
        let mut rem = idx;
        let mut x = vec![0.0; dim];
        for xi in x.iter_mut() {
            *xi = range.0 + (rem % per_axis) as f64 * step;
            rem /= per_axis;
        }
        dvals.push(model.evaluate(&x, &params));
        ivals.push(x);
    }

    SampleSet::new(ivals, dvals, dim)
}
