//! Initial parameter guess for the least-squares solve.
//!
//! The guess only has to land the optimizer in a reasonable basin; it is not
//! a rigorous estimate. The intercept starts at the mean dependent value, and
//! each slope is a crude finite difference between the samples at that axis's
//! extremes. The per-axis slope is additionally divided by the dimension so
//! that, when several axes vary between the two chosen samples, no single
//! axis gets credited with the whole dependent-value swing.

use nalgebra::DVector;

use crate::domain::SampleSet;

/// Build the default initial guess for a sample set.
///
/// Tie-breaking: when several samples share an axis's extreme value, the
/// first one in sample order wins.
///
/// A degenerate axis (identical value across all samples, or a non-finite
/// span) gets a 0.0 slope instead of a division by zero, so the guess stays
/// finite for the solver.
pub fn initial_guess(samples: &SampleSet) -> DVector<f64> {
    let dim = samples.dim();
    let ivals = samples.ivals();
    let dvals = samples.dvals();

    let mut x0 = DVector::zeros(samples.npars());
    x0[0] = dvals.iter().sum::<f64>() / samples.npts() as f64;

    for axis in 0..dim {
        let mut max_i = 0;
        let mut min_i = 0;
        for (i, iv) in ivals.iter().enumerate() {
            if iv[axis] > ivals[max_i][axis] {
                max_i = i;
            }
            if iv[axis] < ivals[min_i][axis] {
                min_i = i;
            }
        }
        let span = ivals[max_i][axis] - ivals[min_i][axis];
        x0[axis + 1] = if span != 0.0 && span.is_finite() {
            (dvals[max_i] - dvals[min_i]) / span / dim as f64
        } else {
            0.0
        };
    }

    x0
}
