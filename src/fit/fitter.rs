//! The `Fitter`: guess, solve, and error post-processing.
//!
//! Given a sample set of dimension D we fit the D+1 plane coefficients and
//! then estimate each coefficient's standard error by scaling the covariance
//! proxy `(JᵀJ)⁻¹` with the residual variance. Two conditions disable the
//! error estimate (but never the fit itself):
//!
//! - `ndf <= 0`: too few points for the residual variance to mean anything
//! - a singular proxy: flat curvature somewhere (collinear axes, N < D+1)
//!
//! In both cases every error entry is `ParamError::Undefined`.

use nalgebra::DVector;

use crate::domain::{ParamError, SampleSet};
use crate::error::FitError;
use crate::fit::guess::initial_guess;
use crate::fit::solver::{solve, SolveReport};
use crate::math::{covariance_proxy, residual_variance, standard_errors};
use crate::model::PlaneModel;
use crate::report::format_fit_report;

/// Result of one fit: parameters, their standard errors, and the solver's
/// pass-through diagnostics.
#[derive(Debug)]
pub struct FitResult {
    /// Optimized parameters: index 0 the intercept, 1..=D the slopes.
    pub params: Vec<f64>,
    /// Standard error per parameter, parallel to `params`.
    pub errors: Vec<ParamError>,
    /// Solver diagnostics, verbatim.
    pub report: SolveReport,
}

/// Fits a plane to an immutable sample set.
///
/// `fit` is a pure function of the captured samples and the optional guess:
/// it never mutates the sample data and produces a fresh result each call,
/// so separate calls (or separate `Fitter` instances) need no coordination.
#[derive(Debug, Clone)]
pub struct Fitter {
    samples: SampleSet,
    model: PlaneModel,
}

impl Fitter {
    /// Validate the inputs and capture them.
    pub fn new(ivals: Vec<Vec<f64>>, dvals: Vec<f64>, dim: usize) -> Result<Self, FitError> {
        let samples = SampleSet::new(ivals, dvals, dim)?;
        Ok(Self::from_samples(samples))
    }

    pub fn from_samples(samples: SampleSet) -> Self {
        let model = PlaneModel::new(samples.dim());
        Self { samples, model }
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    /// Fit the plane.
    ///
    /// # Arguments
    /// - `guess`: initial parameters, used verbatim when supplied (its length
    ///   must be D+1); otherwise the built-in heuristic seeds the solver
    /// - `verbose`: print the formatted fit report to the console; purely
    ///   observational, no effect on the returned result
    pub fn fit(&self, guess: Option<&[f64]>, verbose: bool) -> Result<FitResult, FitError> {
        let x0 = match guess {
            Some(g) => {
                if g.len() != self.samples.npars() {
                    return Err(FitError::new(
                        2,
                        format!(
                            "Initial guess has {} entries, expected {}.",
                            g.len(),
                            self.samples.npars()
                        ),
                    ));
                }
                DVector::from_row_slice(g)
            }
            None => initial_guess(&self.samples),
        };

        let (popt, report) = solve(&self.model, &self.samples, x0);

        // Error estimation at the optimized parameters. The Jacobian is
        // constant, so evaluating it "near the solution" is exact here.
        let residuals = self.model.residuals(&popt, &self.samples);
        let jac = self.model.jacobian(&popt, &self.samples);
        let ndf = self.samples.ndf();

        let errors: Vec<ParamError> = match covariance_proxy(&jac) {
            Some(proxy) if ndf > 0 => {
                let resd_var = residual_variance(&residuals, ndf);
                let pcov = proxy * resd_var;
                standard_errors(&pcov)
                    .into_iter()
                    .map(ParamError::Estimate)
                    .collect()
            }
            _ => vec![ParamError::Undefined; self.samples.npars()],
        };

        let result = FitResult {
            params: popt.iter().copied().collect(),
            errors,
            report,
        };

        if verbose {
            println!("{}", format_fit_report(&result));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::grid_plane_samples;

    #[test]
    fn recovers_exact_line_with_near_zero_errors() {
        // y = 5 + 2x, no noise.
        let fitter = Fitter::new(
            vec![vec![0.0], vec![1.0], vec![2.0]],
            vec![5.0, 7.0, 9.0],
            1,
        )
        .unwrap();
        let fit = fitter.fit(None, false).unwrap();

        assert!((fit.params[0] - 5.0).abs() < 1e-8);
        assert!((fit.params[1] - 2.0).abs() < 1e-8);
        for e in &fit.errors {
            let v = e.value().expect("errors should be defined for ndf > 0");
            assert!(v.is_finite());
            assert!(v >= 0.0);
            assert!(v < 1e-6);
        }
    }

    #[test]
    fn recovers_exact_plane_on_2d_grid() {
        // d = 5 + 2x + 3y on a 4x4 grid.
        let samples = grid_plane_samples(&[5.0, 2.0, 3.0], 4, (0.0, 3.0)).unwrap();
        let fitter = Fitter::from_samples(samples);
        let fit = fitter.fit(None, false).unwrap();

        let expected = [5.0, 2.0, 3.0];
        for (p, e) in fit.params.iter().zip(expected.iter()) {
            assert!((p - e).abs() < 1e-8, "got {p}, expected {e}");
        }
        assert!(fit.errors.iter().all(|e| !e.is_undefined()));
    }

    #[test]
    fn errors_undefined_when_ndf_is_nonpositive() {
        // Three points, three parameters: exactly determined, ndf = 0. The
        // covariance proxy exists, but without degrees of freedom the
        // residual variance is meaningless.
        let fitter = Fitter::new(
            vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]],
            vec![5.0, 7.0, 8.0],
            2,
        )
        .unwrap();
        let fit = fitter.fit(None, false).unwrap();
        assert_eq!(fit.errors.len(), 3);
        assert!(fit.errors.iter().all(|e| e.is_undefined()));
    }

    #[test]
    fn errors_undefined_for_degenerate_axis() {
        // Axis 1 is constant, so its Jacobian column is collinear with the
        // intercept column and the proxy is singular. The fit still returns.
        let fitter = Fitter::new(
            vec![
                vec![0.0, 7.0],
                vec![1.0, 7.0],
                vec![2.0, 7.0],
                vec![3.0, 7.0],
                vec![4.0, 7.0],
            ],
            vec![5.0, 7.0, 9.0, 11.0, 13.0],
            2,
        )
        .unwrap();
        let fit = fitter.fit(None, false).unwrap();
        assert!(fit.params.iter().all(|p| p.is_finite()));
        assert!(fit.errors.iter().all(|e| e.is_undefined()));
    }

    #[test]
    fn supplied_guess_must_match_parameter_count() {
        let fitter = Fitter::new(
            vec![vec![0.0], vec![1.0], vec![2.0]],
            vec![5.0, 7.0, 9.0],
            1,
        )
        .unwrap();
        let err = fitter.fit(Some(&[1.0, 2.0, 3.0]), false).unwrap_err();
        assert_eq!(err.code(), 2);
    }

    #[test]
    fn repeated_fits_with_same_guess_are_identical() {
        let fitter = Fitter::new(
            vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]],
            vec![5.1, 6.9, 9.05, 10.95],
            1,
        )
        .unwrap();
        let a = fitter.fit(Some(&[0.0, 0.0]), false).unwrap();
        let b = fitter.fit(Some(&[0.0, 0.0]), false).unwrap();
        assert_eq!(a.params, b.params);
        assert_eq!(a.errors, b.errors);
    }
}
