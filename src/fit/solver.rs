//! Bridge between the plane model and the Levenberg-Marquardt solver.
//!
//! The `levenberg-marquardt` crate drives a `LeastSquaresProblem` by setting
//! candidate parameters and asking for residuals and the Jacobian. We hold
//! the model and the (immutable) sample set by reference and only the current
//! parameter vector as mutable state, so each solve is independent.
//!
//! Tolerances: the model is exactly linear in its parameters, so we set the
//! residual and parameter tolerances at machine epsilon and let the solver
//! run to the closed-form least-squares solution.

use levenberg_marquardt::{LeastSquaresProblem, LevenbergMarquardt, TerminationReason};
use nalgebra::storage::Owned;
use nalgebra::{DMatrix, DVector, Dyn};

use crate::domain::SampleSet;
use crate::model::PlaneModel;

/// Solver diagnostics, passed through to callers unmodified.
///
/// Non-success is not an error at this level: the fitter always returns a
/// result and leaves interpretation of the termination reason to the caller.
#[derive(Debug)]
pub struct SolveReport {
    /// The solver's own termination reason (status), verbatim.
    pub termination: TerminationReason,
    /// Number of residual/Jacobian evaluations the solver performed.
    pub evaluations: usize,
    /// Final objective value (half the residual sum of squares).
    pub objective: f64,
}

impl SolveReport {
    pub fn success(&self) -> bool {
        self.termination.was_successful()
    }
}

struct PlaneProblem<'a> {
    model: &'a PlaneModel,
    samples: &'a SampleSet,
    params: DVector<f64>,
}

impl LeastSquaresProblem<f64, Dyn, Dyn> for PlaneProblem<'_> {
    type ResidualStorage = Owned<f64, Dyn>;
    type JacobianStorage = Owned<f64, Dyn, Dyn>;
    type ParameterStorage = Owned<f64, Dyn>;

    fn set_params(&mut self, x: &DVector<f64>) {
        self.params.copy_from(x);
    }

    fn params(&self) -> DVector<f64> {
        self.params.clone()
    }

    fn residuals(&self) -> Option<DVector<f64>> {
        Some(self.model.residuals(&self.params, self.samples))
    }

    fn jacobian(&self) -> Option<DMatrix<f64>> {
        Some(self.model.jacobian(&self.params, self.samples))
    }
}

/// Run the least-squares solve from `x0` and return the optimized parameters
/// together with the solver's diagnostics.
pub fn solve(model: &PlaneModel, samples: &SampleSet, x0: DVector<f64>) -> (DVector<f64>, SolveReport) {
    let problem = PlaneProblem {
        model,
        samples,
        params: x0,
    };
    let (solved, report) = LevenbergMarquardt::new()
        .with_ftol(f64::EPSILON)
        .with_xtol(f64::EPSILON)
        .minimize(problem);
    (
        solved.params,
        SolveReport {
            termination: report.termination,
            evaluations: report.number_of_evaluations,
            objective: report.objective_function,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::guess::initial_guess;

    #[test]
    fn solve_recovers_exact_line() {
        let samples = SampleSet::new(
            vec![vec![0.0], vec![1.0], vec![2.0]],
            vec![5.0, 7.0, 9.0],
            1,
        )
        .unwrap();
        let model = PlaneModel::new(1);
        let (popt, report) = solve(&model, &samples, initial_guess(&samples));
        assert!(report.success());
        assert!((popt[0] - 5.0).abs() < 1e-8);
        assert!((popt[1] - 2.0).abs() < 1e-8);
        assert!(report.objective < 1e-16);
    }

    #[test]
    fn solve_reports_evaluation_counts() {
        let samples = SampleSet::new(
            vec![vec![0.0], vec![1.0], vec![2.0]],
            vec![5.0, 7.0, 9.0],
            1,
        )
        .unwrap();
        let model = PlaneModel::new(1);
        let (_, report) = solve(&model, &samples, initial_guess(&samples));
        assert!(report.evaluations > 0);
    }
}
