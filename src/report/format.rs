//! Formatted terminal output for fit results.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::fit::fitter::FitResult;

/// Format a fit result: parameters with their errors, then every solver
/// diagnostic, the termination message, and the success flag.
pub fn format_fit_report(fit: &FitResult) -> String {
    let mut out = String::new();

    out.push_str("=== plane-fit: least-squares result ===\n");
    for (i, (p, e)) in fit.params.iter().zip(fit.errors.iter()).enumerate() {
        out.push_str(&format!("c{i}: {p:.6e} ± {e}\n"));
    }

    out.push_str("\nSolver diagnostics:\n");
    out.push_str(&format!("evaluations: {}\n", fit.report.evaluations));
    out.push_str(&format!("objective: {:.6e}\n", fit.report.objective));
    out.push_str(&format!("termination: {:?}\n", fit.report.termination));
    out.push_str(&format!("success: {}", fit.report.success()));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::Fitter;

    #[test]
    fn report_lists_every_parameter_and_diagnostics() {
        let fitter = Fitter::new(
            vec![vec![0.0], vec![1.0], vec![2.0]],
            vec![5.0, 7.0, 9.0],
            1,
        )
        .unwrap();
        let fit = fitter.fit(None, false).unwrap();
        let report = format_fit_report(&fit);

        assert!(report.contains("c0:"));
        assert!(report.contains("c1:"));
        assert!(report.contains("evaluations:"));
        assert!(report.contains("objective:"));
        assert!(report.contains("termination:"));
        assert!(report.contains("success:"));
    }

    #[test]
    fn undefined_errors_render_as_undefined() {
        // ndf = 0: exactly determined.
        let fitter = Fitter::new(vec![vec![0.0], vec![1.0]], vec![5.0, 7.0], 1).unwrap();
        let fit = fitter.fit(None, false).unwrap();
        let report = format_fit_report(&fit);
        assert!(report.contains("undefined"));
    }
}
