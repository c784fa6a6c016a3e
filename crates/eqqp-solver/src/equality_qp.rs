use eqqp_program::ProgramModel;
use eqqp_types::{Result, SolutionResult, SolverId};
use lazy_static::lazy_static;

use crate::assembler::ProblemAssembler;
use crate::backend::SolverInterface;
use crate::kkt::KktSolver;
use crate::reporter::{ResidualReport, ResultReporter, SolveOutcome};
use crate::settings::SolverSettings;

lazy_static! {
    static ref EQUALITY_QP_ID: SolverId = SolverId::new("Equality constrained QP");
}

/// Solver for programs with only quadratic costs and linear equality constraints:
/// minimize 0.5 * x^T G x + c^T x
/// subject to A x = b
///
/// Always reports [`SolutionResult::SolutionFound`]; infeasible or unbounded
/// programs are not detected. Callers that cannot guarantee a well-posed
/// program should inspect [`SolveOutcome::residuals`].
#[derive(Debug, Clone, Default)]
pub struct EqualityConstrainedQpSolver {
    settings: SolverSettings,
}

impl EqualityConstrainedQpSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: SolverSettings) -> Result<Self> {
        settings.validate()?;
        Ok(EqualityConstrainedQpSolver { settings })
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Process-wide identity shared by every instance
    pub fn id() -> &'static SolverId {
        &EQUALITY_QP_ID
    }

    /// Solve and write back, returning the full outcome
    pub fn solve_with_outcome(&self, prog: &mut ProgramModel) -> Result<SolveOutcome> {
        ProblemAssembler::check_supported(prog)?;

        let problem = ProblemAssembler::assemble(prog)?;
        let solution = KktSolver::solve(&problem, &self.settings)?;
        let residuals = ResidualReport::compute(&problem, &solution);

        if residuals.max_residual() > self.settings.residual_tolerance {
            tracing::warn!(
                primal = residuals.primal_residual,
                dual = ?residuals.dual_residual,
                path = ?solution.path,
                "equality-constrained QP solution may not be a constrained optimum"
            );
        }

        let outcome = SolveOutcome::new(solution, residuals);
        ResultReporter::report(prog, &outcome, Self::id())?;

        tracing::debug!(
            path = ?outcome.path,
            optimal_cost = outcome.optimal_cost,
            "equality-constrained QP solved"
        );
        Ok(outcome)
    }
}

impl SolverInterface for EqualityConstrainedQpSolver {
    fn available(&self) -> bool {
        true
    }

    fn solver_id(&self) -> &SolverId {
        Self::id()
    }

    fn solve(&self, prog: &mut ProgramModel) -> Result<SolutionResult> {
        Ok(self.solve_with_outcome(prog)?.status)
    }
}
