use eqqp_program::ProgramModel;
use eqqp_types::{Result, SolutionResult, SolverId};

/// Trait for solvers a dispatch layer can select between
pub trait SolverInterface: Send + Sync {
    /// Whether the solver can run in this process
    fn available(&self) -> bool;

    fn solver_id(&self) -> &SolverId;

    /// Solve `prog` in place, writing the solution back into it
    fn solve(&self, prog: &mut ProgramModel) -> Result<SolutionResult>;
}
