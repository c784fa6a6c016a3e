mod assembler;
mod backend;
mod equality_qp;
mod kkt;
mod reporter;
mod settings;

pub use assembler::{AssembledProblem, ProblemAssembler};
pub use backend::SolverInterface;
pub use equality_qp::EqualityConstrainedQpSolver;
pub use kkt::{objective, KktPath, KktSolution, KktSolver};
pub use reporter::{ResidualReport, ResultReporter, SolveOutcome};
pub use settings::SolverSettings;
