use serde::{Deserialize, Serialize};

use crate::solver_id::SolverId;

/// Outcome reported by a solver to its caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolutionResult {
    SolutionFound,
    InvalidInput,
    InfeasibleConstraints,
    UnboundedCost,
    UnknownError,
}

impl SolutionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SolutionResult::SolutionFound)
    }
}

/// Record of which solver last wrote a solution, and its return code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverResult {
    pub solver_id: SolverId,
    pub return_code: i32,
}

impl SolverResult {
    pub fn new(solver_id: SolverId, return_code: i32) -> Self {
        SolverResult { solver_id, return_code }
    }
}
