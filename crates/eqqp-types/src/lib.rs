mod error;
mod solver_id;
mod solution;

pub use error::{EqQpError, Result};
pub use solver_id::SolverId;
pub use solution::{SolutionResult, SolverResult};

#[cfg(test)]
mod tests;
