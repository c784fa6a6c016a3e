use eqqp_program::ProgramModel;
use eqqp_types::{Result, SolutionResult, SolverId, SolverResult};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::assembler::AssembledProblem;
use crate::kkt::{KktPath, KktSolution};

/// Constraint and stationarity residuals of a computed point (infinity norms)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResidualReport {
    /// ||A x - b||
    pub primal_residual: f64,
    /// ||G x - A^T y + c||, when multipliers are known
    pub dual_residual: Option<f64>,
}

impl ResidualReport {
    pub fn compute(problem: &AssembledProblem, solution: &KktSolution) -> Self {
        let primal_residual = inf_norm(&(&problem.a * &solution.x - &problem.b));
        let dual_residual = solution.multipliers.as_ref().map(|y| {
            inf_norm(&(&problem.g * &solution.x - problem.a.tr_mul(y) + &problem.c))
        });

        ResidualReport { primal_residual, dual_residual }
    }

    pub fn max_residual(&self) -> f64 {
        self.primal_residual.max(self.dual_residual.unwrap_or(0.0))
    }
}

fn inf_norm(v: &DVector<f64>) -> f64 {
    v.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()))
}

/// Everything a solve produced
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    pub x: DVector<f64>,
    pub optimal_cost: f64,
    pub status: SolutionResult,
    pub path: KktPath,
    pub multipliers: Option<DVector<f64>>,
    pub residuals: ResidualReport,
}

impl SolveOutcome {
    pub fn new(solution: KktSolution, residuals: ResidualReport) -> Self {
        SolveOutcome {
            x: solution.x,
            optimal_cost: solution.optimal_cost,
            status: SolutionResult::SolutionFound,
            path: solution.path,
            multipliers: solution.multipliers,
            residuals,
        }
    }
}

/// Writes a solve outcome back into the program
pub struct ResultReporter;

impl ResultReporter {
    pub fn report(prog: &mut ProgramModel, outcome: &SolveOutcome, solver_id: &SolverId) -> Result<()> {
        prog.set_decision_variable_values(&outcome.x)?;
        prog.set_optimal_cost(outcome.optimal_cost);
        prog.set_solver_result(SolverResult::new(solver_id.clone(), 0));
        Ok(())
    }
}
