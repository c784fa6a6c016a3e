use eqqp_program::{LinearEqualityConstraint, ProgramModel, QuadraticCost};
use eqqp_solver::{EqualityConstrainedQpSolver, SolverInterface, SolverSettings};
use nalgebra::{DMatrix, DVector};
use tracing_subscriber::EnvFilter;

/// Closest point to (3, 2) on the line x0 + x1 = 4, then the same problem
/// with a free variable that has no cost.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let settings = match std::env::args().nth(1) {
        Some(path) => SolverSettings::from_json(&std::fs::read_to_string(path)?)?,
        None => SolverSettings::default(),
    };
    tracing::info!(settings = %serde_json::to_string(&settings)?, "solver settings");

    let solver = EqualityConstrainedQpSolver::with_settings(settings)?;
    tracing::info!(solver = %solver.solver_id(), available = solver.available(), "solver ready");

    // (x0 - 3)^2 + (x1 - 2)^2 = 0.5 x^T (2I) x + [-6, -4]^T x + 13
    let mut prog = ProgramModel::new();
    let x = prog.new_continuous_variables(2, "x");
    prog.add_quadratic_cost(
        QuadraticCost::new(DMatrix::identity(2, 2) * 2.0, DVector::from_vec(vec![-6.0, -4.0]))?,
        &x,
    )?;
    prog.add_linear_equality_constraint(
        LinearEqualityConstraint::new(
            DMatrix::from_row_slice(1, 2, &[1.0, 1.0]),
            DVector::from_vec(vec![4.0]),
        )?,
        &x,
    )?;

    let outcome = solver.solve_with_outcome(&mut prog)?;
    tracing::info!(
        x0 = prog.value_of(&x[0])?,
        x1 = prog.value_of(&x[1])?,
        cost = outcome.optimal_cost,
        path = ?outcome.path,
        "range-space solve"
    );

    // Add a variable that only appears in a constraint: the Hessian becomes singular
    let z = prog.new_continuous_variables(1, "z");
    prog.add_linear_equality_constraint(
        LinearEqualityConstraint::new(
            DMatrix::from_row_slice(1, 2, &[1.0, -1.0]),
            DVector::from_vec(vec![0.5]),
        )?,
        &[x[0].clone(), z[0].clone()],
    )?;

    let outcome = solver.solve_with_outcome(&mut prog)?;
    tracing::info!(
        x0 = prog.value_of(&x[0])?,
        x1 = prog.value_of(&x[1])?,
        z = prog.value_of(&z[0])?,
        cost = outcome.optimal_cost,
        path = ?outcome.path,
        primal_residual = outcome.residuals.primal_residual,
        "full KKT solve"
    );

    Ok(())
}
