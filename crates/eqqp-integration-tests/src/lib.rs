//! Builders shared by the cross-crate tests.

use eqqp_program::{DecisionVariable, LinearEqualityConstraint, ProgramModel, QuadraticCost};
use eqqp_types::Result;
use nalgebra::{DMatrix, DVector};

/// Program with one quadratic cost over all `n` variables and, when
/// `rows > 0`, one equality block `A x = b` (A row-major, `rows` x n)
pub fn dense_program(
    n: usize,
    g: &[f64],
    c: &[f64],
    rows: usize,
    a: &[f64],
    b: &[f64],
) -> Result<(ProgramModel, Vec<DecisionVariable>)> {
    let mut prog = ProgramModel::new();
    let x = prog.new_continuous_variables(n, "x");

    let cost = QuadraticCost::new(DMatrix::from_row_slice(n, n, g), DVector::from_column_slice(c))?;
    prog.add_quadratic_cost(cost, &x)?;

    if rows > 0 {
        let constraint = LinearEqualityConstraint::new(
            DMatrix::from_row_slice(rows, n, a),
            DVector::from_column_slice(b),
        )?;
        prog.add_linear_equality_constraint(constraint, &x)?;
    }

    Ok((prog, x))
}
