use eqqp_program::ProgramModel;
use eqqp_types::{EqQpError, Result};
use nalgebra::{DMatrix, DVector};

/// Dense problem in standard form:
/// minimize 0.5 * x^T G x + c^T x
/// subject to A x = b
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledProblem {
    /// Hessian G (n x n)
    pub g: DMatrix<f64>,
    /// Gradient c (n)
    pub c: DVector<f64>,
    /// Constraint matrix A (m x n)
    pub a: DMatrix<f64>,
    /// Constraint vector b (m)
    pub b: DVector<f64>,
}

impl AssembledProblem {
    pub fn num_vars(&self) -> usize {
        self.c.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.b.len()
    }
}

/// Folds per-binding cost and constraint data into one dense system
pub struct ProblemAssembler;

impl ProblemAssembler {
    /// Fail if the program holds any binding outside the quadratic-cost /
    /// linear-equality subset.
    pub fn check_supported(prog: &ProgramModel) -> Result<()> {
        match prog.unsupported_bindings().next() {
            Some(binding) => Err(EqQpError::UnsupportedBinding {
                kind: binding.kind_name().to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn assemble(prog: &ProgramModel) -> Result<AssembledProblem> {
        let n = prog.num_vars();

        // Objective: accumulate every quadratic cost block into G and c
        let mut g = DMatrix::zeros(n, n);
        let mut c = DVector::zeros(n);
        for binding in prog.quadratic_costs() {
            let q = binding.evaluator().q();
            let b = binding.evaluator().b();

            let index = binding
                .variables()
                .iter()
                .map(|v| prog.find_decision_variable_index(v))
                .collect::<Result<Vec<usize>>>()?;

            for (i, &gi) in index.iter().enumerate() {
                for (j, &gj) in index.iter().enumerate() {
                    g[(gi, gj)] += q[(i, j)];
                }
                c[gi] += b[i];
            }
        }

        // Constraints: one contiguous row block per binding, in registration order
        let m: usize = prog
            .linear_equality_constraints()
            .map(|binding| binding.evaluator().num_rows())
            .sum();
        let mut a = DMatrix::zeros(m, n);
        let mut b = DVector::zeros(m);

        let mut row = 0;
        for binding in prog.linear_equality_constraints() {
            let constraint = binding.evaluator();
            let rows = constraint.num_rows();

            for (i, var) in binding.variables().iter().enumerate() {
                let col = prog.find_decision_variable_index(var)?;
                a.view_mut((row, col), (rows, 1))
                    .copy_from(&constraint.a().column(i));
            }
            b.rows_mut(row, rows).copy_from(constraint.lower_bound());
            row += rows;
        }

        tracing::debug!(num_vars = n, num_constraints = m, "assembled equality-constrained QP");

        Ok(AssembledProblem { g, c, a, b })
    }
}
