//! KKT solve for the assembled problem.
//!
//! Formally we want
//!
//! ```text
//! | G  -A^T | | x | = | -c |
//! | A   0   | | y |   |  b |
//! ```
//!
//! for primal x and multipliers y. When G admits a Cholesky factorization the
//! primal variables are eliminated and only the m x m Schur complement
//! A G^-1 A^T is solved (range-space approach). Otherwise the full
//! (n + m) x (n + m) system is solved in the least-squares sense with an SVD.

use eqqp_types::{EqQpError, Result};
use nalgebra::linalg::{Cholesky, ColPivQR, SVD};
use nalgebra::{DMatrix, DVector, Dyn};

use crate::assembler::AssembledProblem;
use crate::settings::SolverSettings;

/// Which algorithm produced a solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KktPath {
    /// G positive definite: Cholesky + Schur complement
    RangeSpace,
    /// G singular or indefinite: SVD on the full KKT matrix
    FullKkt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KktSolution {
    pub x: DVector<f64>,
    /// Only available on the range-space path
    pub multipliers: Option<DVector<f64>>,
    pub path: KktPath,
    pub optimal_cost: f64,
}

/// 0.5 * x^T G x + c^T x
///
/// The linear term is not halved; 0.5 * x^T (G x + c) is a different quantity.
pub fn objective(g: &DMatrix<f64>, c: &DVector<f64>, x: &DVector<f64>) -> f64 {
    0.5 * x.dot(&(g * x)) + c.dot(x)
}

pub struct KktSolver;

impl KktSolver {
    pub fn solve(problem: &AssembledProblem, settings: &SolverSettings) -> Result<KktSolution> {
        // The factorization attempt doubles as the definiteness probe
        match Cholesky::new(problem.g.clone()) {
            Some(llt) => {
                tracing::debug!("Hessian is positive definite, using range-space solve");
                Self::solve_range_space(problem, &llt, settings)
            }
            None => {
                tracing::debug!("Hessian is not positive definite, falling back to full KKT solve");
                Self::solve_full_kkt(problem, settings)
            }
        }
    }

    fn solve_range_space(
        problem: &AssembledProblem,
        llt: &Cholesky<f64, Dyn>,
        settings: &SolverSettings,
    ) -> Result<KktSolution> {
        let a_t = problem.a.transpose();

        // G^-1 A^T; its transpose is A G^-1 since G is symmetric
        let aig_t = llt.solve(&a_t);
        let schur = &problem.a * &aig_t;

        // A G^-1 A^T y = A G^-1 c + b
        let rhs = aig_t.tr_mul(&problem.c) + &problem.b;
        let rank_tolerance = settings.rank_threshold(schur.nrows(), schur.ncols());
        let y = rank_revealing_solve(schur, &rhs, rank_tolerance)?;

        // G x = A^T y - c
        let x = llt.solve(&(&a_t * &y - &problem.c));
        let optimal_cost = objective(&problem.g, &problem.c, &x);

        Ok(KktSolution {
            x,
            multipliers: Some(y),
            path: KktPath::RangeSpace,
            optimal_cost,
        })
    }

    fn solve_full_kkt(problem: &AssembledProblem, settings: &SolverSettings) -> Result<KktSolution> {
        let n = problem.num_vars();
        let m = problem.num_constraints();
        let dim = n + m;

        let mut kkt = DMatrix::zeros(dim, dim);
        kkt.view_mut((0, 0), (n, n)).copy_from(&problem.g);
        kkt.view_mut((0, n), (n, m)).copy_from(&(-problem.a.transpose()));
        kkt.view_mut((n, 0), (m, n)).copy_from(&problem.a);

        let mut rhs = DVector::zeros(dim);
        rhs.rows_mut(0, n).copy_from(&(-problem.c.clone()));
        rhs.rows_mut(n, m).copy_from(&problem.b);

        let z = if dim == 0 {
            DVector::zeros(0)
        } else {
            let svd = SVD::try_new(kkt, true, true, f64::EPSILON, 0).ok_or_else(|| {
                EqQpError::Numerical("SVD of KKT matrix did not converge".to_string())
            })?;
            let threshold = settings.rank_threshold(dim, dim) * svd.singular_values.max();
            svd.solve(&rhs, threshold)
                .map_err(|e| EqQpError::Numerical(e.to_string()))?
        };

        // Multipliers from the least-squares solve are not meaningful here
        let x = z.rows(0, n).into_owned();
        let optimal_cost = objective(&problem.g, &problem.c, &x);

        Ok(KktSolution {
            x,
            multipliers: None,
            path: KktPath::FullKkt,
            optimal_cost,
        })
    }
}

/// Least-squares solve of a possibly rank-deficient square system using a
/// column-pivoted QR. Pivots below `rank_tolerance` times the largest pivot are
/// dropped and the matching unknowns set to zero.
fn rank_revealing_solve(
    matrix: DMatrix<f64>,
    rhs: &DVector<f64>,
    rank_tolerance: f64,
) -> Result<DVector<f64>> {
    let cols = matrix.ncols();
    if matrix.nrows() == 0 || cols == 0 {
        return Ok(DVector::zeros(cols));
    }

    let qr = ColPivQR::new(matrix);
    let r = qr.r();
    let qt_rhs = qr.q().tr_mul(rhs);

    let diag = r.diagonal();
    let max_pivot = diag.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let threshold = rank_tolerance * max_pivot;
    let rank = diag.iter().take_while(|v| v.abs() > threshold).count();

    let mut solution = DVector::zeros(cols);
    if rank > 0 {
        let leading = r
            .view((0, 0), (rank, rank))
            .solve_upper_triangular(&qt_rhs.rows(0, rank))
            .ok_or_else(|| EqQpError::Numerical("singular leading block in QR solve".to_string()))?;
        solution.rows_mut(0, rank).copy_from(&leading);
    }
    qr.p().inv_permute_rows(&mut solution);

    tracing::trace!(size = cols, rank, "Schur complement solved");
    Ok(solution)
}
