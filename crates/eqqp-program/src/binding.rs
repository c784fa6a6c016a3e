use eqqp_types::{EqQpError, Result};
use nalgebra::{DMatrix, DVector};

use crate::variable::DecisionVariable;

/// Cost or constraint data that can be bound to a list of decision variables
pub trait BindingEvaluator {
    /// Kind name used in diagnostics
    const KIND: &'static str;

    /// Number of variables the evaluator expects, if fixed
    fn num_vars(&self) -> Option<usize>;
}

/// Quadratic cost 0.5 * x^T Q x + b^T x over the bound variables
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticCost {
    q: DMatrix<f64>,
    b: DVector<f64>,
}

impl QuadraticCost {
    pub fn new(q: DMatrix<f64>, b: DVector<f64>) -> Result<Self> {
        let k = b.len();
        if q.nrows() != k || q.ncols() != k {
            return Err(EqQpError::dimension(
                "quadratic cost Q",
                format!("{}x{}", k, k),
                format!("{}x{}", q.nrows(), q.ncols()),
            ));
        }
        Ok(QuadraticCost { q, b })
    }

    pub fn q(&self) -> &DMatrix<f64> {
        &self.q
    }

    pub fn b(&self) -> &DVector<f64> {
        &self.b
    }
}

impl BindingEvaluator for QuadraticCost {
    const KIND: &'static str = "QuadraticCost";

    fn num_vars(&self) -> Option<usize> {
        Some(self.b.len())
    }
}

/// Linear equality A x = beq over the bound variables
#[derive(Debug, Clone, PartialEq)]
pub struct LinearEqualityConstraint {
    a: DMatrix<f64>,
    beq: DVector<f64>,
}

impl LinearEqualityConstraint {
    pub fn new(a: DMatrix<f64>, beq: DVector<f64>) -> Result<Self> {
        if a.nrows() != beq.len() {
            return Err(EqQpError::dimension("equality rows", a.nrows(), beq.len()));
        }
        Ok(LinearEqualityConstraint { a, beq })
    }

    /// Build from a lower/upper bound pair, which must coincide
    pub fn from_bounds(a: DMatrix<f64>, lower: DVector<f64>, upper: DVector<f64>) -> Result<Self> {
        if lower != upper {
            return Err(EqQpError::NonEqualityBounds {
                lower: lower.as_slice().to_vec(),
                upper: upper.as_slice().to_vec(),
            });
        }
        Self::new(a, lower)
    }

    pub fn a(&self) -> &DMatrix<f64> {
        &self.a
    }

    pub fn num_rows(&self) -> usize {
        self.a.nrows()
    }

    pub fn lower_bound(&self) -> &DVector<f64> {
        &self.beq
    }

    pub fn upper_bound(&self) -> &DVector<f64> {
        &self.beq
    }
}

impl BindingEvaluator for LinearEqualityConstraint {
    const KIND: &'static str = "LinearEqualityConstraint";

    fn num_vars(&self) -> Option<usize> {
        Some(self.a.ncols())
    }
}

/// Linear inequality lower <= A x <= upper
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    pub a: DMatrix<f64>,
    pub lower: DVector<f64>,
    pub upper: DVector<f64>,
}

impl BindingEvaluator for LinearConstraint {
    const KIND: &'static str = "LinearConstraint";

    fn num_vars(&self) -> Option<usize> {
        Some(self.a.ncols())
    }
}

/// Per-variable bounds lower <= x <= upper
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBoxConstraint {
    pub lower: DVector<f64>,
    pub upper: DVector<f64>,
}

impl BindingEvaluator for BoundingBoxConstraint {
    const KIND: &'static str = "BoundingBoxConstraint";

    fn num_vars(&self) -> Option<usize> {
        Some(self.lower.len())
    }
}

/// 0 <= x, 0 <= M x + q, x^T (M x + q) = 0
#[derive(Debug, Clone, PartialEq)]
pub struct LinearComplementarityConstraint {
    pub m: DMatrix<f64>,
    pub q: DVector<f64>,
}

impl BindingEvaluator for LinearComplementarityConstraint {
    const KIND: &'static str = "LinearComplementarityConstraint";

    fn num_vars(&self) -> Option<usize> {
        Some(self.q.len())
    }
}

/// Nonlinear cost known only by its description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericCost {
    pub description: String,
}

impl BindingEvaluator for GenericCost {
    const KIND: &'static str = "GenericCost";

    fn num_vars(&self) -> Option<usize> {
        None
    }
}

/// Nonlinear constraint known only by its description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericConstraint {
    pub description: String,
}

impl BindingEvaluator for GenericConstraint {
    const KIND: &'static str = "GenericConstraint";

    fn num_vars(&self) -> Option<usize> {
        None
    }
}

/// An evaluator paired with the decision variables it applies to
#[derive(Debug, Clone, PartialEq)]
pub struct Binding<C> {
    evaluator: C,
    variables: Vec<DecisionVariable>,
}

impl<C: BindingEvaluator> Binding<C> {
    pub fn new(evaluator: C, variables: Vec<DecisionVariable>) -> Result<Self> {
        if let Some(k) = evaluator.num_vars() {
            if k != variables.len() {
                return Err(EqQpError::dimension(
                    format!("{} variable count", C::KIND),
                    k,
                    variables.len(),
                ));
            }
        }
        Ok(Binding { evaluator, variables })
    }

    pub fn evaluator(&self) -> &C {
        &self.evaluator
    }

    pub fn variables(&self) -> &[DecisionVariable] {
        &self.variables
    }
}

/// Closed set of binding kinds a program can hold
#[derive(Debug, Clone, PartialEq)]
pub enum ProgramBinding {
    QuadraticCost(Binding<QuadraticCost>),
    LinearEqualityConstraint(Binding<LinearEqualityConstraint>),
    LinearConstraint(Binding<LinearConstraint>),
    BoundingBoxConstraint(Binding<BoundingBoxConstraint>),
    LinearComplementarityConstraint(Binding<LinearComplementarityConstraint>),
    GenericCost(Binding<GenericCost>),
    GenericConstraint(Binding<GenericConstraint>),
}

impl ProgramBinding {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ProgramBinding::QuadraticCost(_) => QuadraticCost::KIND,
            ProgramBinding::LinearEqualityConstraint(_) => LinearEqualityConstraint::KIND,
            ProgramBinding::LinearConstraint(_) => LinearConstraint::KIND,
            ProgramBinding::BoundingBoxConstraint(_) => BoundingBoxConstraint::KIND,
            ProgramBinding::LinearComplementarityConstraint(_) => {
                LinearComplementarityConstraint::KIND
            }
            ProgramBinding::GenericCost(_) => GenericCost::KIND,
            ProgramBinding::GenericConstraint(_) => GenericConstraint::KIND,
        }
    }

    /// Whether the equality-constrained QP solver accepts this kind
    pub fn is_equality_qp_kind(&self) -> bool {
        matches!(
            self,
            ProgramBinding::QuadraticCost(_) | ProgramBinding::LinearEqualityConstraint(_)
        )
    }

    pub fn variables(&self) -> &[DecisionVariable] {
        match self {
            ProgramBinding::QuadraticCost(b) => b.variables(),
            ProgramBinding::LinearEqualityConstraint(b) => b.variables(),
            ProgramBinding::LinearConstraint(b) => b.variables(),
            ProgramBinding::BoundingBoxConstraint(b) => b.variables(),
            ProgramBinding::LinearComplementarityConstraint(b) => b.variables(),
            ProgramBinding::GenericCost(b) => b.variables(),
            ProgramBinding::GenericConstraint(b) => b.variables(),
        }
    }
}
