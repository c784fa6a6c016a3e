use eqqp_types::{EqQpError, Result, SolverResult};
use nalgebra::DVector;

use crate::binding::{Binding, LinearEqualityConstraint, ProgramBinding, QuadraticCost};
use crate::variable::DecisionVariable;

/// Optimization program: decision variables, registered bindings and the
/// solution written back by a solver.
///
/// minimize   sum of registered costs
/// subject to all registered constraints
#[derive(Debug, Clone, Default)]
pub struct ProgramModel {
    variables: Vec<DecisionVariable>,
    bindings: Vec<ProgramBinding>,
    x_values: Vec<f64>,
    optimal_cost: Option<f64>,
    solver_result: Option<SolverResult>,
}

impl ProgramModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate `count` scalar variables named `prefix(i)`
    pub fn new_continuous_variables(&mut self, count: usize, prefix: &str) -> Vec<DecisionVariable> {
        let start = self.variables.len();
        let vars: Vec<DecisionVariable> = (0..count)
            .map(|i| DecisionVariable::new(format!("{}({})", prefix, i), start + i))
            .collect();

        self.variables.extend(vars.iter().cloned());
        self.x_values.resize(self.variables.len(), f64::NAN);
        vars
    }

    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    pub fn decision_variables(&self) -> &[DecisionVariable] {
        &self.variables
    }

    /// Global index of a variable registered with this program
    pub fn find_decision_variable_index(&self, var: &DecisionVariable) -> Result<usize> {
        match self.variables.get(var.index()) {
            Some(registered) if registered == var => Ok(var.index()),
            _ => Err(EqQpError::VariableNotFound(var.name().to_string())),
        }
    }

    /// Register a binding of any kind, keeping registration order
    pub fn add_binding(&mut self, binding: ProgramBinding) -> Result<()> {
        for var in binding.variables() {
            self.find_decision_variable_index(var)?;
        }
        tracing::trace!(kind = binding.kind_name(), vars = binding.variables().len(), "binding added");
        self.bindings.push(binding);
        Ok(())
    }

    pub fn add_quadratic_cost(
        &mut self,
        cost: QuadraticCost,
        vars: &[DecisionVariable],
    ) -> Result<Binding<QuadraticCost>> {
        let binding = Binding::new(cost, vars.to_vec())?;
        self.add_binding(ProgramBinding::QuadraticCost(binding.clone()))?;
        Ok(binding)
    }

    pub fn add_linear_equality_constraint(
        &mut self,
        constraint: LinearEqualityConstraint,
        vars: &[DecisionVariable],
    ) -> Result<Binding<LinearEqualityConstraint>> {
        let binding = Binding::new(constraint, vars.to_vec())?;
        self.add_binding(ProgramBinding::LinearEqualityConstraint(binding.clone()))?;
        Ok(binding)
    }

    pub fn bindings(&self) -> &[ProgramBinding] {
        &self.bindings
    }

    pub fn quadratic_costs(&self) -> impl Iterator<Item = &Binding<QuadraticCost>> + '_ {
        self.bindings.iter().filter_map(|b| match b {
            ProgramBinding::QuadraticCost(c) => Some(c),
            _ => None,
        })
    }

    pub fn linear_equality_constraints(
        &self,
    ) -> impl Iterator<Item = &Binding<LinearEqualityConstraint>> + '_ {
        self.bindings.iter().filter_map(|b| match b {
            ProgramBinding::LinearEqualityConstraint(c) => Some(c),
            _ => None,
        })
    }

    /// Bindings outside the quadratic-cost / linear-equality subset
    pub fn unsupported_bindings(&self) -> impl Iterator<Item = &ProgramBinding> + '_ {
        self.bindings.iter().filter(|b| !b.is_equality_qp_kind())
    }

    pub fn set_decision_variable_values(&mut self, x: &DVector<f64>) -> Result<()> {
        if x.len() != self.num_vars() {
            return Err(EqQpError::dimension("solution vector", self.num_vars(), x.len()));
        }
        self.x_values.copy_from_slice(x.as_slice());
        Ok(())
    }

    pub fn set_optimal_cost(&mut self, cost: f64) {
        self.optimal_cost = Some(cost);
    }

    pub fn set_solver_result(&mut self, result: SolverResult) {
        self.solver_result = Some(result);
    }

    /// Current variable values; NaN until a solver writes them
    pub fn solution(&self) -> DVector<f64> {
        DVector::from_column_slice(&self.x_values)
    }

    pub fn value_of(&self, var: &DecisionVariable) -> Result<f64> {
        let index = self.find_decision_variable_index(var)?;
        Ok(self.x_values[index])
    }

    pub fn optimal_cost(&self) -> Option<f64> {
        self.optimal_cost
    }

    pub fn solver_result(&self) -> Option<&SolverResult> {
        self.solver_result.as_ref()
    }
}
