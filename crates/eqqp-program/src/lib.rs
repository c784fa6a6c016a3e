mod variable;
mod binding;
mod program;

pub use variable::DecisionVariable;
pub use binding::{
    Binding, BindingEvaluator, BoundingBoxConstraint, GenericConstraint, GenericCost,
    LinearComplementarityConstraint, LinearConstraint, LinearEqualityConstraint, ProgramBinding,
    QuadraticCost,
};
pub use program::ProgramModel;
