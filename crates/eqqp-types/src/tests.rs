// Tests for shared types

#[cfg(test)]
mod tests {
    use crate::*;
    use proptest::prelude::*;

    #[test]
    fn test_solver_id_display_and_eq() {
        let a = SolverId::new("Equality constrained QP");
        let b = SolverId::new("Equality constrained QP");

        assert_eq!(a, b);
        assert_eq!(a.to_string(), "Equality constrained QP");
        assert_eq!(a.name(), "Equality constrained QP");
        assert_ne!(a, SolverId::new("IPOPT"));
    }

    #[test]
    fn test_solver_result_roundtrip_serialization() {
        let result = SolverResult::new(SolverId::new("Equality constrained QP"), 0);

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: SolverResult = serde_json::from_str(&json).unwrap();

        assert_eq!(result, deserialized);
    }

    #[test]
    fn test_only_solution_found_is_success() {
        assert!(SolutionResult::SolutionFound.is_success());
        assert!(!SolutionResult::InvalidInput.is_success());
        assert!(!SolutionResult::InfeasibleConstraints.is_success());
        assert!(!SolutionResult::UnboundedCost.is_success());
        assert!(!SolutionResult::UnknownError.is_success());
    }

    #[test]
    fn test_error_messages() {
        let err = EqQpError::UnsupportedBinding { kind: "BoundingBoxConstraint".to_string() };
        assert_eq!(err.to_string(), "Unsupported binding kind: BoundingBoxConstraint");

        let err = EqQpError::dimension("Q", "2x2", "3x3");
        assert_eq!(err.to_string(), "Dimension mismatch in Q: expected 2x2, got 3x3");
    }

    proptest! {
        #[test]
        fn prop_solver_id_preserves_name(name in "[A-Za-z ]{1,32}") {
            let id = SolverId::new(name.clone());
            prop_assert_eq!(id.name(), name.as_str());
            prop_assert_eq!(id.clone(), id);
        }
    }
}
