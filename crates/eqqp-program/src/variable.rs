use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a scalar decision variable registered with a [`crate::ProgramModel`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecisionVariable {
    name: String,
    index: usize,
}

impl DecisionVariable {
    pub(crate) fn new(name: impl Into<String>, index: usize) -> Self {
        DecisionVariable { name: name.into(), index }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Global index assigned at registration time
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for DecisionVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
