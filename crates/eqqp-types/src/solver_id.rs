use serde::{Deserialize, Serialize};
use std::fmt;

/// Name identifying a solver implementation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SolverId(String);

impl SolverId {
    pub fn new(name: impl Into<String>) -> Self {
        SolverId(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SolverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
