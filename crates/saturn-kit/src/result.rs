//! Solver results and model access.

use std::collections::HashMap;

use saturn_base::types::VarId;

/// A satisfying model (variable assignments).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    assignments: HashMap<VarId, bool>,
}

impl Model {
    /// Creates a new model from assignments.
    pub fn new(assignments: impl IntoIterator<Item = (VarId, bool)>) -> Self {
        Self {
            assignments: assignments.into_iter().collect(),
        }
    }

    /// Gets the value of a variable.
    #[must_use]
    pub fn get(&self, var: VarId) -> Option<bool> {
        self.assignments.get(&var).copied()
    }

    /// Returns whether a variable is assigned true.
    #[must_use]
    pub fn is_true(&self, var: VarId) -> bool {
        self.get(var) == Some(true)
    }

    /// Returns all assignments.
    #[must_use]
    pub fn assignments(&self) -> &HashMap<VarId, bool> {
        &self.assignments
    }

    /// Returns the number of assigned variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns whether the model is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut vars: Vec<_> = self.assignments.iter().collect();
        vars.sort_by_key(|(var, _)| **var);

        write!(f, "[")?;
        for (i, (var, value)) in vars.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "x{} = {}", var, if *value { 1 } else { 0 })?;
        }
        write!(f, "]")
    }
}
