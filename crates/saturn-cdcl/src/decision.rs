//! Decision phase: branching variable selection.

use saturn_base::types::{Literal, VarId};

use crate::heuristics::VarActivity;
use crate::trail::Trail;

/// Chooses the next branching literal.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    positive_polarity: bool,
}

impl DecisionEngine {
    /// Creates a decision engine branching with the given polarity.
    #[must_use]
    pub fn new(positive_polarity: bool) -> Self {
        Self { positive_polarity }
    }

    /// Picks the unassigned variable with the highest activity.
    ///
    /// Ties go to the variable mentioned first; `vars` is the roster of
    /// known variables in first-mention order. Returns `None` when every
    /// variable is assigned, which signals a complete model.
    #[must_use]
    pub fn pick(&self, vars: &[VarId], trail: &Trail, activity: &VarActivity) -> Option<Literal> {
        let mut best: Option<VarId> = None;
        for &var in vars {
            if trail.is_assigned(var) {
                continue;
            }
            match best {
                Some(b) if activity.score(var) <= activity.score(b) => {}
                _ => best = Some(var),
            }
        }
        best.map(|var| Literal::new(var, !self.positive_polarity))
    }
}
