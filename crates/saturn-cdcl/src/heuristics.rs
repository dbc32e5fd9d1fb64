//! Variable activity scores.

use saturn_base::types::VarId;

/// Cumulative activity per variable.
///
/// Every assignment, forced or decided, bumps its variable by one; there
/// is no decay, so the score is simply an assignment count and the
/// decision heuristic favors the variables most recently churned by the
/// search.
#[derive(Debug, Default)]
pub struct VarActivity {
    scores: Vec<f64>,
}

impl VarActivity {
    /// Creates an empty activity store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grows the score table to cover `var`, seeding new entries at zero.
    pub fn ensure_var(&mut self, var: VarId) {
        let needed = var as usize + 1;
        if self.scores.len() < needed {
            self.scores.resize(needed, 0.0);
        }
    }

    /// Bumps the activity of a variable.
    pub fn bump(&mut self, var: VarId) {
        self.ensure_var(var);
        self.scores[var as usize] += 1.0;
    }

    /// Gets the score for a variable.
    #[must_use]
    pub fn score(&self, var: VarId) -> f64 {
        self.scores.get(var as usize).copied().unwrap_or(0.0)
    }

    /// Resets every score.
    pub fn clear(&mut self) {
        self.scores.clear();
    }
}
