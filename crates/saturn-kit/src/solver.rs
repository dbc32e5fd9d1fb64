//! High-level solver API.

use saturn_base::Result;
use saturn_cdcl::{CdclConfig, CdclSolver, SatResult};

use crate::result::Model;

/// The main Saturn solver.
///
/// Buffers raw clauses and hands them to a fresh CDCL engine on every
/// `solve`, so the engine's non-incremental nature is never observable
/// from here. After a satisfiable verdict the model stays available
/// through [`Solver::assignment`] until the clause set changes.
pub struct Solver {
    /// Clauses as signed integer literals.
    clauses: Vec<Vec<i64>>,
    /// Engine configuration.
    config: CdclConfig,
    /// Model of the most recent satisfiable verdict.
    model: Option<Model>,
}

impl Solver {
    /// Creates a new solver with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CdclConfig::default())
    }

    /// Creates a new solver with custom configuration.
    #[must_use]
    pub fn with_config(config: CdclConfig) -> Self {
        Self {
            clauses: Vec::new(),
            config,
            model: None,
        }
    }

    /// Adds a clause (disjunction of signed integer literals).
    pub fn add_clause(&mut self, literals: impl IntoIterator<Item = i64>) {
        self.clauses.push(literals.into_iter().collect());
        self.model = None;
    }

    /// Solves the problem.
    pub fn solve(&mut self) -> Result<SatResult> {
        let mut engine = CdclSolver::with_config(self.config.clone());
        for clause in &self.clauses {
            engine.add_clause(clause)?;
        }
        let result = engine.solve();
        self.model = match &result {
            SatResult::Sat(assignment) => Some(Model::new(assignment.clone())),
            SatResult::Unsat => None,
        };
        Ok(result)
    }

    /// The model of the most recent satisfiable verdict, if any.
    #[must_use]
    pub fn assignment(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    /// Clears clauses and any cached model.
    pub fn reset(&mut self) {
        self.clauses.clear();
        self.model = None;
    }

    /// Returns the number of buffered clauses.
    #[must_use]
    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
