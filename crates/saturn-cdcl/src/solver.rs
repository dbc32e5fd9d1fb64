//! Core CDCL solver implementation.

use std::collections::HashMap;

use saturn_base::types::{Literal, VarId};
use saturn_base::{Error, Result};

use crate::bcp::{PropagationQueue, WatchIndex};
use crate::clause_db::{ClauseDatabase, ClauseIdx, ClauseStatus};
use crate::conflict::{Analysis, ConflictAnalyzer};
use crate::decision::DecisionEngine;
use crate::heuristics::VarActivity;
use crate::trail::Trail;

/// The result of a SAT solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatResult {
    /// Satisfiable, with an assignment for every mentioned variable.
    Sat(HashMap<VarId, bool>),
    /// Unsatisfiable.
    Unsat,
}

impl SatResult {
    /// Returns whether this is a satisfiable verdict.
    #[must_use]
    pub fn is_sat(&self) -> bool {
        matches!(self, Self::Sat(_))
    }
}

/// Configuration for the CDCL solver.
#[derive(Debug, Clone)]
pub struct CdclConfig {
    /// Branch polarity for decisions (true = positive literal first).
    pub positive_polarity: bool,
    /// Deduplicate repeated literals when a clause is added.
    pub dedup_literals: bool,
}

impl Default for CdclConfig {
    fn default() -> Self {
        Self {
            positive_polarity: true,
            dedup_literals: true,
        }
    }
}

/// Solver statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    /// Number of decisions made.
    pub decisions: u64,
    /// Number of conflicts encountered.
    pub conflicts: u64,
    /// Number of forced assignments.
    pub propagations: u64,
    /// Number of learned clauses.
    pub learned_clauses: u64,
}

/// The main CDCL solver.
///
/// Clauses are fed in as slices of signed integers; `solve` then runs the
/// propagate / decide / analyze / backjump loop until a verdict falls out.
/// All state is per-instance and single-threaded; `reset` returns the
/// instance to its freshly constructed shape.
pub struct CdclSolver {
    clauses: ClauseDatabase,
    trail: Trail,
    watches: WatchIndex,
    queue: PropagationQueue,
    activity: VarActivity,
    decision: DecisionEngine,
    analyzer: ConflictAnalyzer,
    /// Distinct variables in first-mention order.
    vars: Vec<VarId>,
    /// Dense membership mirror of `vars`.
    known: Vec<bool>,
    decision_level: usize,
    config: CdclConfig,
    stats: SolverStats,
}

impl CdclSolver {
    /// Creates an empty solver at decision level zero.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CdclConfig::default())
    }

    /// Creates an empty solver with custom configuration.
    #[must_use]
    pub fn with_config(config: CdclConfig) -> Self {
        Self {
            clauses: ClauseDatabase::new(),
            trail: Trail::new(),
            watches: WatchIndex::new(),
            queue: PropagationQueue::new(),
            activity: VarActivity::new(),
            decision: DecisionEngine::new(config.positive_polarity),
            analyzer: ConflictAnalyzer::new(),
            vars: Vec::new(),
            known: Vec::new(),
            decision_level: 0,
            config,
            stats: SolverStats::default(),
        }
    }

    /// Appends a clause given as signed integers (sign = polarity,
    /// magnitude = variable id).
    ///
    /// Zero literals are dropped as DIMACS-style terminators; a raw
    /// clause left empty after that is skipped entirely. Repeated
    /// literals are deduplicated when the configuration says so.
    pub fn add_clause(&mut self, literals: &[i64]) -> Result<()> {
        let mut parsed: Vec<Literal> = Vec::with_capacity(literals.len());
        for &raw in literals {
            if raw == 0 {
                continue;
            }
            let var = raw
                .checked_abs()
                .ok_or(Error::VariableOutOfRange(raw))? as VarId;
            let lit = Literal::new(var, raw < 0);
            if self.config.dedup_literals && parsed.contains(&lit) {
                continue;
            }
            parsed.push(lit);
        }
        if parsed.is_empty() {
            return Ok(());
        }

        self.register_vars(&parsed);
        let idx = self.clauses.add_original(parsed);
        self.watches.watch_clause(&self.clauses[idx].literals, idx);
        Ok(())
    }

    fn register_vars(&mut self, literals: &[Literal]) {
        for lit in literals {
            let var = lit.var();
            let slot = var as usize;
            if self.known.len() <= slot {
                self.known.resize(slot + 1, false);
            }
            if !self.known[slot] {
                self.known[slot] = true;
                self.vars.push(var);
                self.trail.ensure_var(var);
                self.activity.ensure_var(var);
            }
        }
    }

    /// Runs the CDCL search to a verdict.
    pub fn solve(&mut self) -> SatResult {
        self.decision_level = 0;
        if self.propagate().is_some() {
            tracing::debug!("conflict during root propagation, formula is unsatisfiable");
            return SatResult::Unsat;
        }

        loop {
            let Some(lit) = self.decision.pick(&self.vars, &self.trail, &self.activity) else {
                tracing::debug!(
                    "sat after {} decisions, {} conflicts, {} propagations",
                    self.stats.decisions,
                    self.stats.conflicts,
                    self.stats.propagations
                );
                return SatResult::Sat(self.assignment());
            };
            self.stats.decisions += 1;
            self.decision_level += 1;
            self.assign(lit, None);

            while let Some(conflict) = self.propagate() {
                self.stats.conflicts += 1;
                let analysis =
                    self.analyzer
                        .analyze(&self.clauses, &self.trail, conflict, self.decision_level);
                match analysis {
                    Analysis::TopLevel => {
                        tracing::debug!(
                            "unsat after {} conflicts, {} learned clauses",
                            self.stats.conflicts,
                            self.stats.learned_clauses
                        );
                        return SatResult::Unsat;
                    }
                    Analysis::Backjump { literals, level } => {
                        tracing::trace!(
                            "learned {}-literal clause, backjumping {} -> {}",
                            literals.len(),
                            self.decision_level,
                            level
                        );
                        let idx = self.clauses.add_learned(literals);
                        self.watches.watch_clause(&self.clauses[idx].literals, idx);
                        self.stats.learned_clauses += 1;

                        self.backtrack(level);
                        // The learned clause is unit now; assert its first
                        // literal with the clause as reason.
                        let asserting = self.clauses[idx].literals[0];
                        self.assign(asserting, Some(idx));
                    }
                }
            }
        }
    }

    /// Derives all forced assignments until fixpoint or conflict.
    ///
    /// Newly true literals are drained through the watch index first;
    /// an insertion-order scan of the clause store then either certifies
    /// the fixpoint (no unit, no falsified clause) or yields the next
    /// unit to assign. The scan keeps the fixpoint independent of watch
    /// bookkeeping: a unit clause is never missed.
    fn propagate(&mut self) -> Option<ClauseIdx> {
        loop {
            while let Some(lit) = self.queue.dequeue() {
                let watchers = self.watches.watchers((!lit).code()).to_vec();
                for idx in watchers {
                    match self.clauses[idx].status(&self.trail) {
                        ClauseStatus::Falsified => return Some(idx),
                        ClauseStatus::Unit(unit) => self.assign(unit, Some(idx)),
                        ClauseStatus::Satisfied | ClauseStatus::Undetermined => {}
                    }
                }
            }

            let mut progressed = false;
            for idx in 0..self.clauses.len() {
                match self.clauses[idx].status(&self.trail) {
                    ClauseStatus::Falsified => return Some(idx),
                    ClauseStatus::Unit(unit) => {
                        self.assign(unit, Some(idx));
                        progressed = true;
                        break;
                    }
                    ClauseStatus::Satisfied | ClauseStatus::Undetermined => {}
                }
            }
            if !progressed {
                return None;
            }
        }
    }

    /// Records an assignment at the current decision level.
    fn assign(&mut self, lit: Literal, reason: Option<ClauseIdx>) {
        self.trail.assign(lit, self.decision_level, reason);
        self.activity.bump(lit.var());
        self.queue.enqueue(lit);
        if reason.is_some() {
            self.stats.propagations += 1;
        }
    }

    /// Undoes every assignment above `level` and makes it current.
    fn backtrack(&mut self, level: usize) {
        self.trail.backtrack(level);
        self.queue.clear();
        self.decision_level = level;
    }

    /// The current assignment, for every mentioned variable that has one.
    ///
    /// After a `Sat` verdict this covers every variable appearing in any
    /// clause.
    #[must_use]
    pub fn assignment(&self) -> HashMap<VarId, bool> {
        self.vars
            .iter()
            .filter_map(|&var| self.trail.value_of(var).map(|value| (var, value)))
            .collect()
    }

    /// Clears all state back to construction.
    pub fn reset(&mut self) {
        self.clauses.clear();
        self.trail.clear();
        self.watches.clear();
        self.queue.clear();
        self.activity.clear();
        self.vars.clear();
        self.known.clear();
        self.decision_level = 0;
        self.stats = SolverStats::default();
    }

    /// Returns the current decision level.
    #[must_use]
    pub fn decision_level(&self) -> usize {
        self.decision_level
    }

    /// Returns the clause database (originals and learned).
    #[must_use]
    pub fn clauses(&self) -> &ClauseDatabase {
        &self.clauses
    }

    /// Returns the assignment trail.
    #[must_use]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Number of distinct variables mentioned so far.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    /// Returns solver statistics.
    #[must_use]
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }
}

impl Default for CdclSolver {
    fn default() -> Self {
        Self::new()
    }
}
