//! Conflict analysis: first-UIP resolution over the implication trail.

use saturn_base::types::{Literal, VarId};

use crate::clause_db::{ClauseDatabase, ClauseIdx};
use crate::trail::Trail;

/// Outcome of analyzing a conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    /// The conflict arose at decision level zero: the formula is
    /// unsatisfiable.
    TopLevel,
    /// A learned clause, asserting literal first, and the level to
    /// backjump to. After backtracking the clause is unit on exactly
    /// that first literal.
    Backjump {
        literals: Vec<Literal>,
        level: usize,
    },
}

/// First-UIP conflict analyzer.
///
/// Walks the trail backward through the conflict level, resolving the
/// current clause against the reason of the most recent variable still in
/// it, until a single conflict-level literal remains. Every step is a
/// resolution, so the learned clause is entailed by the clause store.
#[derive(Debug, Default)]
pub struct ConflictAnalyzer {
    seen: Vec<bool>,
}

impl ConflictAnalyzer {
    /// Creates a new conflict analyzer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzes the falsified clause `conflict` at `decision_level`.
    pub fn analyze(
        &mut self,
        clauses: &ClauseDatabase,
        trail: &Trail,
        conflict: ClauseIdx,
        decision_level: usize,
    ) -> Analysis {
        if decision_level == 0 {
            return Analysis::TopLevel;
        }

        let entries = trail.entries();
        // Literals of the learned clause assigned below the conflict level.
        let mut lower: Vec<Literal> = Vec::new();
        // Marked conflict-level variables not yet resolved away.
        let mut open = 0usize;
        let mut touched: Vec<VarId> = Vec::new();
        let mut idx = entries.len();
        let mut pivot: Option<VarId> = None;
        let mut clause_lits: &[Literal] = &clauses[conflict].literals;

        let uip = loop {
            for &q in clause_lits {
                let var = q.var();
                if pivot == Some(var) {
                    continue;
                }
                let Some(level) = trail.level_of(var) else {
                    continue;
                };
                // Literals false since level 0 stay false on every branch
                // and are dropped from the learned clause.
                if level == 0 || self.is_seen(var) {
                    continue;
                }
                self.mark(var);
                touched.push(var);
                if level >= decision_level {
                    open += 1;
                } else {
                    lower.push(q);
                }
            }

            let entry = loop {
                idx -= 1;
                let e = entries[idx];
                if self.is_seen(e.lit.var()) && e.level >= decision_level {
                    break e;
                }
            };
            self.unmark(entry.lit.var());
            open -= 1;
            if open == 0 {
                break entry.lit;
            }
            match entry.reason {
                Some(reason) => {
                    pivot = Some(entry.lit.var());
                    clause_lits = &clauses[reason].literals;
                }
                // The decision is the earliest entry of its level, so by
                // the time the walk reaches it every forced conflict-level
                // variable has already been resolved away.
                None => break entry.lit,
            }
        };

        for var in touched {
            self.unmark(var);
        }

        let level = lower
            .iter()
            .filter_map(|lit| trail.level_of(lit.var()))
            .max()
            .unwrap_or(0);
        let mut literals = Vec::with_capacity(lower.len() + 1);
        literals.push(!uip);
        literals.append(&mut lower);

        Analysis::Backjump { literals, level }
    }

    fn is_seen(&self, var: VarId) -> bool {
        self.seen.get(var as usize).copied().unwrap_or(false)
    }

    fn mark(&mut self, var: VarId) {
        let i = var as usize;
        if self.seen.len() <= i {
            self.seen.resize(i + 1, false);
        }
        self.seen[i] = true;
    }

    fn unmark(&mut self, var: VarId) {
        if let Some(flag) = self.seen.get_mut(var as usize) {
            *flag = false;
        }
    }
}
