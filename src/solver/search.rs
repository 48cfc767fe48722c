use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::Result,
    solver::{
        catalog::ConstraintCatalog,
        heuristics::variable::VariableSelectionHeuristic,
        propagators::{run_to_fixed_point, Propagation, Propagator},
        store::DomainStore,
    },
};

/// Work counters gathered over one solve, per propagator and overall.
#[derive(Debug, Clone, Default)]
pub struct PerPropagatorStats {
    pub passes: u64,
    pub prunings: u64,
    pub time_spent_micros: u64,
}

#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub backtracks: u64,
    pub propagator_stats: HashMap<usize, PerPropagatorStats>,
}

/// Depth-first backtracking search interleaved with propagation.
///
/// Each node of the search tree runs the propagator fixed-point loop, then
/// branches on the cell chosen by the variable heuristic, trying candidates
/// in ascending digit order. Every branch works on its own fork of the
/// domain store, so failure recovery is simply returning to the caller — no
/// undo bookkeeping exists anywhere.
pub struct BacktrackingSearch {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
}

impl BacktrackingSearch {
    pub fn new(variable_heuristic: Box<dyn VariableSelectionHeuristic>) -> Self {
        Self { variable_heuristic }
    }

    /// Attempts to solve the problem described by `catalog` from the given
    /// initial store.
    ///
    /// Returns `Ok((Some(store), stats))` with a fully-assigned store on
    /// success, `Ok((None, stats))` when the search space is exhausted (the
    /// puzzle is provably unsolvable), and `Err` only for structural
    /// problems in the puzzle definition.
    pub fn solve(
        &self,
        propagators: &[Box<dyn Propagator>],
        catalog: &ConstraintCatalog,
        initial_store: DomainStore,
    ) -> Result<(Option<DomainStore>, SearchStats)> {
        let mut stats = SearchStats::default();

        let store = match run_to_fixed_point(propagators, catalog, initial_store, &mut stats)? {
            Propagation::Contradiction(_) => return Ok((None, stats)),
            Propagation::Stable(store) => store,
        };
        if store.is_complete() {
            return Ok((Some(store), stats));
        }

        self.search(propagators, catalog, store, stats)
    }

    fn search(
        &self,
        propagators: &[Box<dyn Propagator>],
        catalog: &ConstraintCatalog,
        store: DomainStore,
        mut stats: SearchStats,
    ) -> Result<(Option<DomainStore>, SearchStats)> {
        stats.nodes_visited += 1;

        if store.is_complete() {
            return Ok((Some(store), stats));
        }

        let Some(branch_cell) = self.variable_heuristic.select_variable(&store) else {
            // An incomplete store with no branchable cell must hold an empty
            // domain somewhere, so this branch is a dead end.
            return Ok((None, stats));
        };

        let domain = store.domain(branch_cell)?;
        for digit in domain.iter() {
            debug!(cell = %branch_cell, digit, "branching");
            let guess = store.assign(branch_cell, digit);

            match run_to_fixed_point(propagators, catalog, guess, &mut stats)? {
                Propagation::Stable(propagated) => {
                    let (found, new_stats) =
                        self.search(propagators, catalog, propagated, stats)?;
                    stats = new_stats;
                    if found.is_some() {
                        return Ok((found, stats));
                    }
                }
                Propagation::Contradiction(_) => {}
            }
            stats.backtracks += 1;
        }

        // Every candidate for this cell failed; the parent must try its
        // next candidate.
        Ok((None, stats))
    }
}
