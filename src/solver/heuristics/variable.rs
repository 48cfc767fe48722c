//! Strategies for selecting which cell to branch on next during search.

use crate::solver::{cell::CellId, store::DomainStore};

/// A trait for variable-selection heuristics.
///
/// Implementors choose which unassigned cell the solver should branch on
/// next. A good choice can dramatically shrink the search tree; none of the
/// choices affect which solutions exist.
pub trait VariableSelectionHeuristic {
    /// Selects the next cell to assign.
    ///
    /// Returns `None` when every cell is already down to a single candidate.
    fn select_variable(&self, store: &DomainStore) -> Option<CellId>;
}

/// Selects the first unassigned cell in cell order.
///
/// A basic, deterministic baseline.
pub struct SelectFirstHeuristic;

impl VariableSelectionHeuristic for SelectFirstHeuristic {
    fn select_variable(&self, store: &DomainStore) -> Option<CellId> {
        store
            .cells()
            .find(|(_, domain)| domain.len() > 1)
            .map(|(cell, _)| cell)
    }
}

/// Selects the unassigned cell with the Minimum Remaining Values (MRV).
///
/// A "fail-first" strategy: branching on the most constrained cell prunes
/// the search space fastest. Ties go to the cell that comes first in cell
/// order, which keeps repeated runs identical.
pub struct MinimumRemainingValuesHeuristic;

impl VariableSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_variable(&self, store: &DomainStore) -> Option<CellId> {
        store
            .cells()
            .filter(|(_, domain)| domain.len() > 1)
            .min_by_key(|&(cell, domain)| (domain.len(), cell))
            .map(|(cell, _)| cell)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{MinimumRemainingValuesHeuristic, SelectFirstHeuristic, VariableSelectionHeuristic};
    use crate::solver::{cell::CellId, domain::DigitSet, store::DomainStore};

    fn store() -> DomainStore {
        DomainStore::default()
            .with_domain(CellId::new(0, 0), DigitSet::singleton(1))
            .with_domain(CellId::new(1, 0), DigitSet::all())
            .with_domain(CellId::new(2, 0), [3, 4].into_iter().collect())
    }

    #[test]
    fn select_first_skips_assigned_cells() {
        let picked = SelectFirstHeuristic.select_variable(&store());
        assert_eq!(picked, Some(CellId::new(1, 0)));
    }

    #[test]
    fn mrv_prefers_the_smallest_domain() {
        let picked = MinimumRemainingValuesHeuristic.select_variable(&store());
        assert_eq!(picked, Some(CellId::new(2, 0)));
    }

    #[test]
    fn mrv_breaks_ties_by_cell_order() {
        let tied = DomainStore::default()
            .with_domain(CellId::new(5, 0), [1, 2].into_iter().collect())
            .with_domain(CellId::new(3, 0), [3, 4].into_iter().collect());
        let picked = MinimumRemainingValuesHeuristic.select_variable(&tied);
        assert_eq!(picked, Some(CellId::new(3, 0)));
    }

    #[test]
    fn complete_store_yields_nothing() {
        let complete =
            DomainStore::default().with_domain(CellId::new(0, 0), DigitSet::singleton(9));
        assert_eq!(
            MinimumRemainingValuesHeuristic.select_variable(&complete),
            None
        );
        assert_eq!(SelectFirstHeuristic.select_variable(&complete), None);
    }
}
