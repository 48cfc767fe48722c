use im::OrdMap;

use crate::{
    error::{Result, SolverError},
    solver::{cell::CellId, domain::DigitSet},
};

/// Represents a single, immutable state in the solver's search space.
///
/// A `DomainStore` maps every *value* cell of a puzzle to its current
/// candidate set. Blocked and clue cells never appear here; they belong to
/// the static layout. Because the map is a persistent structure, forking the
/// store at a branch point is a cheap structural clone, and no branch can
/// observe another branch's pruning — the isolation that makes backtracking
/// correct without any explicit undo.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DomainStore {
    domains: OrdMap<CellId, DigitSet>,
}

impl DomainStore {
    pub fn new(domains: OrdMap<CellId, DigitSet>) -> Self {
        Self { domains }
    }

    /// Looks up a cell's domain, or `None` if the cell is not tracked.
    pub fn get(&self, cell: CellId) -> Option<DigitSet> {
        self.domains.get(&cell).copied()
    }

    /// Looks up a cell's domain, failing if the catalog references a cell
    /// the store does not track.
    pub fn domain(&self, cell: CellId) -> Result<DigitSet> {
        self.get(cell)
            .ok_or_else(|| SolverError::MissingDomain(cell).into())
    }

    /// Returns a new store with `cell`'s domain replaced.
    pub fn with_domain(&self, cell: CellId, domain: DigitSet) -> Self {
        Self {
            domains: self.domains.update(cell, domain),
        }
    }

    /// Returns a new store with `cell` fixed to a single digit.
    pub fn assign(&self, cell: CellId, digit: u8) -> Self {
        self.with_domain(cell, DigitSet::singleton(digit))
    }

    /// True when every tracked cell is down to exactly one candidate.
    pub fn is_complete(&self) -> bool {
        self.domains.values().all(|domain| domain.is_singleton())
    }

    /// Iterates all cells with their domains, in cell order.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, DigitSet)> + '_ {
        self.domains.iter().map(|(&cell, &domain)| (cell, domain))
    }

    /// Number of tracked cells.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// The underlying persistent map, for bulk transforms in propagators.
    pub fn domains(&self) -> &OrdMap<CellId, DigitSet> {
        &self.domains
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::DomainStore;
    use crate::solver::{cell::CellId, domain::DigitSet};

    #[test]
    fn forked_store_does_not_leak_into_parent() {
        let a = CellId::new(0, 0);
        let parent = DomainStore::default().with_domain(a, DigitSet::all());
        let child = parent.assign(a, 3);

        assert_eq!(parent.get(a), Some(DigitSet::all()));
        assert_eq!(child.get(a), Some(DigitSet::singleton(3)));
    }

    #[test]
    fn completeness_requires_all_singletons() {
        let a = CellId::new(0, 0);
        let b = CellId::new(1, 0);
        let store = DomainStore::default()
            .with_domain(a, DigitSet::singleton(1))
            .with_domain(b, [2, 3].into_iter().collect());

        assert!(!store.is_complete());
        assert!(store.assign(b, 2).is_complete());
    }

    #[test]
    fn missing_cell_is_an_error() {
        let store = DomainStore::default();
        assert!(store.domain(CellId::new(4, 4)).is_err());
    }

    #[test]
    fn cells_iterate_in_cell_order() {
        let store = DomainStore::default()
            .with_domain(CellId::new(1, 0), DigitSet::all())
            .with_domain(CellId::new(0, 0), DigitSet::all());
        let order: Vec<_> = store.cells().map(|(cell, _)| cell).collect();
        assert_eq!(order, vec![CellId::new(0, 0), CellId::new(1, 0)]);
    }
}
