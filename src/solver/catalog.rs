use std::collections::BTreeMap;

use itertools::Itertools;

use crate::solver::cell::CellId;

/// A group of cells that must hold pairwise-distinct values.
///
/// Rows, columns and boxes for Sudoku; maximal contiguous runs for Kakuro.
#[derive(Debug, Clone)]
pub struct GroupConstraint {
    pub cells: Vec<CellId>,
}

impl GroupConstraint {
    pub fn new(cells: Vec<CellId>) -> Self {
        Self { cells }
    }
}

/// A run of cells whose values must be distinct and sum to a clue target.
///
/// `tuples` holds every ordered assignment of distinct digits matching the
/// run's length and target. Order matters: `tuples[k][i]` is the value the
/// k-th candidate assignment gives to `cells[i]`, so a tuple encodes a full
/// positional assignment with no extra matching step. An unachievable target
/// simply yields an empty tuple set, which propagation turns into a dead end.
#[derive(Debug, Clone)]
pub struct SumConstraint {
    pub clue: CellId,
    pub target: u8,
    pub cells: Vec<CellId>,
    pub tuples: Vec<Vec<u8>>,
}

impl SumConstraint {
    pub fn new(clue: CellId, target: u8, cells: Vec<CellId>) -> Self {
        let tuples = sum_tuples(target, cells.len());
        Self {
            clue,
            target,
            cells,
            tuples,
        }
    }
}

/// All ordered tuples of `len` distinct digits 1-9 summing to `target`.
pub fn sum_tuples(target: u8, len: usize) -> Vec<Vec<u8>> {
    (1u8..=9)
        .permutations(len)
        .filter(|tuple| tuple.iter().map(|&d| u32::from(d)).sum::<u32>() == u32::from(target))
        .collect()
}

/// The static constraint structure of a puzzle.
///
/// Built once from the board geometry and never mutated afterwards; the
/// propagators and the search engine receive it by shared reference. The
/// membership index maps each value cell to the sum constraints it belongs
/// to, so sum propagation only visits the constraints touching a cell.
#[derive(Debug, Clone)]
pub struct ConstraintCatalog {
    groups: Vec<GroupConstraint>,
    sums: Vec<SumConstraint>,
    memberships: BTreeMap<CellId, Vec<usize>>,
}

impl ConstraintCatalog {
    pub fn new(groups: Vec<GroupConstraint>, sums: Vec<SumConstraint>) -> Self {
        let mut memberships: BTreeMap<CellId, Vec<usize>> = BTreeMap::new();
        for (id, sum) in sums.iter().enumerate() {
            for &cell in &sum.cells {
                memberships.entry(cell).or_default().push(id);
            }
        }
        Self {
            groups,
            sums,
            memberships,
        }
    }

    pub fn groups(&self) -> &[GroupConstraint] {
        &self.groups
    }

    pub fn sums(&self) -> &[SumConstraint] {
        &self.sums
    }

    /// Ids of the sum constraints `cell` participates in.
    pub fn sums_for(&self, cell: CellId) -> &[usize] {
        self.memberships
            .get(&cell)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Cell-to-sum-constraint index, in cell order.
    pub fn memberships(&self) -> &BTreeMap<CellId, Vec<usize>> {
        &self.memberships
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{sum_tuples, ConstraintCatalog, GroupConstraint, SumConstraint};
    use crate::solver::cell::CellId;

    #[test]
    fn two_cell_run_summing_to_three() {
        assert_eq!(sum_tuples(3, 2), vec![vec![1, 2], vec![2, 1]]);
    }

    #[test]
    fn unachievable_target_yields_no_tuples() {
        // Two distinct digits cannot exceed 9 + 8.
        assert!(sum_tuples(19, 2).is_empty());
        // Nor can they fall below 1 + 2.
        assert!(sum_tuples(2, 2).is_empty());
    }

    #[test]
    fn single_cell_run_is_the_trivial_singleton() {
        assert_eq!(sum_tuples(5, 1), vec![vec![5]]);
        assert!(sum_tuples(10, 1).is_empty());
    }

    #[test]
    fn tuples_require_distinct_digits() {
        // 2 + 2 would sum to 4 but repeats a digit.
        assert_eq!(sum_tuples(4, 2), vec![vec![1, 3], vec![3, 1]]);
    }

    #[test]
    fn arity_beyond_nine_digits_is_empty() {
        assert!(sum_tuples(45, 10).is_empty());
    }

    #[test]
    fn membership_index_covers_all_run_cells() {
        let a = CellId::new(1, 1);
        let b = CellId::new(2, 1);
        let c = CellId::new(1, 2);
        let row = SumConstraint::new(CellId::new(0, 1), 3, vec![a, b]);
        let col = SumConstraint::new(CellId::new(1, 0), 4, vec![a, c]);
        let catalog = ConstraintCatalog::new(
            vec![GroupConstraint::new(vec![a, b])],
            vec![row, col],
        );

        assert_eq!(catalog.sums_for(a), &[0, 1]);
        assert_eq!(catalog.sums_for(b), &[0]);
        assert_eq!(catalog.sums_for(c), &[1]);
        assert!(catalog.sums_for(CellId::new(8, 8)).is_empty());
    }
}
