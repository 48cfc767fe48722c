//! The Sudoku frontend: fixed 9x9 geometry, all-different constraints over
//! rows, columns and boxes, and naked-pair elimination on top of plain
//! assigned-value pruning.

use crate::{
    error::Result,
    solver::{
        catalog::{ConstraintCatalog, GroupConstraint},
        cell::CellId,
        domain::DigitSet,
        heuristics::variable::MinimumRemainingValuesHeuristic,
        propagators::{
            assigned_values::AssignedValuesPropagator, naked_pairs::NakedPairsPropagator,
            Propagator,
        },
        search::{BacktrackingSearch, SearchStats},
        store::DomainStore,
    },
};

/// A board as digits 1-9, with 0 marking an unknown cell.
pub type Grid = [[u8; 9]; 9];

/// Builds the 27 all-different groups: 9 rows, 9 columns, 9 boxes.
pub fn catalog() -> ConstraintCatalog {
    let mut groups = Vec::with_capacity(27);

    for row in 0..9 {
        groups.push(GroupConstraint::new(
            (0..9).map(|col| CellId::new(col, row)).collect(),
        ));
    }
    for col in 0..9 {
        groups.push(GroupConstraint::new(
            (0..9).map(|row| CellId::new(col, row)).collect(),
        ));
    }
    for box_row in 0..3 {
        for box_col in 0..3 {
            let mut cells = Vec::with_capacity(9);
            for row in 0..3 {
                for col in 0..3 {
                    cells.push(CellId::new(box_col * 3 + col, box_row * 3 + row));
                }
            }
            groups.push(GroupConstraint::new(cells));
        }
    }

    ConstraintCatalog::new(groups, Vec::new())
}

/// The propagator list for Sudoku rules.
pub fn propagators() -> Vec<Box<dyn Propagator>> {
    vec![
        Box::new(AssignedValuesPropagator),
        Box::new(NakedPairsPropagator),
    ]
}

/// A store with every given pinned to a singleton and every unknown open.
pub fn initial_store(grid: &Grid) -> DomainStore {
    let mut store = DomainStore::default();
    for (row, row_values) in grid.iter().enumerate() {
        for (col, &value) in row_values.iter().enumerate() {
            let cell = CellId::new(col as u8, row as u8);
            let domain = if value == 0 {
                DigitSet::all()
            } else {
                DigitSet::singleton(value)
            };
            store = store.with_domain(cell, domain);
        }
    }
    store
}

/// Converts a terminal store back to a grid; unresolved cells become 0.
pub fn store_to_grid(store: &DomainStore) -> Grid {
    let mut grid = [[0; 9]; 9];
    for (cell, domain) in store.cells() {
        if let Some(value) = domain.as_singleton() {
            grid[cell.row as usize][cell.col as usize] = value;
        }
    }
    grid
}

/// Solves a Sudoku grid, returning the first solution found or `None` when
/// the givens admit no solution.
pub fn solve(grid: &Grid) -> Result<(Option<Grid>, SearchStats)> {
    let catalog = catalog();
    let propagators = propagators();
    let search = BacktrackingSearch::new(Box::new(MinimumRemainingValuesHeuristic));

    let (solution, stats) = search.solve(&propagators, &catalog, initial_store(grid))?;
    Ok((solution.map(|store| store_to_grid(&store)), stats))
}
