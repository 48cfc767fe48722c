//! The Kakuro frontend: a 9x9 board of blocked, clue and value cells.
//!
//! Each maximal horizontal or vertical run of value cells forms one
//! constraint: the digits must be distinct and add up to the target carried
//! by the clue cell immediately to the run's left (or above it). Inference
//! combines sum-combination crossing, fixed-value elimination and arc
//! consistency over the admissible tuples.

use std::collections::BTreeMap;

use crate::{
    error::{Result, SolverError},
    solver::{
        catalog::{ConstraintCatalog, GroupConstraint, SumConstraint},
        cell::{Axis, Cell, CellId},
        domain::DigitSet,
        heuristics::variable::MinimumRemainingValuesHeuristic,
        propagators::{
            arc_consistency::ArcConsistencyPropagator, assigned_values::AssignedValuesPropagator,
            sum_crossing::SumCrossingPropagator, Propagator,
        },
        search::{BacktrackingSearch, SearchStats},
        store::DomainStore,
    },
};

/// The fixed board geometry shared by every run of the puzzle.
pub const BOARD_SIZE: u8 = 9;

/// A Kakuro board layout: which cells are blocked, which carry clues and
/// which are open for digits. The layout never changes during solving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Layout {
    /// A layout with every cell blocked; place clues and value cells with
    /// [`Layout::set`].
    pub fn blocked() -> Self {
        Self {
            cells: [[Cell::Blocked; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    pub fn set(&mut self, cell: CellId, kind: Cell) {
        self.cells[cell.row as usize][cell.col as usize] = kind;
    }

    pub fn get(&self, cell: CellId) -> Cell {
        self.cells[cell.row as usize][cell.col as usize]
    }

    fn is_value(&self, col: u8, row: u8) -> bool {
        matches!(self.cells[row as usize][col as usize], Cell::Value)
    }

    /// All value cells, in column-major-within-row order.
    pub fn value_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE)
                .filter(move |&col| self.is_value(col, row))
                .map(move |col| CellId::new(col, row))
        })
    }
}

/// Looks up the clue target governing the run that starts at `start`.
///
/// `neighbour` is the cell just before the run; it must be a clue cell and
/// must carry a target on the matching axis.
fn clue_target(
    layout: &Layout,
    neighbour: Option<CellId>,
    start: CellId,
    axis: Axis,
) -> Result<(CellId, u8)> {
    let clue_cell = neighbour.ok_or(SolverError::MissingClue(start))?;
    match layout.get(clue_cell) {
        Cell::Clue { right, down } => {
            let target = match axis {
                Axis::Right => right,
                Axis::Down => down,
            };
            let target = target.ok_or(SolverError::MissingClueTarget(clue_cell, axis))?;
            Ok((clue_cell, target))
        }
        _ => Err(SolverError::NotAClueCell(clue_cell).into()),
    }
}

/// Splits the board into maximal runs of value cells and pairs each run
/// with its clue. Every run yields one all-different group and one sum
/// constraint.
pub fn catalog(layout: &Layout) -> Result<ConstraintCatalog> {
    let mut groups = Vec::new();
    let mut sums = Vec::new();

    // Horizontal runs, read left to right.
    for row in 0..BOARD_SIZE {
        let mut col = 0;
        while col < BOARD_SIZE {
            if !layout.is_value(col, row) {
                col += 1;
                continue;
            }
            let start = col;
            while col < BOARD_SIZE && layout.is_value(col, row) {
                col += 1;
            }
            let cells: Vec<CellId> = (start..col).map(|c| CellId::new(c, row)).collect();
            let neighbour = (start > 0).then(|| CellId::new(start - 1, row));
            let (clue, target) = clue_target(layout, neighbour, cells[0], Axis::Right)?;
            groups.push(GroupConstraint::new(cells.clone()));
            sums.push(SumConstraint::new(clue, target, cells));
        }
    }

    // Vertical runs, read top to bottom.
    for col in 0..BOARD_SIZE {
        let mut row = 0;
        while row < BOARD_SIZE {
            if !layout.is_value(col, row) {
                row += 1;
                continue;
            }
            let start = row;
            while row < BOARD_SIZE && layout.is_value(col, row) {
                row += 1;
            }
            let cells: Vec<CellId> = (start..row).map(|r| CellId::new(col, r)).collect();
            let neighbour = (start > 0).then(|| CellId::new(col, start - 1));
            let (clue, target) = clue_target(layout, neighbour, cells[0], Axis::Down)?;
            groups.push(GroupConstraint::new(cells.clone()));
            sums.push(SumConstraint::new(clue, target, cells));
        }
    }

    Ok(ConstraintCatalog::new(groups, sums))
}

/// The propagator list for Kakuro rules. Tuple crossing runs first so the
/// cheaper eliminations and the arc-consistency pass start from already
/// narrowed domains.
pub fn propagators() -> Vec<Box<dyn Propagator>> {
    vec![
        Box::new(SumCrossingPropagator),
        Box::new(AssignedValuesPropagator),
        Box::new(ArcConsistencyPropagator),
    ]
}

/// A store with every value cell open to all nine digits.
pub fn initial_store(layout: &Layout) -> DomainStore {
    let mut store = DomainStore::default();
    for cell in layout.value_cells() {
        store = store.with_domain(cell, DigitSet::all());
    }
    store
}

/// Solves a Kakuro layout, returning the digit placed in each value cell,
/// or `None` when the clues admit no solution.
pub fn solve(layout: &Layout) -> Result<(Option<BTreeMap<CellId, u8>>, SearchStats)> {
    let catalog = catalog(layout)?;
    let propagators = propagators();
    let search = BacktrackingSearch::new(Box::new(MinimumRemainingValuesHeuristic));

    let (solution, stats) = search.solve(&propagators, &catalog, initial_store(layout))?;
    let assignment = solution.map(|store| {
        store
            .cells()
            .filter_map(|(cell, domain)| domain.as_singleton().map(|value| (cell, value)))
            .collect()
    });
    Ok((assignment, stats))
}
