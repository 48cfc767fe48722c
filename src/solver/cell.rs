use std::fmt;

/// Identifies a cell on the fixed 9x9 grid by its column and row index.
///
/// `CellId` is a small `Copy` value with a derived total order, which gives
/// the solver a stable enumeration order for deterministic tie-breaking. It
/// replaces string coordinates ("A1", "B5") as the key type in every map the
/// solver touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId {
    pub col: u8,
    pub row: u8,
}

impl CellId {
    /// Creates a cell id from zero-based column and row indices.
    pub fn new(col: u8, row: u8) -> Self {
        debug_assert!(col < 9 && row < 9);
        Self { col, row }
    }
}

impl fmt::Display for CellId {
    /// Renders in "A1" board notation: columns A-I, rows 1-9.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

/// The kind of a cell in a puzzle layout.
///
/// Sudoku boards consist entirely of value cells. Kakuro boards mix value
/// cells with blocked filler cells and clue cells carrying the target sums
/// for the run to their right and the run below them. Blocked and clue cells
/// never enter the domain store; they only shape the constraint catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A fillable cell holding a digit 1-9.
    Value,
    /// A black filler cell.
    Blocked,
    /// A clue cell with optional targets for the adjacent runs.
    Clue {
        /// Target sum for the run starting immediately to the right.
        right: Option<u8>,
        /// Target sum for the run starting immediately below.
        down: Option<u8>,
    },
}

/// The direction of the run a clue target governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Right,
    Down,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Right => write!(f, "right"),
            Axis::Down => write!(f, "down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Axis, CellId};

    #[test]
    fn displays_in_board_notation() {
        assert_eq!(CellId::new(0, 0).to_string(), "A1");
        assert_eq!(CellId::new(8, 8).to_string(), "I9");
        assert_eq!(CellId::new(2, 4).to_string(), "C5");
    }

    #[test]
    fn axis_names_match_clue_wording() {
        assert_eq!(Axis::Right.to_string(), "right");
        assert_eq!(Axis::Down.to_string(), "down");
    }

    #[test]
    fn ordering_is_stable_by_column_then_row() {
        let mut ids = vec![CellId::new(1, 0), CellId::new(0, 1), CellId::new(0, 0)];
        ids.sort();
        assert_eq!(
            ids,
            vec![CellId::new(0, 0), CellId::new(0, 1), CellId::new(1, 0)]
        );
    }
}
