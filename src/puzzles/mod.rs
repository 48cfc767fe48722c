//! Concrete puzzle frontends built on the generic solver.

pub mod kakuro;
pub mod sudoku;
