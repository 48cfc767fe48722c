//! Gridlock is a constraint-propagation solver for digit-placement puzzles.
//!
//! The crate is split into a generic backend and thin puzzle frontends. The
//! backend works on a persistent map from cells to digit sets and knows
//! nothing about boards: it runs a list of [`Propagator`]s to a fixed point
//! and, when propagation stalls, branches with depth-first backtracking
//! search. Each branch forks the store, so backtracking never undoes
//! anything. The frontends ([`puzzles::sudoku`] and [`puzzles::kakuro`])
//! translate a concrete board into the cell domains and constraint catalog
//! the backend consumes.
//!
//! [`Propagator`]: solver::propagators::Propagator
//!
//! # Example: A Two-Cell Problem
//!
//! Two cells in the same all-different group, one pinned to `1` and the
//! other open to `1` or `2`. Propagation alone resolves the open cell to
//! `2`.
//!
//! ```
//! use gridlock::solver::catalog::{ConstraintCatalog, GroupConstraint};
//! use gridlock::solver::cell::CellId;
//! use gridlock::solver::domain::DigitSet;
//! use gridlock::solver::heuristics::variable::MinimumRemainingValuesHeuristic;
//! use gridlock::solver::propagators::{assigned_values::AssignedValuesPropagator, Propagator};
//! use gridlock::solver::search::BacktrackingSearch;
//! use gridlock::solver::store::DomainStore;
//!
//! let a = CellId::new(0, 0);
//! let b = CellId::new(1, 0);
//!
//! let catalog = ConstraintCatalog::new(vec![GroupConstraint::new(vec![a, b])], vec![]);
//! let store = DomainStore::default()
//!     .with_domain(a, [1, 2].into_iter().collect())
//!     .assign(b, 1);
//!
//! let propagators: Vec<Box<dyn Propagator>> = vec![Box::new(AssignedValuesPropagator)];
//! let search = BacktrackingSearch::new(Box::new(MinimumRemainingValuesHeuristic));
//!
//! let (solution, _stats) = search.solve(&propagators, &catalog, store).unwrap();
//! let solution = solution.unwrap();
//! assert_eq!(solution.get(a), Some(DigitSet::singleton(2)));
//! ```
pub mod error;
pub mod puzzles;
pub mod solver;
