//! Propagation algorithms that tighten a [`DomainStore`] against a
//! [`ConstraintCatalog`] without branching.
//!
//! Each algorithm is a [`Propagator`]: a pure transform from one store to a
//! (possibly) tighter one. Puzzle frontends assemble the list that applies to
//! their rules, and [`run_to_fixed_point`] drives the list until the store
//! stops changing or a domain empties. The loop matters because propagators
//! feed each other: a sum-crossing reduction can expose a new deduction for
//! assigned-value pruning, and vice versa.

pub mod arc_consistency;
pub mod assigned_values;
pub mod naked_pairs;
pub mod sum_crossing;

use std::time::Instant;

use tracing::debug;

use crate::{
    error::Result,
    solver::{
        catalog::ConstraintCatalog,
        cell::CellId,
        search::SearchStats,
        store::DomainStore,
    },
};

#[derive(Debug, Clone)]
pub struct PropagatorDescriptor {
    pub name: String,
    pub description: String,
}

/// The outcome of one propagator pass.
///
/// A contradiction is an ordinary value here, not an error: the search engine
/// recovers from it by backtracking. Only structural problems (a catalog
/// referencing an untracked cell) surface through `Result`.
#[derive(Debug, Clone)]
pub enum Revision {
    /// No domain changed.
    Unchanged,
    /// At least one domain shrank.
    Pruned(DomainStore),
    /// The named cell's domain became empty.
    Contradiction(CellId),
}

pub trait Propagator: std::fmt::Debug {
    fn descriptor(&self) -> PropagatorDescriptor;

    /// Applies one pass over the whole store. Domains may only shrink.
    fn apply(&self, store: &DomainStore, catalog: &ConstraintCatalog) -> Result<Revision>;
}

/// The terminal state of a propagation round.
#[derive(Debug, Clone)]
pub enum Propagation {
    /// No propagator can shrink any domain further.
    Stable(DomainStore),
    /// Some domain emptied; this branch of the search is a dead end.
    Contradiction(CellId),
}

/// Applies `propagators` in order, repeatedly, until the store reaches a
/// fixed point or a contradiction appears.
pub fn run_to_fixed_point(
    propagators: &[Box<dyn Propagator>],
    catalog: &ConstraintCatalog,
    store: DomainStore,
    stats: &mut SearchStats,
) -> Result<Propagation> {
    let mut current = store;
    loop {
        let before = current.clone();
        for (id, propagator) in propagators.iter().enumerate() {
            let propagator_stats = stats.propagator_stats.entry(id).or_default();
            propagator_stats.passes += 1;
            let start_time = Instant::now();
            let revision = propagator.apply(&current, catalog);
            propagator_stats.time_spent_micros += start_time.elapsed().as_micros() as u64;

            match revision? {
                Revision::Unchanged => {}
                Revision::Pruned(next) => {
                    propagator_stats.prunings += 1;
                    current = next;
                }
                Revision::Contradiction(cell) => {
                    debug!(%cell, propagator = %propagator.descriptor().name, "domain emptied");
                    return Ok(Propagation::Contradiction(cell));
                }
            }
        }
        if current == before {
            return Ok(Propagation::Stable(current));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{run_to_fixed_point, Propagation, Propagator};
    use crate::solver::{
        catalog::{ConstraintCatalog, GroupConstraint},
        cell::CellId,
        domain::DigitSet,
        propagators::assigned_values::AssignedValuesPropagator,
        search::SearchStats,
        store::DomainStore,
    };

    fn row_pair_catalog(a: CellId, b: CellId) -> ConstraintCatalog {
        ConstraintCatalog::new(vec![GroupConstraint::new(vec![a, b])], vec![])
    }

    #[test]
    fn solved_store_is_a_fixed_point() {
        let a = CellId::new(0, 0);
        let b = CellId::new(1, 0);
        let store = DomainStore::default().assign(a, 1).assign(b, 2);
        let propagators: Vec<Box<dyn Propagator>> = vec![Box::new(AssignedValuesPropagator)];
        let mut stats = SearchStats::default();

        let outcome = run_to_fixed_point(
            &propagators,
            &row_pair_catalog(a, b),
            store.clone(),
            &mut stats,
        )
        .unwrap();

        match outcome {
            Propagation::Stable(result) => assert_eq!(result, store),
            Propagation::Contradiction(cell) => panic!("unexpected contradiction at {cell}"),
        }
    }

    #[test]
    fn loop_reruns_until_no_propagator_changes_anything() {
        // a fixed -> b loses 1 -> b becomes fixed -> c loses 2, which takes
        // a second round of the same propagator.
        let a = CellId::new(0, 0);
        let b = CellId::new(1, 0);
        let c = CellId::new(2, 0);
        let catalog = ConstraintCatalog::new(
            vec![
                GroupConstraint::new(vec![a, b]),
                GroupConstraint::new(vec![b, c]),
            ],
            vec![],
        );
        let store = DomainStore::default()
            .assign(a, 1)
            .with_domain(b, [1, 2].into_iter().collect())
            .with_domain(c, [2, 3].into_iter().collect());
        let propagators: Vec<Box<dyn Propagator>> = vec![Box::new(AssignedValuesPropagator)];
        let mut stats = SearchStats::default();

        let outcome = run_to_fixed_point(&propagators, &catalog, store, &mut stats).unwrap();
        let Propagation::Stable(result) = outcome else {
            panic!("expected a stable store");
        };
        assert_eq!(result.get(b), Some(DigitSet::singleton(2)));
        assert_eq!(result.get(c), Some(DigitSet::singleton(3)));
        assert!(result.is_complete());
    }

    mod prop_tests {
        use proptest::prelude::*;

        use crate::solver::{
            catalog::{ConstraintCatalog, GroupConstraint, SumConstraint},
            cell::CellId,
            domain::DigitSet,
            propagators::{
                arc_consistency::ArcConsistencyPropagator,
                assigned_values::AssignedValuesPropagator, naked_pairs::NakedPairsPropagator,
                sum_crossing::SumCrossingPropagator, Propagator, Revision,
            },
            store::DomainStore,
        };

        // A 3x3 grid with row/column groups plus two sum runs, enough to
        // exercise every propagator kind.
        fn catalog() -> ConstraintCatalog {
            let mut groups = Vec::new();
            for row in 0..3 {
                groups.push(GroupConstraint::new(
                    (0..3).map(|col| CellId::new(col, row)).collect(),
                ));
            }
            for col in 0..3 {
                groups.push(GroupConstraint::new(
                    (0..3).map(|row| CellId::new(col, row)).collect(),
                ));
            }
            let sums = vec![
                SumConstraint::new(
                    CellId::new(3, 0),
                    12,
                    (0..3).map(|col| CellId::new(col, 0)).collect(),
                ),
                SumConstraint::new(
                    CellId::new(0, 3),
                    15,
                    (0..3).map(|row| CellId::new(0, row)).collect(),
                ),
            ];
            ConstraintCatalog::new(groups, sums)
        }

        fn all_propagators() -> Vec<Box<dyn Propagator>> {
            vec![
                Box::new(AssignedValuesPropagator),
                Box::new(NakedPairsPropagator),
                Box::new(SumCrossingPropagator),
                Box::new(ArcConsistencyPropagator),
            ]
        }

        fn digit_set() -> impl Strategy<Value = DigitSet> {
            proptest::collection::btree_set(1u8..=9, 1..=9)
                .prop_map(|digits| digits.into_iter().collect())
        }

        fn store_strategy() -> impl Strategy<Value = DomainStore> {
            proptest::collection::vec(digit_set(), 9).prop_map(|domains| {
                let mut store = DomainStore::default();
                for (i, domain) in domains.into_iter().enumerate() {
                    store = store.with_domain(CellId::new((i % 3) as u8, (i / 3) as u8), domain);
                }
                store
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(16))]

            #[test]
            fn propagator_passes_only_shrink_domains(store in store_strategy()) {
                for propagator in all_propagators() {
                    if let Revision::Pruned(result) = propagator.apply(&store, &catalog()).unwrap() {
                        for (cell, before) in store.cells() {
                            let after = result.get(cell).expect("pruning never drops cells");
                            prop_assert_eq!(after.intersection(before), after);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn contradiction_reports_the_emptied_cell() {
        let a = CellId::new(0, 0);
        let b = CellId::new(1, 0);
        let store = DomainStore::default().assign(a, 5).assign(b, 5);
        let propagators: Vec<Box<dyn Propagator>> = vec![Box::new(AssignedValuesPropagator)];
        let mut stats = SearchStats::default();

        let outcome =
            run_to_fixed_point(&propagators, &row_pair_catalog(a, b), store, &mut stats).unwrap();
        assert!(matches!(outcome, Propagation::Contradiction(_)));
    }
}
