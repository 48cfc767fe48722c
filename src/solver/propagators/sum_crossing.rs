use im::OrdMap;

use crate::{
    error::{Result, SolverError},
    solver::{
        catalog::ConstraintCatalog,
        cell::CellId,
        domain::DigitSet,
        propagators::{Propagator, PropagatorDescriptor, Revision},
        store::DomainStore,
    },
};

/// Crosses each cell's domain against the admissible tuples of its runs.
///
/// For every value cell and every sum constraint it belongs to, the cell may
/// keep a candidate only if some admissible tuple places that candidate at
/// the cell's position while every *other* member of the run can still take
/// the tuple's value at its own position. A run with an empty tuple set
/// (unachievable clue target) empties the domain of its first visited member,
/// which surfaces the malformed clue as an ordinary dead end.
#[derive(Debug, Clone)]
pub struct SumCrossingPropagator;

impl Propagator for SumCrossingPropagator {
    fn descriptor(&self) -> PropagatorDescriptor {
        PropagatorDescriptor {
            name: "SumCrossing".to_string(),
            description: "intersects domains with positionally compatible sum tuples".to_string(),
        }
    }

    fn apply(&self, store: &DomainStore, catalog: &ConstraintCatalog) -> Result<Revision> {
        let mut domains = store.domains().clone();
        let mut changed = false;

        for (&cell, sum_ids) in catalog.memberships() {
            for &id in sum_ids {
                let sum = &catalog.sums()[id];
                let position = sum
                    .cells
                    .iter()
                    .position(|&member| member == cell)
                    .expect("membership index lists this cell for the constraint");

                let mut supported = DigitSet::empty();
                'tuples: for tuple in &sum.tuples {
                    for (j, &member) in sum.cells.iter().enumerate() {
                        if j == position {
                            continue;
                        }
                        if !lookup(&domains, member)?.contains(tuple[j]) {
                            continue 'tuples;
                        }
                    }
                    supported = supported.with(tuple[position]);
                }

                let current = lookup(&domains, cell)?;
                let next = current.intersection(supported);
                if next != current {
                    changed = true;
                    domains.insert(cell, next);
                    if next.is_empty() {
                        return Ok(Revision::Contradiction(cell));
                    }
                }
            }
        }

        if changed {
            Ok(Revision::Pruned(DomainStore::new(domains)))
        } else {
            Ok(Revision::Unchanged)
        }
    }
}

fn lookup(domains: &OrdMap<CellId, DigitSet>, cell: CellId) -> Result<DigitSet> {
    domains
        .get(&cell)
        .copied()
        .ok_or_else(|| SolverError::MissingDomain(cell).into())
}
