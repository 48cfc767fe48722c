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

/// Classic "naked pair" elimination within a group.
///
/// When two distinct cells of a group hold the *same* two-element candidate
/// set, those two values are spoken for: whichever way the pair resolves, no
/// other cell in the group can use either value. Comparison is by value-set
/// equality, so the pair is found no matter how the two sets were produced.
#[derive(Debug, Clone)]
pub struct NakedPairsPropagator;

impl Propagator for NakedPairsPropagator {
    fn descriptor(&self) -> PropagatorDescriptor {
        PropagatorDescriptor {
            name: "NakedPairs".to_string(),
            description: "removes matched two-value domains from group peers".to_string(),
        }
    }

    fn apply(&self, store: &DomainStore, catalog: &ConstraintCatalog) -> Result<Revision> {
        let mut domains = store.domains().clone();
        let mut changed = false;

        for group in catalog.groups() {
            for (i, &first) in group.cells.iter().enumerate() {
                let pair = lookup(&domains, first)?;
                if pair.len() != 2 {
                    continue;
                }
                for &second in &group.cells[i + 1..] {
                    if lookup(&domains, second)? != pair {
                        continue;
                    }
                    for &other in &group.cells {
                        if other == first || other == second {
                            continue;
                        }
                        let current = lookup(&domains, other)?;
                        let next = current.without_all(pair);
                        if next != current {
                            changed = true;
                            domains.insert(other, next);
                            if next.is_empty() {
                                return Ok(Revision::Contradiction(other));
                            }
                        }
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
