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

/// Removes values already fixed within a group from its other members.
///
/// For every group constraint, every cell that is down to a single candidate
/// forbids that value everywhere else in the group. Two cells of a group
/// fixed to the same value empty each other here, so duplicated givens are
/// caught as an ordinary contradiction. The pass is idempotent and safe to
/// run unconditionally.
#[derive(Debug, Clone)]
pub struct AssignedValuesPropagator;

impl Propagator for AssignedValuesPropagator {
    fn descriptor(&self) -> PropagatorDescriptor {
        PropagatorDescriptor {
            name: "AssignedValues".to_string(),
            description: "prunes singleton values from group peers".to_string(),
        }
    }

    fn apply(&self, store: &DomainStore, catalog: &ConstraintCatalog) -> Result<Revision> {
        let mut domains = store.domains().clone();
        let mut changed = false;

        for group in catalog.groups() {
            // Snapshot the fixed members before pruning the group.
            let mut fixed = Vec::new();
            for &cell in &group.cells {
                let domain = lookup(&domains, cell)?;
                if let Some(value) = domain.as_singleton() {
                    fixed.push((cell, value));
                }
            }
            if fixed.is_empty() {
                continue;
            }

            for &cell in &group.cells {
                let mut forbidden = DigitSet::empty();
                for &(owner, value) in &fixed {
                    if owner != cell {
                        forbidden = forbidden.with(value);
                    }
                }
                if forbidden.is_empty() {
                    continue;
                }

                let current = lookup(&domains, cell)?;
                let next = current.without_all(forbidden);
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
