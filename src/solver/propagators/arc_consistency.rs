use im::OrdMap;

use crate::{
    error::{Result, SolverError},
    solver::{
        catalog::{ConstraintCatalog, SumConstraint},
        cell::CellId,
        domain::DigitSet,
        propagators::{Propagator, PropagatorDescriptor, Revision},
        store::DomainStore,
        work_list::WorkList,
    },
};

/// Generalised arc consistency (AC-3) over the cells of sum constraints.
///
/// An arc `(xi, xj)` relates two cells sharing a run. A candidate `v` of `xi`
/// survives only if some admissible tuple of a shared run places `v` at
/// `xi`'s position, a still-available value at `xj`'s position, and
/// still-available values at every other member's position. The queue starts
/// with every ordered pair of co-members; whenever `xi` shrinks, all arcs
/// `(xk, xi)` with `xk` a co-member other than `xj` are re-enqueued. The
/// queue is a deduplicating FIFO, so a full round is deterministic and runs
/// to exhaustion within a single pass of this propagator.
#[derive(Debug, Clone)]
pub struct ArcConsistencyPropagator;

impl Propagator for ArcConsistencyPropagator {
    fn descriptor(&self) -> PropagatorDescriptor {
        PropagatorDescriptor {
            name: "ArcConsistency".to_string(),
            description: "AC-3 over co-members of sum constraints".to_string(),
        }
    }

    fn apply(&self, store: &DomainStore, catalog: &ConstraintCatalog) -> Result<Revision> {
        if catalog.sums().is_empty() {
            return Ok(Revision::Unchanged);
        }

        let mut domains = store.domains().clone();
        let mut changed = false;

        let mut worklist: WorkList<(CellId, CellId)> = WorkList::new();
        for sum in catalog.sums() {
            for &xi in &sum.cells {
                for &xj in &sum.cells {
                    if xi != xj {
                        worklist.push_back((xi, xj));
                    }
                }
            }
        }

        while let Some((xi, xj)) = worklist.pop_front() {
            if !revise(xi, xj, &mut domains, catalog)? {
                continue;
            }
            changed = true;
            if lookup(&domains, xi)?.is_empty() {
                return Ok(Revision::Contradiction(xi));
            }
            for &id in catalog.sums_for(xi) {
                for &xk in &catalog.sums()[id].cells {
                    if xk != xi && xk != xj {
                        worklist.push_back((xk, xi));
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

/// Drops from `xi` every candidate with no supporting tuple against `xj`.
/// Returns whether the domain shrank.
fn revise(
    xi: CellId,
    xj: CellId,
    domains: &mut OrdMap<CellId, DigitSet>,
    catalog: &ConstraintCatalog,
) -> Result<bool> {
    let shared: Vec<&SumConstraint> = catalog
        .sums_for(xi)
        .iter()
        .map(|&id| &catalog.sums()[id])
        .filter(|sum| sum.cells.contains(&xj))
        .collect();
    if shared.is_empty() {
        return Ok(false);
    }

    let current = lookup(domains, xi)?;
    let mut kept = DigitSet::empty();

    'candidates: for vi in current.iter() {
        for sum in &shared {
            let idx_xi = sum
                .cells
                .iter()
                .position(|&c| c == xi)
                .expect("shared constraints contain xi");
            let idx_xj = sum
                .cells
                .iter()
                .position(|&c| c == xj)
                .expect("shared constraints contain xj");

            'tuples: for tuple in &sum.tuples {
                if tuple[idx_xi] != vi {
                    continue;
                }
                if !lookup(domains, xj)?.contains(tuple[idx_xj]) {
                    continue;
                }
                for (k, &member) in sum.cells.iter().enumerate() {
                    if member == xi || member == xj {
                        continue;
                    }
                    if !lookup(domains, member)?.contains(tuple[k]) {
                        continue 'tuples;
                    }
                }
                kept = kept.with(vi);
                continue 'candidates;
            }
        }
    }

    if kept == current {
        Ok(false)
    } else {
        domains.insert(xi, kept);
        Ok(true)
    }
}

fn lookup(domains: &OrdMap<CellId, DigitSet>, cell: CellId) -> Result<DigitSet> {
    domains
        .get(&cell)
        .copied()
        .ok_or_else(|| SolverError::MissingDomain(cell).into())
}
