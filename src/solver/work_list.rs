use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// A deduplicating FIFO queue for propagation work items.
///
/// Pushing an item already waiting in the queue is a no-op, so an arc is
/// revisited at most once per round of pruning. Processing order is strictly
/// first-in first-out, which keeps propagation deterministic.
pub struct WorkList<T> {
    queue: VecDeque<T>,
    members: HashSet<T>,
}

impl<T: Eq + Hash + Clone> WorkList<T> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            members: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, item: T) {
        if self.members.insert(item.clone()) {
            self.queue.push_back(item);
        }
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let item = self.queue.pop_front()?;
        self.members.remove(&item);
        Some(item)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<T: Eq + Hash + Clone> Default for WorkList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::WorkList;

    #[test]
    fn processes_in_fifo_order() {
        let mut list = WorkList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn duplicate_pushes_are_ignored_while_queued() {
        let mut list = WorkList::new();
        list.push_back("arc");
        list.push_back("arc");
        assert_eq!(list.pop_front(), Some("arc"));
        assert!(list.is_empty());

        // Once popped, the item may be enqueued again.
        list.push_back("arc");
        assert_eq!(list.pop_front(), Some("arc"));
    }
}
