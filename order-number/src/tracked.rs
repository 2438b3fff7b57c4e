//! Set of order numbers handed out by a generator

use std::collections::{HashSet, VecDeque};

/// Insertion-ordered set with an optional size cap.
///
/// Without a cap the set grows for the lifetime of the generator. With a
/// cap, the oldest entry is evicted once the set is full.
#[derive(Debug, Default)]
pub(crate) struct TrackedNumbers {
    members: HashSet<String>,
    order: VecDeque<String>,
    capacity: Option<usize>,
}

impl TrackedNumbers {
    pub(crate) fn new(capacity: Option<usize>) -> Self {
        Self {
            members: HashSet::new(),
            order: VecDeque::new(),
            // a zero cap would evict every insert
            capacity: capacity.filter(|&c| c > 0),
        }
    }

    pub(crate) fn contains(&self, number: &str) -> bool {
        self.members.contains(number)
    }

    /// Insert a number. Returns the evicted entry, if any.
    pub(crate) fn insert(&mut self, number: String) -> Option<String> {
        if !self.members.insert(number.clone()) {
            return None;
        }
        self.order.push_back(number);

        let cap = self.capacity?;
        if self.order.len() <= cap {
            return None;
        }
        let evicted = self.order.pop_front()?;
        self.members.remove(&evicted);
        Some(evicted)
    }

    pub(crate) fn clear(&mut self) {
        self.members.clear();
        self.order.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }
}
