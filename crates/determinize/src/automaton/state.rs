//! State types for automata.

use fixedbitset::FixedBitSet;
use indexmap::IndexSet;
use std::fmt;

/// A state identifier represented as a u32.
pub type StateId = u32;

/// A set of states implemented using a fixed-size bit set for efficiency.
///
/// Equality and hashing are over the underlying bits, so two sets built with
/// the same capacity compare equal exactly when their members are equal. This
/// lets a `StateSet` serve directly as a hash-map key for composite DFA
/// states.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StateSet {
    bits: FixedBitSet,
}

impl StateSet {
    /// Create a new empty state set with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// Create a state set containing a single state.
    pub fn singleton(state: StateId, capacity: usize) -> Self {
        let mut set = Self::with_capacity(capacity);
        set.insert(state);
        set
    }

    /// Insert a state into the set.
    pub fn insert(&mut self, state: StateId) {
        let idx = state as usize;
        if idx >= self.bits.len() {
            self.bits.grow(idx + 1);
        }
        self.bits.insert(idx);
    }

    /// Check if the set contains a state.
    pub fn contains(&self, state: StateId) -> bool {
        let idx = state as usize;
        if idx >= self.bits.len() {
            false
        } else {
            self.bits.contains(idx)
        }
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// Get the number of states in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Iterate over all states in the set in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.ones().map(|i| i as StateId)
    }

    /// Union this set with another, modifying self in place.
    pub fn union_with(&mut self, other: &StateSet) {
        if other.bits.len() > self.bits.len() {
            self.bits.grow(other.bits.len());
        }
        self.bits.union_with(&other.bits);
    }

    /// Check if this set intersects with another.
    pub fn intersects(&self, other: &StateSet) -> bool {
        self.bits.intersection(&other.bits).next().is_some()
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        let items: Vec<StateId> = iter.into_iter().collect();
        let capacity = items.iter().copied().max().map_or(0, |m| m as usize + 1);
        let mut set = Self::with_capacity(capacity);
        for state in items {
            set.insert(state);
        }
        set
    }
}

/// Interns string state labels to dense [`StateId`]s.
///
/// Ids are assigned in first-seen order, so the mapping is deterministic for
/// a given input. The interner only grows; labels are never removed.
#[derive(Debug, Clone, Default)]
pub struct StateInterner {
    labels: IndexSet<String>,
}

impl StateInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self {
            labels: IndexSet::new(),
        }
    }

    /// Intern a label, returning its id. Re-interning an existing label
    /// returns the id it was first assigned.
    pub fn intern(&mut self, label: &str) -> StateId {
        if let Some(idx) = self.labels.get_index_of(label) {
            idx as StateId
        } else {
            let (idx, _) = self.labels.insert_full(label.to_string());
            idx as StateId
        }
    }

    /// Look up the id of a label without interning it.
    pub fn get(&self, label: &str) -> Option<StateId> {
        self.labels.get_index_of(label).map(|idx| idx as StateId)
    }

    /// Get the label for an id. Panics if the id was never assigned.
    pub fn label(&self, id: StateId) -> &str {
        &self.labels[id as usize]
    }

    /// Get the number of interned labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if no labels have been interned.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_set_basic() {
        let mut set = StateSet::with_capacity(10);
        assert!(set.is_empty());

        set.insert(3);
        set.insert(7);
        assert!(!set.is_empty());
        assert_eq!(set.len(), 2);
        assert!(set.contains(3));
        assert!(set.contains(7));
        assert!(!set.contains(5));
    }

    #[test]
    fn test_state_set_union() {
        let mut set1 = StateSet::with_capacity(10);
        set1.insert(1);
        set1.insert(3);

        let mut set2 = StateSet::with_capacity(10);
        set2.insert(2);
        set2.insert(3);

        set1.union_with(&set2);
        assert_eq!(set1.len(), 3);
        assert!(set1.contains(1));
        assert!(set1.contains(2));
        assert!(set1.contains(3));
    }

    #[test]
    fn test_state_set_intersects() {
        let mut set1 = StateSet::with_capacity(10);
        set1.insert(1);
        set1.insert(3);

        let mut set2 = StateSet::with_capacity(10);
        set2.insert(3);
        set2.insert(5);

        let mut set3 = StateSet::with_capacity(10);
        set3.insert(2);

        assert!(set1.intersects(&set2));
        assert!(!set1.intersects(&set3));
    }

    #[test]
    fn test_state_set_as_map_key() {
        use std::collections::HashMap;

        let mut a = StateSet::with_capacity(8);
        a.insert(1);
        a.insert(4);
        let mut b = StateSet::with_capacity(8);
        b.insert(4);
        b.insert(1);

        assert_eq!(a, b);

        let mut map = HashMap::new();
        map.insert(a, "first");
        assert_eq!(map.get(&b), Some(&"first"));
    }

    #[test]
    fn test_interner_assigns_dense_ids() {
        let mut interner = StateInterner::new();
        assert_eq!(interner.intern("q0"), 0);
        assert_eq!(interner.intern("q1"), 1);
        assert_eq!(interner.intern("q0"), 0);
        assert_eq!(interner.len(), 2);
        assert_eq!(interner.label(1), "q1");
        assert_eq!(interner.get("q1"), Some(1));
        assert_eq!(interner.get("q9"), None);
    }
}
