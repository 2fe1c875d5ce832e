//! Deterministic Finite Automaton (DFA) implementation.

use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::{Alphabet, SymbolId};
use crate::error::Error;
use std::collections::HashMap;

/// A Deterministic Finite Automaton produced by subset construction.
///
/// Each DFA state corresponds to a set of NFA states and carries the
/// canonical name derived from that set: the sorted concatenation of the
/// member labels, with the empty set named by the empty string. The
/// transition function is total over the discovered states; the dead state
/// (empty composite) self-loops on every symbol.
///
/// A `Dfa` is assembled in full by [`subset_construction`] and is read-only
/// afterwards.
///
/// [`subset_construction`]: crate::automaton::subset_construction
#[derive(Debug, Clone)]
pub struct Dfa {
    /// Input alphabet, shared with the source NFA
    alphabet: Alphabet,
    /// Canonical name per state; indexed by state id
    names: Vec<String>,
    /// Initial state
    initial: StateId,
    /// Final (accepting) states
    final_states: StateSet,
    /// Transitions: (source, symbol) -> destination
    transitions: HashMap<(StateId, SymbolId), StateId>,
}

impl Dfa {
    pub(crate) fn new(
        alphabet: Alphabet,
        names: Vec<String>,
        initial: StateId,
        final_states: StateSet,
        transitions: HashMap<(StateId, SymbolId), StateId>,
    ) -> Self {
        Self {
            alphabet,
            names,
            initial,
            final_states,
            transitions,
        }
    }

    /// Get the alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Get the number of states.
    pub fn num_states(&self) -> u32 {
        self.names.len() as u32
    }

    /// Get the initial state.
    pub fn initial_state(&self) -> StateId {
        self.initial
    }

    /// Get the final states.
    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    /// Check if a state is final.
    pub fn is_final(&self, state: StateId) -> bool {
        self.final_states.contains(state)
    }

    /// Get the canonical name of a state. Panics if the id is out of range.
    pub fn canonical_name(&self, state: StateId) -> &str {
        &self.names[state as usize]
    }

    /// Get the transition from a state on a symbol.
    pub fn transition(&self, source: StateId, symbol: SymbolId) -> Option<StateId> {
        self.transitions.get(&(source, symbol)).copied()
    }

    /// Iterate over all state ids in discovery order.
    pub fn states(&self) -> impl Iterator<Item = StateId> {
        0..self.names.len() as StateId
    }

    /// Get all state ids sorted by canonical name. Serialization emits rows
    /// in this order; the dead state's empty name sorts first.
    pub fn states_by_name(&self) -> Vec<StateId> {
        let mut states: Vec<StateId> = self.states().collect();
        states.sort_unstable_by_key(|&s| self.canonical_name(s));
        states
    }

    /// Get all transitions as an iterator.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, SymbolId, StateId)> + '_ {
        self.transitions
            .iter()
            .map(|(&(src, sym), &dst)| (src, sym, dst))
    }

    /// Simulate the DFA on an input string, given as a slice of symbol
    /// labels. Returns whether the input is accepted.
    pub fn accepts(&self, input: &[&str]) -> Result<bool, Error> {
        let mut current = self.initial;
        for label in input {
            let symbol = self
                .alphabet
                .id_of(label)
                .ok_or_else(|| Error::UnknownSymbol(label.to_string()))?;
            match self.transition(current, symbol) {
                Some(next) => current = next,
                None => return Ok(false),
            }
        }
        Ok(self.is_final(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::nfa::Nfa;
    use crate::automaton::subset_construction::subset_construction;

    fn two_state_dfa() -> Dfa {
        // a -0-> b, a -1-> a, b -0-> b, b -1-> a; accept in b
        let alphabet = Alphabet::new(["0", "1"]).unwrap();
        let mut nfa = Nfa::new(alphabet);
        nfa.add_transition("a", "0", "b").unwrap();
        nfa.add_transition("a", "1", "a").unwrap();
        nfa.add_transition("b", "0", "b").unwrap();
        nfa.add_transition("b", "1", "a").unwrap();
        nfa.set_initial_state("a");
        nfa.add_final_state("b");
        subset_construction(&nfa).unwrap()
    }

    #[test]
    fn test_dfa_accessors() {
        let dfa = two_state_dfa();
        assert_eq!(dfa.num_states(), 2);
        assert_eq!(dfa.canonical_name(dfa.initial_state()), "a");
        assert_eq!(dfa.alphabet().len(), 2);
        assert_eq!(dfa.transitions().count(), 4);
    }

    #[test]
    fn test_states_by_name_is_sorted() {
        let dfa = two_state_dfa();
        let names: Vec<&str> = dfa
            .states_by_name()
            .into_iter()
            .map(|s| dfa.canonical_name(s))
            .collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_dfa_accepts() {
        let dfa = two_state_dfa();
        assert!(!dfa.accepts(&[]).unwrap());
        assert!(dfa.accepts(&["0"]).unwrap());
        assert!(!dfa.accepts(&["0", "1"]).unwrap());
        assert!(dfa.accepts(&["1", "0", "0"]).unwrap());
        assert!(matches!(
            dfa.accepts(&["x"]),
            Err(Error::UnknownSymbol(s)) if s == "x"
        ));
    }
}
