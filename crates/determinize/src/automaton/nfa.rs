//! Nondeterministic Finite Automaton (NFA) implementation.

use crate::automaton::state::{StateId, StateInterner, StateSet};
use crate::automaton::symbol::{Alphabet, SymbolId};
use crate::error::Error;
use indexmap::IndexSet;
use std::collections::HashMap;

/// A Nondeterministic Finite Automaton over string state labels.
///
/// States are interned to dense ids as they are declared or referenced;
/// transitions map `(state, symbol)` to a set of destination states. A
/// missing entry means "no transition", which is a normal outcome rather
/// than an error.
///
/// The initial and final states are recorded by label and only resolved
/// against the transition table when the automaton is used, so designating
/// a state that never appears in the table is reported at that point rather
/// than silently accepted.
#[derive(Debug, Clone)]
pub struct Nfa {
    /// Input alphabet, in declaration order
    alphabet: Alphabet,
    /// Label interner; ids are assigned in first-seen order
    states: StateInterner,
    /// Transitions: (source, symbol) -> set of destination states
    transitions: HashMap<(StateId, SymbolId), StateSet>,
    /// Initial state label, unresolved
    initial: Option<String>,
    /// Final state labels, unresolved, in declaration order
    finals: IndexSet<String>,
}

impl Nfa {
    /// Create a new NFA with no states over the given alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            states: StateInterner::new(),
            transitions: HashMap::new(),
            initial: None,
            finals: IndexSet::new(),
        }
    }

    /// Declare a state, returning its id. States referenced by
    /// [`add_transition`](Self::add_transition) are declared implicitly;
    /// this exists for states with no transitions at all.
    pub fn add_state(&mut self, label: &str) -> StateId {
        self.states.intern(label)
    }

    /// Add a transition from source to destination on the given symbol.
    /// Both states are declared if not already known.
    pub fn add_transition(
        &mut self,
        source: &str,
        symbol: &str,
        destination: &str,
    ) -> Result<(), Error> {
        let symbol_id = self
            .alphabet
            .id_of(symbol)
            .ok_or_else(|| Error::UnknownSymbol(symbol.to_string()))?;
        let source_id = self.states.intern(source);
        let destination_id = self.states.intern(destination);

        self.transitions
            .entry((source_id, symbol_id))
            .or_insert_with(|| StateSet::with_capacity(self.states.len()))
            .insert(destination_id);
        Ok(())
    }

    /// Designate the initial state by label.
    pub fn set_initial_state(&mut self, label: &str) {
        self.initial = Some(label.to_string());
    }

    /// Designate a final (accepting) state by label.
    pub fn add_final_state(&mut self, label: &str) {
        self.finals.insert(label.to_string());
    }

    /// Get the alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Get the number of declared states.
    pub fn num_states(&self) -> u32 {
        self.states.len() as u32
    }

    /// Get the label of a state id. Panics if the id was never assigned.
    pub fn state_label(&self, id: StateId) -> &str {
        self.states.label(id)
    }

    /// Look up the id of a state label.
    pub fn state_id(&self, label: &str) -> Option<StateId> {
        self.states.get(label)
    }

    /// Get the designated initial state label, if any.
    pub fn initial_state(&self) -> Option<&str> {
        self.initial.as_deref()
    }

    /// Resolve the designated initial state against the declared states.
    pub(crate) fn resolved_initial(&self) -> Result<StateId, Error> {
        let label = self.initial.as_deref().ok_or(Error::NoInitialState)?;
        self.states
            .get(label)
            .ok_or_else(|| Error::UnknownInitialState(label.to_string()))
    }

    /// Resolve the designated final states against the declared states.
    pub(crate) fn resolved_finals(&self) -> Result<StateSet, Error> {
        let mut finals = StateSet::with_capacity(self.states.len());
        for label in &self.finals {
            let id = self
                .states
                .get(label)
                .ok_or_else(|| Error::UnknownFinalState(label.clone()))?;
            finals.insert(id);
        }
        Ok(finals)
    }

    /// Get the states reachable from `state` on `symbol`. A state with no
    /// recorded transition for the symbol yields the empty set.
    pub fn next_states(&self, state: StateId, symbol: SymbolId) -> StateSet {
        let mut reached = StateSet::with_capacity(self.states.len());
        if let Some(destinations) = self.transitions.get(&(state, symbol)) {
            reached.union_with(destinations);
        }
        reached
    }

    /// Get the union of states reachable from a set of states on a symbol.
    pub fn move_on_symbol(&self, states: &StateSet, symbol: SymbolId) -> StateSet {
        let mut reached = StateSet::with_capacity(self.states.len());
        for state in states.iter() {
            if let Some(destinations) = self.transitions.get(&(state, symbol)) {
                reached.union_with(destinations);
            }
        }
        reached
    }

    /// Simulate the NFA on an input string, given as a slice of symbol
    /// labels. Returns whether the input is accepted.
    pub fn accepts(&self, input: &[&str]) -> Result<bool, Error> {
        let initial = self.resolved_initial()?;
        let finals = self.resolved_finals()?;

        let mut current = StateSet::singleton(initial, self.states.len());
        for label in input {
            let symbol = self
                .alphabet
                .id_of(label)
                .ok_or_else(|| Error::UnknownSymbol(label.to_string()))?;
            current = self.move_on_symbol(&current, symbol);
        }
        Ok(current.intersects(&finals))
    }
}
