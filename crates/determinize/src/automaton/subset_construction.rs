//! Subset construction algorithm for converting an NFA to a DFA.

use crate::automaton::dfa::Dfa;
use crate::automaton::nfa::Nfa;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::SymbolId;
use crate::error::Error;
use indexmap::IndexMap;
use std::collections::{HashMap, VecDeque};

/// Convert an NFA to an equivalent DFA using the powerset construction
/// algorithm.
///
/// Each DFA state corresponds to a set of NFA states. Exploration starts
/// from the singleton set of the initial state and follows symbol moves in
/// alphabet order, popping composite states in discovery (FIFO) order, so
/// repeated runs over the same NFA assign identical ids and names. The empty
/// composite is discovered like any other set when some reachable state has
/// no move on some symbol; once processed it self-loops on every symbol and
/// is never final. The resulting transition function is total over the
/// discovered states.
///
/// Fails if the NFA has no designated initial state, or if the initial or a
/// final state never appears in the transition table.
pub fn subset_construction(nfa: &Nfa) -> Result<Dfa, Error> {
    let initial = nfa.resolved_initial()?;
    let nfa_finals = nfa.resolved_finals()?;

    let capacity = nfa.num_states() as usize;

    // Composite sets are used directly as map keys. Every set handed to
    // `discovered` is created with capacity `num_states`, so bitset equality
    // coincides with membership equality.
    let mut discovered: IndexMap<StateSet, StateId> = IndexMap::new();
    let mut frontier: VecDeque<StateSet> = VecDeque::new();

    let mut names: Vec<String> = Vec::new();
    let mut final_states = StateSet::with_capacity(16);
    let mut transitions: HashMap<(StateId, SymbolId), StateId> = HashMap::new();

    let start_set = StateSet::singleton(initial, capacity);
    let start_id: StateId = 0;
    names.push(canonical_name(&start_set, nfa));
    if start_set.intersects(&nfa_finals) {
        final_states.insert(start_id);
    }
    discovered.insert(start_set.clone(), start_id);
    frontier.push_back(start_set);

    while let Some(current_set) = frontier.pop_front() {
        let current_id = discovered[&current_set];

        for symbol in nfa.alphabet().ids() {
            let target_set = nfa.move_on_symbol(&current_set, symbol);

            let target_id = if let Some(&existing) = discovered.get(&target_set) {
                existing
            } else {
                let new_id = discovered.len() as StateId;
                names.push(canonical_name(&target_set, nfa));
                if target_set.intersects(&nfa_finals) {
                    final_states.insert(new_id);
                }
                discovered.insert(target_set.clone(), new_id);
                frontier.push_back(target_set);
                new_id
            };

            transitions.insert((current_id, symbol), target_id);
        }
    }

    tracing::debug!(
        nfa_states = nfa.num_states(),
        dfa_states = discovered.len(),
        "subset construction complete"
    );

    Ok(Dfa::new(
        nfa.alphabet().clone(),
        names,
        start_id,
        final_states,
        transitions,
    ))
}

/// Canonical name of a composite state: member labels sorted and
/// concatenated. The empty set is named by the empty string.
fn canonical_name(set: &StateSet, nfa: &Nfa) -> String {
    let mut labels: Vec<&str> = set.iter().map(|s| nfa.state_label(s)).collect();
    labels.sort_unstable();
    labels.concat()
}
